//! Validated construction of a [`Network`] snapshot

use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use super::Network;
use crate::models::airport::ICAO_CODE_LENGTH;
use crate::models::{
    Airplane, Airport, AirportId, City, CityId, Coordinates, Entity, EntityId, EntityKey, Forecast,
    ForecastSubject, Operator, OperatorId,
};
use crate::{Result, TravelPlannerError};

/// Builder enforcing the snapshot invariants: unique keys, valid coordinates
/// and relations that only reference entities already added.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    network: Network,
}

impl NetworkBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city, unique by name and region
    pub fn add_city(
        &mut self,
        name: &str,
        region: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<CityId> {
        let location = validated_location(name, latitude, longitude)?;
        if name.trim().is_empty() || region.trim().is_empty() {
            return Err(TravelPlannerError::validation(
                "City name and region cannot be empty",
            ));
        }

        let id = CityId(self.network.cities.len());
        let city = City {
            id,
            name: name.to_string(),
            region: region.to_string(),
            location,
        };
        self.register(&city, EntityId::City(id))?;
        self.network.cities.push(city);
        self.network.city_airports.push(Vec::new());
        Ok(id)
    }

    /// Add an airport, unique by its 4-character code
    pub fn add_airport(
        &mut self,
        name: &str,
        icao_code: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirportId> {
        let location = validated_location(name, latitude, longitude)?;
        if icao_code.chars().count() != ICAO_CODE_LENGTH {
            return Err(TravelPlannerError::validation(format!(
                "ICAO codes are exactly {ICAO_CODE_LENGTH} characters long, got '{icao_code}'"
            )));
        }

        let id = AirportId(self.network.airports.len());
        let airport = Airport {
            id,
            name: name.to_string(),
            icao_code: icao_code.to_string(),
            location,
        };
        self.register(&airport, EntityId::Airport(id))?;
        self.network.airports.push(airport);
        self.network.airport_cities.push(Vec::new());
        self.network.airport_operators.push(Vec::new());
        Ok(id)
    }

    /// Add an operator, unique by name, flying the given airplane
    pub fn add_operator(&mut self, name: &str, score: f32, airplane: Airplane) -> Result<OperatorId> {
        if airplane.range_km.is_nan() || airplane.range_km < 0.0 {
            return Err(TravelPlannerError::validation(format!(
                "Airplane '{}' must have a non-negative range, got {}",
                airplane.name, airplane.range_km
            )));
        }

        let id = OperatorId(self.network.operators.len());
        let operator = Operator {
            id,
            name: name.to_string(),
            score,
            airplane,
        };
        self.register(&operator, EntityId::Operator(id))?;
        self.network.operators.push(operator);
        self.network.operator_airports.push(Vec::new());
        Ok(id)
    }

    /// Record that `airport` serves `city`. Linking twice is a no-op.
    pub fn link(&mut self, city: CityId, airport: AirportId) -> Result<()> {
        self.check_city(city)?;
        self.check_airport(airport)?;

        let airports = &mut self.network.city_airports[city.index()];
        if !airports.contains(&airport) {
            airports.push(airport);
            self.network.airport_cities[airport.index()].push(city);
        }
        Ok(())
    }

    /// Record that `operator` flies from and to `airport`. Serving twice is a no-op.
    pub fn serve(&mut self, operator: OperatorId, airport: AirportId) -> Result<()> {
        self.check_operator(operator)?;
        self.check_airport(airport)?;

        let airports = &mut self.network.operator_airports[operator.index()];
        if !airports.contains(&airport) {
            airports.push(airport);
            self.network.airport_operators[airport.index()].push(operator);
        }
        Ok(())
    }

    /// Add a forecast. Only the first forecast per subject and date is kept.
    pub fn add_forecast(&mut self, forecast: Forecast) -> Result<()> {
        match forecast.subject {
            ForecastSubject::Airport(airport) => self.check_airport(airport)?,
            ForecastSubject::City(city) => self.check_city(city)?,
        }

        match self
            .network
            .forecasts
            .entry((forecast.subject, forecast.date))
        {
            Entry::Occupied(_) => {
                warn!(
                    "Ignoring second forecast for {:?} on {}",
                    forecast.subject, forecast.date
                );
            }
            Entry::Vacant(slot) => {
                slot.insert(forecast);
            }
        }
        Ok(())
    }

    /// Resolve an entity added so far by its unique key
    #[must_use]
    pub fn lookup(&self, key: &EntityKey) -> Option<EntityId> {
        self.network.keys.get(key).copied()
    }

    /// Finish the snapshot
    #[must_use]
    pub fn build(self) -> Network {
        debug!(
            "Built network with {} cities, {} airports, {} operators and {} forecasts",
            self.network.cities.len(),
            self.network.airports.len(),
            self.network.operators.len(),
            self.network.forecasts.len()
        );
        self.network
    }

    fn register<E: Entity>(&mut self, entity: &E, id: EntityId) -> Result<()> {
        let key = entity.key();
        if self.network.keys.contains_key(&key) {
            return Err(TravelPlannerError::validation(format!(
                "{} '{key}' already exists",
                key.kind()
            )));
        }
        self.network.keys.insert(key, id);
        Ok(())
    }

    fn check_city(&self, city: CityId) -> Result<()> {
        if city.index() < self.network.cities.len() {
            Ok(())
        } else {
            Err(TravelPlannerError::data(format!("Unknown city handle {city:?}")))
        }
    }

    fn check_airport(&self, airport: AirportId) -> Result<()> {
        if airport.index() < self.network.airports.len() {
            Ok(())
        } else {
            Err(TravelPlannerError::data(format!(
                "Unknown airport handle {airport:?}"
            )))
        }
    }

    fn check_operator(&self, operator: OperatorId) -> Result<()> {
        if operator.index() < self.network.operators.len() {
            Ok(())
        } else {
            Err(TravelPlannerError::data(format!(
                "Unknown operator handle {operator:?}"
            )))
        }
    }
}

fn validated_location(name: &str, latitude: f64, longitude: f64) -> Result<Coordinates> {
    let location = Coordinates::new(latitude, longitude);
    if location.is_valid() {
        Ok(location)
    } else {
        Err(TravelPlannerError::validation(format!(
            "'{name}' has invalid coordinates ({latitude}, {longitude})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkQuery;
    use chrono::NaiveDate;

    #[test]
    fn test_duplicate_city_rejected() {
        let mut builder = NetworkBuilder::new();
        builder.add_city("Lincoln", "Nebraska", 40.8, -96.7).unwrap();
        let result = builder.add_city("Lincoln", "Nebraska", 40.8, -96.7);
        assert!(matches!(result, Err(TravelPlannerError::Validation { .. })));

        // Same name in another region is a different city
        assert!(builder.add_city("Lincoln", "Illinois", 40.1, -89.4).is_ok());
    }

    #[test]
    fn test_icao_code_length() {
        let mut builder = NetworkBuilder::new();
        let result = builder.add_airport("Bees", "BEE", 5.0, 5.0);
        assert!(result.unwrap_err().to_string().contains("exactly 4 characters"));
        assert!(builder.add_airport("Bees", "Bible", 5.0, 5.0).is_err());
        assert!(builder.add_airport("Bees", "BEES", 5.0, 5.0).is_ok());
        assert!(builder.add_airport("Other Bees", "BEES", 6.0, 6.0).is_err());
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let mut builder = NetworkBuilder::new();
        assert!(builder.add_city("Nowhere", "Void", 95.0, 0.0).is_err());
        assert!(builder.add_airport("Nowhere", "NOPE", 0.0, 181.0).is_err());
    }

    #[test]
    fn test_negative_range_rejected() {
        let mut builder = NetworkBuilder::new();
        let result = builder.add_operator("Backwards Air", 1.0, Airplane::new("Reverse", -1.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_dangling_handles_rejected() {
        let mut builder = NetworkBuilder::new();
        let city = builder.add_city("Lincoln", "Nebraska", 40.8, -96.7).unwrap();
        let result = builder.link(city, AirportId(3));
        assert!(matches!(result, Err(TravelPlannerError::Data { .. })));
        let result = builder.serve(OperatorId(0), AirportId(0));
        assert!(matches!(result, Err(TravelPlannerError::Data { .. })));
    }

    #[test]
    fn test_link_is_idempotent() {
        let mut builder = NetworkBuilder::new();
        let city = builder.add_city("Lincoln", "Nebraska", 40.8, -96.7).unwrap();
        let airport = builder.add_airport("Lincoln Airport", "KLNK", 40.85, -96.76).unwrap();
        builder.link(city, airport).unwrap();
        builder.link(city, airport).unwrap();

        let network = builder.build();
        assert_eq!(network.airports_of_city(city).len(), 1);
        assert_eq!(network.cities_of(airport).len(), 1);
    }

    #[test]
    fn test_first_forecast_wins() {
        let mut builder = NetworkBuilder::new();
        let airport = builder.add_airport("Lincoln Airport", "KLNK", 40.85, -96.76).unwrap();
        let date = NaiveDate::from_ymd_opt(2022, 4, 18).unwrap();
        let subject = ForecastSubject::Airport(airport);
        builder
            .add_forecast(Forecast::new(subject, date, 11.0, 15.0, "clear sky"))
            .unwrap();
        builder
            .add_forecast(Forecast::new(subject, date, 46.0, 1.0, "Tornado"))
            .unwrap();

        let network = builder.build();
        assert_eq!(network.forecast_count(), 1);
        let forecast = network.forecast_for(subject, date).unwrap();
        assert_eq!(forecast.weather_description, "clear sky");
    }
}
