//! JSON exchange format for network snapshots
//!
//! The storage layer exports its tables into this document; relations are
//! expressed through unique keys (airport codes, operator names, city name
//! and region) instead of database ids.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Network, NetworkBuilder, NetworkQuery};
use crate::models::{Airplane, AirportId, EntityId, EntityKey, Forecast, ForecastSubject};
use crate::{Result, TravelPlannerError};

/// Serialized form of a whole [`Network`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(default)]
    pub airports: Vec<AirportRecord>,
    #[serde(default)]
    pub cities: Vec<CityRecord>,
    #[serde(default)]
    pub operators: Vec<OperatorRecord>,
    #[serde(default)]
    pub forecasts: Vec<ForecastRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub name: String,
    pub icao_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    /// ICAO codes of the airports serving this city
    #[serde(default)]
    pub airports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorRecord {
    pub name: String,
    pub score: f32,
    pub airplane: Airplane,
    /// ICAO codes of the airports this operator flies from and to
    #[serde(default)]
    pub airports: Vec<String>,
}

/// Forecast subject, written as `"airport": "KLNK"` or
/// `"city": {"name": ..., "region": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectRecord {
    Airport(String),
    City { name: String, region: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    #[serde(flatten)]
    pub subject: SubjectRecord,
    pub date: NaiveDate,
    pub temperature: f32,
    pub visibility: f32,
    #[serde(default)]
    pub precipitation_probability: f32,
    #[serde(default)]
    pub wind_speed: f32,
    pub weather_description: String,
}

impl Network {
    /// Build a snapshot from its serialized form
    pub fn from_document(document: &NetworkDocument) -> Result<Network> {
        let mut builder = NetworkBuilder::new();

        for airport in &document.airports {
            builder.add_airport(
                &airport.name,
                &airport.icao_code,
                airport.latitude,
                airport.longitude,
            )?;
        }

        for city in &document.cities {
            let id = builder.add_city(&city.name, &city.region, city.latitude, city.longitude)?;
            for code in &city.airports {
                let airport = resolve_airport(&builder, code, &city.name)?;
                builder.link(id, airport)?;
            }
        }

        for operator in &document.operators {
            let id = builder.add_operator(&operator.name, operator.score, operator.airplane.clone())?;
            for code in &operator.airports {
                let airport = resolve_airport(&builder, code, &operator.name)?;
                builder.serve(id, airport)?;
            }
        }

        for record in &document.forecasts {
            let subject = match &record.subject {
                SubjectRecord::Airport(code) => {
                    ForecastSubject::Airport(resolve_airport(&builder, code, "forecast")?)
                }
                SubjectRecord::City { name, region } => {
                    match builder.lookup(&EntityKey::city(name, region)) {
                        Some(EntityId::City(city)) => ForecastSubject::City(city),
                        _ => {
                            return Err(TravelPlannerError::data(format!(
                                "Forecast references unknown city '{name}, {region}'"
                            )));
                        }
                    }
                }
            };
            builder.add_forecast(Forecast {
                subject,
                date: record.date,
                temperature: record.temperature,
                visibility: record.visibility,
                precipitation_probability: record.precipitation_probability,
                wind_speed: record.wind_speed,
                weather_description: record.weather_description.clone(),
            })?;
        }

        Ok(builder.build())
    }

    /// Load a snapshot from a JSON document on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Network> {
        let path = path.as_ref();
        debug!("Loading network from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let document: NetworkDocument = serde_json::from_str(&contents)?;
        let network = Network::from_document(&document)?;
        info!(
            "Loaded {} cities and {} airports from {}",
            network.city_count(),
            network.airport_count(),
            path.display()
        );
        Ok(network)
    }

    /// Serialized form of this snapshot
    #[must_use]
    pub fn to_document(&self) -> NetworkDocument {
        let code_of = |id: &AirportId| {
            self.airport(*id)
                .map(|airport| airport.icao_code.clone())
                .unwrap_or_default()
        };

        NetworkDocument {
            airports: self
                .airports()
                .map(|airport| AirportRecord {
                    name: airport.name.clone(),
                    icao_code: airport.icao_code.clone(),
                    latitude: airport.location.latitude,
                    longitude: airport.location.longitude,
                })
                .collect(),
            cities: self
                .cities()
                .map(|city| CityRecord {
                    name: city.name.clone(),
                    region: city.region.clone(),
                    latitude: city.latitude(),
                    longitude: city.longitude(),
                    airports: self.airports_of_city(city.id).iter().map(code_of).collect(),
                })
                .collect(),
            operators: self
                .operators()
                .map(|operator| OperatorRecord {
                    name: operator.name.clone(),
                    score: operator.score,
                    airplane: operator.airplane.clone(),
                    airports: self
                        .airports_of_operator(operator.id)
                        .iter()
                        .map(code_of)
                        .collect(),
                })
                .collect(),
            forecasts: self
                .forecasts()
                .into_iter()
                .filter_map(|forecast| {
                    let subject = match forecast.subject {
                        ForecastSubject::Airport(id) => SubjectRecord::Airport(code_of(&id)),
                        ForecastSubject::City(id) => {
                            let city = self.city(id)?;
                            SubjectRecord::City {
                                name: city.name.clone(),
                                region: city.region.clone(),
                            }
                        }
                    };
                    Some(ForecastRecord {
                        subject,
                        date: forecast.date,
                        temperature: forecast.temperature,
                        visibility: forecast.visibility,
                        precipitation_probability: forecast.precipitation_probability,
                        wind_speed: forecast.wind_speed,
                        weather_description: forecast.weather_description.clone(),
                    })
                })
                .collect(),
        }
    }
}

fn resolve_airport(builder: &NetworkBuilder, code: &str, referenced_by: &str) -> Result<AirportId> {
    match builder.lookup(&EntityKey::airport(code)) {
        Some(EntityId::Airport(id)) => Ok(id),
        _ => Err(TravelPlannerError::data(format!(
            "'{referenced_by}' references unknown airport '{code}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOCUMENT: &str = r#"{
        "airports": [
            {"name": "Lincoln Airport", "icao_code": "KLNK", "latitude": 40.85, "longitude": -96.76},
            {"name": "Eppley Airfield", "icao_code": "KOMA", "latitude": 41.30, "longitude": -95.89}
        ],
        "cities": [
            {"name": "Lincoln", "region": "Nebraska", "latitude": 40.8, "longitude": -96.7,
             "airports": ["KLNK", "KOMA"]},
            {"name": "Bellevue", "region": "Nebraska", "latitude": 41.2, "longitude": -95.9,
             "airports": ["KOMA"]}
        ],
        "operators": [
            {"name": "Walter Airlines", "score": 3.8,
             "airplane": {"name": "Bombardier CRJ700LR", "range_km": 3700.0},
             "airports": ["KLNK", "KOMA"]}
        ],
        "forecasts": [
            {"airport": "KLNK", "date": "2022-04-18", "temperature": 11.0, "visibility": 15.0,
             "wind_speed": 7.61, "weather_description": "clear sky"},
            {"city": {"name": "Bellevue", "region": "Nebraska"}, "date": "2022-04-18",
             "temperature": 12.0, "visibility": 10.0, "weather_description": "broken clouds"}
        ]
    }"#;

    #[test]
    fn test_from_document() {
        let document: NetworkDocument = serde_json::from_str(DOCUMENT).unwrap();
        let network = Network::from_document(&document).unwrap();

        assert_eq!(network.city_count(), 2);
        assert_eq!(network.airport_count(), 2);
        assert_eq!(network.operator_count(), 1);
        assert_eq!(network.forecast_count(), 2);

        let lincoln = network.lookup_city("Lincoln", "Nebraska").unwrap();
        assert_eq!(network.airports_of_city(lincoln).len(), 2);

        let date = NaiveDate::from_ymd_opt(2022, 4, 18).unwrap();
        let klnk = network.airports_of_city(lincoln)[0];
        let forecast = network
            .forecast_for(ForecastSubject::Airport(klnk), date)
            .unwrap();
        assert_eq!(forecast.wind_speed, 7.61);
        assert_eq!(forecast.precipitation_probability, 0.0);
    }

    #[test]
    fn test_document_survives_export() {
        let document: NetworkDocument = serde_json::from_str(DOCUMENT).unwrap();
        let network = Network::from_document(&document).unwrap();
        let exported = network.to_document();

        assert_eq!(exported.airports, document.airports);
        assert_eq!(exported.cities, document.cities);
        assert_eq!(exported.operators, document.operators);
        assert_eq!(exported.forecasts.len(), 2);
        assert_eq!(
            exported.forecasts[1].subject,
            SubjectRecord::City {
                name: "Bellevue".to_string(),
                region: "Nebraska".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_airport_reference() {
        let mut document: NetworkDocument = serde_json::from_str(DOCUMENT).unwrap();
        document.cities[1].airports.push("KXXX".to_string());
        let result = Network::from_document(&document);
        let error = result.unwrap_err();
        assert!(matches!(error, TravelPlannerError::Data { .. }));
        assert!(error.to_string().contains("KXXX"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let network = Network::load(file.path()).unwrap();
        assert_eq!(network.city_count(), 2);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = Network::load(file.path());
        assert!(matches!(result, Err(TravelPlannerError::Json { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Network::load("/definitely/not/here/network.json");
        assert!(matches!(result, Err(TravelPlannerError::Io { .. })));
    }
}
