//! Network snapshot module
//!
//! This module provides the immutable travel network a planning run reads:
//! - Query: the read interface the planner is written against
//! - Builder: validated construction of a snapshot
//! - Document: JSON exchange format handed over by the storage layer
//! - Starter: the seed network shipped with the installer

pub mod builder;
pub mod document;
pub mod query;
pub mod starter;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{
    Airport, AirportId, City, CityId, EntityId, EntityKey, Forecast, ForecastSubject, Operator,
    OperatorId,
};

pub use builder::NetworkBuilder;
pub use document::NetworkDocument;
pub use query::NetworkQuery;

/// Read-only arena of cities, airports, operators and forecasts.
///
/// Both directions of every many-to-many relation are stored and kept in sync
/// by [`NetworkBuilder`], so `cities_of` and `airports_of_city` always describe
/// the same relation.
#[derive(Debug, Clone, Default)]
pub struct Network {
    cities: Vec<City>,
    airports: Vec<Airport>,
    operators: Vec<Operator>,
    city_airports: Vec<Vec<AirportId>>,
    airport_cities: Vec<Vec<CityId>>,
    airport_operators: Vec<Vec<OperatorId>>,
    operator_airports: Vec<Vec<AirportId>>,
    forecasts: HashMap<(ForecastSubject, NaiveDate), Forecast>,
    keys: HashMap<EntityKey, EntityId>,
}

impl Network {
    /// Start building a new snapshot
    #[must_use]
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    pub fn operators(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    /// All forecasts, ordered by subject and date
    #[must_use]
    pub fn forecasts(&self) -> Vec<&Forecast> {
        let mut forecasts: Vec<&Forecast> = self.forecasts.values().collect();
        forecasts.sort_by_key(|forecast| {
            let subject = match forecast.subject {
                ForecastSubject::Airport(id) => (0, id.index()),
                ForecastSubject::City(id) => (1, id.index()),
            };
            (subject, forecast.date)
        });
        forecasts
    }

    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    #[must_use]
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn forecast_count(&self) -> usize {
        self.forecasts.len()
    }
}

impl NetworkQuery for Network {
    fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.index())
    }

    fn airport(&self, id: AirportId) -> Option<&Airport> {
        self.airports.get(id.index())
    }

    fn operator(&self, id: OperatorId) -> Option<&Operator> {
        self.operators.get(id.index())
    }

    fn forecast_for(&self, subject: ForecastSubject, date: NaiveDate) -> Option<&Forecast> {
        self.forecasts.get(&(subject, date))
    }

    fn cities_of(&self, airport: AirportId) -> &[CityId] {
        self.airport_cities
            .get(airport.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn airports_of_city(&self, city: CityId) -> &[AirportId] {
        self.city_airports
            .get(city.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn operators_of(&self, airport: AirportId) -> &[OperatorId] {
        self.airport_operators
            .get(airport.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn airports_of_operator(&self, operator: OperatorId) -> &[AirportId] {
        self.operator_airports
            .get(operator.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn lookup(&self, key: &EntityKey) -> Option<EntityId> {
        self.keys.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Airplane, Entity};

    fn sample() -> (Network, CityId, CityId, AirportId, OperatorId) {
        let mut builder = Network::builder();
        let lincoln = builder.add_city("Lincoln", "Nebraska", 40.8, -96.7).unwrap();
        let bellevue = builder.add_city("Bellevue", "Nebraska", 41.2, -95.9).unwrap();
        let eppley = builder
            .add_airport("Eppley Airfield", "KOMA", 41.30, -95.89)
            .unwrap();
        builder.link(lincoln, eppley).unwrap();
        builder.link(bellevue, eppley).unwrap();
        let flightee = builder
            .add_operator("Flightee", 5.0, Airplane::new("Embraer 135", 3100.0))
            .unwrap();
        builder.serve(flightee, eppley).unwrap();
        (builder.build(), lincoln, bellevue, eppley, flightee)
    }

    #[test]
    fn test_relations_are_inverse() {
        let (network, lincoln, bellevue, eppley, flightee) = sample();

        assert_eq!(network.cities_of(eppley), &[lincoln, bellevue]);
        assert_eq!(network.airports_of_city(lincoln), &[eppley]);
        assert_eq!(network.airports_of_city(bellevue), &[eppley]);
        assert_eq!(network.operators_of(eppley), &[flightee]);
        assert_eq!(network.airports_of_operator(flightee), &[eppley]);
    }

    #[test]
    fn test_lookup_by_unique_key() {
        let (network, lincoln, _, eppley, flightee) = sample();

        assert_eq!(network.lookup_city("Lincoln", "Nebraska"), Some(lincoln));
        assert_eq!(network.lookup_city("Lincoln", "Illinois"), None);
        assert_eq!(
            network.lookup(&EntityKey::airport("KOMA")),
            Some(EntityId::Airport(eppley))
        );
        assert_eq!(
            network.lookup(&EntityKey::operator("Flightee")),
            Some(EntityId::Operator(flightee))
        );
        assert_eq!(network.city(lincoln).unwrap().id(), lincoln);
    }

    #[test]
    fn test_unknown_handles_are_empty() {
        let (network, ..) = sample();

        assert!(network.city(CityId(42)).is_none());
        assert!(network.cities_of(AirportId(42)).is_empty());
        assert!(network.operators_of(AirportId(42)).is_empty());
        assert!(network.airports_of_operator(OperatorId(42)).is_empty());
    }

    #[test]
    fn test_missing_forecast_is_none() {
        let (network, _, _, eppley, _) = sample();
        let date = NaiveDate::from_ymd_opt(2022, 4, 18).unwrap();
        assert!(
            network
                .forecast_for(ForecastSubject::Airport(eppley), date)
                .is_none()
        );
    }
}
