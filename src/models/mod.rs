//! Data models for the TravelPlanner library
//!
//! This module contains the read-only entities a planning run consumes,
//! organized by concern:
//! - Location: Geographic coordinates
//! - City / Airport / Operator: The travel network
//! - Forecast: Per-date weather readings used to gate departures
//!
//! Entities never reference each other directly. Relations live in the
//! [`Network`](crate::network::Network) snapshot and are expressed through
//! the typed handles defined here.

pub mod airport;
pub mod city;
pub mod forecast;
pub mod location;
pub mod operator;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

// Re-export all public types for convenient access
pub use airport::Airport;
pub use city::City;
pub use forecast::{Forecast, ForecastSubject};
pub use location::Coordinates;
pub use operator::{Airplane, Operator};

/// Handle of a [`City`] inside a network snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub(crate) usize);

/// Handle of an [`Airport`] inside a network snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AirportId(pub(crate) usize);

/// Handle of an [`Operator`] inside a network snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperatorId(pub(crate) usize);

impl CityId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl AirportId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl OperatorId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Common behaviour of every persisted entity kind
pub trait Entity {
    /// Handle type addressing this entity in a snapshot
    type Id: Copy + Eq + Hash + Debug;

    /// Human readable entity kind, used in error messages
    const KIND: &'static str;

    /// Handle of this entity
    fn id(&self) -> Self::Id;

    /// Unique key of this entity within a snapshot
    fn key(&self) -> EntityKey;
}

/// Unique lookup key of an entity, tagged by entity kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    City { name: String, region: String },
    Airport { icao_code: String },
    Operator { name: String },
}

impl EntityKey {
    /// Key of a city identified by its name and region label
    pub fn city<N: Into<String>, R: Into<String>>(name: N, region: R) -> Self {
        Self::City {
            name: name.into(),
            region: region.into(),
        }
    }

    /// Key of an airport identified by its 4-character code
    pub fn airport<S: Into<String>>(icao_code: S) -> Self {
        Self::Airport {
            icao_code: icao_code.into(),
        }
    }

    /// Key of an operator identified by its name
    pub fn operator<S: Into<String>>(name: S) -> Self {
        Self::Operator { name: name.into() }
    }

    /// Entity kind this key addresses
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            EntityKey::City { .. } => City::KIND,
            EntityKey::Airport { .. } => Airport::KIND,
            EntityKey::Operator { .. } => Operator::KIND,
        }
    }
}

impl std::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKey::City { name, region } => write!(f, "{name}, {region}"),
            EntityKey::Airport { icao_code } => write!(f, "{icao_code}"),
            EntityKey::Operator { name } => write!(f, "{name}"),
        }
    }
}

/// Handle of any entity, tagged by entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    City(CityId),
    Airport(AirportId),
    Operator(OperatorId),
}
