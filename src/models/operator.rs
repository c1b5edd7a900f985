//! Operator and airplane models

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKey, OperatorId};

/// The aircraft an operator flies. Owned by value, never shared.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Airplane {
    pub name: String,
    /// Maximum range in kilometers
    pub range_km: f64,
}

impl Airplane {
    #[must_use]
    pub fn new<S: Into<String>>(name: S, range_km: f64) -> Self {
        Self {
            name: name.into(),
            range_km,
        }
    }
}

/// An airline flying one airplane between every pair of its airports
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Operator {
    pub(crate) id: OperatorId,
    pub name: String,
    /// Pilot rating score
    pub score: f32,
    pub airplane: Airplane,
}

impl Operator {
    /// Rated range of the operator's airplane in kilometers
    #[must_use]
    pub fn range_km(&self) -> f64 {
        self.airplane.range_km
    }
}

impl Entity for Operator {
    type Id = OperatorId;
    const KIND: &'static str = "Operator";

    fn id(&self) -> OperatorId {
        self.id
    }

    fn key(&self) -> EntityKey {
        EntityKey::operator(&self.name)
    }
}
