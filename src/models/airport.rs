//! Airport model

use serde::{Deserialize, Serialize};

use super::{AirportId, Coordinates, Entity, EntityKey};

/// Length every airport code must have
pub const ICAO_CODE_LENGTH: usize = 4;

/// An airport, the only place a leg can start or end
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Airport {
    pub(crate) id: AirportId,
    pub name: String,
    /// 4-character ICAO code, e.g. "KLNK"
    pub icao_code: String,
    pub location: Coordinates,
}

impl Airport {
    /// Great-circle distance to another airport in kilometers
    #[must_use]
    pub fn distance_to(&self, other: &Airport) -> f64 {
        self.location.distance_to(&other.location)
    }
}

impl Entity for Airport {
    type Id = AirportId;
    const KIND: &'static str = "Airport";

    fn id(&self) -> AirportId {
        self.id
    }

    fn key(&self) -> EntityKey {
        EntityKey::airport(&self.icao_code)
    }
}
