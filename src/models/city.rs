//! City model

use serde::{Deserialize, Serialize};

use super::{CityId, Coordinates, Entity, EntityKey};

/// A city served by one or more airports
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    pub(crate) id: CityId,
    /// City name, e.g. "Lincoln"
    pub name: String,
    /// Region label disambiguating equally named cities, e.g. "Nebraska"
    pub region: String,
    /// Position of the city itself (airports carry their own)
    pub location: Coordinates,
}

impl City {
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    /// "Name, Region" label used wherever a city is displayed
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.region)
    }

    /// Whether this city is the one identified by `name` and `region`
    #[must_use]
    pub fn is(&self, name: &str, region: &str) -> bool {
        self.name == name && self.region == region
    }
}

impl Entity for City {
    type Id = CityId;
    const KIND: &'static str = "City";

    fn id(&self) -> CityId {
        self.id
    }

    fn key(&self) -> EntityKey {
        EntityKey::city(&self.name, &self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_label() {
        let city = City {
            id: CityId(0),
            name: "Lincoln".to_string(),
            region: "Nebraska".to_string(),
            location: Coordinates::new(40.8, -96.7),
        };
        assert_eq!(city.label(), "Lincoln, Nebraska");
        assert!(city.is("Lincoln", "Nebraska"));
        assert!(!city.is("Lincoln", "nebraska"));
        assert_eq!(city.key(), EntityKey::city("Lincoln", "Nebraska"));
    }
}
