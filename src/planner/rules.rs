//! Business rules gating every leg of an itinerary

use serde::{Deserialize, Serialize};

use crate::{Result, TravelPlannerError};

/// Thresholds and fixed points the planner applies on every day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningRules {
    /// Hottest temperature (°C) at which an airport still allows departures
    #[serde(default = "default_max_temperature")]
    pub max_temperature_c: f32,
    /// Lowest visibility (km) at which an airport still allows departures
    #[serde(default = "default_min_visibility")]
    pub min_visibility_km: f32,
    /// Weather descriptions that close an airport, matched exactly
    #[serde(default = "default_grounding_conditions")]
    pub grounding_conditions: Vec<String>,
    /// Operators whose airplane is rated above this range (km) are not booked
    #[serde(default = "default_range_ceiling")]
    pub range_ceiling_km: f64,
    /// Day index from which only the home city is a valid destination
    #[serde(default = "default_homeward_day")]
    pub homeward_day: u32,
    /// Day index at which planning stops
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    #[serde(default = "default_home_city")]
    pub home_city: String,
    #[serde(default = "default_home_region")]
    pub home_region: String,
}

fn default_max_temperature() -> f32 {
    45.0
}

fn default_min_visibility() -> f32 {
    5.0
}

fn default_grounding_conditions() -> Vec<String> {
    vec!["Thunderstorm".to_string(), "Tornado".to_string()]
}

fn default_range_ceiling() -> f64 {
    4000.0
}

fn default_homeward_day() -> u32 {
    16
}

fn default_horizon_days() -> u32 {
    17
}

fn default_home_city() -> String {
    "Lincoln".to_string()
}

fn default_home_region() -> String {
    "Nebraska".to_string()
}

impl Default for PlanningRules {
    fn default() -> Self {
        Self {
            max_temperature_c: default_max_temperature(),
            min_visibility_km: default_min_visibility(),
            grounding_conditions: default_grounding_conditions(),
            range_ceiling_km: default_range_ceiling(),
            homeward_day: default_homeward_day(),
            horizon_days: default_horizon_days(),
            home_city: default_home_city(),
            home_region: default_home_region(),
        }
    }
}

impl PlanningRules {
    /// "Name, Region" label of the home city
    #[must_use]
    pub fn home_label(&self) -> String {
        format!("{}, {}", self.home_city, self.home_region)
    }

    /// Apply default values to empty fields
    pub fn apply_defaults(&mut self) {
        if self.home_city.is_empty() {
            self.home_city = default_home_city();
        }
        if self.home_region.is_empty() {
            self.home_region = default_home_region();
        }
        if self.horizon_days == 0 {
            self.horizon_days = default_horizon_days();
        }
    }

    /// Validate the rule set
    pub fn validate(&self) -> Result<()> {
        if !self.max_temperature_c.is_finite() {
            return Err(TravelPlannerError::config(
                "Maximum temperature must be a finite number",
            ));
        }

        if !self.min_visibility_km.is_finite() || self.min_visibility_km < 0.0 {
            return Err(TravelPlannerError::config(
                "Minimum visibility must be a non-negative number",
            ));
        }

        if !self.range_ceiling_km.is_finite() || self.range_ceiling_km <= 0.0 {
            return Err(TravelPlannerError::config(
                "Range ceiling must be a positive number of kilometers",
            ));
        }

        if self.homeward_day >= self.horizon_days {
            return Err(TravelPlannerError::config(format!(
                "Homeward day ({}) must come before the planning horizon ({})",
                self.homeward_day, self.horizon_days
            )));
        }

        if self.home_city.trim().is_empty() || self.home_region.trim().is_empty() {
            return Err(TravelPlannerError::config(
                "Home city and region cannot be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = PlanningRules::default();
        assert_eq!(rules.max_temperature_c, 45.0);
        assert_eq!(rules.min_visibility_km, 5.0);
        assert_eq!(rules.grounding_conditions, vec!["Thunderstorm", "Tornado"]);
        assert_eq!(rules.range_ceiling_km, 4000.0);
        assert_eq!(rules.homeward_day, 16);
        assert_eq!(rules.horizon_days, 17);
        assert_eq!(rules.home_label(), "Lincoln, Nebraska");
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_homeward_day_after_horizon() {
        let rules = PlanningRules {
            homeward_day: 17,
            ..PlanningRules::default()
        };
        let result = rules.validate();
        assert!(result.unwrap_err().to_string().contains("Homeward day"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let rules: PlanningRules = serde_json::from_str(r#"{"range_ceiling_km": 5000.0}"#).unwrap();
        assert_eq!(rules.range_ceiling_km, 5000.0);
        assert_eq!(rules.horizon_days, 17);
        assert_eq!(rules.home_city, "Lincoln");
    }
}
