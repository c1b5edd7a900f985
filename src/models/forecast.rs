//! Weather forecast model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AirportId, CityId};

/// What a forecast was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForecastSubject {
    Airport(AirportId),
    City(CityId),
}

/// Daily weather forecast for an airport or a city
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Forecast {
    pub subject: ForecastSubject,
    /// Calendar day the forecast applies to
    pub date: NaiveDate,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Visibility in kilometers
    pub visibility: f32,
    /// Precipitation probability, 0.0 (0%) to 1.0 (100%)
    pub precipitation_probability: f32,
    /// Wind speed in km/h
    pub wind_speed: f32,
    /// Human-readable description of weather conditions
    pub weather_description: String,
}

impl Forecast {
    /// Create a forecast with no precipitation and no wind
    pub fn new<S: Into<String>>(
        subject: ForecastSubject,
        date: NaiveDate,
        temperature: f32,
        visibility: f32,
        weather_description: S,
    ) -> Self {
        Self {
            subject,
            date,
            temperature,
            visibility,
            precipitation_probability: 0.0,
            wind_speed: 0.0,
            weather_description: weather_description.into(),
        }
    }

    #[must_use]
    pub fn with_precipitation_probability(mut self, probability: f32) -> Self {
        self.precipitation_probability = probability;
        self
    }

    #[must_use]
    pub fn with_wind_speed(mut self, wind_speed: f32) -> Self {
        self.wind_speed = wind_speed;
        self
    }
}
