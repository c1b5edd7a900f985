//! Seed network shipped with the installer

use chrono::NaiveDate;

use super::{Network, NetworkBuilder};
use crate::Result;
use crate::models::{Airplane, Forecast, ForecastSubject};

impl Network {
    /// The small Nebraska network a fresh installation starts with.
    ///
    /// Kansas City, Tampa and Detroit airports serve no city yet, so every
    /// itinerary planned on this network ends where it starts until more
    /// cities are linked.
    pub fn starter() -> Result<Network> {
        let mut builder = NetworkBuilder::new();

        let lincoln = builder.add_city("Lincoln", "Nebraska", 40.8, -96.7)?;
        let bellevue = builder.add_city("Bellevue", "Nebraska", 41.2, -95.9)?;

        let lincoln_airport = builder.add_airport("Lincoln Airport", "KLNK", 40.85, -96.76)?;
        let eppley_airfield = builder.add_airport("Eppley Airfield", "KOMA", 41.30, -95.89)?;
        builder.link(lincoln, lincoln_airport)?;
        builder.link(lincoln, eppley_airfield)?;
        builder.link(bellevue, eppley_airfield)?;

        let first_day = starter_date(18)?;
        let second_day = starter_date(19)?;
        let readings = [
            (lincoln_airport, first_day, 11.0, 15.0, 0.0, 7.61, "clear sky"),
            (lincoln_airport, second_day, 17.0, 16.0, 0.1, 4.52, "clear sky"),
            (eppley_airfield, first_day, 14.0, 10.0, 0.0, 8.05, "broken clouds"),
            (eppley_airfield, second_day, 5.0, 11.0, 0.3, 10.21, "overcast clouds"),
        ];
        for (airport, date, temperature, visibility, precipitation, wind, description) in readings {
            builder.add_forecast(
                Forecast::new(
                    ForecastSubject::Airport(airport),
                    date,
                    temperature,
                    visibility,
                    description,
                )
                .with_precipitation_probability(precipitation)
                .with_wind_speed(wind),
            )?;
        }

        let kansas_airport =
            builder.add_airport("Kansas City International Airport", "KMCI", 39.30, -94.71)?;
        let tampa_airport = builder.add_airport("Tampa International Airport", "KTPA", 27.98, -82.53)?;
        let detroit_airport = builder.add_airport("Detroit Metro Airport", "KDTW", 42.22, -83.36)?;

        let embraer = Airplane::new("Embraer 135", 3100.0);
        let bombardier = Airplane::new("Bombardier CRJ700LR", 3700.0);

        let joey_airways = builder.add_operator("Joey Airways", 4.5, embraer.clone())?;
        builder.serve(joey_airways, kansas_airport)?;
        builder.serve(joey_airways, tampa_airport)?;

        let flightee = builder.add_operator("Flightee", 5.0, embraer)?;
        builder.serve(flightee, tampa_airport)?;
        builder.serve(flightee, detroit_airport)?;

        let walter_airlines = builder.add_operator("Walter Airlines", 3.8, bombardier)?;
        builder.serve(walter_airlines, lincoln_airport)?;
        builder.serve(walter_airlines, tampa_airport)?;
        builder.serve(walter_airlines, detroit_airport)?;

        Ok(builder.build())
    }
}

fn starter_date(day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2022, 4, day).ok_or_else(|| {
        crate::TravelPlannerError::data(format!("Invalid starter forecast date 2022-04-{day}"))
    })
}
