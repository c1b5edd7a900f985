//! Day-by-day itinerary generation

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{CandidateGenerator, PlanningRules, choose};
use crate::models::{City, CityId, Entity};
use crate::network::NetworkQuery;
use crate::{Result, TravelPlannerError};

/// The two itinerary flavours offered to travellers.
///
/// Both currently run the same search and produce identical itineraries; the
/// mode is carried through so callers can keep them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningMode {
    /// Greedy mode
    LincolnOrBust,
    /// Non-greedy mode
    ScenicRoute,
}

impl PlanningMode {
    #[must_use]
    pub fn from_greedy(greedy: bool) -> Self {
        if greedy {
            PlanningMode::LincolnOrBust
        } else {
            PlanningMode::ScenicRoute
        }
    }

    #[must_use]
    pub fn is_greedy(self) -> bool {
        matches!(self, PlanningMode::LincolnOrBust)
    }

    /// The other mode
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            PlanningMode::LincolnOrBust => PlanningMode::ScenicRoute,
            PlanningMode::ScenicRoute => PlanningMode::LincolnOrBust,
        }
    }
}

impl fmt::Display for PlanningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningMode::LincolnOrBust => write!(f, "Lincoln or bust"),
            PlanningMode::ScenicRoute => write!(f, "The scenic route"),
        }
    }
}

/// One stop of an itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub city: CityId,
    /// "Name, Region"
    pub label: String,
    /// Calendar day the traveller is at this stop
    pub date: NaiveDate,
    /// Days into the journey at this stop
    pub day_index: u32,
}

impl Stop {
    fn at(city: &City, date: NaiveDate, day_index: u32) -> Self {
        Self {
            city: city.id(),
            label: city.label(),
            date,
            day_index,
        }
    }
}

/// Ordered stops, always starting with the start city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub mode: PlanningMode,
    stops: Vec<Stop>,
}

impl Itinerary {
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stops rendered as "Name, Region"
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.stops.iter().map(|stop| stop.label.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false, an itinerary holds at least its start city
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Stop> {
        self.stops.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// Whether the itinerary ends back at its start city
    #[must_use]
    pub fn returns_to_start(&self) -> bool {
        self.stops.len() > 1
            && self.stops.first().map(|stop| stop.city) == self.stops.last().map(|stop| stop.city)
    }

    pub(crate) fn from_stops(mode: PlanningMode, stops: Vec<Stop>) -> Self {
        Self { mode, stops }
    }

    /// Overwrite the leading stops with `prefix`, keeping any stops beyond it
    pub(crate) fn replace_prefix(&mut self, prefix: &[Stop]) {
        let keep = self.stops.len().min(prefix.len());
        self.stops.splice(..keep, prefix.iter().cloned());
    }
}

/// One itinerary per planning mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryPair {
    pub lincoln_or_bust: Itinerary,
    pub scenic_route: Itinerary,
}

impl ItineraryPair {
    #[must_use]
    pub fn get(&self, mode: PlanningMode) -> &Itinerary {
        match mode {
            PlanningMode::LincolnOrBust => &self.lincoln_or_bust,
            PlanningMode::ScenicRoute => &self.scenic_route,
        }
    }

    pub fn get_mut(&mut self, mode: PlanningMode) -> &mut Itinerary {
        match mode {
            PlanningMode::LincolnOrBust => &mut self.lincoln_or_bust,
            PlanningMode::ScenicRoute => &mut self.scenic_route,
        }
    }
}

/// Split a "Name, Region" label into its parts
pub fn parse_city_label(label: &str) -> Result<(&str, &str)> {
    match label.split_once(", ") {
        Some((name, region)) if !name.trim().is_empty() && !region.trim().is_empty() => {
            Ok((name, region))
        }
        _ => Err(TravelPlannerError::validation(format!(
            "Expected a city as 'Name, Region', got '{label}'"
        ))),
    }
}

/// Drives the day-by-day search over a network snapshot
pub struct ItineraryPlanner<'a, Q: NetworkQuery> {
    network: &'a Q,
    rules: &'a PlanningRules,
    start_date: NaiveDate,
}

impl<'a, Q: NetworkQuery> ItineraryPlanner<'a, Q> {
    /// Planner starting on today's local date
    pub fn new(network: &'a Q, rules: &'a PlanningRules) -> Self {
        Self {
            network,
            rules,
            start_date: Local::now().date_naive(),
        }
    }

    /// Use `date` as the first day of every itinerary
    #[must_use]
    pub fn starting_on(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Plan an itinerary from `start`, `day_offset` days into the journey.
    ///
    /// At least one day is always planned. Planning then continues until the
    /// horizon is reached or the itinerary is back at its start city, and
    /// ends early on the first day without a legal onward leg.
    #[instrument(name = "plan_itinerary", skip(self), fields(start_date = %self.start_date))]
    pub fn plan(&self, start: CityId, day_offset: u32, mode: PlanningMode) -> Result<Itinerary> {
        let start_city = self
            .network
            .city(start)
            .ok_or_else(|| TravelPlannerError::not_found("City", format!("{start:?}")))?;

        let generator = CandidateGenerator::new(self.network, self.rules);
        let mut date = self.start_date;
        let mut day_index = day_offset;
        let mut stops = vec![Stop::at(start_city, date, day_index)];

        loop {
            let current = stops.last().map_or(start, |stop| stop.city);
            let candidates = generator.next_cities(current, date, day_index);
            if candidates.is_empty() {
                debug!("No onward travel on {} (day {}), itinerary ends", date, day_index);
                break;
            }

            let Some(chosen) = choose(candidates.cities(self.network)) else {
                break;
            };

            // Offsets at u32::MAX are already past any horizon
            day_index = day_index.saturating_add(1);
            let Some(next_date) = date.succ_opt() else {
                warn!("Calendar overflow after {}, itinerary ends", date);
                stops.push(Stop::at(chosen, date, day_index));
                break;
            };
            date = next_date;
            stops.push(Stop::at(chosen, date, day_index));

            if day_index >= self.rules.horizon_days || chosen.id() == start {
                break;
            }
        }

        let itinerary = Itinerary::from_stops(mode, stops);
        info!(
            greedy = mode.is_greedy(),
            "Planned {} itinerary from {} with {} stop(s)",
            mode,
            start_city.label(),
            itinerary.len()
        );
        Ok(itinerary)
    }

    /// Plan both itineraries from a "Name, Region" label
    pub fn request(&self, start_label: &str, day_offset: u32) -> Result<ItineraryPair> {
        let (name, region) = parse_city_label(start_label)?;
        let start = self
            .network
            .lookup_city(name, region)
            .ok_or_else(|| TravelPlannerError::not_found("City", start_label))?;

        Ok(ItineraryPair {
            lincoln_or_bust: self.plan(start, day_offset, PlanningMode::LincolnOrBust)?,
            scenic_route: self.plan(start, day_offset, PlanningMode::ScenicRoute)?,
        })
    }
}

/// Plan from `start` starting today with the default rules, rendered as
/// "Name, Region" labels. `greedy` selects the mode but does not change the
/// stops.
pub fn generate_itinerary<Q: NetworkQuery>(
    network: &Q,
    start: CityId,
    day_offset: u32,
    greedy: bool,
) -> Result<Vec<String>> {
    let rules = PlanningRules::default();
    let itinerary = ItineraryPlanner::new(network, &rules).plan(
        start,
        day_offset,
        PlanningMode::from_greedy(greedy),
    )?;
    Ok(itinerary.labels())
}

/// Resolve a "Name, Region" label and plan both itineraries starting today
/// with the default rules
pub fn request_itinerary<Q: NetworkQuery>(
    network: &Q,
    start_label: &str,
    day_offset: u32,
) -> Result<ItineraryPair> {
    let rules = PlanningRules::default();
    ItineraryPlanner::new(network, &rules).request(start_label, day_offset)
}
