//! Following an itinerary one day at a time

use tracing::{debug, info};

use super::{Itinerary, ItineraryPair, PlanningMode, Stop};

/// A traveller's progress along one of a pair of itineraries.
///
/// Advancing moves along the followed itinerary and rewrites the alternate
/// one so that both share the stops already travelled.
#[derive(Debug, Clone)]
pub struct Journey {
    itineraries: ItineraryPair,
    mode: PlanningMode,
    position: usize,
}

impl Journey {
    /// Start following the `mode` itinerary at its first stop
    #[must_use]
    pub fn new(itineraries: ItineraryPair, mode: PlanningMode) -> Self {
        info!("Journey started following {}", mode);
        Self {
            itineraries,
            mode,
            position: 0,
        }
    }

    #[must_use]
    pub fn mode(&self) -> PlanningMode {
        self.mode
    }

    #[must_use]
    pub fn itineraries(&self) -> &ItineraryPair {
        &self.itineraries
    }

    /// The itinerary being followed
    #[must_use]
    pub fn followed(&self) -> &Itinerary {
        self.itineraries.get(self.mode)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Stop> {
        self.followed().stops().get(self.position)
    }

    /// Day index of the current stop
    #[must_use]
    pub fn days_into_journey(&self) -> u32 {
        self.current().map_or(0, |stop| stop.day_index)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position + 1 >= self.followed().len()
    }

    /// Move to the next stop of the followed itinerary.
    ///
    /// Returns `None` and leaves the journey untouched at the last stop.
    pub fn advance(&mut self) -> Option<&Stop> {
        if self.is_finished() {
            debug!("Journey already at its final stop");
            return None;
        }
        self.position += 1;

        let travelled = self.followed().stops()[..=self.position].to_vec();
        self.itineraries
            .get_mut(self.mode.other())
            .replace_prefix(&travelled);

        let stop = self.current()?;
        debug!("Advanced to {} on day {}", stop.label, stop.day_index);
        Some(stop)
    }
}
