//! Latitude-based choice of the next stop

use crate::models::City;

/// Running state of the next-stop selection.
///
/// Each offered city is scored against the latitude of the last accepted
/// city. A city scoring above the best score so far is accepted and becomes
/// the new reference. Because the best score is recomputed against the
/// freshly updated reference it is always exactly 90 after the first
/// acceptance, so later cities only win when they lie more than 90 degrees
/// of latitude south of the current reference. The outcome therefore depends
/// on the order cities are offered in.
#[derive(Debug, Clone, Copy)]
pub struct LatitudeSelector<'c> {
    reference: f64,
    best_score: f64,
    chosen: Option<&'c City>,
}

impl Default for LatitudeSelector<'_> {
    fn default() -> Self {
        Self {
            reference: f64::NEG_INFINITY,
            best_score: f64::NEG_INFINITY,
            chosen: None,
        }
    }
}

impl<'c> LatitudeSelector<'c> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn score(reference: f64, latitude: f64) -> (f64, f64) {
        (
            (reference - latitude).abs(),
            (reference - (latitude - 90.0)).abs(),
        )
    }

    /// Offer a city; returns whether it was accepted
    pub fn offer(&mut self, city: &'c City) -> bool {
        let latitude = city.latitude();
        let (direct, shifted) = Self::score(self.reference, latitude);
        if direct.min(shifted) > self.best_score {
            self.reference = latitude;
            let (direct, shifted) = Self::score(self.reference, latitude);
            self.best_score = direct.max(shifted);
            self.chosen = Some(city);
            true
        } else {
            false
        }
    }

    /// The city accepted last, if any
    #[must_use]
    pub fn chosen(&self) -> Option<&'c City> {
        self.chosen
    }

    #[must_use]
    pub fn reference(&self) -> f64 {
        self.reference
    }

    #[must_use]
    pub fn best_score(&self) -> f64 {
        self.best_score
    }
}

/// Pick the next stop among `candidates`, offered in iteration order.
/// Returns `None` only for an empty input.
pub fn choose<'c>(candidates: impl IntoIterator<Item = &'c City>) -> Option<&'c City> {
    let mut selector = LatitudeSelector::new();
    for city in candidates {
        selector.offer(city);
    }
    selector.chosen()
}
