//! Enumeration of the cities reachable in one leg

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::{FeasibilityEvaluator, PlanningRules};
use crate::models::{Airport, AirportId, City, CityId, Entity};
use crate::network::NetworkQuery;

/// Cities reachable from the current stop, northernmost first.
///
/// Ties in latitude are broken by name and region so that the order, and
/// with it the selection made from it, never depends on storage order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    cities: Vec<CityId>,
}

impl CandidateSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn contains(&self, city: CityId) -> bool {
        self.cities.contains(&city)
    }

    pub fn iter(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.iter().copied()
    }

    /// Resolve the candidates against `network`, keeping the set's order
    pub fn cities<'n, Q: NetworkQuery>(&self, network: &'n Q) -> Vec<&'n City> {
        self.cities.iter().filter_map(|id| network.city(*id)).collect()
    }

    fn ordered<Q: NetworkQuery>(network: &Q, found: HashSet<CityId>) -> Self {
        let mut cities: Vec<&City> = found.into_iter().filter_map(|id| network.city(id)).collect();
        cities.sort_by(|a, b| {
            b.latitude()
                .total_cmp(&a.latitude())
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.region.cmp(&b.region))
        });
        Self {
            cities: cities.into_iter().map(Entity::id).collect(),
        }
    }
}

/// Finds every city one feasible leg away from a given city
pub struct CandidateGenerator<'a, Q: NetworkQuery> {
    network: &'a Q,
    rules: &'a PlanningRules,
    feasibility: FeasibilityEvaluator<'a, Q>,
}

impl<'a, Q: NetworkQuery> CandidateGenerator<'a, Q> {
    pub fn new(network: &'a Q, rules: &'a PlanningRules) -> Self {
        Self {
            network,
            rules,
            feasibility: FeasibilityEvaluator::new(network, rules),
        }
    }

    /// Cities reachable from `city` on `date`, `day_index` days into the journey.
    ///
    /// Departures are only considered from airports of `city` whose weather
    /// permits flying on `date`, but once an operator is picked up there, every
    /// airport of `city` may serve as the origin of the leg. From the homeward
    /// day on, only the home city counts as a destination. `city` itself is
    /// never a candidate.
    #[must_use]
    pub fn next_cities(&self, city: CityId, date: NaiveDate, day_index: u32) -> CandidateSet {
        let city_airports = self.network.airports_of_city(city);
        let origins: Vec<&Airport> = city_airports
            .iter()
            .filter_map(|id| self.network.airport(*id))
            .collect();

        if day_index >= self.rules.homeward_day {
            debug!("Day {} is homeward, only {} is a destination", day_index, self.rules.home_label());
        }

        let mut found = HashSet::new();
        for &airport in city_airports {
            if !self.feasibility.is_weather_feasible(airport, date) {
                debug!("Airport {:?} is closed on {}", airport, date);
                continue;
            }

            for &operator_id in self.network.operators_of(airport) {
                let Some(operator) = self.network.operator(operator_id) else {
                    continue;
                };
                if !self.feasibility.is_within_ceiling(operator) {
                    trace!(
                        "{} flies {:.0} km, above the {:.0} km ceiling",
                        operator.name,
                        operator.range_km(),
                        self.rules.range_ceiling_km
                    );
                    continue;
                }

                for &destination_id in self.network.airports_of_operator(operator_id) {
                    let Some(destination) = self.network.airport(destination_id) else {
                        continue;
                    };
                    for origin in &origins {
                        if origin.id() == destination_id {
                            continue;
                        }
                        if self.feasibility.is_in_range(origin, destination, operator) {
                            self.collect_destination_cities(destination_id, day_index, &mut found);
                        }
                    }
                }
            }
        }

        found.remove(&city);
        let candidates = CandidateSet::ordered(self.network, found);
        debug!(
            "{} candidate(s) from {:?} on {} (day {})",
            candidates.len(),
            city,
            date,
            day_index
        );
        candidates
    }

    fn collect_destination_cities(
        &self,
        destination: AirportId,
        day_index: u32,
        found: &mut HashSet<CityId>,
    ) {
        let cities = self.network.cities_of(destination);
        if day_index < self.rules.homeward_day {
            found.extend(cities.iter().copied());
        } else {
            found.extend(cities.iter().copied().filter(|id| {
                self.network
                    .city(*id)
                    .is_some_and(|city| city.is(&self.rules.home_city, &self.rules.home_region))
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Airplane, Forecast, ForecastSubject};
    use crate::network::{Network, NetworkBuilder};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn open(builder: &mut NetworkBuilder, airport: AirportId, date: NaiveDate) {
        builder
            .add_forecast(Forecast::new(
                ForecastSubject::Airport(airport),
                date,
                20.0,
                10.0,
                "clear sky",
            ))
            .unwrap();
    }

    struct Hub {
        network: Network,
        omaha: CityId,
        lincoln: CityId,
        kearney: CityId,
        denver: CityId,
    }

    /// Omaha hub with one operator reaching Lincoln, Kearney and Denver
    fn hub(range_km: f64) -> Hub {
        let mut builder = Network::builder();
        let omaha = builder.add_city("Omaha", "Nebraska", 41.26, -95.94).unwrap();
        let lincoln = builder.add_city("Lincoln", "Nebraska", 40.8, -96.7).unwrap();
        let kearney = builder.add_city("Kearney", "Nebraska", 40.7, -99.08).unwrap();
        let denver = builder.add_city("Denver", "Colorado", 39.74, -104.99).unwrap();

        let koma = builder.add_airport("Eppley Airfield", "KOMA", 41.30, -95.89).unwrap();
        let klnk = builder.add_airport("Lincoln Airport", "KLNK", 40.85, -96.76).unwrap();
        let kear = builder.add_airport("Kearney Regional", "KEAR", 40.73, -99.0).unwrap();
        let kden = builder.add_airport("Denver International", "KDEN", 39.86, -104.67).unwrap();
        builder.link(omaha, koma).unwrap();
        builder.link(lincoln, klnk).unwrap();
        builder.link(kearney, kear).unwrap();
        builder.link(denver, kden).unwrap();

        let operator = builder
            .add_operator("Plains Air", 4.0, Airplane::new("Twin Otter", range_km))
            .unwrap();
        for airport in [koma, klnk, kear, kden] {
            builder.serve(operator, airport).unwrap();
        }
        open(&mut builder, koma, today());

        Hub {
            network: builder.build(),
            omaha,
            lincoln,
            kearney,
            denver,
        }
    }

    #[test]
    fn test_reachable_cities_northernmost_first() {
        let hub = hub(1000.0);
        let rules = PlanningRules::default();
        let generator = CandidateGenerator::new(&hub.network, &rules);

        let candidates = generator.next_cities(hub.omaha, today(), 0);
        let ids: Vec<CityId> = candidates.iter().collect();
        assert_eq!(ids, vec![hub.lincoln, hub.kearney, hub.denver]);
        assert!(!candidates.contains(hub.omaha));
    }

    #[test]
    fn test_range_limits_destinations() {
        // Denver is roughly 800 km from Omaha, Kearney roughly 260 km
        let hub = hub(500.0);
        let rules = PlanningRules::default();
        let generator = CandidateGenerator::new(&hub.network, &rules);

        let candidates = generator.next_cities(hub.omaha, today(), 0);
        assert!(candidates.contains(hub.kearney));
        assert!(!candidates.contains(hub.denver));
    }

    #[test]
    fn test_closed_airport_yields_nothing() {
        let hub = hub(1000.0);
        let rules = PlanningRules::default();
        let generator = CandidateGenerator::new(&hub.network, &rules);

        let tomorrow = today().succ_opt().unwrap();
        assert!(generator.next_cities(hub.omaha, tomorrow, 0).is_empty());
        // Lincoln has no forecast at all
        assert!(generator.next_cities(hub.lincoln, today(), 0).is_empty());
    }

    #[test]
    fn test_homeward_day_only_allows_home() {
        let hub = hub(1000.0);
        let rules = PlanningRules::default();
        let generator = CandidateGenerator::new(&hub.network, &rules);

        let candidates = generator.next_cities(hub.omaha, today(), 15);
        assert_eq!(candidates.len(), 3);

        let candidates = generator.next_cities(hub.omaha, today(), 16);
        assert_eq!(candidates.iter().collect::<Vec<_>>(), vec![hub.lincoln]);
    }

    #[test]
    fn test_ceiling_blocks_long_range_operators() {
        let hub = hub(4500.0);
        let rules = PlanningRules::default();
        let generator = CandidateGenerator::new(&hub.network, &rules);

        assert!(generator.next_cities(hub.omaha, today(), 0).is_empty());
    }

    #[test]
    fn test_any_city_airport_can_be_the_origin() {
        // Only Capital Airport has a forecast, and it is too far from
        // Shelbyville for the shuttle. Springfield East, closed for lack of a
        // forecast, is close enough and still counts as the leg's origin.
        let mut builder = Network::builder();
        let springfield = builder.add_city("Springfield", "Illinois", 39.8, -89.65).unwrap();
        let shelbyville = builder.add_city("Shelbyville", "Illinois", 39.41, -88.79).unwrap();

        let kspi = builder.add_airport("Capital Airport", "KSPI", 39.84, -89.68).unwrap();
        let kspe = builder.add_airport("Springfield East", "KSPE", 39.5, -88.9).unwrap();
        let kshe = builder.add_airport("Shelby County", "KSHE", 39.41, -88.85).unwrap();
        builder.link(springfield, kspi).unwrap();
        builder.link(springfield, kspe).unwrap();
        builder.link(shelbyville, kshe).unwrap();

        let shuttle = builder
            .add_operator("Shuttle", 3.0, Airplane::new("Cessna 172", 50.0))
            .unwrap();
        builder.serve(shuttle, kspi).unwrap();
        builder.serve(shuttle, kshe).unwrap();
        open(&mut builder, kspi, today());
        let network = builder.build();

        let rules = PlanningRules::default();
        let generator = CandidateGenerator::new(&network, &rules);
        let candidates = generator.next_cities(springfield, today(), 0);

        assert!(candidates.contains(shelbyville));
        assert!(!candidates.contains(springfield));
    }
}
