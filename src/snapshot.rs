use std::time::SystemTime;

use crate::error::HeatmapError;
use crate::models::{MapPoint, Reading};
use crate::registry::Category;

/// One fetch batch split into drawable states and cities.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Hottest first.
    pub states: Vec<MapPoint>,
    /// Hottest first.
    pub cities: Vec<MapPoint>,
    /// Locations that produced no temperature, sorted by id.
    pub dropped: Vec<&'static str>,
    pub fetched_at: SystemTime,
}

impl Snapshot {
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let mut states = Vec::new();
        let mut cities = Vec::new();
        let mut dropped = Vec::new();

        for reading in readings {
            let id = reading.location_id;
            match reading.into_map_point() {
                Some(point) if point.category == Category::State => states.push(point),
                Some(point) => cities.push(point),
                None => dropped.push(id),
            }
        }

        sort_hottest_first(&mut states);
        sort_hottest_first(&mut cities);
        dropped.sort_unstable();

        Self {
            states,
            cities,
            dropped,
            fetched_at: SystemTime::now(),
        }
    }

    /// A map is only drawn when at least one state has a reading.
    pub fn ensure_data(&self) -> Result<&Self, HeatmapError> {
        if self.states.is_empty() {
            return Err(HeatmapError::NoData);
        }
        Ok(self)
    }
}

fn sort_hottest_first(points: &mut [MapPoint]) {
    points.sort_by(|a, b| {
        b.temperature_c
            .total_cmp(&a.temperature_c)
            .then_with(|| a.name.cmp(b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{CITIES, STATES};

    #[test]
    fn test_splits_and_drops_absent_readings() {
        let readings = vec![
            Reading::new(&STATES[0], Some(20.0)),
            Reading::new(&CITIES[0], Some(5.0)),
            Reading::new(&STATES[1], None),
            Reading::new(&CITIES[1], None),
            Reading::new(&STATES[2], Some(31.0)),
        ];
        let snapshot = Snapshot::from_readings(readings);

        let states: Vec<_> = snapshot.states.iter().map(|p| p.name).collect();
        assert_eq!(states, ["AZ", "AL"]);
        assert_eq!(snapshot.cities.len(), 1);
        assert_eq!(snapshot.cities[0].name, "New York");
        assert_eq!(snapshot.dropped, ["AK", "Los Angeles"]);
        assert!(snapshot.ensure_data().is_ok());
    }

    #[test]
    fn test_display_set_never_holds_absent_readings() {
        let readings = STATES
            .iter()
            .chain(CITIES.iter())
            .enumerate()
            .map(|(i, l)| Reading::new(l, (i % 3 != 0).then_some(i as f64)))
            .collect::<Vec<_>>();
        let total = readings.len();
        let absent = readings.iter().filter(|r| r.temperature.is_none()).count();

        let snapshot = Snapshot::from_readings(readings);
        assert_eq!(snapshot.dropped.len(), absent);
        assert_eq!(snapshot.states.len() + snapshot.cities.len(), total - absent);
    }

    #[test]
    fn test_no_states_means_no_data() {
        let snapshot = Snapshot::from_readings(vec![
            Reading::new(&STATES[0], None),
            Reading::new(&CITIES[0], Some(12.0)),
        ]);
        assert!(matches!(snapshot.ensure_data(), Err(HeatmapError::NoData)));
    }
}
