//! Source of cleaned observation sets.

use crate::types::{BlendError, Observation};
use std::collections::BTreeMap;

/// Supplier of cleaned distillation observations keyed by liquid id.
///
/// Implementations own all I/O. Observations they return must already have
/// the initial boiling point stored as recovery 0 and rows without a
/// temperature removed.
pub trait ProfileStore {
    /// Observations for `liquid_id`, ordered by ascending temperature.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::UnknownLiquid`] if there is no data for `liquid_id`.
    fn observations(&self, liquid_id: &str) -> Result<Vec<Observation>, BlendError>;

    /// Sorted ids of all liquids with data.
    fn liquid_ids(&self) -> Vec<String>;
}

impl<S: ProfileStore + ?Sized> ProfileStore for &S {
    fn observations(&self, liquid_id: &str) -> Result<Vec<Observation>, BlendError> {
        (**self).observations(liquid_id)
    }

    fn liquid_ids(&self) -> Vec<String> {
        (**self).liquid_ids()
    }
}

/// Profile store held entirely in memory.
///
/// # Example
///
/// ```
/// use blend_core::distillation::{InMemoryProfileStore, ProfileStore};
///
/// let store = InMemoryProfileStore::new()
///     .with_profile("AHS", &[(0, 36.0), (50, 300.0), (90, 540.0)]);
///
/// assert_eq!(store.liquid_ids(), vec!["AHS".to_string()]);
/// assert_eq!(store.observations("AHS").unwrap().len(), 3);
/// assert!(store.observations("XYZ").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: BTreeMap<String, Vec<Observation>>,
}

impl InMemoryProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation under its liquid id.
    pub fn insert(&mut self, observation: Observation) {
        self.profiles
            .entry(observation.liquid_id.clone())
            .or_default()
            .push(observation);
    }

    /// Builder-style helper adding `(recovery, temperature)` rows for `liquid_id`.
    #[must_use]
    pub fn with_profile(mut self, liquid_id: &str, rows: &[(u32, f64)]) -> Self {
        for &(recovery, temperature) in rows {
            self.insert(Observation::new(liquid_id, recovery, temperature));
        }
        self
    }

    /// Number of liquids with data.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if the store holds no liquids.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Total number of observations across all liquids.
    pub fn observation_count(&self) -> usize {
        self.profiles.values().map(Vec::len).sum()
    }
}

impl Extend<Observation> for InMemoryProfileStore {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, iter: I) {
        for observation in iter {
            self.insert(observation);
        }
    }
}

impl FromIterator<Observation> for InMemoryProfileStore {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn observations(&self, liquid_id: &str) -> Result<Vec<Observation>, BlendError> {
        let mut observations = self
            .profiles
            .get(liquid_id)
            .filter(|rows| !rows.is_empty())
            .cloned()
            .ok_or_else(|| BlendError::UnknownLiquid(liquid_id.to_string()))?;
        observations.sort_by(|a, b| {
            a.temperature
                .partial_cmp(&b.temperature)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(observations)
    }

    fn liquid_ids(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observations_sorted_by_temperature() {
        let store = InMemoryProfileStore::new().with_profile("A", &[(50, 200.0), (0, 40.0)]);
        let obs = store.observations("A").unwrap();
        assert_eq!(obs[0].recovery, 0);
        assert_eq!(obs[1].recovery, 50);
    }

    #[test]
    fn test_unknown_liquid() {
        let store = InMemoryProfileStore::new();
        assert_eq!(
            store.observations("ZZZ").unwrap_err(),
            BlendError::UnknownLiquid("ZZZ".to_string())
        );
    }

    #[test]
    fn test_liquid_ids_sorted() {
        let store = InMemoryProfileStore::new()
            .with_profile("WCS", &[(0, 30.0)])
            .with_profile("AHS", &[(0, 36.0)]);
        assert_eq!(store.liquid_ids(), vec!["AHS".to_string(), "WCS".to_string()]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let store: InMemoryProfileStore = vec![
            Observation::new("A", 0, 30.0),
            Observation::new("A", 10, 60.0),
            Observation::new("B", 0, 35.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.len(), 2);
        assert_eq!(store.observation_count(), 3);
    }

    #[test]
    fn test_store_by_reference() {
        fn count<S: ProfileStore>(store: S) -> usize {
            store.liquid_ids().len()
        }
        let store = InMemoryProfileStore::new().with_profile("A", &[(0, 30.0)]);
        assert_eq!(count(&store), 1);
    }
}
