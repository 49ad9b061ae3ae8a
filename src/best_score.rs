//! Best score record
//!
//! A single integer kept under one storage key as base-10 text.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, StoreError};

/// Best whole score reached on this device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub value: u64,
}

impl BestScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "driftLaneBest";

    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Parse stored text; anything missing or malformed counts as zero
    pub fn parse(raw: Option<&str>) -> Self {
        let value = raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0);
        Self { value }
    }

    /// Load from storage
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let raw = store.get(Self::STORAGE_KEY);
        let best = Self::parse(raw.as_deref());
        if raw.is_some() {
            log::info!("Loaded best score: {}", best.value);
        } else {
            log::info!("No best score found, starting fresh");
        }
        best
    }

    /// Fold a finished round in; returns true on a new record
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    /// Write the current value to storage
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        store.set(Self::STORAGE_KEY, &self.value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_parse_defaults_to_zero() {
        assert_eq!(BestScore::parse(None).value, 0);
        assert_eq!(BestScore::parse(Some("")).value, 0);
        assert_eq!(BestScore::parse(Some("abc")).value, 0);
        assert_eq!(BestScore::parse(Some("-4")).value, 0);
        assert_eq!(BestScore::parse(Some("12.5")).value, 0);
        assert_eq!(BestScore::parse(Some("  88\n")).value, 88);
    }

    #[test]
    fn test_load_and_save() {
        let mut store = MemoryStore::new();
        assert_eq!(BestScore::load(&store).value, 0);

        let mut best = BestScore::default();
        assert!(best.record(140));
        best.save(&mut store).unwrap();
        assert_eq!(store.get(BestScore::STORAGE_KEY).as_deref(), Some("140"));
        assert_eq!(BestScore::load(&store), BestScore::new(140));
    }

    #[test]
    fn test_record_keeps_maximum() {
        let mut best = BestScore::new(50);
        assert!(!best.record(20));
        assert!(!best.record(50));
        assert_eq!(best.value, 50);
        assert!(best.record(51));
        assert_eq!(best.value, 51);
    }

    proptest! {
        #[test]
        fn prop_best_is_running_max(scores in proptest::collection::vec(0u64..100_000, 0..40)) {
            let mut best = BestScore::default();
            let mut prev = 0;
            for &s in &scores {
                best.record(s);
                prop_assert!(best.value >= prev);
                prev = best.value;
            }
            prop_assert_eq!(best.value, scores.iter().copied().max().unwrap_or(0));
        }
    }
}
