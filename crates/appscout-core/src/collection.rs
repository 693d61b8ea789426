use serde::{Deserialize, Serialize};

use crate::error::CollectionError;
use crate::record::AppRecord;

/// Results the user has chosen to keep across searches.
///
/// Only grows through [`extend`](Self::extend). It shrinks only on an
/// explicit [`remove`](Self::remove) or a confirmed [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccumulatedCollection {
    records: Vec<AppRecord>,
}

impl AccumulatedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of search results, keeping their order.
    pub fn extend(&mut self, records: impl IntoIterator<Item = AppRecord>) {
        self.records.extend(records);
    }

    /// Remove the entry at `index`; later entries shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<AppRecord, CollectionError> {
        if index >= self.records.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Empty the collection if the user confirmed. Returns whether anything
    /// was cleared.
    pub fn clear(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        let had_records = !self.records.is_empty();
        self.records.clear();
        had_records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AppRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppRecord> {
        self.records.iter()
    }
}

impl From<Vec<AppRecord>> for AccumulatedCollection {
    fn from(records: Vec<AppRecord>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> AppRecord {
        AppRecord::new(name, format!("https://apps.apple.com/{name}"), "com.test", "Test")
    }

    fn names(collection: &AccumulatedCollection) -> Vec<&str> {
        collection.iter().map(|r| r.app_name.as_str()).collect()
    }

    #[test]
    fn test_extend_preserves_search_order() {
        let mut collection = AccumulatedCollection::new();
        collection.extend(vec![record("a1"), record("a2")]);
        collection.extend(vec![record("b1"), record("b2"), record("b3")]);

        assert_eq!(collection.len(), 5);
        assert_eq!(names(&collection), ["a1", "a2", "b1", "b2", "b3"]);
    }

    #[test]
    fn test_extend_keeps_duplicates() {
        let mut collection = AccumulatedCollection::new();
        collection.extend(vec![record("same")]);
        collection.extend(vec![record("same")]);

        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut collection = AccumulatedCollection::from(vec![
            record("a"),
            record("b"),
            record("c"),
            record("d"),
        ]);

        let removed = collection.remove(1).unwrap();

        assert_eq!(removed.app_name, "b");
        assert_eq!(names(&collection), ["a", "c", "d"]);
    }

    #[test]
    fn test_successive_removals_use_fresh_positions() {
        let mut collection =
            AccumulatedCollection::from(vec![record("a"), record("b"), record("c")]);

        // Removing position 0 twice takes "a" then "b", never "c".
        collection.remove(0).unwrap();
        collection.remove(0).unwrap();

        assert_eq!(names(&collection), ["c"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut collection = AccumulatedCollection::from(vec![record("a")]);

        assert_eq!(
            collection.remove(1),
            Err(CollectionError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut collection = AccumulatedCollection::from(vec![record("a"), record("b")]);

        assert!(!collection.clear(false));
        assert_eq!(collection.len(), 2);

        assert!(collection.clear(true));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let collection = AccumulatedCollection::from(vec![record("a")]);
        let json = serde_json::to_string(&collection).unwrap();

        assert!(json.starts_with('['));
        let back: AccumulatedCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, collection);
    }
}
