use crate::notice::{parse, ContentEntry, Contents, NoticeRecord};
use thiserror::Error;

/// Ordered notices. Load order is the display order and the index space used
/// by navigation, so records are never reordered, inserted or removed.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<NoticeRecord>,
    parsed: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("notice contents were already replaced")]
    AlreadyParsed,
    #[error("expected parsed contents for {expected} notices, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl RecordStore {
    pub fn new(records: Vec<NoticeRecord>) -> Self {
        let parsed = !records.is_empty()
            && records
                .iter()
                .all(|r| matches!(r.contents, Contents::Parsed(_)));
        Self { records, parsed }
    }

    /// # Panics
    ///
    /// If `index` is out of range. Indices come from the list view, which only
    /// hands out valid ones; use [`Self::try_get`] at untrusted boundaries.
    #[track_caller]
    pub fn get(&self, index: usize) -> &NoticeRecord {
        &self.records[index]
    }

    pub fn try_get(&self, index: usize) -> Option<&NoticeRecord> {
        self.records.get(index)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoticeRecord> {
        self.records.iter()
    }

    /// Swaps every record's contents for its parsed form. Allowed once.
    pub fn replace_all_contents(
        &mut self,
        parsed_by_index: Vec<Vec<ContentEntry>>,
    ) -> Result<(), StoreError> {
        if self.parsed {
            return Err(StoreError::AlreadyParsed);
        }
        if parsed_by_index.len() != self.records.len() {
            return Err(StoreError::LengthMismatch {
                expected: self.records.len(),
                actual: parsed_by_index.len(),
            });
        }
        for (record, parsed) in self.records.iter_mut().zip(parsed_by_index) {
            record.contents = Contents::Parsed(parsed);
        }
        self.parsed = true;
        Ok(())
    }

    /// Runs the content parser over every record.
    pub fn parse_contents(&mut self) -> Result<(), StoreError> {
        if self.parsed {
            return Err(StoreError::AlreadyParsed);
        }
        let parsed = self
            .records
            .iter()
            .map(|record| match &record.contents {
                Contents::Raw(raw) => parse(raw),
                Contents::Parsed(parsed) => parsed.clone(),
            })
            .collect();
        self.replace_all_contents(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> RecordStore {
        RecordStore::new(vec![
            NoticeRecord::new("A", "d1", vec![json!("first")], "office"),
            NoticeRecord::new("B", "d2", vec![json!("- one"), json!("- two")], "desk"),
        ])
    }

    #[test]
    fn indexed_lookup_keeps_load_order() {
        let store = store();
        assert_eq!(store.count(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.get(0).title, "A");
        assert_eq!(store.get(1).date, "d2");
        assert!(store.try_get(2).is_none());
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        store().get(5);
    }

    #[test]
    fn empty_store() {
        let store = RecordStore::new(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.count(), 0);
        assert!(!store.is_parsed());
    }

    #[test]
    fn parse_contents_replaces_every_record() {
        let mut store = store();
        assert!(!store.is_parsed());
        store.parse_contents().unwrap();
        assert!(store.is_parsed());
        assert_eq!(
            store.get(0).contents.parsed(),
            Some(&[ContentEntry::text("first")][..])
        );
        assert_eq!(store.get(1).contents.parsed().map(<[_]>::len), Some(2));
        assert_eq!(store.get(1).title, "B");
    }

    #[test]
    fn replace_is_one_time() {
        let mut store = store();
        store
            .replace_all_contents(vec![Vec::new(), Vec::new()])
            .unwrap();
        assert_eq!(
            store.replace_all_contents(vec![Vec::new(), Vec::new()]),
            Err(StoreError::AlreadyParsed)
        );
        assert_eq!(store.parse_contents(), Err(StoreError::AlreadyParsed));
    }

    #[test]
    fn replace_rejects_wrong_length() {
        let mut store = store();
        assert_eq!(
            store.replace_all_contents(vec![Vec::new()]),
            Err(StoreError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert!(!store.is_parsed());
        assert!(matches!(store.get(0).contents, Contents::Raw(_)));
    }
}
