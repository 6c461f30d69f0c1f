//! Bulk import and export of the shop list.
//!
//! Files are JSON arrays of `{ name, mcc, mccMir? }`. File I/O is async;
//! parsing and merging are synchronous and happen after the read completes.

use super::Directory;
use crate::error::{ShopError, ShopResult, StorageError};
use crate::storage::ShopStore;
use crate::types::{validate_entries, ShopEntry, ShopRecord};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Default name of the exported file.
pub const EXPORT_FILE_NAME: &str = "shops.json";

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries appended to the store.
    pub added: usize,
    /// Entries skipped because `(name, mcc)` was already present.
    pub skipped: usize,
}

impl<S: ShopStore> Directory<S> {
    /// Merge shops from the text of an import file.
    ///
    /// An entry is appended unless a stored shop (or one appended earlier in
    /// the same import) has the same `(name, mcc)`. Any malformed entry
    /// rejects the whole file.
    pub fn import_json(&self, content: &str) -> ShopResult<ImportSummary> {
        let parsed: Value =
            serde_json::from_str(content).map_err(|e| ShopError::Parse(e.to_string()))?;

        let Value::Array(values) = parsed else {
            return Err(ShopError::Format);
        };
        if values.is_empty() {
            return Err(ShopError::EmptyImport);
        }

        let entries = validate_entries(&values).map_err(ShopError::InvalidRecords)?;

        let mut records = self.store.load()?;
        let mut summary = ImportSummary {
            added: 0,
            skipped: 0,
        };

        for entry in entries {
            if records.iter().any(|r| r.same_identity(&entry.name, &entry.mcc)) {
                summary.skipped += 1;
            } else {
                records.push(entry.into_record());
                summary.added += 1;
            }
        }

        self.save_all(&records)?;
        info!(added = summary.added, skipped = summary.skipped, "imported shops");
        Ok(summary)
    }

    /// Read `path` and import its contents.
    pub async fn import_file(&self, path: &Path) -> ShopResult<ImportSummary> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ShopError::Parse(e.to_string()))?;

        self.import_json(&content)
    }

    /// The whole list as a pretty-printed export document.
    pub fn export_json(&self) -> ShopResult<String> {
        let records = self.store.load()?;
        if records.is_empty() {
            return Err(ShopError::EmptyExport);
        }

        Ok(render_export(&records)?)
    }

    /// Write the export document to `path`. Returns the number of shops written.
    pub async fn export_file(&self, path: &Path) -> ShopResult<usize> {
        let records = self.store.load()?;
        if records.is_empty() {
            return Err(ShopError::EmptyExport);
        }

        let content = render_export(&records)?;
        tokio::fs::write(path, content)
            .await
            .map_err(|e| StorageError::SaveFailed(e.to_string()))?;

        info!(count = records.len(), file = %path.display(), "exported shops");
        Ok(records.len())
    }
}

fn render_export(records: &[ShopRecord]) -> serde_json::Result<String> {
    let entries: Vec<ShopEntry> = records.iter().map(ShopEntry::from).collect();
    serde_json::to_string_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::HashSet;

    fn identities(records: &[ShopRecord]) -> HashSet<(String, String, Option<String>)> {
        records
            .iter()
            .map(|r| (r.name.clone(), r.mcc.clone(), r.mcc_mir.clone()))
            .collect()
    }

    fn seeded() -> Directory<MemoryStore> {
        let dir = Directory::new(MemoryStore::new());
        dir.add("Cafe X", "5812", None).unwrap();
        dir.add("Pharmacy", "5912", Some("5122")).unwrap();
        dir
    }

    #[test]
    fn test_export_format() {
        let dir = seeded();
        let json = dir.export_json().unwrap();
        let expected = r#"[
  {
    "name": "Cafe X",
    "mcc": "5812"
  },
  {
    "name": "Pharmacy",
    "mcc": "5912",
    "mccMir": "5122"
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_export_empty_fails() {
        let dir = Directory::new(MemoryStore::new());
        assert!(matches!(dir.export_json(), Err(ShopError::EmptyExport)));
    }

    #[test]
    fn test_export_then_import_into_empty_store() {
        let source = seeded();
        let exported = source.export_json().unwrap();

        let target = Directory::new(MemoryStore::new());
        let summary = target.import_json(&exported).unwrap();
        assert_eq!(summary, ImportSummary { added: 2, skipped: 0 });
        assert_eq!(
            identities(&target.list().unwrap()),
            identities(&source.list().unwrap())
        );
    }

    #[test]
    fn test_import_is_idempotent() {
        let dir = Directory::new(MemoryStore::new());
        let file = r#"[{"name":"A","mcc":"1"},{"name":"B","mcc":"2"}]"#;

        dir.import_json(file).unwrap();
        let after_first = dir.list().unwrap();

        let summary = dir.import_json(file).unwrap();
        assert_eq!(summary, ImportSummary { added: 0, skipped: 2 });
        assert_eq!(dir.list().unwrap(), after_first);
    }

    #[test]
    fn test_import_merges_after_existing() {
        let dir = seeded();
        let summary = dir
            .import_json(r#"[{"name":"Cafe X","mcc":"5812"},{"name":"Cafe X","mcc":"5814"}]"#)
            .unwrap();
        assert_eq!(summary, ImportSummary { added: 1, skipped: 1 });

        let mccs: Vec<_> = dir.list().unwrap().into_iter().map(|r| r.mcc).collect();
        assert_eq!(mccs, vec!["5812", "5912", "5814"]);
    }

    #[test]
    fn test_import_demo_file() {
        let dir = Directory::new(MemoryStore::new());
        let summary = dir.import_json(include_str!("../../demos/shops.json")).unwrap();
        assert_eq!(summary.added, 3);
        assert_eq!(dir.list().unwrap()[1].mcc_mir.as_deref(), Some("5122"));
    }

    #[test]
    fn test_import_collapses_duplicates_within_file() {
        let dir = Directory::new(MemoryStore::new());
        let summary = dir
            .import_json(r#"[{"name":"A","mcc":"1"},{"name":"A","mcc":"1"}]"#)
            .unwrap();
        assert_eq!(summary, ImportSummary { added: 1, skipped: 1 });
    }

    #[test]
    fn test_import_errors_leave_store_unchanged() {
        let dir = seeded();
        let before = dir.list().unwrap();

        assert!(matches!(dir.import_json("not json"), Err(ShopError::Parse(_))));
        assert!(matches!(
            dir.import_json(r#"{"name":"A","mcc":"1"}"#),
            Err(ShopError::Format)
        ));
        assert!(matches!(dir.import_json("[]"), Err(ShopError::EmptyImport)));

        match dir.import_json(r#"[{"name":"A","mcc":"1"},{"name":"B"},42]"#) {
            Err(ShopError::InvalidRecords(issues)) => {
                let indexes: Vec<_> = issues.iter().map(|i| i.index).collect();
                assert_eq!(indexes, vec![1, 2]);
            }
            other => panic!("expected invalid records, got {:?}", other),
        }

        assert_eq!(dir.list().unwrap(), before);
    }

    #[tokio::test]
    async fn test_file_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(EXPORT_FILE_NAME);

        let source = seeded();
        assert_eq!(source.export_file(&path).await.unwrap(), 2);

        let target = Directory::new(MemoryStore::new());
        let summary = target.import_file(&path).await.unwrap();
        assert_eq!(summary.added, 2);
    }

    #[tokio::test]
    async fn test_import_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = Directory::new(MemoryStore::new());
        let result = dir.import_file(&tmp.path().join("nope.json")).await;
        assert!(matches!(result, Err(ShopError::Parse(_))));
    }
}
