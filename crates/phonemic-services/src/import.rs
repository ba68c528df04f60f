use crate::catalog::Catalog;
use crate::Result;
use phonemic_domain::ImportSummary;
use phonemic_import_csv::{read_csv_file, ColumnMapping};
use std::path::Path;

/// Read a CSV file and add every named row to the catalog.
pub fn import_csv(catalog: &mut Catalog, path: &Path, mapping: &ColumnMapping) -> Result<ImportSummary> {
    let parsed = read_csv_file(path, mapping)?;
    let skipped = parsed.skipped.len();
    let rows = parsed.rows;
    let ids = catalog.add_many(parsed.drafts)?;
    tracing::info!(
        event = "import_done",
        path = %path.display(),
        rows = rows,
        created = ids.len(),
        skipped = skipped
    );
    Ok(ImportSummary {
        rows,
        created: ids.len(),
        skipped,
        ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonemic_store::LanguageStore;
    use std::collections::BTreeMap;

    #[test]
    fn imports_named_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        std::fs::write(
            &path,
            "language_name,language_family,elementary_segments\nToy,Constructed,\"a k\"\n,Nobody,a\nOther,,i\n",
        )
        .unwrap();

        let mut catalog = Catalog::in_memory(LanguageStore::seeded());
        let summary = import_csv(&mut catalog, &path, &ColumnMapping::default()).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.created, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.ids, vec![4, 5]);
        let toy = catalog.store().get(4).unwrap();
        assert_eq!(toy.elementary_segments, vec!["a", "k"]);
        assert_eq!(toy.features, 0);
        assert!(toy.surface_mappings.is_empty());
    }

    #[test]
    fn custom_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        std::fs::write(&path, "Language,Segments\nToy,\"a i\"\n").unwrap();

        let overrides = BTreeMap::from([
            ("name".to_string(), "Language".to_string()),
            ("elementary_segments".to_string(), "Segments".to_string()),
        ]);
        let mapping = ColumnMapping::default().with_overrides(&overrides).unwrap();
        let mut catalog = Catalog::in_memory(LanguageStore::new());
        let summary = import_csv(&mut catalog, &path, &mapping).unwrap();
        assert_eq!(summary.created, 1);
        assert_eq!(catalog.records()[0].elementary_segments, vec!["a", "i"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut catalog = Catalog::in_memory(LanguageStore::new());
        let err = import_csv(&mut catalog, Path::new("/nonexistent/in.csv"), &ColumnMapping::default());
        assert!(err.is_err());
    }
}
