use crate::Result;
use color_eyre::eyre::{bail, WrapErr};
use phonemic_core::LanguageRecord;
use phonemic_store::{LanguageStore, StoreSnapshot};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const CACHE_FILE_NAME: &str = "phonemic-languages.json";

/// `$CACHE_DIR/phonemic/phonemic-languages.json`, or the working directory
/// when the platform has no cache dir.
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("phonemic"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_FILE_NAME)
}

/// Either the current snapshot object or a bare array of records.
#[derive(Deserialize)]
#[serde(untagged)]
enum CacheFile {
    Snapshot(StoreSnapshot),
    Records(Vec<LanguageRecord>),
}

pub fn load_cache(path: &Path) -> Result<Option<LanguageStore>> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path).wrap_err_with(|| format!("open cache {}", path.display()))?;
    let parsed: CacheFile = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("parse cache {}", path.display()))?;
    let store = match parsed {
        CacheFile::Snapshot(s) => LanguageStore::from_snapshot(s),
        CacheFile::Records(r) => LanguageStore::from_records(r),
    };
    Ok(Some(store))
}

/// Write through a temp file in the same directory, then rename over the target.
///
/// serde_json writes NaN and infinity as `null`, which would not load back,
/// so such a store is refused and the existing file is left alone.
pub fn save_cache(path: &Path, store: &LanguageStore) -> Result<()> {
    if let Some(r) = store
        .records()
        .iter()
        .find(|r| !(r.coordinates.0.is_finite() && r.coordinates.1.is_finite()))
    {
        bail!("language #{} has non-finite coordinates; cache not written", r.id);
    }
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, &store.snapshot())?;
        writer.flush()?;
    }
    temp_file
        .persist(path)
        .wrap_err_with(|| format!("write cache {}", path.display()))?;
    tracing::debug!(event = "cache_saved", path = %path.display(), languages = store.len());
    Ok(())
}

/// Move an unreadable cache out of the way (`<name>.corrupt`, `<name>.corrupt.1`, ...)
/// so the next save cannot overwrite it. Returns the backup path.
pub fn set_aside(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| CACHE_FILE_NAME.to_string());
    let mut backup = path.with_file_name(format!("{file_name}.corrupt"));
    let mut n = 1;
    while backup.exists() {
        backup = path.with_file_name(format!("{file_name}.corrupt.{n}"));
        n += 1;
    }
    fs::rename(path, &backup)
        .wrap_err_with(|| format!("move {} to {}", path.display(), backup.display()))?;
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cache_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_cache(&dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CACHE_FILE_NAME);
        let mut store = LanguageStore::seeded();
        store.delete(3).unwrap();
        save_cache(&path, &store).unwrap();

        let loaded = load_cache(&path).unwrap().unwrap();
        assert_eq!(loaded.records(), store.records());
        assert_eq!(loaded.next_id(), 4);
    }

    #[test]
    fn bare_record_array_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CACHE_FILE_NAME);
        std::fs::write(
            &path,
            r#"[{"id": 5, "name": "Toy", "elementarySegments": ["a"],
                "surfaceMappings": [{"surface": "a", "elementary": "a", "rule": "x"}]}]"#,
        )
        .unwrap();
        let loaded = load_cache(&path).unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.next_id(), 6);
        assert_eq!(loaded.records()[0].surface_mappings[0].notes, "x");
    }

    #[test]
    fn non_finite_store_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CACHE_FILE_NAME);
        save_cache(&path, &LanguageStore::seeded()).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let mut bad = LanguageRecord::new(4, "Bad");
        bad.coordinates = ("NaN".parse().unwrap(), 1.0);
        let mut records = LanguageStore::seeded().records().to_vec();
        records.push(bad);
        let store = LanguageStore::from_records(records);

        assert!(save_cache(&path, &store).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
        assert_eq!(load_cache(&path).unwrap().unwrap().len(), 3);
    }

    #[test]
    fn set_aside_never_clobbers_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CACHE_FILE_NAME);
        std::fs::write(&path, "first").unwrap();
        let first = set_aside(&path).unwrap();
        std::fs::write(&path, "second").unwrap();
        let second = set_aside(&path).unwrap();

        assert!(!path.exists());
        assert_ne!(first, second);
        assert_eq!(std::fs::read_to_string(first).unwrap(), "first");
        assert_eq!(std::fs::read_to_string(second).unwrap(), "second");
    }

    #[test]
    fn corrupt_cache_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CACHE_FILE_NAME);
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_cache(&path).is_err());
    }
}
