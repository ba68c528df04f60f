use crate::cache::{load_cache, save_cache, set_aside};
use crate::Result;
use phonemic_core::LanguageRecord;
use phonemic_store::{EditSession, LanguageStore, NewLanguage};
use std::path::{Path, PathBuf};

/// Language store plus the cache file it is mirrored to.
///
/// Every mutating call writes the whole collection back to the cache.
/// Without a cache path the catalog is purely in-memory.
#[derive(Debug)]
pub struct Catalog {
    store: LanguageStore,
    cache: Option<PathBuf>,
}

impl Catalog {
    /// Load from the cache, falling back to the seed dataset when the cache
    /// is missing or unreadable.
    ///
    /// An unreadable cache is moved aside before anything can be saved over
    /// it. If that move fails the catalog stays in-memory only.
    pub fn open(cache: Option<&Path>) -> Self {
        let Some(path) = cache else {
            return Self::in_memory(LanguageStore::seeded());
        };
        let mut cache = Some(path.to_path_buf());
        let store = match load_cache(path) {
            Ok(Some(store)) => {
                tracing::info!(event = "catalog_from_cache", languages = store.len());
                store
            }
            Ok(None) => LanguageStore::seeded(),
            Err(e) => {
                tracing::warn!(event = "cache_unreadable", path = %path.display(), error = %e);
                match set_aside(path) {
                    Ok(backup) => {
                        tracing::warn!(event = "cache_set_aside", backup = %backup.display());
                    }
                    Err(e) => {
                        tracing::error!(event = "cache_set_aside_failed", error = %e);
                        cache = None;
                    }
                }
                LanguageStore::seeded()
            }
        };
        Self { store, cache }
    }

    pub fn in_memory(store: LanguageStore) -> Self {
        Self { store, cache: None }
    }

    pub fn store(&self) -> &LanguageStore {
        &self.store
    }

    pub fn records(&self) -> &[LanguageRecord] {
        self.store.records()
    }

    pub fn cache_path(&self) -> Option<&Path> {
        self.cache.as_deref()
    }

    pub fn add(&mut self, draft: NewLanguage) -> Result<u32> {
        let id = self.store.add(draft)?;
        tracing::info!(event = "language_added", id = id);
        self.persist()?;
        Ok(id)
    }

    pub fn delete(&mut self, id: u32) -> Result<LanguageRecord> {
        let removed = self.store.delete(id)?;
        tracing::info!(event = "language_deleted", id = id, name = %removed.name);
        self.persist()?;
        Ok(removed)
    }

    pub fn edit(&self, id: u32) -> Result<EditSession> {
        Ok(self.store.edit(id)?)
    }

    pub fn save(&mut self, session: EditSession) -> Result<()> {
        let id = session.id();
        self.store.save(session)?;
        tracing::info!(event = "language_saved", id = id);
        self.persist()
    }

    /// Add several drafts and persist once. Returns the new ids.
    pub fn add_many(&mut self, drafts: Vec<NewLanguage>) -> Result<Vec<u32>> {
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            ids.push(self.store.add(draft)?);
        }
        if !ids.is_empty() {
            self.persist()?;
        }
        Ok(ids)
    }

    /// Drop all changes and go back to the seed dataset.
    pub fn reset(&mut self) -> Result<()> {
        self.store = LanguageStore::seeded();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        match &self.cache {
            Some(path) => save_cache(path, &self.store),
            None => Ok(()),
        }
    }
}
