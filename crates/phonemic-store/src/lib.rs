//! In-memory collection of language records with id assignment, selection
//! and copy-on-write edit sessions.

use phonemic_core::{LanguageRecord, Mapping};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub mod seed;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown language id {0}")]
    UnknownLanguage(u32),
    #[error("language {id} has no mapping #{index}")]
    UnknownMapping { id: u32, index: usize },
    #[error("language name must not be empty")]
    EmptyName,
    #[error("unknown mapping field `{0}` (expected surface, elementary or notes)")]
    UnknownField(String),
}

/// Split a comma/whitespace separated list, dropping empty items.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like `split_list`, keeping only the first occurrence of each item.
pub fn split_set(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in split_list(text) {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Coordinates end up in the JSON cache, which has no NaN or infinity.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(event = "coordinate_not_finite", value = %value);
        0.0
    }
}

/// Form input for a new language; list fields are free text.
#[derive(Debug, Clone, Default)]
pub struct NewLanguage {
    pub name: String,
    pub family: String,
    pub iso_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub surface_phonemes: String,
    pub elementary_segments: String,
    pub suprasegmentals: String,
    pub features: u32,
    pub dialect_notes: Option<String>,
}

impl NewLanguage {
    fn into_record(self, id: u32) -> LanguageRecord {
        let mut rec = LanguageRecord::new(id, self.name.trim());
        rec.family = self.family.trim().to_string();
        rec.iso_code = self.iso_code.filter(|s| !s.trim().is_empty());
        rec.coordinates = (finite_or_zero(self.latitude), finite_or_zero(self.longitude));
        rec.surface_phonemes = split_list(&self.surface_phonemes);
        rec.elementary_segments = split_set(&self.elementary_segments);
        rec.suprasegmentals = split_set(&self.suprasegmentals);
        rec.features = self.features;
        rec.dialect_notes = self.dialect_notes.filter(|s| !s.trim().is_empty());
        rec
    }
}

/// Serialized form of a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub last_id: u32,
    pub languages: Vec<LanguageRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct LanguageStore {
    records: Vec<LanguageRecord>,
    /// highest id ever handed out; ids are never reused
    last_id: u32,
    selected: Option<u32>,
    revision: u64,
}

impl LanguageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::from_records(seed::languages())
    }

    pub fn from_records(records: Vec<LanguageRecord>) -> Self {
        let last_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            records,
            last_id,
            selected: None,
            revision: 0,
        }
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut store = Self::from_records(snapshot.languages);
        store.last_id = store.last_id.max(snapshot.last_id);
        store
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            last_id: self.last_id,
            languages: self.records.clone(),
        }
    }

    pub fn records(&self) -> &[LanguageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: u32) -> Option<&LanguageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Look up by numeric id or case-insensitive name.
    pub fn find(&self, query: &str) -> Option<&LanguageRecord> {
        let query = query.trim();
        if let Ok(id) = query.parse::<u32>() {
            if let Some(rec) = self.get(id) {
                return Some(rec);
            }
        }
        let wanted = query.to_lowercase();
        self.records.iter().find(|r| r.name.to_lowercase() == wanted)
    }

    pub fn next_id(&self) -> u32 {
        self.last_id + 1
    }

    pub fn add(&mut self, draft: NewLanguage) -> Result<u32, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let id = self.next_id();
        self.records.push(draft.into_record(id));
        self.last_id = id;
        self.touch();
        Ok(id)
    }

    /// Deleting the selected language also clears the selection.
    pub fn delete(&mut self, id: u32) -> Result<LanguageRecord, StoreError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::UnknownLanguage(id))?;
        let removed = self.records.remove(pos);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.touch();
        Ok(removed)
    }

    pub fn select(&mut self, id: u32) -> Result<(), StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::UnknownLanguage(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected(&self) -> Option<&LanguageRecord> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Start editing a private copy of the record.
    pub fn edit(&self, id: u32) -> Result<EditSession, StoreError> {
        let rec = self.get(id).ok_or(StoreError::UnknownLanguage(id))?;
        Ok(EditSession { draft: rec.clone() })
    }

    /// Replace the stored record with the session's draft.
    pub fn save(&mut self, session: EditSession) -> Result<(), StoreError> {
        let id = session.draft.id;
        if session.draft.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::UnknownLanguage(id))?;
        *slot = session.draft;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingField {
    Surface,
    Elementary,
    Notes,
}

impl FromStr for MappingField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "surface" => Ok(MappingField::Surface),
            "elementary" => Ok(MappingField::Elementary),
            "notes" | "rule" => Ok(MappingField::Notes),
            other => Err(StoreError::UnknownField(other.to_string())),
        }
    }
}

/// Draft of one record. Dropping it discards the changes; only
/// `LanguageStore::save` makes them visible.
#[derive(Debug, Clone)]
pub struct EditSession {
    draft: LanguageRecord,
}

impl EditSession {
    pub fn id(&self) -> u32 {
        self.draft.id
    }

    pub fn draft(&self) -> &LanguageRecord {
        &self.draft
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.trim().to_string();
    }

    pub fn set_family(&mut self, family: &str) {
        self.draft.family = family.trim().to_string();
    }

    pub fn set_coordinates(&mut self, latitude: f64, longitude: f64) {
        self.draft.coordinates = (finite_or_zero(latitude), finite_or_zero(longitude));
    }

    pub fn set_surface_phonemes(&mut self, text: &str) {
        self.draft.surface_phonemes = split_list(text);
    }

    pub fn set_elementary_segments(&mut self, text: &str) {
        self.draft.elementary_segments = split_set(text);
    }

    pub fn set_suprasegmentals(&mut self, text: &str) {
        self.draft.suprasegmentals = split_set(text);
    }

    pub fn set_dialect_notes(&mut self, notes: &str) {
        let notes = notes.trim();
        self.draft.dialect_notes = (!notes.is_empty()).then(|| notes.to_string());
    }

    pub fn add_mapping(&mut self, mapping: Mapping) {
        self.draft.surface_mappings.push(mapping);
    }

    pub fn update_mapping(
        &mut self,
        index: usize,
        field: MappingField,
        value: &str,
    ) -> Result<(), StoreError> {
        let id = self.draft.id;
        let mapping = self
            .draft
            .surface_mappings
            .get_mut(index)
            .ok_or(StoreError::UnknownMapping { id, index })?;
        let slot = match field {
            MappingField::Surface => &mut mapping.surface,
            MappingField::Elementary => &mut mapping.elementary,
            MappingField::Notes => &mut mapping.notes,
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn remove_mapping(&mut self, index: usize) -> Result<Mapping, StoreError> {
        if index >= self.draft.surface_mappings.len() {
            return Err(StoreError::UnknownMapping {
                id: self.draft.id,
                index,
            });
        }
        Ok(self.draft.surface_mappings.remove(index))
    }
}
