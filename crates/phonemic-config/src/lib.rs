use phonemic_core::FeatureState;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "phonemic.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhonemicConfig {
    pub list_limit: Option<usize>,
    pub cache: Option<CacheCfg>,
    pub compare: Option<CompareCfg>,
    pub import: Option<ImportCfg>,
    pub export: Option<ExportCfg>,
    pub schema: Option<SchemaCfg>,
    pub features: Option<FeaturesCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheCfg {
    pub path: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareCfg {
    /// extra functional equivalence pairs, e.g. [["k", "ʔ"], ["t", "ʔ"]]
    pub equivalences: Option<Vec<[String; 2]>>,
    /// drop the built-in k ≡ ʔ pair
    pub no_reference: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportCfg {
    /// field name -> CSV header
    pub columns: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportCfg {
    pub template_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaCfg {
    pub out_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturesCfg {
    /// segment -> feature -> state overrides on top of the reference table
    pub overrides: Option<BTreeMap<String, BTreeMap<String, FeatureState>>>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Other(String),
}

pub fn load_config() -> Result<PhonemicConfig, ConfigError> {
    // Search order: CWD/phonemic.toml, $CONFIG_DIR/phonemic/phonemic.toml
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(p) = std::env::current_dir() {
        candidates.push(p.join(CONFIG_FILE_NAME));
    }
    if let Some(base) = dirs::config_dir() {
        candidates.push(base.join("phonemic").join(CONFIG_FILE_NAME));
    }
    Ok(load_from(&candidates))
}

/// Merge every readable candidate; earlier files win field by field.
pub fn load_from(paths: &[PathBuf]) -> PhonemicConfig {
    let mut merged = PhonemicConfig::default();
    for path in paths {
        if let Some(cfg) = read_file(path) {
            merged = merge(merged, cfg);
        }
    }
    merged
}

fn read_file(path: &Path) -> Option<PhonemicConfig> {
    let s = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<PhonemicConfig>(&s) {
        Ok(cfg) => {
            tracing::debug!(event = "config_loaded", path = %path.display());
            Some(cfg)
        }
        Err(e) => {
            tracing::warn!(event = "config_invalid", path = %path.display(), error = %e);
            None
        }
    }
}

pub fn parse_config(s: &str) -> Result<PhonemicConfig, ConfigError> {
    toml::from_str(s).map_err(|e| ConfigError::Other(e.to_string()))
}

fn merge(mut a: PhonemicConfig, b: PhonemicConfig) -> PhonemicConfig {
    if a.list_limit.is_none() {
        a.list_limit = b.list_limit;
    }
    a.cache = merge_opt(a.cache, b.cache, merge_cache);
    a.compare = merge_opt(a.compare, b.compare, merge_compare);
    a.import = merge_opt(a.import, b.import, merge_import);
    a.export = merge_opt(a.export, b.export, merge_export);
    a.schema = merge_opt(a.schema, b.schema, merge_schema);
    a.features = merge_opt(a.features, b.features, merge_features);
    a
}

fn merge_opt<T: Default>(a: Option<T>, b: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (None, Some(b)) => Some(b),
        (Some(a), None) => Some(a),
        (None, None) => None,
    }
}

fn merge_cache(mut a: CacheCfg, b: CacheCfg) -> CacheCfg {
    if a.path.is_none() {
        a.path = b.path;
    }
    if a.enabled.is_none() {
        a.enabled = b.enabled;
    }
    a
}
fn merge_compare(mut a: CompareCfg, b: CompareCfg) -> CompareCfg {
    if a.equivalences.is_none() {
        a.equivalences = b.equivalences;
    }
    if a.no_reference.is_none() {
        a.no_reference = b.no_reference;
    }
    a
}
fn merge_import(mut a: ImportCfg, b: ImportCfg) -> ImportCfg {
    if a.columns.is_none() {
        a.columns = b.columns;
    }
    a
}
fn merge_export(mut a: ExportCfg, b: ExportCfg) -> ExportCfg {
    if a.template_path.is_none() {
        a.template_path = b.template_path;
    }
    a
}
fn merge_schema(mut a: SchemaCfg, b: SchemaCfg) -> SchemaCfg {
    if a.out_dir.is_none() {
        a.out_dir = b.out_dir;
    }
    a
}
fn merge_features(mut a: FeaturesCfg, b: FeaturesCfg) -> FeaturesCfg {
    if a.overrides.is_none() {
        a.overrides = b.overrides;
    }
    a
}
