pub mod add;
pub mod compare;
pub mod delete;
pub mod edit;
pub mod export_csv;
pub mod features;
pub mod import_csv;
pub mod list;
pub mod overview;
pub mod reset;
pub mod schema;
pub mod validate;

use color_eyre::eyre::{eyre, Result};
use phonemic_config::PhonemicConfig;
use phonemic_core::LanguageRecord;
use phonemic_services::{cache::default_cache_path, Catalog};
use std::path::PathBuf;

/// Settings shared by every subcommand.
pub struct Ctx {
    pub cfg: PhonemicConfig,
    pub cache: Option<PathBuf>,
    pub use_color: bool,
}

impl Ctx {
    pub fn catalog(&self) -> Catalog {
        Catalog::open(self.cache.as_deref())
    }
}

/// `--no-cache` > `--cache` > `[cache]` in phonemic.toml > platform cache dir.
pub fn resolve_cache(cfg: &PhonemicConfig, flag: Option<PathBuf>, no_cache: bool) -> Option<PathBuf> {
    if no_cache {
        return None;
    }
    if flag.is_some() {
        return flag;
    }
    let cache_cfg = cfg.cache.clone().unwrap_or_default();
    if !cache_cfg.enabled.unwrap_or(true) {
        return None;
    }
    Some(cache_cfg.path.map(PathBuf::from).unwrap_or_else(default_cache_path))
}

/// Look a language up by id or (case-insensitive) name.
pub fn find_language<'a>(catalog: &'a Catalog, query: &str) -> Result<&'a LanguageRecord> {
    catalog
        .store()
        .find(query)
        .ok_or_else(|| eyre!("unknown language `{query}`"))
}

pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    println!();
    Ok(())
}

pub fn join(items: &[String]) -> String {
    items.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_resolution_order() {
        let cfg = phonemic_config::parse_config("[cache]\npath = \"from-config.json\"\n").unwrap();
        assert_eq!(resolve_cache(&cfg, Some("flag.json".into()), true), None);
        assert_eq!(
            resolve_cache(&cfg, Some("flag.json".into()), false),
            Some(PathBuf::from("flag.json"))
        );
        assert_eq!(resolve_cache(&cfg, None, false), Some(PathBuf::from("from-config.json")));

        let disabled = phonemic_config::parse_config("[cache]\nenabled = false\n").unwrap();
        assert_eq!(resolve_cache(&disabled, None, false), None);
        assert_eq!(
            resolve_cache(&PhonemicConfig::default(), None, false),
            Some(default_cache_path())
        );
    }
}
