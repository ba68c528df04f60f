use super::Ctx;
use std::fs;
use std::path::PathBuf;

pub fn run_schema(ctx: &Ctx, out_dir: PathBuf) -> color_eyre::Result<()> {
    let out_dir = if out_dir.as_os_str().is_empty() {
        PathBuf::from(
            ctx.cfg
                .schema
                .as_ref()
                .and_then(|s| s.out_dir.clone())
                .unwrap_or_else(|| "./docs/assets/schemas".to_string()),
        )
    } else {
        out_dir
    };
    fs::create_dir_all(&out_dir)?;
    macro_rules! dump {
        ($ty:ty, $name:literal) => {{
            let schema = schemars::schema_for!($ty);
            let path = out_dir.join($name);
            let f = std::fs::File::create(&path)?;
            serde_json::to_writer_pretty(f, &schema)?;
        }};
    }
    dump!(phonemic_domain::LanguageValidation, "language_validation.schema.json");
    dump!(phonemic_domain::PairComparison, "pair_comparison.schema.json");
    dump!(phonemic_domain::OverviewStats, "overview_stats.schema.json");
    dump!(phonemic_domain::ImportSummary, "import_summary.schema.json");
    tracing::info!(event = "schema_dumped", path = %out_dir.display());
    crate::ui_ok!("schemas written to {}", out_dir.display());
    Ok(())
}
