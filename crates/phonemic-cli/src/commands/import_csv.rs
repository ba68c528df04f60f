use super::{print_json, Ctx};
use color_eyre::eyre::Result;
use phonemic_services::column_mapping_from_config;
use std::path::Path;

pub fn run_import_csv(ctx: &Ctx, path: &Path, format: &str) -> Result<()> {
    let mapping = column_mapping_from_config(&ctx.cfg)?;
    let mut catalog = ctx.catalog();
    let summary = phonemic_services::import_csv(&mut catalog, path, &mapping)?;

    if format == "json" {
        return print_json(&summary);
    }
    crate::ui_ok!(
        "imported {} of {} rows from {}",
        summary.created,
        summary.rows,
        path.display()
    );
    if summary.skipped > 0 {
        crate::ui_warn!("{} rows skipped (no language name)", summary.skipped);
    }
    if catalog.cache_path().is_none() {
        crate::ui_info!("cache disabled; imported languages are not kept");
    }
    Ok(())
}
