use super::Ctx;
use color_eyre::eyre::{Result, WrapErr};
use phonemic_export_csv::{write_csv, write_template, TEMPLATE_FILE_NAME};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).wrap_err_with(|| format!("create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

pub fn run_export_template(ctx: &Ctx, out: Option<PathBuf>, stdout: bool) -> Result<()> {
    if stdout {
        return write_template(std::io::stdout().lock());
    }
    let path = out
        .or_else(|| {
            ctx.cfg
                .export
                .as_ref()
                .and_then(|e| e.template_path.clone())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(TEMPLATE_FILE_NAME));
    write_template(create(&path)?)?;
    tracing::info!(event = "template_exported", path = %path.display());
    crate::ui_ok!("template saved to {}", path.display());
    Ok(())
}

pub fn run_export_csv(ctx: &Ctx, out: Option<PathBuf>) -> Result<()> {
    let catalog = ctx.catalog();
    match out {
        Some(path) => {
            write_csv(create(&path)?, catalog.records())?;
            tracing::info!(event = "csv_exported", path = %path.display(), languages = catalog.records().len());
            crate::ui_ok!("{} languages saved to {}", catalog.records().len(), path.display());
        }
        None => write_csv(std::io::stdout().lock(), catalog.records())?,
    }
    Ok(())
}
