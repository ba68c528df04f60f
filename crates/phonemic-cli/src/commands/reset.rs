use super::Ctx;
use color_eyre::eyre::Result;

pub fn run_reset(ctx: &Ctx) -> Result<()> {
    let mut catalog = ctx.catalog();
    catalog.reset()?;
    crate::ui_ok!("collection reset to {} seed languages", catalog.records().len());
    Ok(())
}
