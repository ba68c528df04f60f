use super::{find_language, Ctx};
use color_eyre::eyre::Result;

pub fn run_delete(ctx: &Ctx, language: &str) -> Result<()> {
    let mut catalog = ctx.catalog();
    let id = find_language(&catalog, language)?.id;
    let removed = catalog.delete(id)?;
    crate::ui_ok!("deleted {} (#{})", removed.name, removed.id);
    if catalog.records().is_empty() {
        crate::ui_warn!("collection is empty; `phonemic reset` restores the seed languages");
    }
    Ok(())
}
