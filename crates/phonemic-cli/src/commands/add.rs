use super::Ctx;
use color_eyre::eyre::Result;
use phonemic_store::NewLanguage;

pub fn run_add(ctx: &Ctx, draft: NewLanguage) -> Result<()> {
    let mut catalog = ctx.catalog();
    let name = draft.name.trim().to_string();
    let id = catalog.add(draft)?;
    crate::ui_ok!("added {} as #{}", name, id);
    Ok(())
}
