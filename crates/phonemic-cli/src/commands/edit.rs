use super::{find_language, Ctx};
use color_eyre::eyre::{eyre, Result};
use phonemic_core::Mapping;
use phonemic_store::{EditSession, MappingField};

#[derive(Debug, Default)]
pub struct EditArgs {
    pub name: Option<String>,
    pub family: Option<String>,
    pub coordinates: Option<(f64, f64)>,
    pub surface: Option<String>,
    pub elementary: Option<String>,
    pub suprasegmentals: Option<String>,
    pub notes: Option<String>,
    pub add_mapping: Vec<String>,
    pub set_mapping: Vec<String>,
    pub remove_mapping: Vec<usize>,
}

/// `p=wk` or `p=wk=Ck = voiceless consonant` (notes may contain `=`).
fn parse_new_mapping(arg: &str) -> Result<Mapping> {
    let mut parts = arg.splitn(3, '=');
    let surface = parts.next().unwrap_or_default().trim();
    let elementary = parts
        .next()
        .ok_or_else(|| eyre!("mapping `{arg}` must look like SURFACE=ELEMENTARY[=NOTES]"))?
        .trim();
    let notes = parts.next().unwrap_or_default().trim();
    if surface.is_empty() {
        return Err(eyre!("mapping `{arg}` has an empty surface side"));
    }
    Ok(Mapping::new(surface, elementary, notes))
}

/// `3.notes=some text` -> (3, Notes, "some text")
fn parse_mapping_update(arg: &str) -> Result<(usize, MappingField, String)> {
    let bad = || eyre!("mapping update `{arg}` must look like INDEX.FIELD=VALUE");
    let (target, value) = arg.split_once('=').ok_or_else(bad)?;
    let (index, field) = target.split_once('.').ok_or_else(bad)?;
    let index: usize = index.trim().parse().map_err(|_| bad())?;
    let field: MappingField = field.parse()?;
    Ok((index, field, value.trim().to_string()))
}

fn apply(session: &mut EditSession, args: EditArgs) -> Result<()> {
    if let Some(name) = args.name {
        session.set_name(&name);
    }
    if let Some(family) = args.family {
        session.set_family(&family);
    }
    if let Some((lat, lon)) = args.coordinates {
        session.set_coordinates(lat, lon);
    }
    if let Some(text) = args.surface {
        session.set_surface_phonemes(&text);
    }
    if let Some(text) = args.elementary {
        session.set_elementary_segments(&text);
    }
    if let Some(text) = args.suprasegmentals {
        session.set_suprasegmentals(&text);
    }
    if let Some(notes) = args.notes {
        session.set_dialect_notes(&notes);
    }
    for arg in &args.set_mapping {
        let (index, field, value) = parse_mapping_update(arg)?;
        session.update_mapping(index, field, &value)?;
    }
    // с конца, чтобы индексы не съезжали
    let mut removals = args.remove_mapping;
    removals.sort_unstable();
    removals.dedup();
    for index in removals.into_iter().rev() {
        session.remove_mapping(index)?;
    }
    for arg in &args.add_mapping {
        session.add_mapping(parse_new_mapping(arg)?);
    }
    Ok(())
}

pub fn run_edit(ctx: &Ctx, language: &str, args: EditArgs) -> Result<()> {
    let mut catalog = ctx.catalog();
    let id = find_language(&catalog, language)?.id;
    let mut session = catalog.edit(id)?;
    // ошибка в любом аргументе -> черновик выбрасывается, запись не меняется
    apply(&mut session, args)?;
    let name = session.draft().name.clone();
    catalog.save(session)?;
    crate::ui_ok!("saved {} (#{})", name, id);
    Ok(())
}
