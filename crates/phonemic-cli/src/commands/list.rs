use super::{find_language, join, print_json, Ctx};
use color_eyre::eyre::Result;
use owo_colors::OwoColorize;

pub fn run_list(ctx: &Ctx, limit: Option<usize>, format: &str) -> Result<()> {
    let catalog = ctx.catalog();
    let limit = limit.or(ctx.cfg.list_limit).unwrap_or(usize::MAX);
    let records: Vec<_> = catalog.records().iter().take(limit).collect();
    tracing::debug!(event = "list", shown = records.len(), total = catalog.records().len());

    if format == "json" {
        return print_json(&records);
    }
    for r in records {
        let id = format!("#{}", r.id);
        let counts = format!("{} → {}", r.surface_count(), r.elementary_count());
        if ctx.use_color {
            println!("{:>4}  {}  {}  {}", id.dimmed(), r.name.green(), r.family, counts.cyan());
        } else {
            println!("{:>4}  {}  {}  {}", id, r.name, r.family, counts);
        }
    }
    Ok(())
}

pub fn run_show(ctx: &Ctx, language: &str, format: &str) -> Result<()> {
    let catalog = ctx.catalog();
    let r = find_language(&catalog, language)?;
    if format == "json" {
        return print_json(r);
    }

    let title = format!("{} (#{})", r.name, r.id);
    if ctx.use_color {
        println!("{}", title.bold());
    } else {
        println!("{title}");
    }
    println!("family:          {}", r.family);
    if let Some(iso) = &r.iso_code {
        println!("iso:             {iso}");
    }
    println!("coordinates:     {}, {}", r.coordinates.0, r.coordinates.1);
    println!("surface ({}):    {}", r.surface_count(), join(&r.surface_phonemes));
    if !r.analyzed_phonemes.is_empty() {
        println!("analyzed:        {}", join(&r.analyzed_phonemes));
    }
    println!("elementary ({}): {}", r.elementary_count(), join(&r.elementary_segments));
    println!("suprasegmentals: {}", join(&r.suprasegmentals));
    println!("features:        {}", r.features);
    if let Some(c) = &r.complexity {
        println!("complexity:      {c}");
    }
    if let Some(notes) = &r.dialect_notes {
        println!("notes:           {notes}");
    }
    println!("mappings:");
    for (i, m) in r.surface_mappings.iter().enumerate() {
        if m.notes.is_empty() {
            println!("  [{i}] {} → {}", m.surface, m.elementary);
        } else {
            println!("  [{i}] {} → {}  ({})", m.surface, m.elementary, m.notes);
        }
    }
    Ok(())
}
