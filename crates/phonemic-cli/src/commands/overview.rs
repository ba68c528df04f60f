use super::{print_json, Ctx};
use color_eyre::eyre::Result;
use owo_colors::OwoColorize;
use phonemic_domain::SymbolCount;
use phonemic_services::{OverviewFilter, PhonemeClass};

fn print_counts(title: &str, counts: &[SymbolCount], use_color: bool) {
    let line: Vec<String> = counts
        .iter()
        .map(|c| format!("{}×{}", c.symbol, c.occurrences))
        .collect();
    if use_color {
        println!("{} ({}): {}", title.bold(), counts.len(), line.join(" "));
    } else {
        println!("{} ({}): {}", title, counts.len(), line.join(" "));
    }
}

pub fn run_overview(ctx: &Ctx, class: &str, search: Option<String>, format: &str) -> Result<()> {
    let catalog = ctx.catalog();
    let class = match class {
        "vowels" => PhonemeClass::Vowels,
        "consonants" => PhonemeClass::Consonants,
        _ => PhonemeClass::All,
    };
    let stats = phonemic_services::overview(catalog.records(), &OverviewFilter { class, search });

    if format == "json" {
        return print_json(&stats);
    }
    println!("languages: {}", stats.languages);
    print_counts("surface phonemes", &stats.surface_phonemes, ctx.use_color);
    print_counts("elementary segments", &stats.elementary_segments, ctx.use_color);
    print_counts("suprasegmentals", &stats.suprasegmentals, ctx.use_color);
    for l in &stats.inventory {
        println!(
            "  {:<12} {:>3} → {:<3} reduction {}%  {}",
            l.name,
            l.surface,
            l.elementary,
            l.reduction,
            l.complexity.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
