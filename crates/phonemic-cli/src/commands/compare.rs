use super::{find_language, join, print_json, Ctx};
use color_eyre::eyre::{bail, Result};
use owo_colors::OwoColorize;
use phonemic_domain::PairComparison;
use phonemic_services::equivalence_from_config;

pub fn run_compare(ctx: &Ctx, languages: &[String], format: &str) -> Result<()> {
    let catalog = ctx.catalog();
    let equivalence = equivalence_from_config(&ctx.cfg);
    let pairs: Vec<PairComparison> = match languages {
        [] => phonemic_services::compare_all_pairs(catalog.records(), &equivalence),
        [left, right] => {
            let left = find_language(&catalog, left)?;
            let right = find_language(&catalog, right)?;
            vec![phonemic_services::compare_pair(left, right, &equivalence)]
        }
        _ => bail!("compare takes two languages or none"),
    };

    if format == "json" {
        return print_json(&pairs);
    }
    for p in &pairs {
        let s = &p.similarity;
        let title = format!("{} ↔ {}", p.left, p.right);
        if ctx.use_color {
            println!(
                "{}  jaccard {}%  functional {}%",
                title.bold(),
                s.jaccard.cyan(),
                s.functional_jaccard.cyan()
            );
        } else {
            println!(
                "{}  jaccard {}%  functional {}%",
                title, s.jaccard, s.functional_jaccard
            );
        }
        println!("  shared:      {}", join(&s.shared));
        println!("  only {}: {}", p.left, join(&s.unique1));
        println!("  only {}: {}", p.right, join(&s.unique2));
        if !s.functional_matches.is_empty() {
            let matches: Vec<String> = s
                .functional_matches
                .iter()
                .map(|(a, b)| format!("{a}≡{b}"))
                .collect();
            println!("  equivalent:  {}", matches.join(" "));
        }
    }
    Ok(())
}
