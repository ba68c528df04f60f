use super::{find_language, print_json, Ctx};
use color_eyre::eyre::Result;
use owo_colors::OwoColorize;
use phonemic_domain::LanguageValidation;

pub fn run_validate(ctx: &Ctx, language: Option<&str>, format: &str) -> Result<()> {
    let catalog = ctx.catalog();
    let results: Vec<LanguageValidation> = match language {
        Some(q) => vec![phonemic_services::validate_language(find_language(&catalog, q)?)],
        None => phonemic_services::validate_all(catalog.records()),
    };
    let failed = results.iter().filter(|v| !v.report.all_passed()).count();
    tracing::info!(event = "validate_done", languages = results.len(), failed = failed);

    if format == "json" {
        return print_json(&results);
    }
    for v in &results {
        let title = format!("{} (#{})", v.language, v.language_id);
        if ctx.use_color {
            println!("{}", title.bold());
        } else {
            println!("{title}");
        }
        for (rule, passed, message) in v.report.entries() {
            match (passed, ctx.use_color) {
                (true, true) => println!("  {} {}: {}", "✔".green(), rule, message),
                (false, true) => println!("  {} {}: {}", "✖".red(), rule.red(), message),
                (true, false) => println!("  ✔ {rule}: {message}"),
                (false, false) => println!("  ✖ {rule}: {message}"),
            }
        }
    }
    Ok(())
}
