use super::{find_language, print_json, Ctx};
use color_eyre::eyre::Result;
use owo_colors::OwoColorize;
use phonemic_core::{FeatureSelection, Polarity, DISPLAY_FEATURES};
use phonemic_services::feature_table_from_config;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct FeatureView<'a> {
    language: &'a str,
    table_version: u64,
    /// segment -> feature -> "+", "-", "±" or "0"
    matrix: BTreeMap<&'a str, BTreeMap<&'static str, &'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feature: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    polarity: Option<&'static str>,
    highlighted: Vec<String>,
}

pub fn run_features(
    ctx: &Ctx,
    language: &str,
    feature: Option<String>,
    polarity: &str,
    format: &str,
) -> Result<()> {
    let catalog = ctx.catalog();
    let record = find_language(&catalog, language)?;
    let table = feature_table_from_config(&ctx.cfg);
    // как в матрице: первый клик +, второй -
    let mut selection = FeatureSelection::default();
    if let Some(f) = feature.as_deref() {
        selection.click(f);
        if polarity == "minus" {
            selection.click(f);
        }
    }
    let highlighted = selection.highlighted(record, &table);
    tracing::debug!(
        event = "features",
        language = %record.name,
        table_version = table.version(),
        highlighted = highlighted.len()
    );

    if format == "json" {
        let matrix = record
            .elementary_segments
            .iter()
            .map(|seg| {
                let row = DISPLAY_FEATURES
                    .iter()
                    .map(|f| (*f, table.get(seg, f).symbol()))
                    .collect();
                (seg.as_str(), row)
            })
            .collect();
        return print_json(&FeatureView {
            language: &record.name,
            table_version: table.version(),
            matrix,
            feature: selection.feature(),
            polarity: selection.feature().map(|_| match selection.polarity() {
                Polarity::Plus => "plus",
                Polarity::Minus => "minus",
            }),
            highlighted,
        });
    }

    let header: Vec<String> = DISPLAY_FEATURES.iter().map(|f| format!("{f:>11}")).collect();
    println!("{:<6}{}", "", header.join(""));
    for seg in &record.elementary_segments {
        let cells: String = DISPLAY_FEATURES
            .iter()
            .map(|f| format!("{:>11}", table.get(seg, f).symbol()))
            .collect();
        let marked = highlighted.contains(seg);
        match (marked, ctx.use_color) {
            (true, true) => println!("{:<6}{}", seg.yellow().bold(), cells),
            (true, false) => println!("{:<6}{} *", seg, cells),
            (false, _) => println!("{:<6}{}", seg, cells),
        }
    }
    if let Some(f) = selection.feature() {
        let sign = match selection.polarity() {
            Polarity::Plus => "+",
            Polarity::Minus => "-",
        };
        println!("{sign}{f}: {}", highlighted.join(" "));
    }
    Ok(())
}
