use color_eyre::eyre::{eyre, Result, WrapErr};
use phonemic_store::NewLanguage;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Which CSV header feeds which language field. Defaults to the template headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: String,
    pub family: String,
    pub iso_code: String,
    pub latitude: String,
    pub longitude: String,
    pub surface_phonemes: String,
    pub elementary_segments: String,
    pub suprasegmentals: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: "language_name".into(),
            family: "language_family".into(),
            iso_code: "iso_code".into(),
            latitude: "latitude".into(),
            longitude: "longitude".into(),
            surface_phonemes: "surface_phonemes".into(),
            elementary_segments: "elementary_segments".into(),
            suprasegmentals: "suprasegmentals".into(),
        }
    }
}

impl ColumnMapping {
    /// Apply `field -> header` overrides. Unknown field names are an error.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Result<Self> {
        for (field, header) in overrides {
            let slot = match field.as_str() {
                "name" => &mut self.name,
                "family" => &mut self.family,
                "iso_code" => &mut self.iso_code,
                "latitude" => &mut self.latitude,
                "longitude" => &mut self.longitude,
                "surface_phonemes" => &mut self.surface_phonemes,
                "elementary_segments" => &mut self.elementary_segments,
                "suprasegmentals" => &mut self.suprasegmentals,
                other => return Err(eyre!("unknown import column field `{other}`")),
            };
            *slot = header.clone();
        }
        Ok(self)
    }
}

/// Rows turned into new-language drafts.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub drafts: Vec<NewLanguage>,
    /// data rows read (header excluded)
    pub rows: usize,
    /// 1-based data row numbers skipped for lacking a name
    pub skipped: Vec<usize>,
}

/// Column positions resolved against one header row.
struct Columns {
    name: usize,
    family: Option<usize>,
    iso_code: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
    surface: Option<usize>,
    elementary: Option<usize>,
    suprasegmentals: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord, mapping: &ColumnMapping) -> Result<Self> {
        let find = |h: &str| headers.iter().position(|x| x == h);
        Ok(Self {
            name: find(mapping.name.as_str())
                .ok_or_else(|| eyre!("CSV has no `{}` column", mapping.name))?,
            family: find(mapping.family.as_str()),
            iso_code: find(mapping.iso_code.as_str()),
            latitude: find(mapping.latitude.as_str()),
            longitude: find(mapping.longitude.as_str()),
            surface: find(mapping.surface_phonemes.as_str()),
            elementary: find(mapping.elementary_segments.as_str()),
            suprasegmentals: find(mapping.suprasegmentals.as_str()),
        })
    }
}

fn cell<'a>(row: &'a csv::StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i)).unwrap_or("")
}

fn parse_coord(raw: &str, row_no: usize, column: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    // "NaN"/"inf" parse fine but cannot be stored as JSON numbers
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            tracing::warn!(event = "import_bad_coordinate", row = row_no, column = column, value = raw);
            0.0
        }
    }
}

/// Parse CSV text from any reader. Multi-value cells are split on whitespace
/// (and commas) when the drafts are added to a store.
pub fn read_csv<R: Read>(reader: R, mapping: &ColumnMapping) -> Result<ParsedCsv> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = Columns::resolve(&headers, mapping)?;

    let mut out = ParsedCsv::default();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let row_no = i + 1;
        // строки из одних разделителей не считаем
        if row.iter().all(str::is_empty) {
            continue;
        }
        out.rows += 1;

        let name = cell(&row, Some(cols.name));
        if name.is_empty() {
            tracing::warn!(event = "import_row_skipped", row = row_no, reason = "missing name");
            out.skipped.push(row_no);
            continue;
        }

        let iso = cell(&row, cols.iso_code);
        out.drafts.push(NewLanguage {
            name: name.to_string(),
            family: cell(&row, cols.family).to_string(),
            iso_code: (!iso.is_empty()).then(|| iso.to_string()),
            latitude: parse_coord(cell(&row, cols.latitude), row_no, &mapping.latitude),
            longitude: parse_coord(cell(&row, cols.longitude), row_no, &mapping.longitude),
            surface_phonemes: cell(&row, cols.surface).to_string(),
            elementary_segments: cell(&row, cols.elementary).to_string(),
            suprasegmentals: cell(&row, cols.suprasegmentals).to_string(),
            features: 0,
            dialect_notes: None,
        });
    }
    tracing::debug!(event = "import_parsed", rows = out.rows, drafts = out.drafts.len());
    Ok(out)
}

pub fn read_csv_file(path: &Path, mapping: &ColumnMapping) -> Result<ParsedCsv> {
    let file = File::open(path).wrap_err_with(|| format!("open {}", path.display()))?;
    read_csv(file, mapping).wrap_err_with(|| format!("parse {}", path.display()))
}
