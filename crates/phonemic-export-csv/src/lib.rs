use color_eyre::eyre::Result;
use phonemic_core::LanguageRecord;
use std::io::Write;

pub const HEADER: [&str; 10] = [
    "language_name",
    "language_family",
    "iso_code",
    "latitude",
    "longitude",
    "surface_phonemes",
    "elementary_segments",
    "suprasegmentals",
    "surface_count",
    "elementary_count",
];

pub const TEMPLATE_FILE_NAME: &str = "phonemic_analysis_template.csv";

/// One example row of the import template. Values are kept verbatim
/// (including the published counts) so the template stays byte-stable.
struct TemplateRow {
    name: &'static str,
    family: &'static str,
    iso: &'static str,
    latitude: &'static str,
    longitude: &'static str,
    surface: &'static str,
    elementary: &'static str,
    suprasegmentals: &'static str,
    surface_count: &'static str,
    elementary_count: &'static str,
}

const TEMPLATE_ROWS: [TemplateRow; 3] = [
    TemplateRow {
        name: "Rotokas",
        family: "North Bougainville",
        iso: "roo",
        latitude: "-6.2",
        longitude: "155.2",
        surface: "p t k b d g m n ŋ a e i o u aː eː iː oː uː",
        elementary: "a ə w j k",
        suprasegmentals: "length",
        surface_count: "20",
        elementary_count: "5",
    },
    TemplateRow {
        name: "Hawaiian",
        family: "Austronesian",
        iso: "haw",
        latitude: "21.3",
        longitude: "-157.8",
        surface: "m n l p t ʔ h w i iː u uː e eː a aː o oː iu ou oi eu ei au ai ao ae oːu eːi aːu aːi aːo aːe",
        elementary: "a ə w j ʔ h",
        suprasegmentals: "length",
        surface_count: "26",
        elementary_count: "6",
    },
    TemplateRow {
        name: "English",
        family: "Indo-European",
        iso: "en",
        latitude: "52.0",
        longitude: "-1.0",
        surface: "æ æː ɑː ɒ ɒː ɔː ɪ ɛ ʌ ʊ eɪ əʊ iː uː aɪ ɔɪ aʊ ɜː ɪə ɛː ʊə ə ər i m n ŋ p t tʃ k ʔ b d dʒ g f θ s ʃ h v ð z ʒ l r j w",
        elementary: "i e æ u o ɑ t θ ʔ w j l r n",
        suprasegmentals: "length",
        surface_count: "42",
        elementary_count: "14",
    },
];

// Поля экранируем сами: стандартный режим csv не берёт в кавычки значения с пробелами,
// а шаблон требует кавычки именно у многозначных полей.
fn writer<W: Write>(w: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(w)
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Scalar cell: quoted only when it would otherwise break the row.
fn scalar(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        quoted(value)
    } else {
        value.to_string()
    }
}

/// Multi-value cell: space separated, quoted when it holds more than one value.
fn multi<S: AsRef<str>>(values: &[S]) -> String {
    let joined = values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    if values.len() > 1 || joined.contains([',', '"']) {
        quoted(&joined)
    } else {
        joined
    }
}

fn multi_str(joined: &str) -> String {
    if joined.contains(char::is_whitespace) {
        quoted(joined)
    } else {
        scalar(joined)
    }
}

/// Whole numbers keep one decimal ("52.0"), everything else prints as is.
fn coord(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

/// The import template, without a trailing newline.
pub fn template_csv() -> Result<String> {
    let mut wtr = writer(Vec::new());
    wtr.write_record(HEADER)?;
    for row in &TEMPLATE_ROWS {
        wtr.write_record([
            scalar(row.name),
            scalar(row.family),
            scalar(row.iso),
            row.latitude.to_string(),
            row.longitude.to_string(),
            multi_str(row.surface),
            multi_str(row.elementary),
            multi_str(row.suprasegmentals),
            row.surface_count.to_string(),
            row.elementary_count.to_string(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

pub fn write_template<W: Write>(mut writer: W) -> Result<()> {
    writer.write_all(template_csv()?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Export a collection in the template schema, one row per record.
pub fn write_csv<W: Write>(w: W, records: &[LanguageRecord]) -> Result<()> {
    let mut wtr = writer(w);
    wtr.write_record(HEADER)?;
    for r in records {
        wtr.write_record([
            scalar(&r.name),
            scalar(&r.family),
            scalar(r.iso_code.as_deref().unwrap_or("")),
            coord(r.coordinates.0),
            coord(r.coordinates.1),
            multi(&r.surface_phonemes),
            multi(&r.elementary_segments),
            multi(&r.suprasegmentals),
            r.surface_count().to_string(),
            r.elementary_count().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_TEMPLATE: &str = "language_name,language_family,iso_code,latitude,longitude,surface_phonemes,elementary_segments,suprasegmentals,surface_count,elementary_count
Rotokas,North Bougainville,roo,-6.2,155.2,\"p t k b d g m n ŋ a e i o u aː eː iː oː uː\",\"a ə w j k\",length,20,5
Hawaiian,Austronesian,haw,21.3,-157.8,\"m n l p t ʔ h w i iː u uː e eː a aː o oː iu ou oi eu ei au ai ao ae oːu eːi aːu aːi aːo aːe\",\"a ə w j ʔ h\",length,26,6
English,Indo-European,en,52.0,-1.0,\"æ æː ɑː ɒ ɒː ɔː ɪ ɛ ʌ ʊ eɪ əʊ iː uː aɪ ɔɪ aʊ ɜː ɪə ɛː ʊə ə ər i m n ŋ p t tʃ k ʔ b d dʒ g f θ s ʃ h v ð z ʒ l r j w\",\"i e æ u o ɑ t θ ʔ w j l r n\",length,42,14";

    #[test]
    fn template_is_byte_stable() {
        assert_eq!(template_csv().unwrap(), EXPECTED_TEMPLATE);
    }

    #[test]
    fn export_quotes_multi_values_only() {
        let mut rec = LanguageRecord::new(1, "Test, Lang");
        rec.family = "Isolate".into();
        rec.coordinates = (52.0, -6.25);
        rec.surface_phonemes = vec!["p".into(), "t".into()];
        rec.elementary_segments = vec!["a".into()];
        rec.suprasegmentals = vec!["length".into()];

        let mut out = Vec::new();
        write_csv(&mut out, &[rec]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, "\"Test, Lang\",Isolate,,52.0,-6.25,\"p t\",a,length,2,1");
    }

    #[test]
    fn coordinates_keep_one_decimal() {
        assert_eq!(coord(52.0), "52.0");
        assert_eq!(coord(-1.0), "-1.0");
        assert_eq!(coord(-157.8), "-157.8");
    }
}
