//! Built-in example languages.

use phonemic_core::{LanguageRecord, Mapping};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn maps(items: &[(&str, &str, &str)]) -> Vec<Mapping> {
    items
        .iter()
        .map(|(s, e, n)| Mapping::new(*s, *e, *n))
        .collect()
}

pub fn languages() -> Vec<LanguageRecord> {
    vec![rotokas(), hawaiian(), english()]
}

pub fn rotokas() -> LanguageRecord {
    LanguageRecord {
        id: 1,
        name: "Rotokas".into(),
        family: "North Bougainville".into(),
        iso_code: Some("roo".into()),
        coordinates: (-6.2, 155.2),
        surface_phonemes: list(&[
            "p", "t", "k", "b", "d", "g", // Central Rotokas consonants
            "m", "n", "ŋ", // Aita Rotokas nasals
            "a", "e", "i", "o", "u", //
            "aː", "eː", "iː", "oː", "uː", // Central Rotokas long vowels
        ]),
        analyzed_phonemes: Vec::new(),
        elementary_segments: list(&["a", "ə", "w", "j", "k"]),
        suprasegmentals: list(&["length"]),
        features: 4,
        complexity: Some("Simple".into()),
        surface_mappings: maps(&[
            ("p", "wk", "Ck = voiceless consonant"),
            ("t", "jk", "Ck = voiceless consonant"),
            ("k", "kk", "Ck = voiceless consonant"),
            ("b", "w", "voiced, underlyingly nasal"),
            ("d", "j", "voiced, underlyingly nasal"),
            ("g", "k", "voiced, underlyingly nasal"),
            ("m", "wkw", "nasal due to underlyingly nasal w (Aita Rotokas only)"),
            ("n", "jkj", "nasal due to underlyingly nasal j (Aita Rotokas only)"),
            ("ŋ", "kkj", "nasal due to underlyingly nasal j (Aita Rotokas only)"),
            ("a", "a", "low vowel elementary"),
            ("e", "ə", "high vowel elementary"),
            ("i", "əj", "high (ə) + front (j)"),
            ("o", "aw", "mid (a) + back (w)"),
            ("u", "əw", "high (ə) + back (w)"),
            ("aː", "a:", "low vowel + length (Central Rotokas only)"),
            ("eː", "ə:", "high vowel + length (Central Rotokas only)"),
            ("iː", "əj:", "high (ə) + front (j) + length (Central Rotokas only)"),
            ("oː", "aw:", "mid (a) + back (w) + length (Central Rotokas only)"),
            ("uː", "əw:", "high (ə) + back (w) + length (Central Rotokas only)"),
        ]),
        dialect_notes: Some(
            "Long vowels phonemic in Central Rotokas only; nasal consonants phonemic in Aita Rotokas only"
                .into(),
        ),
    }
}

pub fn hawaiian() -> LanguageRecord {
    LanguageRecord {
        id: 2,
        name: "Hawaiian".into(),
        family: "Austronesian > Oceanic".into(),
        iso_code: Some("haw".into()),
        coordinates: (21.3, -157.8),
        surface_phonemes: list(&[
            "m", "n", "l", "p", "t", "ʔ", "h", "w", //
            "i", "iː", "u", "uː", "e", "eː", "a", "aː", "o", "oː", //
            "iu", "ou", "oi", "eu", "ei", "au", "ai", "ao", "ae", //
            "oːu", "eːi", "aːu", "aːi", "aːo", "aːe",
        ]),
        analyzed_phonemes: list(&[
            "m", "n", "l", "p", "t", "ʔ", "h", "w", //
            "a", "e", "i", "o", "u", "aa", "ee", "ii", "oo", "uu", //
            "ai", "au", "ei", "eu", "iu", "oi", "ou", "ao", "ae", //
            "aai", "aau", "aao", "aae", "eei", "oou",
        ]),
        elementary_segments: list(&["a", "ə", "w", "j", "ʔ", "h"]),
        suprasegmentals: list(&["length"]),
        features: 4,
        complexity: Some("Simple".into()),
        surface_mappings: maps(&[
            ("m", "ʔw", "ʔw = nasal (no h marker)"),
            ("n", "ʔj", "ʔj = nasal (no h marker)"),
            ("p", "ʔwh", "ʔwh = voiceless stop"),
            ("t", "ʔjh", "ʔjh = voiceless stop"),
            ("l", "jh", "jh = lateral"),
            ("ʔ", "ʔ", "elementary segment"),
            ("h", "h", "elementary segment"),
            ("w", "w", "elementary segment"),
            ("a", "a", "elementary vowel"),
            ("e", "ə", "elementary vowel"),
            ("i", "əj", "high front = ə + j"),
            ("o", "aw", "mid back = a + w"),
            ("u", "əw", "high back = ə + w"),
            ("iː", "əj:", "ii = əj + length"),
            ("uː", "əw:", "uu = əw + length"),
            ("eː", "ə:", "ee = ə + length"),
            ("aː", "a:", "aa = a + length"),
            ("oː", "aw:", "oo = aw + length"),
            ("ai", "aəj", "a + i diphthong"),
            ("au", "aəw", "a + u diphthong"),
            ("ei", "əəj", "e + i diphthong"),
            ("eu", "əəw", "e + u diphthong"),
            ("iu", "əjəw", "i + u diphthong"),
            ("oi", "awəj", "o + i diphthong"),
            ("ou", "awəw", "o + u diphthong"),
            ("ao", "aaw", "a + o diphthong"),
            ("ae", "aə", "a + e diphthong"),
            ("oːu", "awəw:", "oou = awəw + length"),
            ("eːi", "əəj:", "eei = əəj + length"),
            ("aːu", "aəw:", "aau = aəw + length"),
            ("aːi", "aəj:", "aai = aəj + length"),
            ("aːo", "aaw:", "aao = aaw + length"),
            ("aːe", "aə:", "aae = aə + length"),
        ]),
        dialect_notes: None,
    }
}

pub fn english() -> LanguageRecord {
    LanguageRecord {
        id: 3,
        name: "English".into(),
        family: "Indo-European > Germanic".into(),
        iso_code: Some("en".into()),
        coordinates: (52.0, -1.0),
        surface_phonemes: list(&[
            // ANAE vowel keywords
            "æ", "æː", "ɑː", "ɒ", "ɒː", "ɔː", "ɪ", "ɛ", "ʌ", "ʊ", //
            "eɪ", "əʊ", "iː", "uː", "aɪ", "ɔɪ", "aʊ", "ɜː", "ɑː", "ɔː", //
            "ɒː", "ɪə", "ɛː", "ʊə", "ə", "ər", "i", //
            "m", "n", "ŋ", "p", "t", "tʃ", "k", "ʔ", "b", "d", "dʒ", "g", //
            "f", "θ", "s", "ʃ", "h", "v", "ð", "z", "ʒ", "l", "r", "j", "w",
        ]),
        analyzed_phonemes: list(&[
            // Labov-style VC analysis
            "æ", "æh", "ah", "a", "oh", "oh", "i", "e", "o", "u", //
            "ej", "ow", "ij", "uw", "aj", "oj", "aw", "ər", "ær", "or", //
            "ar", "ir", "er", "ur", "ə", "ər", "i", //
            "m", "n", "ŋ", "p", "t", "tʃ", "k", "ʔ", "b", "d", "dʒ", "g", //
            "f", "θ", "s", "ʃ", "h", "v", "ð", "z", "ʒ", "l", "r", "j", "w",
        ]),
        elementary_segments: list(&[
            "i", "e", "æ", "u", "o", "ɑ", "t", "θ", "ʔ", "w", "j", "l", "r", "n",
        ]),
        suprasegmentals: list(&["length"]),
        features: 7,
        complexity: Some("Medium".into()),
        surface_mappings: maps(&[
            ("ɪ", "i", "+high, +front elementary"),
            ("ɛ", "e", "-high, -low, +front elementary"),
            ("æ", "æ", "-high, +low, +front elementary"),
            ("ʊ", "u", "+high, -front elementary"),
            ("ʌ", "o", "-high, -low, -front elementary"),
            ("ɒ", "ɑ", "-high, +low, -front elementary"),
            // h = length marker, not the fricative
            ("æː", "æh", "low front + length (h)"),
            ("ɑː", "ɑh", "low back + length (h)"),
            ("ɔː", "oh", "mid back + length (h)"),
            ("eɪ", "ej", "mid front + front (j)"),
            ("əʊ", "ow", "mid + back (w)"),
            ("iː", "ij", "high front + front (j)"),
            ("uː", "uw", "high back + back (w)"),
            ("aɪ", "ɑj", "low + front (j)"),
            ("ɔɪ", "oj", "mid back + front (j)"),
            ("aʊ", "ɑw", "low + back (w)"),
            ("ɜː", "ər", "mid + rhotic (r)"),
            ("ɪə", "ir", "high front + rhotic (r)"),
            ("ɛː", "er", "mid front + rhotic (r)"),
            ("ʊə", "ur", "high back + rhotic (r)"),
            ("m", "n", "nasal elementary"),
            ("n", "n", "nasal elementary"),
            ("ŋ", "n", "nasal elementary"),
            ("p", "tw", "occlusive + back (w)"),
            ("t", "t", "occlusive elementary"),
            ("k", "tʔ", "occlusive + back (ʔ)"),
            ("b", "ntw", "voiced occlusive + back"),
            ("d", "nt", "voiced occlusive"),
            ("g", "ntʔ", "voiced occlusive + back"),
            ("s", "tl", "occlusive + lateral"),
            ("z", "l", "lateral = voiced fricative"),
            ("ʃ", "tr", "occlusive + rhotic"),
            ("ʒ", "ntr", "voiced occlusive + rhotic"),
            ("tʃ", "tj", "occlusive + front (j)"),
            ("dʒ", "ntj", "voiced occlusive + front"),
            ("f", "θw", "fricative + back (w)"),
            ("v", "nθw", "voiced fricative + back"),
            ("θ", "θ", "fricative elementary"),
            ("ð", "nθ", "voiced fricative"),
            ("h", "θʔ", "fricative + glottal"),
            ("l", "l", "lateral elementary"),
            ("r", "r", "rhotic elementary"),
            ("j", "j", "front elementary"),
            ("w", "w", "back elementary"),
        ]),
        dialect_notes: None,
    }
}
