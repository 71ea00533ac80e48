//! Site identity derived from the input file name.
//!
//! For a file named `配線表_TK01_01.csv` with prefix `配線表_` and word `_`,
//! the site name is `TK01` and the site number is `01`.

use std::path::Path;

use cable_config::FileNameConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    /// Absent when the file name carries no separator word.
    pub number: Option<String>,
}

impl Site {
    pub fn from_file_name(file_name: &str, config: &FileNameConfig) -> Self {
        let stem = Path::new(file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rest = stem.strip_prefix(config.prefix.as_str()).unwrap_or(&stem);
        Self {
            name: site_name(rest, &config.word).to_string(),
            number: site_number(rest, &config.word).map(str::to_string),
        }
    }
}

/// Text before the first `word`, or all of `rest` when it has none.
fn site_name<'a>(rest: &'a str, word: &str) -> &'a str {
    if word.is_empty() {
        return rest;
    }
    rest.split_once(word).map_or(rest, |(name, _)| name)
}

/// Text between the first and second `word`; with a single occurrence, the
/// text after it.
fn site_number<'a>(rest: &'a str, word: &str) -> Option<&'a str> {
    if word.is_empty() {
        return None;
    }
    let (_, after) = rest.split_once(word)?;
    Some(after.split_once(word).map_or(after, |(number, _)| number))
}
