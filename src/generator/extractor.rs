use super::GenerateError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads raw names from one input file.
///
/// A path that does not exist contributes zero names; an absent roster
/// is empty input, not a failure.
pub(crate) fn names_from_path(path: &Path) -> Result<Vec<String>, GenerateError> {
    if !path.exists() {
        debug!(path = %path.display(), "input file not found, contributing no names");
        return Ok(Vec::new());
    }

    let file = std::fs::File::open(path)?;
    names_from_reader(file)
}

/// Reads raw names from delimited rows: the first field of every record.
///
/// A plain one-name-per-line text file is the one-field-row case of the
/// same reader, so both supported formats go through here.
pub(crate) fn names_from_reader<R: Read>(reader: R) -> Result<Vec<String>, GenerateError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut names = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        if let Some(first) = record.get(0) {
            names.push(first.to_string());
        }
    }

    Ok(names)
}
