mod extractor;
mod normalizer;
mod renderer;

use renderer::ALLOWED_FIELDS;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub use renderer::UsernameTemplate;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read name file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid data in name file: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown template field '{{{field}}}' (allowed fields: {})", ALLOWED_FIELDS)]
    UnknownField { field: String },
}

/// Result of one generator run: the deduplicated, sorted usernames and
/// the number of cleaned names that failed a required-component check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameBatch {
    pub usernames: Vec<String>,
    pub skipped: usize,
}

/// Runs the extract -> normalize -> render -> assemble pipeline for one
/// parsed template.
#[derive(Debug)]
pub struct UsernameGenerator {
    template: UsernameTemplate,
}

impl UsernameGenerator {
    /// Parses the template up front; an unknown placeholder aborts the
    /// run before any input is read.
    pub fn new(template: &str) -> Result<Self, GenerateError> {
        Ok(Self {
            template: UsernameTemplate::parse(template)?,
        })
    }

    /// Generates usernames from name files, concatenated in argument
    /// order. Paths that do not exist contribute zero names.
    pub fn from_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<UsernameBatch, GenerateError> {
        let mut raw_names = Vec::new();
        for path in paths {
            raw_names.extend(extractor::names_from_path(path.as_ref())?);
        }

        debug!(names = raw_names.len(), files = paths.len(), "extracted raw names");
        Ok(self.assemble(raw_names))
    }

    /// Generates usernames from a single in-memory source.
    pub fn from_reader<R: Read>(&self, reader: R) -> Result<UsernameBatch, GenerateError> {
        let raw_names = extractor::names_from_reader(reader)?;
        Ok(self.assemble(raw_names))
    }

    fn assemble(&self, raw_names: Vec<String>) -> UsernameBatch {
        // Normalization dedupes first, so skips are counted once per
        // unique clean name.
        let clean_names = normalizer::normalize_batch(raw_names);

        let mut usernames = BTreeSet::new();
        let mut skipped = 0usize;

        for name in &clean_names {
            match self.template.render(name) {
                Some(username) => {
                    usernames.insert(username);
                }
                None => skipped += 1,
            }
        }

        UsernameBatch {
            usernames: usernames.into_iter().collect(),
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn generates_sorted_unique_usernames_from_csv() {
        let csv = "Dr. Jane Quincy Public, MD,Engineering\n\
John A. Smith,Accounting\n\
john a smith,Accounting\n";
        let generator = UsernameGenerator::new("{f}{m}{last}@acme.com").expect("template parses");
        let batch = generator.from_reader(Cursor::new(csv)).expect("batch generates");

        assert_eq!(
            batch.usernames,
            vec!["jasmith@acme.com", "jqpublic@acme.com"]
        );
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn counts_skips_for_names_missing_required_components() {
        let csv = "Jane Doe\nJohn Quincy Public\nMadonna\n";
        let generator = UsernameGenerator::new("{f}{m}{last}@acme.com").expect("template parses");
        let batch = generator.from_reader(Cursor::new(csv)).expect("batch generates");

        assert_eq!(batch.usernames, vec!["jqpublic@acme.com"]);
        assert_eq!(batch.skipped, 2);
    }

    #[test]
    fn skip_counting_is_per_unique_clean_name() {
        let csv = "Jane Doe\nDr. Jane Doe\nJANE DOE\n";
        let generator = UsernameGenerator::new("{f}{m}{last}@acme.com").expect("template parses");
        let batch = generator.from_reader(Cursor::new(csv)).expect("batch generates");

        assert!(batch.usernames.is_empty());
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn distinct_names_collapsing_to_one_username_dedupe() {
        let csv = "Jane Doe\nJulia Doe\n";
        let generator = UsernameGenerator::new("{f}{last}").expect("template parses");
        let batch = generator.from_reader(Cursor::new(csv)).expect("batch generates");

        assert_eq!(batch.usernames, vec!["jdoe"]);
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn unknown_template_field_fails_construction() {
        let err = UsernameGenerator::new("{first}.{nickname}@acme.com")
            .expect_err("unknown field rejected");
        let message = err.to_string();
        assert!(message.contains("nickname"), "message: {message}");
        assert!(message.contains("first, middle, last, f, m, l"), "message: {message}");
    }

    #[test]
    fn missing_paths_contribute_no_names() {
        let generator = UsernameGenerator::new("{f}{last}").expect("template parses");
        let batch = generator
            .from_paths(&["./no-such-roster.csv"])
            .expect("missing file is not an error");

        assert!(batch.usernames.is_empty());
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn concatenates_names_across_files_in_argument_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = dir.path().join("east.csv");
        let second = dir.path().join("west.txt");
        std::fs::write(&first, "Jane Doe,HR\nWalter White,Chemistry\n").expect("write fixture");
        std::fs::write(&second, "Alice Brown\nJane Doe\n").expect("write fixture");

        let generator = UsernameGenerator::new("{f}{last}").expect("template parses");
        let batch = generator
            .from_paths(&[first, second])
            .expect("batch generates");

        assert_eq!(batch.usernames, vec!["abrown", "jdoe", "wwhite"]);
        assert_eq!(batch.skipped, 0);
    }
}
