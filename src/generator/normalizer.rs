use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

// Cleaning passes run in this order; each removes every non-overlapping
// match, left to right. One pass per rule, not one combined alternation,
// so the ordering stays explicit.

fn parenthetical_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Also consumes an unmatched trailing "(..." when the close paren is missing.
    RE.get_or_init(|| Regex::new(r"\([^)]+\)?").expect("hardcoded pattern compiles"))
}

fn credential_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ", MD", ", PMP." and the like. Mixed-case suffixes such as ", PhD"
    // are only partially consumed; see DESIGN.md before widening this.
    RE.get_or_init(|| Regex::new(r", ?[a-z]?[A-Z.]+").expect("hardcoded pattern compiles"))
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:Dr|Mrs?|Ms)\.? ?").expect("hardcoded pattern compiles"))
}

fn non_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[^A-Za-z ]|LinkedIn Member").expect("hardcoded pattern compiles")
    })
}

/// Cleans a single raw name. Returns `None` when nothing survives.
pub(crate) fn normalize_name(raw: &str) -> Option<String> {
    let stripped = parenthetical_re().replace_all(raw, "");
    let stripped = credential_re().replace_all(&stripped, "");
    let stripped = title_re().replace(&stripped, "");
    let stripped = non_name_re().replace_all(&stripped, "");

    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    let lowered = collapsed.to_ascii_lowercase();

    if lowered.is_empty() {
        None
    } else {
        Some(lowered)
    }
}

/// Cleans a batch of raw names into a deduplicated set, sorted ascending
/// by byte order.
pub(crate) fn normalize_batch<I>(raw_names: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    raw_names
        .into_iter()
        .filter_map(|raw| normalize_name(raw.as_ref()))
        .collect()
}
