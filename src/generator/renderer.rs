use super::GenerateError;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Placeholder vocabulary accepted in templates, quoted back to the user
/// when a template references anything else.
pub(crate) const ALLOWED_FIELDS: &str = "first, middle, last, f, m, l";

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^{}]*)\}").expect("hardcoded pattern compiles"))
}

/// A parsed username template.
///
/// Parsing derives which name components the template requires: a
/// component referenced under either its long form or its single-letter
/// initial form must be present in a name for that name to render.
#[derive(Debug, Clone)]
pub struct UsernameTemplate {
    raw: String,
    requires_first: bool,
    requires_middle: bool,
    requires_last: bool,
}

impl UsernameTemplate {
    pub fn parse(raw: &str) -> Result<Self, GenerateError> {
        let mut requires_first = false;
        let mut requires_middle = false;
        let mut requires_last = false;

        for caps in placeholder_re().captures_iter(raw) {
            match &caps[1] {
                "first" | "f" => requires_first = true,
                "middle" | "m" => requires_middle = true,
                "last" | "l" => requires_last = true,
                other => {
                    return Err(GenerateError::UnknownField {
                        field: other.to_string(),
                    })
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            requires_first,
            requires_middle,
            requires_last,
        })
    }

    /// Renders one cleaned name, or `None` when a required component is
    /// missing (a per-name skip, not an error).
    pub fn render(&self, clean_name: &str) -> Option<String> {
        let tokens: Vec<&str> = clean_name.split(' ').collect();
        let n = tokens.len();

        if self.requires_first && n < 1 {
            return None;
        }
        if self.requires_last && n < 2 {
            return None;
        }
        if self.requires_middle && n < 3 {
            return None;
        }

        // Names longer than three tokens only ever contribute the first,
        // second, and final tokens.
        let first = if n >= 1 { tokens[0] } else { "" };
        let last = if n >= 2 { tokens[n - 1] } else { "" };
        let middle = if n >= 3 { tokens[1] } else { "" };

        let rendered = placeholder_re().replace_all(&self.raw, |caps: &Captures<'_>| {
            match &caps[1] {
                "first" => first.to_string(),
                "middle" => middle.to_string(),
                "last" => last.to_string(),
                "f" => initial(first),
                "m" => initial(middle),
                "l" => initial(last),
                // Placeholders were validated in parse().
                _ => caps[0].to_string(),
            }
        });

        Some(rendered.into_owned())
    }
}

fn initial(component: &str) -> String {
    component.chars().next().map(String::from).unwrap_or_default()
}
