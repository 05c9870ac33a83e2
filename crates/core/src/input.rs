//! Loading descriptor lists from caller-supplied text.
//!
//! Two source shapes are supported: a JSON array (objects with a
//! `serial_number` field, or bare strings) and newline-delimited plain
//! text with one serial per line. Loading only validates the container
//! format; serial number content is never inspected.

use serde::Deserialize;

use crate::descriptor::LabelDescriptor;

/// Errors raised while loading a descriptor list.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input was not a valid JSON descriptor array.
    #[error("invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry of a JSON descriptor array, in either accepted shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Descriptor(LabelDescriptor),
    Serial(String),
}

/// Parse a JSON descriptor array.
///
/// Accepts `[{"serial_number": "A1"}, ...]` as well as the shorthand
/// `["A1", ...]`; the two shapes may be mixed. An empty array is valid
/// and yields an empty list.
pub fn from_json_str(input: &str) -> Result<Vec<LabelDescriptor>, InputError> {
    let entries: Vec<JsonEntry> = serde_json::from_str(input)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            JsonEntry::Descriptor(d) => d,
            JsonEntry::Serial(s) => LabelDescriptor::from(s),
        })
        .collect())
}

/// Parse newline-delimited serials, one descriptor per non-blank line.
///
/// Blank lines are skipped so that a trailing newline does not produce a
/// phantom empty label. Lines are taken verbatim apart from the line
/// terminator; interior whitespace is preserved.
pub fn from_lines(input: &str) -> Vec<LabelDescriptor> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(LabelDescriptor::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_entries() {
        let got = from_json_str(r#"[{"serial_number": "A1"}, {"serial_number": "B2"}]"#)
            .expect("valid JSON");
        assert_eq!(
            got,
            vec![LabelDescriptor::new("A1"), LabelDescriptor::new("B2")]
        );
    }

    #[test]
    fn json_bare_string_entries() {
        let got = from_json_str(r#"["A1", "B2"]"#).expect("valid JSON");
        assert_eq!(
            got,
            vec![LabelDescriptor::new("A1"), LabelDescriptor::new("B2")]
        );
    }

    #[test]
    fn json_mixed_entries() {
        let got = from_json_str(r#"["A1", {"serial_number": "B2"}]"#).expect("valid JSON");
        assert_eq!(
            got,
            vec![LabelDescriptor::new("A1"), LabelDescriptor::new("B2")]
        );
    }

    #[test]
    fn json_empty_array() {
        assert!(from_json_str("[]").expect("valid JSON").is_empty());
    }

    #[test]
    fn json_rejects_non_array() {
        assert!(from_json_str(r#"{"serial_number": "A1"}"#).is_err());
        assert!(from_json_str("not json").is_err());
    }

    #[test]
    fn lines_skip_blanks_keep_whitespace() {
        let got = from_lines("A1\n\n  \nB 2\n");
        assert_eq!(
            got,
            vec![LabelDescriptor::new("A1"), LabelDescriptor::new("B 2")]
        );
    }

    #[test]
    fn lines_empty_input() {
        assert!(from_lines("").is_empty());
        assert!(from_lines("\n\n").is_empty());
    }
}
