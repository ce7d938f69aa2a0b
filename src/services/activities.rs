// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity tag parsing.

const DELIMITERS: [char; 3] = [';', ',', '|'];

/// Capitalize the first character of every whitespace-delimited word.
/// The rest of each word is left untouched.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Split raw activity text into title-cased tags.
///
/// Order is kept and duplicates are not removed.
pub fn parse_activities(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(DELIMITERS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(title_case)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bird watching"), "Bird Watching");
        assert_eq!(title_case("x-country SKIING"), "X-country SKIING");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_parse_mixed_delimiters() {
        assert_eq!(
            parse_activities(Some("Hiking; Fishing,boating")),
            vec!["Hiking", "Fishing", "Boating"]
        );
        assert_eq!(
            parse_activities(Some("kayaking | bird watching")),
            vec!["Kayaking", "Bird Watching"]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(
            parse_activities(Some("hiking;Hiking;hiking")),
            vec!["Hiking", "Hiking", "Hiking"]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_activities(None).is_empty());
        assert!(parse_activities(Some("")).is_empty());
        assert!(parse_activities(Some(" ; , | ")).is_empty());
    }
}
