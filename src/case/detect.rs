use super::convention::Convention;
use super::tokenizer::is_separator;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whole-string shapes for the separated conventions
    static ref CONSTANT: Regex = Regex::new(r"^[\p{Lu}\d_]+$").unwrap();
    static ref SNAKE: Regex = Regex::new(r"^[\p{Ll}\d_]+$").unwrap();
    static ref SCREAMING_KEBAB: Regex = Regex::new(r"^[\p{Lu}\d-]+$").unwrap();
    // Empty hyphen segments are allowed, as in the kebab shapes
    static ref TRAIN: Regex = Regex::new(
        r"^(?:\d*\p{Lu}[\p{Ll}\d]*|\d+)?(?:-(?:\d*\p{Lu}[\p{Ll}\d]*|\d+)?)+$"
    )
    .unwrap();
    static ref KEBAB: Regex = Regex::new(r"^[\p{Ll}\d-]+$").unwrap();
    static ref DOT: Regex = Regex::new(r"^[\p{Ll}\d.]+$").unwrap();
    static ref PATH: Regex = Regex::new(r"^[\p{Ll}\d/]+$").unwrap();
}

/// Classify `input` into the single convention it is already written in.
///
/// Rules are tried in order and the first match wins, so an all-caps
/// hyphenated string is SCREAMING-KEBAB rather than kebab-case. Returns
/// `None` for empty input, single words and anything ambiguous.
pub fn detect(input: &str) -> Option<Convention> {
    if input.trim().is_empty() {
        return None;
    }

    // Nothing to classify without at least one cased letter
    if !input.chars().any(|c| c.is_uppercase() || c.is_lowercase()) {
        return None;
    }

    let separated = [
        ('_', &*CONSTANT, Convention::Constant),
        ('_', &*SNAKE, Convention::Snake),
        ('-', &*SCREAMING_KEBAB, Convention::ScreamingKebab),
        ('-', &*TRAIN, Convention::Train),
        ('-', &*KEBAB, Convention::Kebab),
        ('.', &*DOT, Convention::Dot),
        ('/', &*PATH, Convention::Path),
    ];

    for (separator, shape, convention) in separated {
        if input.contains(separator) && shape.is_match(input) {
            return Some(convention);
        }
    }

    if input.chars().any(is_separator) {
        return None;
    }

    let mut chars = input.chars();
    let first = chars.next()?;

    if first.is_uppercase() {
        let mut seen_lower = false;
        for ch in chars {
            if ch.is_lowercase() {
                seen_lower = true;
            } else if ch.is_uppercase() && seen_lower {
                return Some(Convention::Pascal);
            }
        }
        None
    } else if first.is_lowercase() && chars.any(char::is_uppercase) {
        Some(Convention::Camel)
    } else {
        None
    }
}
