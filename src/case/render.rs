use super::convention::{Convention, WordCase};

/// Words kept lowercase in Title Case unless they open or close the phrase.
pub const MINOR_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "nor", "as", "at", "by", "for", "from", "in", "into",
    "near", "of", "on", "onto", "to", "with",
];

/// Join `words` into `convention`.
///
/// sWAP cASE has no word rules; it flips the case of the words joined by a
/// single space. Use [`swap_case`] on the raw input to keep its original
/// separators.
pub fn render<S: AsRef<str>>(words: &[S], convention: Convention) -> String {
    let Some(style) = convention.style() else {
        let joined = words
            .iter()
            .map(|word| word.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        return swap_case(&joined);
    };

    let last = words.len().saturating_sub(1);
    let mut out = String::new();

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(style.separator);
        }
        let case = if i == 0 { style.first } else { style.rest };
        apply(word.as_ref(), case, i == 0 || i == last, &mut out);
    }

    out
}

fn apply(word: &str, case: WordCase, at_edge: bool, out: &mut String) {
    match case {
        WordCase::Lower => out.push_str(&word.to_lowercase()),
        WordCase::Upper => out.push_str(&word.to_uppercase()),
        WordCase::Capitalize => capitalize(word, out),
        WordCase::Title if !at_edge && is_minor_word(word) => out.push_str(&word.to_lowercase()),
        WordCase::Title => capitalize(word, out),
    }
}

fn capitalize(word: &str, out: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

fn is_minor_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    MINOR_WORDS.iter().any(|minor| *minor == lower)
}

/// Flip the case of every letter, leaving everything else untouched.
pub fn swap_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}
