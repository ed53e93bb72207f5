// Word segmentation for identifiers in any supported convention.
// Separators are cut per char first; case boundaries are then found per
// grapheme cluster so combining marks stay with their base letter.

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

impl CharClass {
    fn of(grapheme: &str) -> Self {
        let ch = grapheme.chars().next().unwrap_or(' ');
        if ch.is_uppercase() {
            CharClass::Upper
        } else if ch.is_lowercase() {
            CharClass::Lower
        } else if ch.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Characters that always end a word and are dropped from the output.
pub fn is_separator(ch: char) -> bool {
    matches!(ch, '_' | '-' | '.' | '/') || ch.is_whitespace()
}

/// Whether a word starts at `cur`, given its neighbours inside a
/// separator-free run.
fn is_boundary(prev: CharClass, cur: CharClass, next: Option<CharClass>) -> bool {
    use CharClass::*;

    match (prev, cur, next) {
        // getUser, html5Parser
        (Lower | Digit, Upper, _) => true,
        // last capital of an acronym run opens the next word: XML|Document
        (Upper, Upper, Some(Lower)) => true,
        _ => false,
    }
}

/// Split `input` into words, keeping their original casing.
///
/// Never fails and never yields an empty word; input made only of
/// separators produces an empty list.
///
/// ```
/// use caseconv::tokenize;
///
/// assert_eq!(tokenize("parseXMLDocument"), vec!["parse", "XML", "Document"]);
/// assert_eq!(tokenize("MAX_RETRY_COUNT"), vec!["MAX", "RETRY", "COUNT"]);
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    // A prepend mark can pull a separator into its grapheme cluster, so
    // separators are never looked for at grapheme level.
    for run in input.split(is_separator).filter(|run| !run.is_empty()) {
        split_run(run, &mut words);
    }
    words
}

/// Cut a non-empty, separator-free run at its case transitions.
fn split_run<'a>(run: &'a str, words: &mut Vec<&'a str>) {
    let graphemes: Vec<(usize, CharClass)> = run
        .grapheme_indices(true)
        .map(|(offset, g)| (offset, CharClass::of(g)))
        .collect();

    let mut begin = 0;
    for idx in 1..graphemes.len() {
        let (offset, class) = graphemes[idx];
        let prev = graphemes[idx - 1].1;
        let next = graphemes.get(idx + 1).map(|&(_, c)| c);
        if is_boundary(prev, class, next) {
            words.push(&run[begin..offset]);
            begin = offset;
        }
    }

    words.push(&run[begin..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_splitting() {
        assert_eq!(tokenize("snake_case_word"), vec!["snake", "case", "word"]);
        assert_eq!(tokenize("kebab-case"), vec!["kebab", "case"]);
        assert_eq!(tokenize("dot.case"), vec!["dot", "case"]);
        assert_eq!(tokenize("path/to/file"), vec!["path", "to", "file"]);
        assert_eq!(tokenize("hello world"), vec!["hello", "world"]);
        assert_eq!(tokenize("tab\tand\nnewline"), vec!["tab", "and", "newline"]);
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(
            tokenize("__leading--and..trailing//"),
            vec!["leading", "and", "trailing"]
        );
        assert_eq!(tokenize(" -_./ "), Vec::<&str>::new());
        assert_eq!(tokenize(""), Vec::<&str>::new());
    }

    #[test]
    fn test_camel_case_splitting() {
        assert_eq!(tokenize("camelCaseWord"), vec!["camel", "Case", "Word"]);
        assert_eq!(tokenize("PascalCase"), vec!["Pascal", "Case"]);
        assert_eq!(tokenize("getUser"), vec!["get", "User"]);
    }

    #[test]
    fn test_acronym_runs() {
        assert_eq!(tokenize("parseXMLDocument"), vec!["parse", "XML", "Document"]);
        assert_eq!(tokenize("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(tokenize("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(tokenize("getHTTP"), vec!["get", "HTTP"]);
        assert_eq!(tokenize("ABC"), vec!["ABC"]);
    }

    #[test]
    fn test_single_capitals() {
        assert_eq!(tokenize("AUser"), vec!["A", "User"]);
        assert_eq!(tokenize("aXa"), vec!["a", "Xa"]);
        assert_eq!(tokenize("A"), vec!["A"]);
    }

    #[test]
    fn test_digits_stay_attached() {
        assert_eq!(tokenize("utf8"), vec!["utf8"]);
        assert_eq!(tokenize("html5Parser"), vec!["html5", "Parser"]);
        assert_eq!(tokenize("MP3Player"), vec!["MP3", "Player"]);
        assert_eq!(tokenize("XML2json"), vec!["XML2json"]);
        assert_eq!(tokenize("version_2"), vec!["version", "2"]);
    }

    #[test]
    fn test_lowercase_word_is_single_token() {
        assert_eq!(tokenize("helloworld"), vec!["helloworld"]);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(tokenize("échecÉlevé"), vec!["échec", "Élevé"]);
        assert_eq!(tokenize("größe_maß"), vec!["größe", "maß"]);
        // e + combining acute stays one grapheme
        assert_eq!(tokenize("cafe\u{301}Noir"), vec!["cafe\u{301}", "Noir"]);
    }

    #[test]
    fn test_other_characters_do_not_split() {
        assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
        assert_eq!(tokenize("$refCount"), vec!["$ref", "Count"]);
    }

    #[test]
    fn test_tokens_never_empty_or_contain_separators() {
        let inputs = [
            "a__b",
            "--X--",
            "fooBAR_baz-QUX.quux/Zot",
            "  a  ",
            "foo\u{600}_bar",
            "\u{600} x",
            "_\u{301}_",
        ];
        for input in inputs {
            for word in tokenize(input) {
                assert!(!word.is_empty());
                assert!(!word.chars().any(is_separator), "{:?} in {:?}", word, input);
            }
        }
    }

    #[test]
    fn test_prepend_mark_does_not_swallow_separator() {
        // U+0600 joins the following char into one grapheme cluster
        assert_eq!(tokenize("foo\u{600}_bar"), vec!["foo\u{600}", "bar"]);
        assert_eq!(tokenize("\u{600} "), vec!["\u{600}"]);
    }
}
