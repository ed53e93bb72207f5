use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a single word is cased before joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    Lower,
    Upper,
    /// First letter uppercase, rest lowercase
    Capitalize,
    /// Capitalize, but keep minor words lowercase away from the edges
    Title,
}

/// Separator and per-word rules for a word-based convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub separator: &'static str,
    pub first: WordCase,
    pub rest: WordCase,
}

impl Style {
    const fn uniform(separator: &'static str, case: WordCase) -> Self {
        Self {
            separator,
            first: case,
            rest: case,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Convention {
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
    ScreamingKebab,
    Upper,
    Lower,
    Capitalized,
    Sentence,
    Title,
    Dot,
    Path,
    Train,
    Flat,
    UpperFlat,
    Swap,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseConventionError {
    #[error("unknown case convention '{0}' (run `caseconv list` to see the supported ones)")]
    Unknown(String),
}

impl Convention {
    pub const ALL: [Convention; 17] = [
        Convention::Camel,
        Convention::Pascal,
        Convention::Snake,
        Convention::Kebab,
        Convention::Constant,
        Convention::ScreamingKebab,
        Convention::Upper,
        Convention::Lower,
        Convention::Capitalized,
        Convention::Sentence,
        Convention::Title,
        Convention::Dot,
        Convention::Path,
        Convention::Train,
        Convention::Flat,
        Convention::UpperFlat,
        Convention::Swap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Convention::Camel => "camelCase",
            Convention::Pascal => "PascalCase",
            Convention::Snake => "snake_case",
            Convention::Kebab => "kebab-case",
            Convention::Constant => "CONSTANT_CASE",
            Convention::ScreamingKebab => "SCREAMING-KEBAB",
            Convention::Upper => "UPPER CASE",
            Convention::Lower => "lower case",
            Convention::Capitalized => "Capitalized Case",
            Convention::Sentence => "Sentence case",
            Convention::Title => "Title Case",
            Convention::Dot => "dot.case",
            Convention::Path => "path/case",
            Convention::Train => "Train-Case",
            Convention::Flat => "flatcase",
            Convention::UpperFlat => "UPPERFLATCASE",
            Convention::Swap => "sWAP cASE",
        }
    }

    /// Extra names accepted by `FromStr`, already normalized.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Convention::Camel => &["camel", "lowercamel"],
            Convention::Pascal => &["pascal", "uppercamel", "uppercamelcase"],
            Convention::Snake => &["snake"],
            Convention::Kebab => &["kebab", "dash", "dashcase"],
            Convention::Constant => &[
                "constant",
                "screamingsnake",
                "screamingsnakecase",
                "uppersnake",
            ],
            Convention::ScreamingKebab => &["screamingkebabcase", "upperkebab", "cobol"],
            Convention::Upper => &["upper", "allcaps"],
            Convention::Lower => &["lower"],
            Convention::Capitalized => &["capitalized", "capital", "capitalcase"],
            Convention::Sentence => &["sentence"],
            Convention::Title => &["title", "apa"],
            Convention::Dot => &["dot"],
            Convention::Path => &["path", "slash"],
            Convention::Train => &["train", "httpheader"],
            Convention::Flat => &["flat"],
            Convention::UpperFlat => &["upperflat", "screamingflat"],
            Convention::Swap => &["swap", "inverse", "toggle"],
        }
    }

    /// Word-based style, or `None` for conventions that work on raw characters.
    pub fn style(self) -> Option<Style> {
        use WordCase::*;
        let style = match self {
            Convention::Camel => Style {
                separator: "",
                first: Lower,
                rest: Capitalize,
            },
            Convention::Pascal => Style::uniform("", Capitalize),
            Convention::Snake => Style::uniform("_", Lower),
            Convention::Kebab => Style::uniform("-", Lower),
            Convention::Constant => Style::uniform("_", Upper),
            Convention::ScreamingKebab => Style::uniform("-", Upper),
            Convention::Upper => Style::uniform(" ", Upper),
            Convention::Lower => Style::uniform(" ", Lower),
            Convention::Capitalized => Style::uniform(" ", Capitalize),
            Convention::Sentence => Style {
                separator: " ",
                first: Capitalize,
                rest: Lower,
            },
            Convention::Title => Style::uniform(" ", Title),
            Convention::Dot => Style::uniform(".", Lower),
            Convention::Path => Style::uniform("/", Lower),
            Convention::Train => Style::uniform("-", Capitalize),
            Convention::Flat => Style::uniform("", Lower),
            Convention::UpperFlat => Style::uniform("", Upper),
            Convention::Swap => return None,
        };
        Some(style)
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Convention {
    type Err = ParseConventionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Convention::ALL
            .into_iter()
            .find(|conv| {
                normalize(conv.label()) == wanted
                    || conv.aliases().iter().any(|alias| *alias == wanted)
            })
            .ok_or_else(|| ParseConventionError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Convention {
    type Error = ParseConventionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Convention> for String {
    fn from(conv: Convention) -> Self {
        conv.label().to_string()
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
