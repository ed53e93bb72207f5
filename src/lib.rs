pub mod case;
pub mod cli;
pub mod config;
pub mod history;

pub use case::convention::{Convention, ParseConventionError};
pub use case::detect::detect;
pub use case::render::{render, swap_case};
pub use case::tokenizer::tokenize;
pub use case::{analyze, convert_all, convert_case};
pub use config::Config;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub convention: Convention,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub input: String,
    pub detected: Option<Convention>,
    pub tokens: Vec<String>,
    pub conversions: Vec<Conversion>,
}
