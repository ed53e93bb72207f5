pub mod convention;
pub mod detect;
pub mod render;
pub mod tokenizer;

use crate::{Conversion, Report};
use convention::Convention;

/// Convert `input` into `convention`.
///
/// sWAP cASE flips the raw input character by character; every other
/// convention re-renders the tokenized words.
///
/// ```
/// use caseconv::{convert_case, Convention};
///
/// assert_eq!(convert_case("hello world", Convention::Camel), "helloWorld");
/// assert_eq!(convert_case("hello world", Convention::Train), "Hello-World");
/// assert_eq!(convert_case("Hello World", Convention::Swap), "hELLO wORLD");
/// ```
pub fn convert_case(input: &str, convention: Convention) -> String {
    match convention {
        Convention::Swap => render::swap_case(input),
        _ => render::render(&tokenizer::tokenize(input), convention),
    }
}

/// Render `input` into each of `targets`, in order.
pub fn convert_all(input: &str, targets: &[Convention]) -> Vec<Conversion> {
    let words = tokenizer::tokenize(input);
    targets
        .iter()
        .map(|&convention| {
            let output = match convention {
                Convention::Swap => render::swap_case(input),
                _ => render::render(&words, convention),
            };
            Conversion { convention, output }
        })
        .collect()
}

/// Everything a front end shows for one input: detected convention, words
/// and renderings.
pub fn analyze(input: &str, targets: &[Convention]) -> Report {
    Report {
        input: input.to_string(),
        detected: detect::detect(input),
        tokens: tokenizer::tokenize(input)
            .into_iter()
            .map(str::to_string)
            .collect(),
        conversions: convert_all(input, targets),
    }
}
