use crate::{convert_case, Convention, Report};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const SAMPLE_PHRASE: &str = "parse XML document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub colored: bool,
    /// Only the rendered strings, one per line
    pub quiet: bool,
    pub show_detection: bool,
    pub show_tokens: bool,
}

#[derive(Debug, Serialize)]
struct JsonDetection<'a> {
    input: &'a str,
    detected: Option<Convention>,
}

#[derive(Debug, Serialize)]
struct JsonConvention {
    label: &'static str,
    aliases: &'static [&'static str],
    example: String,
}

fn label_width() -> usize {
    Convention::ALL
        .iter()
        .map(|conv| conv.label().chars().count())
        .max()
        .unwrap_or(0)
}

fn detected_label(detected: Option<Convention>) -> &'static str {
    detected.map(Convention::label).unwrap_or("none")
}

pub fn print_reports(reports: &[Report], options: &OutputOptions) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 && !options.quiet {
                    println!();
                }
                print_text_report(report, options);
            }
        }
        OutputFormat::Json => {
            let json = match reports {
                [single] => serde_json::to_string_pretty(single)?,
                many => serde_json::to_string_pretty(many)?,
            };
            println!("{}", json);
        }
    }
    Ok(())
}

fn print_text_report(report: &Report, options: &OutputOptions) {
    if options.quiet {
        for conversion in &report.conversions {
            println!("{}", conversion.output);
        }
        return;
    }

    let detected = detected_label(report.detected);
    if options.show_detection {
        if options.colored {
            println!(
                "{} {}",
                report.input.bold(),
                format!("({})", detected).yellow()
            );
        } else {
            println!("{} ({})", report.input, detected);
        }
    }

    if options.show_tokens {
        let words = report.tokens.join(" · ");
        if options.colored {
            println!("  {} {}", "words:".dimmed(), words);
        } else {
            println!("  words: {}", words);
        }
    }

    let width = label_width();
    for conversion in &report.conversions {
        let label = format!("{:<width$}", conversion.convention.label(), width = width);
        if options.colored {
            println!("  {} {}", label.cyan(), conversion.output.green().bold());
        } else {
            println!("  {} {}", label, conversion.output);
        }
    }
}

pub fn print_detection(
    input: &str,
    detected: Option<Convention>,
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            let label = detected_label(detected);
            if options.colored && detected.is_some() {
                println!("{}", label.green().bold());
            } else if options.colored {
                println!("{}", label.dimmed());
            } else {
                println!("{}", label);
            }
        }
        OutputFormat::Json => {
            let output = JsonDetection { input, detected };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn print_conventions(options: &OutputOptions) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            let width = label_width();
            if options.colored {
                println!(
                    "{} (example: \"{}\")\n",
                    "Supported conventions".bold(),
                    SAMPLE_PHRASE
                );
            } else {
                println!("Supported conventions (example: \"{}\")\n", SAMPLE_PHRASE);
            }
            for conv in Convention::ALL {
                let label = format!("{:<width$}", conv.label(), width = width);
                let example = convert_case(SAMPLE_PHRASE, conv);
                let aliases = conv.aliases().join(", ");
                if options.colored {
                    println!(
                        "  {} {:<24} {}",
                        label.cyan().bold(),
                        example,
                        aliases.dimmed()
                    );
                } else {
                    println!("  {} {:<24} {}", label, example, aliases);
                }
            }
        }
        OutputFormat::Json => {
            let conventions: Vec<JsonConvention> = Convention::ALL
                .iter()
                .map(|&conv| JsonConvention {
                    label: conv.label(),
                    aliases: conv.aliases(),
                    example: convert_case(SAMPLE_PHRASE, conv),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&conventions)?);
        }
    }
    Ok(())
}
