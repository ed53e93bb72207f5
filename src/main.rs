use anyhow::{Context, Result};
use caseconv::cli::output::{self, OutputFormat, OutputOptions};
use caseconv::history::LastInput;
use caseconv::{analyze, detect, Config, Convention};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "caseconv")]
#[command(version, about = "Convert identifiers between naming conventions", long_about = None)]
struct Cli {
    /// Text to convert; words are joined with spaces. Read from stdin when omitted.
    /// Put `--` first to convert a word that names a subcommand, e.g. `-- list`
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Target convention (repeatable), e.g. camel, snake_case, "Title Case"
    #[arg(short, long = "to", value_name = "CONVENTION")]
    to: Vec<Convention>,

    /// Only print the detected convention
    #[arg(short, long)]
    detect: bool,

    /// Show the words the input was split into
    #[arg(long)]
    tokens: bool,

    /// Treat every input line as a separate input
    #[arg(long)]
    per_line: bool,

    /// Reuse the previous input
    #[arg(long, conflicts_with = "text")]
    last: bool,

    /// Print only the converted strings, one per line
    #[arg(short, long)]
    quiet: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Do not remember this input for --last
    #[arg(long)]
    no_cache: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported conventions with their aliases
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseconv", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && console::Term::stdout().features().colors_supported();
    colored::control::set_override(colored);

    let config = Config::load(cli.to.clone(), cli.tokens, cli.no_cache)?;
    let options = OutputOptions {
        format: cli.format,
        colored,
        quiet: cli.quiet,
        show_detection: config.show_detection,
        show_tokens: config.show_tokens,
    };

    if let Some(Commands::List) = cli.command {
        check_list_args(&cli)?;
        return output::print_conventions(&options);
    }

    let input = read_input(&cli)?;

    if config.remember_last_input && !cli.last {
        if let Err(e) = LastInput::open_default().and_then(|store| store.save(&input)) {
            tracing::warn!("Could not remember input: {:#}", e);
        }
    }

    let inputs: Vec<&str> = if cli.per_line {
        input.lines().filter(|line| !line.trim().is_empty()).collect()
    } else {
        vec![input.as_str()]
    };

    if cli.detect {
        for line in inputs {
            let detected = detect(line);
            tracing::debug!(input = line, ?detected, "detected convention");
            output::print_detection(line, detected, &options)?;
        }
        return Ok(());
    }

    let targets = config.targets();
    let reports: Vec<_> = inputs
        .into_iter()
        .map(|line| analyze(line, &targets))
        .collect();
    output::print_reports(&reports, &options)
}

/// Conversion flags have no effect on `list`.
fn check_list_args(cli: &Cli) -> Result<()> {
    let conversion_flags = [
        ("--to", !cli.to.is_empty()),
        ("--detect", cli.detect),
        ("--tokens", cli.tokens),
        ("--per-line", cli.per_line),
        ("--last", cli.last),
        ("--quiet", cli.quiet),
    ];
    let used: Vec<&str> = conversion_flags
        .iter()
        .filter(|(_, set)| *set)
        .map(|(flag, _)| *flag)
        .collect();

    if !used.is_empty() {
        anyhow::bail!(
            "{} cannot be combined with `list`. \
             To convert the word \"list\", put `--` before it: caseconv [OPTIONS] -- list",
            used.join(", ")
        );
    }
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    if cli.last {
        let store = LastInput::open_default()?;
        return store
            .load()?
            .context("No previous input cached yet. Run caseconv with some text first.");
    }

    if !cli.text.is_empty() {
        return Ok(cli.text.join(" "));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No input given. Pass TEXT or pipe it through stdin; see --help.");
    }

    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("Failed to read input from stdin")?;

    // Keep inner newlines for --per-line, drop the trailing one
    let trimmed_len = input.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
    input.truncate(trimmed_len);
    Ok(input)
}
