//! # misctools
//!
//! A command-line front end for misctoolslib.
//!
//! ## Usage
//!
//! ```bash
//! # Compress integers into ranges
//! misctools range 1 2 3 4 10 15 16 17
//! misctools range --style slice 1 2 3 4 10
//!
//! # Expand a range string back into integers
//! misctools expand "1 to 4 10"
//!
//! # Render a table from comma-separated columns
//! misctools table --column "Name,alpha,beta" --column "Description,first,second"
//!
//! # Sanitize a string, wrap text
//! misctools alnum "chain A/res 10"
//! misctools wrap --width 20 "some long text to wrap"
//!
//! # Any command as JSON
//! misctools --output json range 1 2 3
//! ```

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use misctoolslib::{
    alnum, column_widths, compress_runs, parse_range_string, range_string, tabulate,
    wrap_and_join, wrap_lines, RangeOptions, RangeStyle, Run, TableOptions,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Output of the range command
#[derive(Debug, Serialize)]
struct RangeOutput {
    text: String,
    runs: Vec<Run>,
}

/// Output of the expand command
#[derive(Debug, Serialize)]
struct ExpandOutput {
    values: Vec<i64>,
}

/// Output of the table command
#[derive(Debug, Serialize)]
struct TableOutput {
    widths: Vec<usize>,
    table: String,
}

/// Output of the alnum command
#[derive(Debug, Serialize)]
struct TextOutput {
    text: String,
}

/// Output of the wrap command
#[derive(Debug, Serialize)]
struct WrapOutput {
    text: String,
    lines: Vec<String>,
}

/// Output mode selected with --output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("misctools")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Range strings, text tables and other formatting helpers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(
            Command::new("range")
                .about("Compress integers into a range string")
                .arg(
                    Arg::new("values")
                        .required(true)
                        .num_args(1..)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64))
                        .help("Integers to compress"),
                )
                .args(range_format_args()),
        )
        .subcommand(
            Command::new("expand")
                .about("Expand a range string into integers")
                .arg(
                    Arg::new("text")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Range string to expand"),
                )
                .args(range_format_args()),
        )
        .subcommand(
            Command::new("table")
                .about("Render columns of data as a text table")
                .arg(
                    Arg::new("column")
                        .short('c')
                        .long("column")
                        .required(true)
                        .action(ArgAction::Append)
                        .help("One column of cells (can be specified multiple times)"),
                )
                .arg(
                    Arg::new("delimiter")
                        .short('d')
                        .long("delimiter")
                        .default_value(",")
                        .help("Cell delimiter within a column"),
                )
                .arg(
                    Arg::new("width")
                        .short('w')
                        .long("width")
                        .value_parser(value_parser!(usize))
                        .default_value("79")
                        .help("Total table width"),
                )
                .arg(
                    Arg::new("space")
                        .long("space")
                        .value_parser(value_parser!(usize))
                        .default_value("2")
                        .help("Spaces between columns"),
                )
                .arg(
                    Arg::new("no-header")
                        .long("no-header")
                        .action(ArgAction::SetTrue)
                        .help("Do not treat the first row as a header"),
                ),
        )
        .subcommand(
            Command::new("alnum")
                .about("Replace non-alphanumeric characters")
                .arg(Arg::new("text").required(true).help("Text to sanitize"))
                .arg(
                    Arg::new("replacement")
                        .short('r')
                        .long("replacement")
                        .default_value(misctoolslib::text::DEFAULT_ALNUM_REPLACEMENT)
                        .help("Replacement for each non-alphanumeric character"),
                ),
        )
        .subcommand(
            Command::new("wrap")
                .about("Word-wrap text and join the lines")
                .arg(Arg::new("text").required(true).help("Text to wrap"))
                .arg(
                    Arg::new("width")
                        .short('w')
                        .long("width")
                        .value_parser(value_parser!(usize))
                        .default_value("70")
                        .help("Maximum line width"),
                )
                .arg(
                    Arg::new("join")
                        .short('j')
                        .long("join")
                        .default_value("\n")
                        .hide_default_value(true)
                        .help("String placed between wrapped lines [default: newline]"),
                ),
        )
}

/// Formatting arguments shared by range and expand
fn range_format_args() -> Vec<Arg> {
    vec![
        Arg::new("style")
            .long("style")
            .value_parser(RangeStyle::from_str)
            .help("Preset notation: words, dash or slice"),
        Arg::new("sep")
            .short('s')
            .long("sep")
            .help("Separator between runs"),
        Arg::new("rng")
            .short('r')
            .long("rng")
            .help("Symbol between the start and end of a run"),
        Arg::new("exclusive")
            .long("exclusive")
            .action(ArgAction::SetTrue)
            .help("Display run ends one past the last value"),
        Arg::new("allow-negative")
            .long("allow-negative")
            .action(ArgAction::SetTrue)
            .help("Keep negative integers"),
    ]
}

/// Build range options from a style preset plus explicit overrides
fn extract_range_options(matches: &ArgMatches) -> RangeOptions {
    let style = matches
        .get_one::<RangeStyle>("style")
        .copied()
        .unwrap_or_default();
    let mut options = RangeOptions::from_style(style);

    if let Some(sep) = matches.get_one::<String>("sep") {
        options = options.separator(sep.as_str());
    }
    if let Some(rng) = matches.get_one::<String>("rng") {
        options = options.range_symbol(rng.as_str());
    }
    if matches.get_flag("exclusive") {
        options = options.exclusive_end(true);
    }
    if matches.get_flag("allow-negative") {
        options = options.non_negative_only(false);
    }
    options
}

/// Print either the plain text or the JSON record
fn emit<T: Serialize>(mode: OutputMode, text: &str, record: &T) -> anyhow::Result<()> {
    match mode {
        OutputMode::Text => println!("{}", text),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}

/// Handler for the range command
fn range_handler(matches: &ArgMatches, mode: OutputMode) -> anyhow::Result<()> {
    let values: Vec<i64> = matches
        .get_many::<i64>("values")
        .map(|v| v.copied().collect())
        .unwrap_or_default();
    let options = extract_range_options(matches);
    debug!(?options, count = values.len(), "compressing integers");

    let record = RangeOutput {
        text: range_string(values.iter().copied(), &options)?,
        runs: compress_runs(values, options.non_negative_only)?,
    };
    emit(mode, &record.text, &record)
}

/// Handler for the expand command
fn expand_handler(matches: &ArgMatches, mode: OutputMode) -> anyhow::Result<()> {
    let text = matches
        .get_one::<String>("text")
        .context("missing range string")?;
    let options = extract_range_options(matches);

    let values = parse_range_string(text, &options)?;
    let plain: Vec<String> = values.iter().map(i64::to_string).collect();
    emit(mode, &plain.join(" "), &ExpandOutput { values })
}

/// Handler for the table command
fn table_handler(matches: &ArgMatches, mode: OutputMode) -> anyhow::Result<()> {
    let delimiter = matches
        .get_one::<String>("delimiter")
        .map(|s| s.as_str())
        .unwrap_or(",");
    let columns: Vec<Vec<&str>> = matches
        .get_many::<String>("column")
        .map(|v| v.map(|column| column.split(delimiter).collect()).collect())
        .unwrap_or_default();

    let options = TableOptions::new()
        .width(*matches.get_one::<usize>("width").unwrap_or(&79))
        .space(*matches.get_one::<usize>("space").unwrap_or(&2))
        .header(!matches.get_flag("no-header"));

    let record = TableOutput {
        widths: column_widths(&columns, &options)?,
        table: tabulate(&columns, &options)?,
    };
    emit(mode, &record.table, &record)
}

/// Handler for the alnum command
fn alnum_handler(matches: &ArgMatches, mode: OutputMode) -> anyhow::Result<()> {
    let text = matches
        .get_one::<String>("text")
        .context("missing text")?;
    let replacement = matches
        .get_one::<String>("replacement")
        .map(|s| s.as_str())
        .unwrap_or(misctoolslib::text::DEFAULT_ALNUM_REPLACEMENT);

    let record = TextOutput {
        text: alnum(text, replacement),
    };
    emit(mode, &record.text, &record)
}

/// Handler for the wrap command
fn wrap_handler(matches: &ArgMatches, mode: OutputMode) -> anyhow::Result<()> {
    let text = matches
        .get_one::<String>("text")
        .context("missing text")?;
    let width = *matches
        .get_one::<usize>("width")
        .unwrap_or(&misctoolslib::text::DEFAULT_WRAP_WIDTH);
    let join = matches
        .get_one::<String>("join")
        .map(|s| s.as_str())
        .unwrap_or("\n");

    let record = WrapOutput {
        text: wrap_and_join(text, width, join)?,
        lines: wrap_lines(text, width)?
            .into_iter()
            .map(|line| line.into_owned())
            .collect(),
    };
    emit(mode, &record.text, &record)
}

/// Install the stderr log subscriber
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let mode = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_str(s))
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or(OutputMode::Text);

    match matches.subcommand() {
        Some(("range", sub)) => range_handler(sub, mode),
        Some(("expand", sub)) => expand_handler(sub, mode),
        Some(("table", sub)) => table_handler(sub, mode),
        Some(("alnum", sub)) => alnum_handler(sub, mode),
        Some(("wrap", sub)) => wrap_handler(sub, mode),
        _ => Err(anyhow::anyhow!("unknown command")),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    setup_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
