use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use enquire_core::CallArgs;

/// Enquire — build a queryable view over a set of labels and dispatch calls against it.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Label to include (repeatable).
    #[arg(long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// File with one label per line. Blank lines and `#` comments are skipped.
    #[arg(long, env = "ENQUIRE_LABELS_FILE")]
    pub labels_file: Option<PathBuf>,

    /// Collection kind the labels are wrapped in.
    #[arg(long, value_enum, default_value = "list", env = "ENQUIRE_KIND")]
    pub kind: Kind,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Ordered, duplicates allowed.
    List,
    /// Unique, sorted.
    Set,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer one or more `<label>?` queries.
    Query {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Dispatch an operation against the view and print the result as JSON.
    Call {
        operation: String,

        /// Positional arguments, passed as strings.
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,

        /// Keyword argument as `name=value` (repeatable).
        #[arg(long = "kw", value_name = "NAME=VALUE", value_parser = parse_keyword)]
        keywords: Vec<(String, String)>,
    },

    /// List every canonical identifier and the label it came from.
    Identifiers,
}

/// Assemble call arguments from the command line. Every value is passed
/// as a string; operations that need an int parse it themselves, so a
/// label such as `2024` stays a label.
pub fn call_args(args: &[String], keywords: &[(String, String)]) -> CallArgs {
    keywords.iter().fold(
        CallArgs::positional(args.iter().map(String::as_str)),
        |acc, (name, raw)| acc.with_keyword(name.as_str(), raw.as_str()),
    )
}

fn parse_keyword(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.trim().is_empty() {
        return Err(format!("keyword name cannot be empty in `{raw}`"));
    }
    Ok((name.trim().to_string(), value.to_string()))
}
