//! Titlefix CLI - converts text to citation-style title case and other cases.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use similar::{ChangeTag, TextDiff};
use titlefix::config::Config;
use titlefix::{CaseType, ConversionResult, Options, Style, convert_batch};

/// Converts text to APA, Chicago, AP, MLA or NYT title case, or to sentence,
/// upper, lower, first-letter, alternating or toggled case.
#[derive(Parser, Debug)]
#[command(name = "titlefix")]
#[command(version, about, long_about = None)]
struct Args {
    /// Text to convert. Without it, lines are read from --file or stdin.
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Read input lines from a file (repeatable).
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Case conversion: title, sentence, upper, lower, first, alt, toggle.
    #[arg(short, long)]
    case_type: Option<String>,

    /// Citation style for title case: apa, chicago, ap, mla, nyt.
    #[arg(short, long)]
    style: Option<String>,

    /// Replace curly quotes with straight ones.
    #[arg(long)]
    straight_quotes: bool,

    /// Keep words that are already fully uppercase.
    #[arg(long)]
    preserve_uppercase: bool,

    /// Additional acronym to keep uppercase (repeatable).
    #[arg(short, long = "acronym", value_name = "WORD")]
    acronyms: Vec<String>,

    /// Print one JSON result per line.
    #[arg(long)]
    json: bool,

    /// Check if input is already converted (exit 1 if not).
    #[arg(long)]
    check: bool,

    /// Print a diff between input and converted output.
    #[arg(long)]
    diff: bool,

    /// List the supported styles and exit.
    #[arg(long)]
    list_styles: bool,

    /// List the supported case types and exit.
    #[arg(long)]
    list_case_types: bool,

    /// Path to a configuration file (default: discover .titlefix.toml).
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore configuration files.
    #[arg(long)]
    no_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_styles {
        for style in Style::ALL {
            println!("{:<8} {}", style.as_str(), style.description());
        }
        return ExitCode::SUCCESS;
    }
    if args.list_case_types {
        for case_type in CaseType::ALL {
            println!("{}", case_type);
        }
        return ExitCode::SUCCESS;
    }

    let options = match resolve_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let inputs = match read_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("converting {} input(s) as {}", inputs.len(), options.case_type);

    let results = convert_batch(&inputs, &options);

    if args.diff {
        print!("{}", render_diff(&inputs, &results));
    } else if args.json {
        for result in &results {
            match serde_json::to_string(result) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("Error serializing result: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    } else if !args.check {
        for result in &results {
            println!("{}", result.text);
        }
    }

    if args.check {
        let mut all_converted = true;
        for (input, result) in inputs.iter().zip(&results) {
            if input != &result.text {
                eprintln!("{}: not converted (expected: {})", input, result.text);
                all_converted = false;
            }
        }
        if !all_converted {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Builds options from the configuration file, then applies command-line
/// overrides on top.
fn resolve_options(args: &Args) -> Result<Options, Box<dyn std::error::Error>> {
    let config = if args.no_config {
        Config::default()
    } else if let Some(path) = &args.config {
        Config::from_file(path)?
    } else {
        let cwd = std::env::current_dir()?;
        Config::discover(&cwd)?
            .map(|(_, config)| config)
            .unwrap_or_default()
    };

    let mut options = config.to_options();
    if let Some(case_type) = &args.case_type {
        options.case_type = case_type.parse()?;
    }
    if let Some(style) = &args.style
        && options.case_type == CaseType::Title
    {
        options.style = style.parse()?;
    }
    options.straight_quotes |= args.straight_quotes;
    options.preserve_uppercase |= args.preserve_uppercase;
    options.acronyms.extend(args.acronyms.iter().cloned());
    Ok(options)
}

/// Collects the texts to convert: the positional text as one input, or every
/// non-empty line of the input files (stdin when none are given).
fn read_inputs(args: &Args) -> io::Result<Vec<String>> {
    if !args.text.is_empty() {
        return Ok(vec![args.text.join(" ")]);
    }

    let mut contents = Vec::new();
    if args.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        contents.push(input);
    } else {
        for file in &args.files {
            let content = fs::read_to_string(file).map_err(|e| {
                io::Error::new(e.kind(), format!("reading {}: {}", file.display(), e))
            })?;
            contents.push(content);
        }
    }

    Ok(contents
        .iter()
        .flat_map(|content| content.lines())
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn render_diff(inputs: &[String], results: &[ConversionResult]) -> String {
    let mut old_text = inputs.join("\n");
    old_text.push('\n');
    let mut new_text = results
        .iter()
        .map(|result| result.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    new_text.push('\n');

    let diff = TextDiff::from_lines(&old_text, &new_text);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(sign);
        out.push_str(change.value());
        if change.missing_newline() {
            out.push('\n');
        }
    }
    out
}
