//! Demo CLI for unixopts.
//!
//! Declares a handful of options, parses the process arguments and
//! reports what it found.

use anyhow::Context;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use unixopts::{help, Handle, ParseError, Parsed, Parser, Registry};

const USAGE: &str = "Usage: unixopts --output <path> [--dryrun[=<bool>]] [--count <n>] [--json] [--verbose]";

/// The options this program understands
struct DemoOptions {
    registry: Registry,
    dryrun: Handle<bool>,
    output: Handle<String>,
    count: Handle<i32>,
    json: Handle<bool>,
    verbose: Handle<bool>,
}

impl DemoOptions {
    fn declare() -> Self {
        let mut registry = Registry::new();
        let dryrun = registry.declare_boolean(
            "dryrun",
            "If supplied will only report what would be done",
            true,
        );
        let output = registry.declare_string(
            "output",
            "The path to the output folder, must be supplied",
            "",
        );
        let count = registry.declare_integer("count", "How many times to run", 1);
        let json = registry.declare_boolean("json", "Print the parsed options as JSON", false);
        let verbose = registry.declare_boolean(
            "verbose",
            "Enable verbose output for detailed processing information",
            false,
        );

        Self {
            registry,
            dryrun,
            output,
            count,
            json,
            verbose,
        }
    }

    /// Parse, printing help or a diagnostic when parsing stops early
    fn parse(&self, args: &[String]) -> Result<Parsed, ExitCode> {
        match Parser::new().parse(&self.registry, args) {
            Ok(parsed) => Ok(parsed),
            Err(ParseError::HelpRequested) => {
                println!("{}\n", USAGE);
                print!("{}", help::render_help(&self.registry));
                Err(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{} {}", style("error:").for_stderr().red().bold(), e);
                Err(exit_code(e.exit_code()))
            }
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // The first pass only decides the log level; nothing is listening yet.
    let quiet = DemoOptions::declare();
    let verbose = match quiet.parse(&args) {
        Ok(parsed) => *parsed.value(quiet.verbose),
        Err(code) => return code,
    };
    init_logging(verbose);

    let options = DemoOptions::declare();
    let parsed = match options.parse(&args) {
        Ok(parsed) => parsed,
        Err(code) => return code,
    };
    debug!("Parsed arguments:\n{}", parsed);

    if !parsed.supplied(options.output) || parsed.value(options.output).is_empty() {
        eprintln!(
            "{} You must supply an output path",
            style("error:").for_stderr().red().bold()
        );
        return ExitCode::from(1);
    }

    if *parsed.value(options.dryrun) {
        debug!(
            "Dry run: would write {} time(s) to {}",
            parsed.value(options.count),
            parsed.value(options.output)
        );
    }

    match report(&parsed, *parsed.value(options.json)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("error:").for_stderr().red().bold(), e);
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level_string = if verbose {
        "unixopts=debug"
    } else {
        "unixopts=info"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(level_string)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!("Logging initialized");
}

/// Print the option state, as a listing or as JSON
fn report(parsed: &Parsed, json: bool) -> anyhow::Result<()> {
    if json {
        let out =
            serde_json::to_string_pretty(parsed).context("Failed to serialize parsed options")?;
        println!("{}", out);
    } else {
        print!("{}", parsed);
    }
    Ok(())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
