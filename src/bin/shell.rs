//! Binary entry point for the Gloam result-formatting shell.
#![forbid(unsafe_code)]

use std::error::Error;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;
use nu_ansi_term::Color;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gloam_shell::{Format, LineSink, ListResult, PrettyPrinter, ShellError};

#[path = "shell/config.rs"]
mod config;

#[derive(Parser, Debug)]
#[command(
    name = "gloam-shell",
    version,
    about = "Result formatter for the Gloam graph database shell",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Output format for rendered results"
    )]
    format: Option<FormatArg>,

    #[arg(
        long,
        global = true,
        value_name = "COLUMNS",
        allow_hyphen_values = true,
        help = "Maximum line width; -1 leaves lines unbounded"
    )]
    width: Option<i32>,

    #[arg(long, global = true, help = "Wrap lines longer than the configured width")]
    wrap: bool,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "GLOAM_SHELL_CONFIG",
        help = "Config file override"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Pretty-print a captured result document")]
    Render {
        #[arg(value_name = "FILE", help = "Result document; stdin when omitted")]
        file: Option<PathBuf>,
    },

    #[command(about = "Generate completions for your login shell")]
    Completions {
        #[arg(value_enum, value_name = "SHELL")]
        shell: CompletionShell,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum FormatArg {
    Plain,
    Verbose,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => Format::Plain,
            FormatArg::Verbose => Format::Verbose,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    if let Err(err) = run() {
        if io::stderr().is_terminal() {
            eprintln!("{} {err}", Color::Red.bold().paint("error:"));
        } else {
            eprintln!("error: {err}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = config::ShellConfig::load(cli.config.clone())?;

    match &cli.command {
        Command::Render { file } => {
            let payload = read_payload(file.as_deref())?;
            let mut result = ListResult::from_json(&payload)?;
            let printer = build_printer(&cli, &config);
            let mut sink = StdoutSink;
            printer.format(&mut result, &mut sink)?;
        }
        Command::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(*shell, &mut command, name, &mut io::stdout());
        }
    }

    Ok(())
}

/// Flags win over the config file; the config file wins over defaults.
fn build_printer(cli: &Cli, config: &config::ShellConfig) -> PrettyPrinter {
    let format = cli
        .format
        .or(config.format)
        .map(Format::from)
        .unwrap_or_default();
    let width = cli.width.or(config.width).unwrap_or(-1);
    let wrap = cli.wrap || config.wrap.unwrap_or(false);
    debug!(?format, width, wrap, "resolved output options");
    PrettyPrinter::new(format, width, wrap)
}

fn read_payload(file: Option<&Path>) -> Result<String, ShellError> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Prints accepted lines to stdout, dropping blank lines per the sink
/// contract.
struct StdoutSink;

impl LineSink for StdoutSink {
    fn accept(&mut self, line: &str) {
        if !line.trim().is_empty() {
            println!("{line}");
        }
    }
}
