//! seqlist CLI entry point.

use seqlist_codec::Format;
use seqlist_runtime::config::ENV_LOG;
use seqlist_runtime::{Repl, RuntimeConfig, verbosity_filter};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    no_banner: bool,
    data_dir: Option<PathBuf>,
    format: Option<Format>,
    verbosity: u8,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            "--no-banner" => config.no_banner = true,
            "-d" | "--data-dir" => {
                i += 1;
                if i >= args.len() {
                    return Err("--data-dir requires a value".into());
                }
                config.data_dir = Some(PathBuf::from(&args[i]));
            }
            "-f" | "--format" => {
                i += 1;
                if i >= args.len() {
                    return Err("--format requires a value".into());
                }
                config.format = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --format value: {}", args[i]))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.scripts.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_new(filter).map_err(|e| format!("invalid log filter '{filter}': {e}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("seqlist {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = RuntimeConfig::from_env()?;
    if env::var_os(ENV_LOG).is_none() || cli.verbosity > 0 {
        config = config.with_log_filter(verbosity_filter(cli.verbosity));
    }
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    if let Some(format) = cli.format {
        config = config.with_default_format(format);
    }
    if cli.no_banner || !cli.scripts.is_empty() {
        config = config.with_banner(false);
    }

    init_logging(&config.log_filter)?;
    debug!(?config, "starting");

    let mut repl = Repl::new(config)?;

    for script in &cli.scripts {
        if let Err(e) = repl.run_script(script) {
            return Err(match &e.context {
                Some(context) => format!("{e} ({context})").into(),
                None => e.into(),
            });
        }
    }

    if cli.batch_mode {
        return Ok(());
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mseqlist\x1b[0m - Typed sequence shell

\x1b[1mUSAGE:\x1b[0m
    seqlist [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Command files to run before starting the shell

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Run scripts and exit (no shell)
    -d, --data-dir DIR     Resolve relative save/load paths against DIR
    -f, --format FORMAT    Default file format: text or bin
    -v, --verbose          Increase log output (repeatable)
    --no-banner            Do not print the welcome banner

\x1b[1mENVIRONMENT:\x1b[0m
    SEQLIST_DATA_DIR       Default for --data-dir
    SEQLIST_FORMAT         Default for --format
    SEQLIST_LOG            Log filter directives (e.g. seqlist_codec=debug)

\x1b[1mEXAMPLES:\x1b[0m
    seqlist                          Start the interactive shell
    seqlist setup.txt                Run setup.txt, then start the shell
    seqlist -b -f bin build.txt      Run build.txt with binary files and exit

\x1b[1mSHELL COMMANDS:\x1b[0m
    new <type>           Start an empty sequence (Integer, Double, String, Fraction)
    add <value>          Append a value
    sort                 Sort ascending
    save <path> [fmt]    Save to a file
    load <path> [fmt]    Load from a file
    help                 List every command
    Ctrl+D               Exit the shell
    Ctrl+C               Cancel current input"
    );
}
