// CLI module - command-line argument parsing and handlers
//
// Default mode formats each value on its own line:
//   numfmt 1234.5678 -p 2        -> 1,234.57
//   numfmt -a 1500 2500000       -> 1.5K / 2.5M
//   echo "1000 2000" | numfmt -a -> 1K / 2K
//
// The config subcommand manages the config file:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use numfmt::config::{Config, VERSION};
use numfmt::NumberFormatter;
use std::io::{BufRead, Write};
use std::path::Path;

/// Format numbers for human-readable display
#[derive(Parser, Debug)]
#[command(name = "numfmt")]
#[command(version = VERSION)]
#[command(about = "Format numbers for human-readable display", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    /// Numbers to format (read from stdin when omitted)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Maximum fraction digits
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Abbreviate thousands and millions with K/M
    #[arg(short, long)]
    pub abbreviate: bool,

    /// Locale for grouping and decimal marks (e.g. "de", "en_IN.UTF-8")
    #[arg(short, long)]
    pub locale: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// What a `config` invocation asks for; flags are checked in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Path,
    Show,
    Reset,
    Usage,
}

impl ConfigAction {
    fn from_flags(show: bool, reset: bool, path: bool) -> Self {
        if path {
            Self::Path
        } else if show {
            Self::Show
        } else if reset {
            Self::Reset
        } else {
            Self::Usage
        }
    }

    /// Only `--show` reads the config; the rest must work with a broken file
    pub fn needs_config(&self) -> bool {
        matches!(self, Self::Show)
    }
}

impl Cli {
    pub fn config_action(&self) -> Option<ConfigAction> {
        match self.command {
            Some(Commands::Config { show, reset, path }) => {
                Some(ConfigAction::from_flags(show, reset, path))
            }
            None => None,
        }
    }
}

/// Run config commands that don't need a loaded config
///
/// Returns None when the command needs `Config::from_env()` first.
pub fn run_standalone(cli: &Cli) -> Option<Result<()>> {
    let action = cli.config_action()?;
    if action.needs_config() {
        return None;
    }
    let config_path = Config::config_path();

    match action {
        ConfigAction::Path => Some(write_config_path(
            config_path.as_deref(),
            &mut std::io::stdout().lock(),
        )),
        ConfigAction::Reset => Some(reset_config(
            config_path.as_deref(),
            std::io::stdin().lock(),
        )),
        ConfigAction::Usage => {
            println!("Usage: numfmt config [--show|--reset|--path]");
            println!();
            println!("Options:");
            println!("  --show    Display effective configuration");
            println!("  --reset   Reset config file to defaults");
            println!("  --path    Show config file path");
            Some(Ok(()))
        }
        ConfigAction::Show => None,
    }
}

/// Dispatch a parsed command line against the loaded config
pub fn run(cli: Cli, config: Config) -> Result<()> {
    if let Some(result) = run_standalone(&cli) {
        return result;
    }

    match cli.command {
        Some(Commands::Config { .. }) => handle_config_show(&config),
        None => handle_format(cli.format, config),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

fn handle_format(args: FormatArgs, config: Config) -> Result<()> {
    let config = apply_overrides(config, &args);
    let formatter = config.formatter()?;

    let tokens = if args.values.is_empty() {
        read_tokens(std::io::stdin().lock())?
    } else {
        args.values
    };

    let lines = render_values(&formatter, config.abbreviate, &tokens)?;

    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line).context("failed to write output")?;
    }
    Ok(())
}

/// Command-line flags win over env and file settings
fn apply_overrides(mut config: Config, args: &FormatArgs) -> Config {
    if let Some(precision) = args.precision {
        config.precision = precision;
    }
    if let Some(locale) = &args.locale {
        config.locale = Some(locale.clone());
    }
    config.abbreviate |= args.abbreviate;
    config
}

/// Split input into whitespace-separated tokens
fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read stdin")?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

fn parse_value(token: &str) -> Result<f64> {
    let value: f64 = token
        .parse()
        .with_context(|| format!("invalid number: {:?}", token))?;
    Ok(value)
}

/// Format every token, failing on the first one that isn't a number
fn render_values(
    formatter: &NumberFormatter,
    abbreviate: bool,
    tokens: &[String],
) -> Result<Vec<String>> {
    tokens
        .iter()
        .map(|token| {
            let value = parse_value(token)?;
            Ok(if abbreviate {
                formatter.format_abbreviated(value)
            } else {
                formatter.format(value)
            })
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Config subcommand
// ─────────────────────────────────────────────────────────────────────────────

fn write_config_path<W: Write>(path: Option<&Path>, out: &mut W) -> Result<()> {
    let Some(path) = path else {
        bail!("could not determine config path");
    };
    writeln!(out, "{}", path.display())?;
    Ok(())
}

fn handle_config_show(config: &Config) -> Result<()> {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // The template comments out an unset locale; name the one actually used
    println!();
    match config.effective_locale() {
        Ok(locale) => println!("# Effective locale: {}", locale.name()),
        Err(e) => println!("# Effective locale: invalid ({:#})", e),
    }

    // Show source info
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

/// Overwrite the config file with defaults, asking first if it exists
fn reset_config<R: BufRead>(path: Option<&Path>, mut confirm: R) -> Result<()> {
    let Some(path) = path else {
        bail!("could not determine config path");
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        confirm
            .read_line(&mut input)
            .context("failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_default(path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
