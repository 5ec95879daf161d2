//! packmatch: attribute and version resolution for software packs
//!
//! Diagnostic front end for the matching engine: compare versions, select
//! versions for filters, resolve vendors and inspect attribute matches.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use packmatch::{
    cli,
    config::{load_or_default, AppConfig, ConfigPreset, OutputFormat},
    VendorRegistry,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "packmatch")]
#[command(version)]
#[command(about = "Attribute and version resolution for software packs", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Match found / version selected
    1  No match, no satisfying version, or error

EXAMPLES:
    # Compare two versions (prints the scaled difference)
    packmatch compare 6.4.0 6.5.0

    # Pick the best version for a filter
    packmatch select @>=1.0.0 1.1.1 2.2.2 3.3.3

    # Check vendor synonyms
    packmatch vendor match Freescale NXP:11

    # Derive identifiers from attributes
    packmatch attrs id Cclass=Device Cgroup=Startup Cvendor=ARM Cversion=1.0.0")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "PACKMATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Configuration preset applied on top of the config file (default, compatible, lenient)
    #[arg(long, global = true)]
    preset: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// First version
    first: String,

    /// Second version
    second: String,

    /// Compare alphanumeric segments ignoring case
    #[arg(short, long)]
    ignore_case: bool,

    /// Reject versions that are not strict `MAJOR.MINOR.PATCH[-pre][+build]`
    #[arg(short, long)]
    strict: bool,
}

/// Arguments for the `range` subcommand
#[derive(Parser)]
struct RangeArgs {
    /// Version to check
    #[arg(value_name = "VERSION")]
    subject: String,

    /// Range as `min`, `min:max` or `min:max-` (exclusive maximum)
    range: String,

    /// Reject a higher major version when the range has no maximum
    #[arg(short, long)]
    compatible: bool,
}

/// Arguments for the `select` subcommand
#[derive(Parser)]
struct SelectArgs {
    /// Version filter: a range or an `@` selector (`@1.2.0`, `@>=1.2.0`)
    filter: String,

    /// Available versions
    #[arg(required = true)]
    versions: Vec<String>,

    /// Reject a higher major version when the range has no maximum
    #[arg(short, long)]
    compatible: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two versions
    Compare(CompareArgs),

    /// Check whether a version lies inside a range
    Range(RangeArgs),

    /// Select the best version for a filter
    Select(SelectArgs),

    /// Match two strings with wildcards (`?`, `*`, `[...]`) on either side
    Wildcard {
        /// First string or pattern
        first: String,
        /// Second string or pattern
        second: String,
    },

    /// Resolve vendor names and ids
    Vendor {
        #[command(subcommand)]
        action: VendorAction,
    },

    /// Derive identifiers and match attribute sets
    Attrs {
        #[command(subcommand)]
        action: AttrsAction,
    },

    /// Show or create configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum VendorAction {
    /// Print the canonical vendor name
    Canonical {
        /// Vendor as `Name`, `Name:Id` or `:Id`
        vendor: String,
    },
    /// Print the vendor as `Name:Id`
    Full {
        /// Vendor as `Name`, `Name:Id` or `:Id`
        vendor: String,
    },
    /// Check whether two vendor strings denote the same vendor
    Match {
        first: String,
        second: String,
    },
}

#[derive(Subcommand)]
enum AttrsAction {
    /// Print all identifiers derived from `name=value` attributes
    Id {
        /// Attributes as `name=value`
        #[arg(required = true)]
        attributes: Vec<String>,

        /// Element tag of the entry (e.g. `component`, `api`)
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Evaluate all matching predicates of an entry against a request
    Match {
        /// Entry attribute as `name=value` (repeatable)
        #[arg(short, long = "entry", required = true)]
        entry: Vec<String>,

        /// Request attribute as `name=value` (repeatable)
        #[arg(short, long = "request")]
        request: Vec<String>,

        /// Element tag of the entry (e.g. `component`, `api`)
        #[arg(short, long)]
        tag: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Show the discovered config file path
    Path,
    /// Write an example config file
    Init {
        /// Target path (defaults to `.packmatch.yaml` in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (config, loaded_from) = load_config(&cli)?;
    install_vendor_registry(&config)?;
    let format = cli.format.unwrap_or(config.output.format);

    let satisfied = match cli.command {
        Commands::Compare(args) => {
            let case_sensitive = config.matching.case_sensitive && !args.ignore_case;
            cli::run_compare(&args.first, &args.second, case_sensitive, args.strict, format)?;
            true
        }
        Commands::Range(args) => {
            let compatible = args.compatible || config.matching.compatible;
            cli::run_range(&args.subject, &args.range, compatible, format)?
        }
        Commands::Select(args) => {
            let compatible = args.compatible || config.matching.compatible;
            cli::run_select(&args.filter, &args.versions, compatible, format)?
        }
        Commands::Wildcard { first, second } => cli::run_wildcard(&first, &second, format)?,

        Commands::Vendor { action } => {
            let vendors = VendorRegistry::shared();
            match action {
                VendorAction::Canonical { vendor } => {
                    cli::run_vendor_canonical(vendors, &vendor, format)?;
                    true
                }
                VendorAction::Full { vendor } => {
                    cli::run_vendor_full(vendors, &vendor, format)?;
                    true
                }
                VendorAction::Match { first, second } => {
                    cli::run_vendor_match(vendors, &first, &second, format)?
                }
            }
        }

        Commands::Attrs { action } => {
            let vendors = VendorRegistry::shared();
            match action {
                AttrsAction::Id { attributes, tag } => {
                    cli::run_attrs_id(vendors, &attributes, tag.as_deref(), format)?;
                    true
                }
                AttrsAction::Match {
                    entry,
                    request,
                    tag,
                } => cli::run_attrs_match(vendors, &entry, &request, tag.as_deref(), format)?,
            }
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    cli::run_config_show(&config, loaded_from.as_deref(), format)?;
                }
                ConfigAction::Path => cli::run_config_path(cli.config.as_deref())?,
                ConfigAction::Init { output, force } => cli::run_config_init(output, force)?,
                ConfigAction::Schema { output } => cli::run_config_schema(output.as_deref())?,
            }
            true
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "packmatch", &mut io::stdout());
            true
        }
    };

    if !satisfied {
        std::process::exit(1);
    }
    Ok(())
}

/// Load the config file and apply the preset, if any.
fn load_config(cli: &Cli) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }
    let (mut config, loaded_from) = load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    if let Some(name) = &cli.preset {
        let Some(preset) = ConfigPreset::from_name(name) else {
            let valid: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
            bail!("Unknown preset: {name}. Valid options: {}", valid.join(", "));
        };
        config.merge(&AppConfig::from_preset(preset));
    }
    Ok((config, loaded_from))
}

/// Install the process-wide vendor registry before any command runs.
fn install_vendor_registry(config: &AppConfig) -> Result<()> {
    let registry = if config.vendors.is_builtin_only() {
        VendorRegistry::builtin()
    } else {
        VendorRegistry::from_config(&config.vendors).context("invalid vendor configuration")?
    };
    VendorRegistry::install(registry).context("failed to install vendor registry")?;
    tracing::debug!(
        "Installed vendor registry (builtin only: {})",
        config.vendors.is_builtin_only()
    );
    Ok(())
}
