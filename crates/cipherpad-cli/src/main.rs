//! Cipherpad binary.
//!
//! # Usage
//!
//! ```bash
//! # Encrypt with a random mapping, showing the mapping table
//! cipherpad --show-map "meet me at noon"
//!
//! # Reproducible mapping with a couple of overrides
//! cipherpad --seed 7 --set a=4 --set e=3 "attack at dawn"
//!
//! # Decrypt from stdin against a hand-built mapping
//! echo "12 c12" | cipherpad --blank --set a=1 --set b=2 --mode decrypt
//! ```

use std::io::{self, Read};

use cipherpad_cli::{Assignment, CliEnv, Session, run, strip_line_ending};
use cipherpad_client::{DEFAULT_GROUPS, InitialMapping, Mode, Workbench, WorkbenchConfig};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Transform direction.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Encrypt,
    Decrypt,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Encrypt => Self::Encrypt,
            ModeArg::Decrypt => Self::Decrypt,
        }
    }
}

/// Cipherpad substitution workbench
#[derive(Parser, Debug)]
#[command(name = "cipherpad")]
#[command(about = "Encrypt or decrypt text with a letter substitution mapping")]
#[command(version)]
struct Args {
    /// Message to transform (read from stdin when omitted)
    message: Option<String>,

    /// Transform direction
    #[arg(short, long, value_enum, default_value = "encrypt")]
    mode: ModeArg,

    /// Seed for the shuffled starting mapping
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start from the identity mapping instead of a shuffle
    #[arg(long, conflicts_with = "blank")]
    identity: bool,

    /// Start with every entry unset
    #[arg(long)]
    blank: bool,

    /// Mapping edit LETTER=INPUT (repeatable; empty INPUT clears)
    #[arg(long = "set", value_name = "LETTER=INPUT")]
    assignments: Vec<Assignment>,

    /// Number of columns in the mapping table
    #[arg(long, default_value_t = DEFAULT_GROUPS)]
    groups: usize,

    /// Print the mapping table before the output
    #[arg(long)]
    show_map: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let env = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded mapping");
            CliEnv::seeded(seed)
        },
        None => CliEnv::system(),
    };

    let initial_mapping = if args.identity {
        InitialMapping::Identity
    } else if args.blank {
        InitialMapping::Unset
    } else {
        InitialMapping::Shuffled
    };

    let config = WorkbenchConfig {
        groups: args.groups,
        initial_mode: args.mode.into(),
        initial_mapping,
        ..WorkbenchConfig::default()
    };
    let mut workbench = Workbench::new(env, config)?;

    let message = match args.message {
        Some(message) => message,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            strip_line_ending(&buffer).to_string()
        },
    };

    let session = Session { assignments: args.assignments, message, show_map: args.show_map };
    run(&mut workbench, &session, &mut io::stdout().lock())?;

    Ok(())
}
