mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lodestone::config::LodestoneConfig;
use lodestone::targets::OwnerId;

use cli::Session;

#[derive(Parser)]
#[command(name = "lodestone", version, about = "Per-owner named coordinate targets")]
struct Cli {
    /// Config file (default: ~/.lodestone/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Owner identity (UUID) the command acts for
    #[arg(long, global = true)]
    owner: Option<OwnerId>,

    /// World the owner is currently in
    #[arg(long, global = true)]
    world: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save the current position under a name
    Set {
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, allow_hyphen_values = true)]
        z: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        yaw: f32,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        pitch: f32,
    },
    /// List saved targets
    List,
    /// Show where a saved target is
    Track { name: String },
    /// Delete a saved target
    Remove { name: String },
    /// Print target names starting with a prefix (case-insensitive)
    Complete {
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Dump every owner's targets as JSON to stdout
    Export,
    /// Show dataset totals
    Stats,
}

impl Command {
    fn acts_for_owner(&self) -> bool {
        !matches!(self, Command::Export | Command::Stats)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LodestoneConfig::load_from(path)?,
        None => LodestoneConfig::load()?,
    };

    // Log to stderr so stdout stays clean for command output and JSON export.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.command.acts_for_owner() {
        if let Some(world) = cli.world.as_deref() {
            if config.is_world_ignored(world) {
                println!("You cannot use targets in this world.");
                return Ok(());
            }
        }
    }

    let mut session = Session::open(&config);

    let mutated = match cli.command {
        Command::Set {
            name,
            x,
            y,
            z,
            yaw,
            pitch,
        } => {
            let owner = require_owner(cli.owner)?;
            let world = cli.world.context("`set` needs --world")?;
            let here = cli::set::HostPosition::new(world, x, y, z, yaw, pitch);
            cli::set::set(&mut session, owner, &name, &here)
        }
        Command::List => {
            cli::list::list(&session, require_owner(cli.owner)?);
            false
        }
        Command::Track { name } => {
            cli::track::track(&session, require_owner(cli.owner)?, &name);
            false
        }
        Command::Remove { name } => cli::remove::remove(&mut session, require_owner(cli.owner)?, &name),
        Command::Complete { prefix } => {
            cli::complete::complete(&session, require_owner(cli.owner)?, &prefix);
            false
        }
        Command::Export => {
            cli::export::export(&session)?;
            false
        }
        Command::Stats => {
            cli::stats::stats(&session);
            false
        }
    };

    session.shutdown(mutated)
}

fn require_owner(owner: Option<OwnerId>) -> Result<OwnerId> {
    owner.context("this command needs --owner <uuid>")
}
