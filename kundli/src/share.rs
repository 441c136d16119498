//! kundli-share - Convert between profile files and share codes
//!
//! Share codes carry name, date of birth, gender and raw scores. Decoding
//! one never restores the profile id.

mod profile_source;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kundli_core::{share, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kundli-share")]
#[command(about = "Encode and decode kundli share codes")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the share code for a profile
    Encode {
        /// Profile JSON file
        profile: String,
    },

    /// Decode a share code into a profile
    Decode {
        /// Share code
        code: String,

        /// Write the profile here (default: print to stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = kundli_core::logging::init(&config.logging).ok();

    match args.command {
        Command::Encode { profile } => cmd_encode(&profile),
        Command::Decode { code, out } => cmd_decode(&code, out),
    }
}

fn cmd_encode(arg: &str) -> Result<()> {
    let profile = profile_source::load_profile(arg)?;
    let code = share::encode(&profile).context("failed to encode profile")?;
    println!("{}", code);
    Ok(())
}

fn cmd_decode(code: &str, out: Option<PathBuf>) -> Result<()> {
    let profile = share::decode(code).context("invalid share code")?;

    match out {
        Some(path) => {
            profile
                .save_to(&path)
                .with_context(|| format!("failed to write profile to {}", path.display()))?;
            println!("Saved profile for {} to {}", profile.name, path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&profile)?),
    }

    Ok(())
}
