//! kundli-assess - Build a profile from card ratings
//!
//! Reads a TOML file of statement ratings, one entry per archetype card:
//!
//! ```toml
//! h1 = [4, 5, 4]
//! g3 = [2, 1, 3]
//! ```
//!
//! Each card's three 1-5 ratings are summed into the raw score, and the
//! finished profile is written as JSON. With `--resume`, the listed cards
//! are re-rated on an existing profile and everything else is kept.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use kundli_core::assessment::{Assessment, CardRating};
use kundli_core::{Catalog, Config, UserProfile};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kundli-assess")]
#[command(about = "Build a kundli profile from card ratings")]
#[command(version)]
struct Args {
    /// Display name
    #[arg(long, required_unless_present = "resume", conflicts_with = "resume")]
    name: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long, required_unless_present = "resume", conflicts_with = "resume")]
    dob: Option<String>,

    /// Gender, free text
    #[arg(long, required_unless_present = "resume", conflicts_with = "resume")]
    gender: Option<String>,

    /// Existing profile to re-rate instead of starting a new one
    #[arg(long)]
    resume: Option<PathBuf>,

    /// TOML file mapping archetype ids to three ratings
    #[arg(long)]
    ratings: PathBuf,

    /// Write the profile here (default: print to stdout)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Attach a freshly generated profile id (replaces a resumed one)
    #[arg(long)]
    id: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = kundli_core::logging::init(&config.logging).ok();

    let content = std::fs::read_to_string(&args.ratings)
        .with_context(|| format!("failed to read ratings file {}", args.ratings.display()))?;
    let ratings: BTreeMap<String, Vec<u8>> =
        toml::from_str(&content).context("failed to parse ratings file")?;

    let catalog = Catalog::standard();
    if let Some(unknown) = ratings.keys().find(|id| catalog.get(id).is_none()) {
        anyhow::bail!("Unknown archetype id in ratings file: {}", unknown);
    }

    let mut assessment = start_assessment(&args)?;

    // Rate in catalog order so new scores read h1..h12, g1..g9
    for archetype in catalog {
        let Some(values) = ratings.get(&archetype.id) else {
            continue;
        };
        let card = CardRating::from_slice(values)
            .with_context(|| format!("invalid ratings for {}", archetype.id))?;
        assessment.rate(catalog, &archetype.id, card)?;
    }

    let remaining = assessment.remaining(catalog);
    if !remaining.is_empty() {
        eprintln!(
            "Warning: {} of {} cards unrated ({}); they will score 0",
            remaining.len(),
            catalog.len(),
            remaining.join(", ")
        );
    }

    let mut profile = assessment.finish();
    if args.id {
        profile.id = Some(uuid::Uuid::new_v4().to_string());
    }

    tracing::info!(
        name = %profile.name,
        rated = profile.scores.len(),
        "Assessment complete"
    );

    match &args.out {
        Some(path) => {
            profile
                .save_to(path)
                .with_context(|| format!("failed to write profile to {}", path.display()))?;
            println!("Saved profile for {} to {}", profile.name, path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&profile)?),
    }

    Ok(())
}

fn start_assessment(args: &Args) -> Result<Assessment> {
    if let Some(path) = &args.resume {
        let profile = UserProfile::load_from(path)
            .with_context(|| format!("failed to load profile from {}", path.display()))?;
        tracing::info!(name = %profile.name, rated = profile.scores.len(), "Resuming assessment");
        return Ok(Assessment::resume(profile));
    }

    let (Some(name), Some(dob), Some(gender)) = (&args.name, &args.dob, &args.gender) else {
        anyhow::bail!("--name, --dob and --gender are required without --resume");
    };
    NaiveDate::parse_from_str(dob, "%Y-%m-%d")
        .with_context(|| format!("invalid date of birth '{}', use YYYY-MM-DD", dob))?;

    Ok(Assessment::new(name, dob, gender))
}
