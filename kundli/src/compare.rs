//! kundli-compare - Compatibility between two profiles
//!
//! Each profile argument may be a profile JSON file or a share code.

mod profile_source;

use anyhow::{Context, Result};
use clap::Parser;
use kundli_core::analytics::{compare, CompatibilityResult};
use kundli_core::{Catalog, Config, UserProfile};

#[derive(Parser, Debug)]
#[command(name = "kundli-compare")]
#[command(about = "Compare two kundli profiles")]
#[command(version)]
struct Args {
    /// First profile (JSON file or share code)
    a: String,

    /// Second profile (JSON file or share code)
    b: String,

    /// Output format: text (default) or json
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = kundli_core::logging::init(&config.logging).ok();

    let a = profile_source::load_profile(&args.a)?;
    let b = profile_source::load_profile(&args.b)?;

    let result = compare(&a, &b, Catalog::standard());

    match args.format.as_str() {
        "text" => print_terminal(&a, &b, &result),
        "json" => print_json(&a, &b, &result)?,
        other => anyhow::bail!("Unknown format: {}. Use 'text' or 'json'", other),
    }

    Ok(())
}

fn print_terminal(a: &UserProfile, b: &UserProfile, result: &CompatibilityResult) {
    let title = format!("{} & {}", a.name, b.name);

    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();
    println!("   {}% · {}", result.score, result.match_tier);
    println!("   {}", result.description);
    println!();

    if result.details.is_empty() {
        println!("   No notable pairings between these profiles.");
        println!();
        return;
    }

    print_list("COMPLEMENTARY ENERGIES", &result.details.complementary);
    print_list("POTENTIAL TENSIONS", &result.details.tensions);
    print_list("CONFLICT ZONES", &result.details.conflict_zones);
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{}", heading);
    for item in items {
        println!("   - {}", item);
    }
    println!();
}

fn print_json(a: &UserProfile, b: &UserProfile, result: &CompatibilityResult) -> Result<()> {
    let json = serde_json::json!({
        "a": a.name,
        "b": b.name,
        "score": result.score,
        "match_tier": result.match_tier,
        "description": result.description,
        "details": result.details,
    });

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
