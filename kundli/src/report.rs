//! kundli-report - Personal report for one profile
//!
//! Prints dominant themes, highlight archetypes and the full per-archetype
//! breakdown for a saved profile or a share code.

mod profile_source;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use kundli_core::analytics::{analyze, dominant_traits, ArchetypeAnalysis, ProfileAnalysis};
use kundli_core::config::ReportFormat;
use kundli_core::format::{format_score, join_natural, score_bar};
use kundli_core::{Catalog, Category, Config, InsightTable, ScoreScale, UserProfile};

const BAR_WIDTH: usize = 15;

#[derive(Parser, Debug)]
#[command(name = "kundli-report")]
#[command(about = "Show the personal report for a kundli profile")]
#[command(version)]
struct Args {
    /// Profile JSON file or share code
    profile: String,

    /// Output format: text, markdown or json (default: from config)
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Number of dominant traits to list (default: from config)
    #[arg(long)]
    top: Option<usize>,
}

/// Everything a report needs, computed once.
struct Report {
    profile: UserProfile,
    analysis: ProfileAnalysis,
    traits: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = kundli_core::logging::init(&config.logging).ok();

    let top = args.top.unwrap_or(config.report.dominant_traits);
    if top == 0 {
        anyhow::bail!("--top must be at least 1");
    }

    let profile = profile_source::load_profile(&args.profile)?;
    let catalog = Catalog::standard();
    let analysis = analyze(&profile, catalog, InsightTable::standard())
        .context("failed to analyze profile")?;
    let traits = dominant_traits(&profile, catalog, top);

    let report = Report {
        profile,
        analysis,
        traits,
    };

    match args.format.unwrap_or(config.report.format) {
        ReportFormat::Text => print_terminal(&report),
        ReportFormat::Markdown => print_markdown(&report),
        ReportFormat::Json => print_json(&report)?,
    }

    Ok(())
}

fn print_terminal(report: &Report) {
    let profile = &report.profile;
    let title = format!("KUNDLI REPORT: {}", profile.name);

    // Header
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!("   Born {}  ·  {}", profile.date_of_birth, profile.gender);
    println!();

    if profile.scores.is_empty() {
        println!("  No cards rated yet. Every archetype reads as 0.");
        println!();
    }

    // Dominant themes
    println!("DOMINANT THEMES");
    if report.traits.is_empty() {
        println!("   (none rated)");
    } else {
        println!("   {}", join_natural(&report.traits));
    }
    println!();

    // Highlights
    println!("HIGHLIGHTS");
    let highlights = [
        ("Core structure", &report.analysis.top_structural),
        ("Driving energy", &report.analysis.top_energetic),
        ("Greatest strength", &report.analysis.top_overall_strength),
        ("Growth area", &report.analysis.top_overall_weakness),
    ];
    for (label, entry) in highlights {
        if let Some(entry) = entry {
            println!(
                "   {:<18} {} ({}) {}",
                label,
                entry.title,
                entry.theme,
                format_score(entry.score, ScoreScale::STANDARD)
            );
        }
    }
    let (low, medium, high) = report.analysis.bucket_counts();
    println!("   Levels: {} high, {} medium, {} low", high, medium, low);
    println!();

    print_terminal_section(Category::Structural, &report.analysis.structural);
    print_terminal_section(Category::Energetic, &report.analysis.energetic);
}

fn print_terminal_section(category: Category, entries: &[ArchetypeAnalysis]) {
    println!("{}S", category.label().to_uppercase());
    for entry in entries {
        println!(
            "   {:<10} {} {:>5}  {:<6} {}",
            entry.title,
            score_bar(entry.score, ScoreScale::STANDARD, BAR_WIDTH),
            format_score(entry.score, ScoreScale::STANDARD),
            entry.bucket.as_str(),
            entry.theme
        );
        println!("              {}", entry.insight);
    }
    println!();
}

fn print_markdown(report: &Report) {
    let profile = &report.profile;

    println!("# Kundli Report: {}", profile.name);
    println!();
    println!("- **Born:** {}", profile.date_of_birth);
    println!("- **Gender:** {}", profile.gender);
    println!();

    println!("## Dominant Themes");
    println!();
    if report.traits.is_empty() {
        println!("*No cards rated yet.*");
    } else {
        for (i, theme) in report.traits.iter().enumerate() {
            println!("{}. {}", i + 1, theme);
        }
    }
    println!();

    println!("## Highlights");
    println!();
    println!("| Highlight | Archetype | Theme | Score |");
    println!("|-----------|-----------|-------|-------|");
    let highlights = [
        ("Core structure", &report.analysis.top_structural),
        ("Driving energy", &report.analysis.top_energetic),
        ("Greatest strength", &report.analysis.top_overall_strength),
        ("Growth area", &report.analysis.top_overall_weakness),
    ];
    for (label, entry) in highlights {
        if let Some(entry) = entry {
            println!(
                "| {} | {} | {} | {} |",
                label,
                entry.title,
                entry.theme,
                format_score(entry.score, ScoreScale::STANDARD)
            );
        }
    }
    println!();

    print_markdown_section(Category::Structural, &report.analysis.structural);
    print_markdown_section(Category::Energetic, &report.analysis.energetic);

    println!("---");
    println!(
        "*Generated by kundli-report on {}*",
        Local::now().format("%Y-%m-%d")
    );
}

fn print_markdown_section(category: Category, entries: &[ArchetypeAnalysis]) {
    println!("## {}s", category.label());
    println!();
    for entry in entries {
        println!(
            "### {}: {} ({}, {})",
            entry.title,
            entry.theme,
            format_score(entry.score, ScoreScale::STANDARD),
            entry.bucket
        );
        println!();
        println!("{}", entry.description);
        println!();
        println!("- **Insight:** {}", entry.insight);
        println!("- **Psychology:** {}", entry.psychology);
        println!();
    }
}

fn print_json(report: &Report) -> Result<()> {
    let json = serde_json::json!({
        "profile": report.profile,
        "generated_at": Local::now().to_rfc3339(),
        "dominant_traits": report.traits,
        "analysis": report.analysis,
    });

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
