use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use stylist::models::{AttributeDelta, AttributeRecord, Recommendation};
use stylist::{WizardSession, WizardStage};

#[derive(Parser)]
#[command(name = "stylist")]
#[command(about = "Derive outfit do's and don'ts from three photos")]
struct Cli {
    /// Path to the face (passport style) photo
    #[arg(value_name = "FACE_IMAGE")]
    face: PathBuf,

    /// Path to the wrist photo showing veins
    #[arg(value_name = "VEIN_IMAGE")]
    vein: PathBuf,

    /// Path to the full body photo
    #[arg(value_name = "BODY_IMAGE")]
    body: PathBuf,

    /// Seed the random stages for a reproducible run
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the attribute record and recommendation as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Everything the run produced, for `--json` output.
#[derive(Serialize)]
struct Report<'a> {
    attributes: &'a AttributeRecord,
    recommendation: &'a Recommendation,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mut session = match args.seed {
        Some(seed) => WizardSession::with_seed(seed),
        None => WizardSession::new(),
    };

    // Leave the welcome screen; each upload below advances one step.
    session.advance();

    let uploads = [
        (WizardStage::Face, "Face photo", &args.face),
        (WizardStage::Vein, "Vein photo", &args.vein),
        (WizardStage::Body, "Body photo", &args.body),
    ];

    let mut deltas: Vec<(&str, AttributeDelta)> = Vec::new();
    for (stage, title, path) in uploads {
        debug!(?stage, path = %path.display(), "submitting image");
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let delta = session
            .submit_image(stage, &bytes)
            .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
        debug!(keys = delta.len(), "stage complete");
        deltas.push((title, delta));
        session.advance();
    }

    let recommendation = session.recommendation()?;

    if args.json {
        let report = Report {
            attributes: session.record(),
            recommendation: &recommendation,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (title, delta) in &deltas {
        println!("\n=== {} ===", title);
        for (key, value) in delta {
            println!("  {}: {}", key, value);
        }
    }

    println!("\n=== Recommended Do's ===");
    for item in &recommendation.dos {
        println!("  {}: {}", item.name, item.color);
    }

    println!("\n=== Recommended Don'ts ===");
    for item in &recommendation.donts {
        println!("  {}: {}", item.name, item.color);
    }

    Ok(())
}
