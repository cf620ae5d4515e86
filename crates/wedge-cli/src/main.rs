//! wedgegen - parametric golf wedge generator.
//!
//! Loads a YAML parameter file, builds the head through the geometry
//! kernel, writes a STEP artifact, and prints the validation report.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wedge_engine::GenerationOutcome;

#[derive(Parser, Debug)]
#[command(name = "wedgegen")]
#[command(about = "Generate a golf wedge head from a parameter file", version)]
struct Args {
    /// Wedge parameter file (YAML).
    #[arg(short, long)]
    config: PathBuf,

    /// Directory for STEP artifacts.
    #[arg(short, long, default_value = "output/step_files")]
    output: PathBuf,

    /// Print the validation report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let outcome = wedge_engine::generate_to_file(&args.config, &args.output)
        .with_context(|| format!("generating from {}", args.config.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        print_report(&outcome);
    }
    Ok(())
}

fn print_report(outcome: &GenerationOutcome) {
    let report = &outcome.report;
    println!();
    println!("=== Validation Report ===");
    println!("head:    {}", report.name);
    println!("grind:   {}", report.grind);
    println!(
        "solid:   {}",
        if report.solid_valid {
            "closed"
        } else {
            "OPEN (metrics unreliable)"
        }
    );
    println!(
        "mass:    {:.1} g (target {:.1} ± {:.1}) {}",
        report.mass.measured,
        report.mass.target,
        report.mass.tolerance,
        verdict(report.mass.passed)
    );
    println!(
        "cg:      face {:.1} / heel {:.1} / sole {:.1} mm {}",
        report.cg.from_face.measured,
        report.cg.from_heel.measured,
        report.cg.from_sole.measured,
        verdict(report.cg.all_passed())
    );
    println!(
        "bounce:  heel {:.1}  center {:.1}  toe {:.1} deg",
        report.effective_bounce.heel, report.effective_bounce.center, report.effective_bounce.toe
    );
    println!(
        "grooves: {} of {} at {} mm ({})",
        report.grooves.actual,
        report.grooves.requested,
        report.grooves.spacing,
        if report.grooves.usga_compliant {
            "USGA conforming"
        } else {
            "NON-CONFORMING spacing"
        }
    );
    if !report.skipped_features.is_empty() {
        println!("skipped: {}", report.skipped_features.join("; "));
    }
    println!();
    println!("Wrote {}", outcome.step_path.display());
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "MISS"
    }
}
