use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use monodiam::api::{
    edge_directions, hyperplane_normals, monotone_diameter, representative, sample_diameter,
    FunctionalCfg, OrientationVector,
};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod instance;
mod report;

#[derive(Parser)]
#[command(name = "monodiam-cli")]
#[command(about = "Monotone-diameter runs on polytope skeleton instances")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the canonical edge-direction classes and the padded normals to
    /// hand to the external arrangement builder
    Directions {
        /// Instance JSON (vertices + edges; regions ignored)
        #[arg(long)]
        input: PathBuf,
    },
    /// Full run: fold every region's orientation and report the region
    /// count and the monotone diameter
    Diameter {
        /// Instance JSON (vertices + edges + regions)
        #[arg(long)]
        input: PathBuf,
        /// Optional JSON result artifact
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Monte-Carlo lower bound from random generic functionals
    Sample {
        /// Instance JSON (vertices + edges; regions ignored)
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Functional coordinates are drawn from [-bound, bound]
        #[arg(long, default_value_t = 1000)]
        bound: i64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Directions { input } => directions(input),
        Action::Diameter { input, out } => diameter(input, out),
        Action::Sample {
            input,
            samples,
            seed,
            bound,
        } => sample(input, samples, seed, bound),
    }
}

fn directions(input: PathBuf) -> Result<()> {
    let inst = instance::load(&input)?;
    let dirs = edge_directions(&inst.graph)?;
    tracing::info!(
        vertices = inst.graph.len(),
        edges = inst.graph.edge_count(),
        classes = dirs.len(),
        "directions"
    );
    println!("{}", dirs.len());
    for n in hyperplane_normals(&dirs) {
        let coords: Vec<String> = n.iter().map(|c| c.to_string()).collect();
        println!("[{}]", coords.join(", "));
    }
    Ok(())
}

fn diameter(input: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let inst = instance::load(&input)?;
    let orientations: Vec<OrientationVector> = inst
        .regions
        .iter()
        .enumerate()
        .map(|(i, r)| representative(r).with_context(|| format!("region {i}")))
        .collect::<Result<_>>()?;
    let report = monotone_diameter(&inst.graph, &orientations)?;
    tracing::info!(
        orientations = report.orientation_count,
        diameter = report.diameter,
        "diameter"
    );
    println!("{}", report.orientation_count);
    println!("{}", report.diameter);
    if let Some(out) = out {
        report::write_report(
            &out,
            "diameter",
            json!({ "input": input.to_string_lossy() }),
            json!({
                "orientations": report.orientation_count,
                "diameter": report.diameter,
            }),
        )?;
    }
    Ok(())
}

fn sample(input: PathBuf, samples: usize, seed: u64, bound: i64) -> Result<()> {
    if bound <= 0 {
        bail!("--bound must be positive");
    }
    let inst = instance::load(&input)?;
    let cfg = FunctionalCfg {
        coeff_bound: bound,
        seed,
    };
    let lower = sample_diameter(&inst.graph, &cfg, samples)?;
    tracing::info!(samples, seed, bound, lower, "sample");
    println!("{lower}");
    Ok(())
}
