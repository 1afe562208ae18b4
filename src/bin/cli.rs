// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tribary CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use nalgebra::Point3;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tribary::cli::{parse_point, Reporter};
use tribary::{closest_batch, io, FallbackStrategy, KernelConfig, ScatterSampler, Triangle};

#[derive(Parser)]
#[command(name = "tribary")]
#[command(about = "Tribary - closest point on a triangle as barycentric coordinates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./tribary.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Closest point for a single query
    Query {
        /// Triangle vertices v0 v1 v2, each as x,y,z
        #[arg(short, long, num_args = 3, required = true, value_parser = parse_point, allow_hyphen_values = true)]
        triangle: Vec<Point3<f64>>,

        /// Query point as x,y,z
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point3<f64>,

        /// Edge fallback strategy (first-failing, voronoi)
        #[arg(short, long)]
        strategy: Option<FallbackStrategy>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate every point of a JSON scene file
    Batch {
        /// Scene file
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Edge fallback strategy (first-failing, voronoi)
        #[arg(short, long)]
        strategy: Option<FallbackStrategy>,
    },

    /// Scatter seeded random points around a triangle and evaluate them
    Scatter {
        /// Triangle vertices v0 v1 v2, each as x,y,z
        #[arg(short, long, num_args = 3, required = true, value_parser = parse_point, allow_hyphen_values = true)]
        triangle: Vec<Point3<f64>>,

        /// Half-extent of the scatter cube
        #[arg(short, long)]
        radius: Option<f64>,

        /// Number of points
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print or write the effective configuration
    Config {
        /// Write the configuration to this file
        #[arg(long, value_name = "FILE")]
        write: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    if let Err(e) = run() {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = KernelConfig::load_from(cli.config.as_deref())?;
    config.verbose |= cli.verbose;

    match cli.command {
        Commands::Query {
            triangle,
            point,
            strategy,
            json,
        } => {
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }
            query_command(&to_triangle(&triangle), point, json, &config)?;
        }
        Commands::Batch {
            input,
            output,
            strategy,
        } => {
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }
            batch_command(&input, output.as_deref(), &config)?;
        }
        Commands::Scatter {
            triangle,
            radius,
            count,
            seed,
            output,
        } => {
            let radius = radius.unwrap_or(config.scatter_radius);
            let count = count.unwrap_or(config.scatter_count);
            scatter_command(&to_triangle(&triangle), radius, count, seed, output.as_deref(), &config)?;
        }
        Commands::Config { write } => {
            Reporter::report_config(&config, &config.to_toml()?);
            if let Some(path) = write {
                config.save(&path)?;
                Reporter::success(&format!("Configuration written to {}", path.display()));
            }
        }
        Commands::Version => {
            println!("Tribary Kernel v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// clap enforces exactly three vertices
fn to_triangle(vertices: &[Point3<f64>]) -> Triangle {
    Triangle::new(vertices[0], vertices[1], vertices[2])
}

fn query_command(triangle: &Triangle, point: Point3<f64>, json: bool, config: &KernelConfig) -> Result<()> {
    let result = triangle.closest(point, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        Reporter::report_query(triangle, &result, config.verbose);
    }

    Ok(())
}

fn batch_command(input: &Path, output: Option<&Path>, config: &KernelConfig) -> Result<()> {
    if config.verbose {
        Reporter::report_info(&format!("Loading scene: {}", input.display()));
    }

    let scene = io::load_scene(input)?;
    if scene.points.is_empty() {
        Reporter::report_warning("scene has no query points");
    }

    let start = Instant::now();
    let results = closest_batch(&scene.triangle(), &scene.query_points(), config)?;
    let duration = start.elapsed();

    Reporter::report_batch(&input.display().to_string(), &results, duration);
    write_or_print(&results, output)
}

fn scatter_command(
    triangle: &Triangle,
    radius: f64,
    count: usize,
    seed: u64,
    output: Option<&Path>,
    config: &KernelConfig,
) -> Result<()> {
    if config.verbose {
        Reporter::report_info(&format!(
            "Scattering {} points (radius {}, seed {}, strategy {})",
            count, radius, seed, config.strategy
        ));
    }

    let points = ScatterSampler::new(radius, seed)?.sample(count);

    let start = Instant::now();
    let results = closest_batch(triangle, &points, config)?;
    let duration = start.elapsed();

    Reporter::report_batch(&format!("scatter (seed {})", seed), &results, duration);
    match output {
        Some(path) => write_or_print(&results, Some(path)),
        None => Ok(()),
    }
}

fn write_or_print(results: &[tribary::ClosestPoint], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            io::write_results(path, results)?;
            Reporter::success(&format!("Results written to {}", path.display()));
        }
        None => println!("{}", io::results_to_json(results)?),
    }
    Ok(())
}
