// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::config::KernelConfig;
use crate::geometry::{ClosestPoint, Location, Triangle};
use colored::*;
use nalgebra::Point3;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a single closest-point query
    pub fn report_query(triangle: &Triangle, result: &ClosestPoint, verbose: bool) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Query:".bold(), Self::format_point(&result.query).cyan());
        println!("{}", "━".repeat(80).bright_black());

        if verbose {
            println!("  {} {}", "v0:".bright_black(), Self::format_point(&triangle.v0));
            println!("  {} {}", "v1:".bright_black(), Self::format_point(&triangle.v1));
            println!("  {} {}", "v2:".bright_black(), Self::format_point(&triangle.v2));
            println!("  {} {:.6e}", "Area:".bright_black(), triangle.area());
        }

        let bc = &result.barycentric;
        println!(
            "  {} U={} V={} W={}",
            "Barycentric:".bright_black(),
            format!("{:.6}", bc.u).cyan(),
            format!("{:.6}", bc.v).cyan(),
            format!("{:.6}", bc.w).cyan()
        );
        println!(
            "  {} {}",
            "Closest:".bright_black(),
            Self::format_point(&result.point).green()
        );
        println!(
            "  {} {}",
            "Distance:".bright_black(),
            format!("{:.6}", result.distance).yellow()
        );
        println!(
            "  {} {}",
            "Location:".bright_black(),
            Self::format_location(&result.location)
        );
        if verbose {
            println!("  {} {:?}", "Side:".bright_black(), result.side);
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report a batch summary
    pub fn report_batch(label: &str, results: &[ClosestPoint], duration: Duration) {
        let interior = results
            .iter()
            .filter(|r| r.location == Location::Interior)
            .count();
        let edge = results
            .iter()
            .filter(|r| matches!(r.location, Location::Edge(_)))
            .count();
        let vertex = results
            .iter()
            .filter(|r| matches!(r.location, Location::Vertex(_)))
            .count();
        let max_distance = results.iter().map(|r| r.distance).fold(0.0_f64, f64::max);

        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Batch:".bold(), label.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Points:".bright_black(),
            results.len().to_string().cyan()
        );
        println!(
            "  {} {} interior, {} edge, {} vertex",
            "Locations:".bright_black(),
            interior.to_string().green(),
            edge.to_string().yellow(),
            vertex.to_string().yellow()
        );
        println!(
            "  {} {:.6}",
            "Max distance:".bright_black(),
            max_distance
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report effective configuration
    pub fn report_config(config: &KernelConfig, toml: &str) {
        println!("{}", "Effective configuration:".bold());
        for line in toml.lines() {
            println!("  {}", line.bright_black());
        }
        if config.verbose {
            Self::report_info("verbose output enabled");
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn format_location(location: &Location) -> ColoredString {
        match location {
            Location::Interior => "interior".green(),
            Location::Edge(edge) => format!("edge {:?}", edge).yellow(),
            Location::Vertex(vertex) => format!("vertex {:?}", vertex).yellow(),
            Location::Undefined => "undefined".red(),
        }
    }

    fn format_point(p: &Point3<f64>) -> String {
        format!("({:.6}, {:.6}, {:.6})", p.x, p.y, p.z)
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
