use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use fractal_gen::cli::{Cli, OutputFormat};
use fractal_gen::config::{FractalConfig, ITERATION_CAP};
use fractal_gen::dispatch::{generate, FractalKind, GenerationResult};
use fractal_gen::mesh::MeshData;

// === Output ===

#[derive(Serialize)]
struct JsonOutput<'a> {
    kind: FractalKind,
    iterations: u32,
    result: &'a GenerationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    mesh: Option<&'a MeshData>,
}

struct ComparisonRow {
    kind: FractalKind,
    elements: usize,
    points: usize,
    elapsed: Duration,
}

fn describe(result: &GenerationResult) -> &'static str {
    match result {
        GenerationResult::Line(_) => "polyline",
        GenerationResult::Segments(_) => "segments",
        GenerationResult::Cells(_) => "cells",
        GenerationResult::Loops(_) => "loops",
    }
}

fn print_summary(
    config: &FractalConfig,
    result: &GenerationResult,
    mesh: Option<&MeshData>,
    elapsed: Duration,
) {
    println!(
        "Generated {} (shape={}, iterations={}, mode={}) in {:.2?}",
        config.kind, config.initial_shape, config.iterations, config.draw_mode, elapsed
    );
    println!("  Output: {} {}, {} points", result.len(), describe(result), result.point_count());
    if let Some(bounds) = result.bounds() {
        println!("  Bounds: min {:?}, max {:?}", bounds.min.to_array(), bounds.max.to_array());
    }
    if let Some(mesh) = mesh {
        println!(
            "  Mesh: {} vertices, {} triangles ({} bytes)",
            mesh.vertices.len(),
            mesh.triangle_count(),
            mesh.vertex_bytes().len() + mesh.index_bytes().len()
        );
    }
}

/// Every kind from the same shape settings, one thread per kind
fn run_comparison(config: &FractalConfig, quiet: bool) {
    let rows: Vec<ComparisonRow> = thread::scope(|scope| {
        let handles: Vec<_> = FractalKind::ALL
            .into_iter()
            .map(|kind| {
                let config = FractalConfig {
                    kind: kind.name().to_string(),
                    ..config.clone()
                };
                scope.spawn(move || {
                    let spec = config.to_spec();
                    let start = Instant::now();
                    let result = generate(&spec);
                    ComparisonRow {
                        kind,
                        elements: result.len(),
                        points: result.point_count(),
                        elapsed: start.elapsed(),
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("comparison worker panicked"))
            .collect()
    });

    if quiet {
        return;
    }
    println!("{:<12} {:>10} {:>10} {:>12}", "kind", "elements", "points", "time");
    for row in rows {
        println!(
            "{:<12} {:>10} {:>10} {:>12.2?}",
            row.kind.name(),
            row.elements,
            row.points,
            row.elapsed
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = cli.resolve_config()?;
    if config.iterations > ITERATION_CAP {
        log::warn!(
            "iterations {} exceeds the cap, clamping to {}",
            config.iterations,
            ITERATION_CAP
        );
        config.iterations = ITERATION_CAP;
    }

    if cli.compare {
        run_comparison(&config, cli.quiet);
        return Ok(());
    }

    let spec = config.to_spec();
    let start = Instant::now();
    let result = generate(&spec);
    let elapsed = start.elapsed();
    let mesh = MeshData::from_result(&result, spec.mode);

    match cli.format {
        OutputFormat::Summary => {
            if !cli.quiet {
                print_summary(&config, &result, mesh.as_ref(), elapsed);
            }
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                kind: spec.kind,
                iterations: spec.iterations,
                result: &result,
                mesh: mesh.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
