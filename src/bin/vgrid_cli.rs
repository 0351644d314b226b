//! CLI tool for vgrid - resolves pointer probes against a grid config
//!
//! Usage:
//!   vgrid_cli <config.json>              # Output JSON to stdout
//!   vgrid_cli <config.json> -o out.json  # Output JSON to file
//!
//! The input is a grid configuration with two optional extra fields:
//! `probes` (a list of `[x, y]` viewport positions) and `scroll`
//! (`{"scrollLeft": .., "scrollTop": ..}`). Region indices are written as
//! numbers, with `null` for a column left of the grid. Set `RUST_LOG=vgrid=debug` to
//! see geometry diagnostics on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use vgrid::{GridConfig, GridView, ResolvedRegion, ScrollState};

#[derive(Deserialize)]
struct ProbeInput {
    #[serde(flatten)]
    config: GridConfig,
    #[serde(default)]
    scroll: ScrollState,
    #[serde(default)]
    probes: Vec<[f32; 2]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeOutput {
    total_width: f32,
    total_height: f32,
    freeze_region_width: f32,
    scroll: ScrollState,
    regions: Vec<ResolvedRegion>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: vgrid_cli <config.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read input file
    let text = match fs::read_to_string(input_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let input: ProbeInput = match serde_json::from_str(&text) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        }
    };

    let mut view = match GridView::new(input.config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    view.set_scroll(input.scroll.scroll_left, input.scroll.scroll_top);

    let regions = input
        .probes
        .iter()
        .map(|[x, y]| view.resolve(*x, *y))
        .collect();

    let output = ProbeOutput {
        total_width: view.coords().total_width(),
        total_height: view.coords().total_height(),
        freeze_region_width: view.coords().freeze_region_width(),
        scroll: view.scroll(),
        regions,
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&output) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
