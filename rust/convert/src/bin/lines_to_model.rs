// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: convert the drafting lines of a document snapshot into
//! walls, duct runs and pipe runs, then hide the original lines.
//!
//! Usage:
//!   lines-to-model <document.json> [options]

use linebim_convert::{convert_selection, AllCurveElements, ConversionConfig};
use linebim_core::{Document, ModelElement};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let document_path = &args[1];

    // Parse options
    let mut config_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut dry_run = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--dry-run" => {
                dry_run = true;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    println!("=== Lines to Model Elements ===");
    println!();

    // Step 1: Load document snapshot
    println!("[1/4] Loading document: {}", document_path);
    let json = fs::read_to_string(document_path).unwrap_or_else(|e| {
        eprintln!("Error: Cannot read document '{}': {}", document_path, e);
        std::process::exit(1);
    });
    let mut doc: Document = serde_json::from_str(&json).unwrap_or_else(|e| {
        eprintln!("Error: Cannot parse document '{}': {}", document_path, e);
        std::process::exit(1);
    });
    println!(
        "  Document '{}': {} curve elements, {} model elements",
        doc.name(),
        doc.curve_elements().len(),
        doc.model_elements().len()
    );

    // Step 2: Load configuration
    println!("[2/4] Configuring conversion...");
    let config = match &config_path {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error: Cannot read config '{}': {}", path, e);
                std::process::exit(1);
            });
            serde_json::from_str::<ConversionConfig>(&json).unwrap_or_else(|e| {
                eprintln!("Error: Cannot parse config '{}': {}", path, e);
                std::process::exit(1);
            })
        }
        None => ConversionConfig::default(),
    };
    println!(
        "  Level: \"{}\", {} style mappings",
        config.level_name,
        config.style_map.len()
    );

    // Step 3: Run the pipeline over every curve element
    println!("[3/4] Converting lines...");
    let result = match convert_selection(&mut doc, &mut AllCurveElements, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: Conversion aborted: {}", e);
            std::process::exit(1);
        }
    };

    let walls = doc.model_elements().iter().filter(|e| e.is_wall()).count();
    let ducts = doc.model_elements().iter().filter(|e| e.is_duct()).count();
    let pipes = doc.model_elements().iter().filter(|e| e.is_pipe()).count();

    println!("  Selected:         {} elements", result.selected);
    println!("  Model curves:     {}", result.model_curves);
    println!("  Converted:        {}", result.converted);
    println!("  Skipped unbound:  {}", result.skipped_unbound);
    println!("  Unrecognized:     {}", result.unrecognized.len());
    println!("  Hidden in view:   {}", result.hidden);

    if !result.unrecognized.is_empty() {
        let styles: Vec<&str> = result
            .unrecognized
            .iter()
            .filter_map(|&id| doc.curve_element(id))
            .map(|c| c.line_style.as_str())
            .collect();
        println!("  Unrecognized styles: {:?}", styles);
    }

    // Step 4: Write the mutated document
    if dry_run {
        println!("[4/4] Writing output: SKIPPED (--dry-run)");
    } else if let Some(path) = &output_path {
        println!("[4/4] Writing document: {}", path);
        let json = serde_json::to_string_pretty(&doc).unwrap_or_else(|e| {
            eprintln!("Error: Cannot serialize document: {}", e);
            std::process::exit(1);
        });
        fs::write(path, json).unwrap_or_else(|e| {
            eprintln!("Error: Cannot write '{}': {}", path, e);
            std::process::exit(1);
        });
    } else {
        println!("[4/4] Writing output: SKIPPED (no --output given)");
    }

    // Summary
    println!();
    println!("=== Conversion Summary ===");
    println!("  Walls:         {}", walls);
    println!("  Duct segments: {}", ducts);
    println!("  Pipe segments: {}", pipes);
    for element in doc.model_elements() {
        match element {
            ModelElement::Wall { id, height, .. } => {
                println!("    {} wall (height {:.1})", id, height)
            }
            ModelElement::Duct { id, start, end, .. } => println!(
                "    {} duct ({:.1},{:.1}) -> ({:.1},{:.1})",
                id, start.x, start.y, end.x, end.y
            ),
            ModelElement::Pipe { id, start, end, .. } => println!(
                "    {} pipe ({:.1},{:.1}) -> ({:.1},{:.1})",
                id, start.x, start.y, end.x, end.y
            ),
        }
    }
    println!();
    println!("Done.");
}

fn print_usage() {
    println!(
        r#"Lines to Model Elements
=======================

Classifies every curve element of a document snapshot by its line style
and converts it into the matching building element:

  A-GLAZ -> exterior wall     A-WALL -> interior wall
  M-DUCT -> duct segment      P-PIPE -> pipe segment

Unrecognized styles convert to nothing; all selected lines are hidden in
the active view afterwards.

USAGE:
  lines-to-model <document.json> [OPTIONS]

ARGUMENTS:
  <document.json>       Document snapshot (JSON)

OPTIONS:
  --config <path>       Conversion config JSON (partial configs allowed;
                        missing fields use the defaults above)
  --output <path>       Write the mutated document snapshot here
  --dry-run             Run the conversion but discard the result
  -h, --help            Show this help message

EXAMPLES:
  # Report what would convert
  lines-to-model plan.json --dry-run

  # Convert and save
  lines-to-model plan.json --output plan.converted.json

  # Custom style table and level
  lines-to-model plan.json --config conversion.json --output out.json
"#
    );
}
