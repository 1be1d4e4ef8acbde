//! Command-line interface for catalogo
//! This binary turns a layout-preserving catalog text file into the JSON
//! extraction artifact (category tree, product map, WooCommerce view).
//!
//! Usage:
//!   catalogo extract `<path>` [-o `<out.json>`]  - Parse and write the extract as JSON
//!   catalogo summary `<path>`                  - Parse and print extraction totals

use clap::{Arg, Command};

use catalogo::catalog::extract_catalog_from_text;
use catalogo::catalog::loader::load_catalog_text;

fn main() {
    let matches = Command::new("catalogo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recovers a structured product database from spatial catalog text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Parse a catalog text file and write the extract as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the catalog text file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output JSON path (stdout when omitted)"),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Parse a catalog text file and print extraction totals")
                .arg(
                    Arg::new("path")
                        .help("Path to the catalog text file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", extract_matches)) => {
            let path = extract_matches.get_one::<String>("path").unwrap();
            let output = extract_matches.get_one::<String>("output");
            handle_extract_command(path, output.map(String::as_str));
        }
        Some(("summary", summary_matches)) => {
            let path = summary_matches.get_one::<String>("path").unwrap();
            handle_summary_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the extract command
fn handle_extract_command(path: &str, output: Option<&str>) {
    let extract = extract_catalog_from_text(&read_text(path));
    let json = serde_json::to_string_pretty(&extract).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    match output {
        Some(out_path) => {
            if let Err(e) = std::fs::write(out_path, json) {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            }
            println!("Extracted {} products", extract.total_products);
            println!("Written to: {}", out_path);
        }
        None => print!("{}", json),
    }
}

/// Handle the summary command
fn handle_summary_command(path: &str) {
    let extract = extract_catalog_from_text(&read_text(path));
    println!("Catalog:  {}", extract.catalog_name);
    println!("Products: {}", extract.total_products);
    println!("Top-level categories:");
    for (name, node) in &extract.structure.children {
        println!("  {} ({} codes)", name, node.all_skus().len());
    }
    if !extract.products.is_empty() {
        println!("Sample products:");
        for (sku, product) in extract.products.iter().take(5) {
            let attrs: Vec<String> = product
                .attributes
                .iter()
                .take(3)
                .map(|a| format!("{}={}", a.name, a.value))
                .collect();
            println!("  {}: {}", sku, attrs.join(", "));
        }
    }
}

fn read_text(path: &str) -> String {
    load_catalog_text(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}
