//! C-to-Go Transpiler Driver
//!
//! Reads a JSON dump of top-level clang AST nodes, transpiles each of them
//! and writes the Go statements together with the imports they need.

use anyhow::{Context, Result};
use cgt_common::{Diagnostic, ErrorReporter, Severity};
use cgt_frontend::{Frontend, Node, Registry, Stmt};
use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "cgt", version, about = "C-to-Go AST transpiler")]
struct Args {
    /// Input JSON file with the top-level nodes
    input: PathBuf,

    /// Output JSON file (defaults to stdout)
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Type name already declared by the declaration emitter
    #[clap(long = "declare-type", value_name = "NAME")]
    declared_types: Vec<String>,

    /// Skip units that fail to transpile instead of stopping
    #[clap(long)]
    keep_going: bool,

    /// Verbose output
    #[clap(short, long)]
    verbose: bool,
}

/// Statements produced for one top-level node
#[derive(Debug, Serialize)]
struct Unit {
    address: String,
    stmts: Vec<Stmt>,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    imports: Vec<String>,
    units: Vec<Unit>,
    diagnostics: &'a [Diagnostic],
}

/// Transpile every node in order.
///
/// Fatal errors stop the run. Other errors stop it too unless `keep_going`
/// is set, in which case the unit is left out and reported.
fn transpile_units(
    registry: &mut Registry,
    nodes: &[Node],
    keep_going: bool,
    reporter: &mut ErrorReporter,
) -> Result<Vec<Unit>> {
    let mut units = Vec::new();

    for node in nodes {
        match Frontend::transpile_unit(registry, node) {
            Ok(stmts) => units.push(Unit {
                address: node.address.clone(),
                stmts,
            }),
            Err(err) if err.is_fatal() || !keep_going => {
                reporter.report(&err, &node.address);
                return Err(err)
                    .with_context(|| format!("failed to transpile {} at {}", node.variant_name(), node.address));
            }
            Err(err) => {
                warn!("skipping {} at {}: {}", node.variant_name(), node.address, err);
                reporter.report_skipped(&err, &node.address);
            }
        }
    }

    Ok(units)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::init();
    }

    // Read input file
    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let nodes = Frontend::parse_nodes(&input)?;

    let mut registry = Registry::new();
    for name in args.declared_types {
        registry.declare_type(name);
    }

    let mut reporter = ErrorReporter::new();
    let units = match transpile_units(&mut registry, &nodes, args.keep_going, &mut reporter) {
        Ok(units) => units,
        Err(e) => {
            // The stopping error itself is printed on return
            let skipped = reporter.diagnostics().iter().filter(|d| d.severity == Severity::Warning);
            for diagnostic in skipped {
                eprintln!("{}", diagnostic);
            }
            return Err(e);
        }
    };

    info!("transpiled {} of {} units: {}", units.len(), nodes.len(), reporter.summary());

    let output = Output {
        imports: registry.imports(),
        units,
        diagnostics: reporter.diagnostics(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    // Write output
    if let Some(output_path) = args.output {
        fs::write(&output_path, json)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
    } else {
        println!("{}", json);
    }

    if reporter.warning_count() > 0 {
        reporter.print_diagnostics();
    }

    Ok(())
}
