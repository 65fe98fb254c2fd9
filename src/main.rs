//! Wireframer CLI
//!
//! Usage:
//!   wireframer [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --components <FILE>  Component library (YAML)
//!   -i, --icons <FILE>       Icon catalog (TOML format)
//!   -s, --seed <SEED>        Seed the generator random source
//!   -d, --debug              Print the resolved tree to stderr
//!   --check                  Print diagnostics and exit nonzero if any
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use wireframer::{
    resolve_spec_with_options, CollapseMap, EdgeFlags, IconCatalog, ResolveOptions, ResolvedNode,
    Resolution,
};

#[derive(Parser)]
#[command(name = "wireframer")]
#[command(about = "Resolve declarative wireframe specs into concrete drawing trees")]
struct Cli {
    /// Input spec file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Component library file (YAML)
    #[arg(short, long)]
    components: Option<PathBuf>,

    /// Icon catalog file (TOML format)
    #[arg(short, long)]
    icons: Option<PathBuf>,

    /// Seed for the generator random source (reproducible output)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Debug mode: print the resolved tree with collapse flags to stderr
    #[arg(short, long)]
    debug: bool,

    /// Check mode: report diagnostics and unknown icons, exit nonzero if any
    #[arg(long)]
    check: bool,
}

/// Shape of the YAML document emitted on stdout.
#[derive(Serialize)]
struct Output<'a> {
    frames: &'a [ResolvedNode],
    collapse: &'a CollapseMap,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load the component library
    let components = match &cli.components {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading components '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => String::new(),
    };

    // Load the icon catalog
    let catalog = match &cli.icons {
        Some(path) => match IconCatalog::from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error loading icon catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => IconCatalog::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut options = ResolveOptions::new();
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }

    let result = match resolve_spec_with_options(&source, &components, options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.debug {
        eprintln!("=== Resolved Tree ===");
        for frame in &result.frames {
            print_tree(frame, 0, &result.collapse);
        }
        eprintln!("=====================");
    }

    if cli.check {
        run_check(&result, &catalog);
        return;
    }

    for diag in &result.diagnostics {
        eprintln!("warning: {}", diag);
    }

    let output = Output {
        frames: &result.frames,
        collapse: &result.collapse,
    };
    match serde_yaml::to_string(&output) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

/// Report diagnostics and unknown icon names, exiting nonzero on findings.
fn run_check(result: &Resolution, catalog: &IconCatalog) {
    let mut findings = 0usize;

    for diag in &result.diagnostics {
        println!("{}", diag);
        findings += 1;
    }

    for name in wireframer::resolve::collect_icon_names(&result.frames) {
        if !catalog.contains(name) {
            println!("icon: no icon named '{}' in the catalog", name);
            findings += 1;
        }
    }

    if findings > 0 {
        eprintln!("{} finding(s)", findings);
        std::process::exit(1);
    }
    println!("ok");
}

fn print_tree(node: &ResolvedNode, depth: usize, collapse: &CollapseMap) {
    let indent = "  ".repeat(depth);
    let flags = collapse
        .get(&node.id())
        .copied()
        .unwrap_or(EdgeFlags::NONE);
    let fused = if flags.any() {
        let mut edges = Vec::new();
        if flags.top {
            edges.push("top");
        }
        if flags.right {
            edges.push("right");
        }
        if flags.bottom {
            edges.push("bottom");
        }
        if flags.left {
            edges.push("left");
        }
        format!(" fused[{}]", edges.join(","))
    } else {
        String::new()
    };
    eprintln!("{}[{}] #{}{}", indent, kind_name(node), node.id().0, fused);
    for child in node.children() {
        print_tree(child, depth + 1, collapse);
    }
}

fn kind_name(node: &ResolvedNode) -> &'static str {
    match node {
        ResolvedNode::Frame(_) => "frame",
        ResolvedNode::Box(_) => "box",
        ResolvedNode::Text(_) => "text",
        ResolvedNode::Icon(_) => "icon",
        ResolvedNode::Cursor(_) => "cursor",
        ResolvedNode::Map(_) => "map",
        ResolvedNode::Chart(_) => "chart",
        ResolvedNode::Globe(_) => "globe",
        ResolvedNode::Cloud(_) => "cloud",
    }
}

fn print_intro() {
    println!(
        r#"Wireframer - declarative wireframe spec resolution

USAGE:
    wireframer [OPTIONS] [FILE]
    echo '<spec>' | wireframer

OPTIONS:
    -c, --components   Component library file (YAML)
    -i, --icons        Icon catalog file (TOML)
    -s, --seed         Seed the generator random source
    -d, --debug        Print the resolved tree to stderr
    --check            Report diagnostics, exit nonzero if any
    -h, --help         Print help

QUICK START:
    printf -- '- frame:\n    title: Home\n    children:\n      - box:\n          outline: thin\n' | wireframer

The output is a YAML document holding the resolved node tree plus a
border-collapse table keyed by node id, ready for a painting layer."#
    );
}
