use clap::{Parser, Subcommand};
use sekkei::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Workflow scaffold pipeline: classify a requirement, generate a pattern
/// scaffold, and validate its structure.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank architecture patterns against a free-text requirement
    Classify {
        /// The requirement text to classify
        text: String,

        /// Show at most this many recommendations
        #[arg(short, long, default_value_t = 3)]
        top: usize,

        /// Optional path to a pattern catalog JSON file (defaults to built-in)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Generate and validate a scaffold from a workflow spec document
    Generate {
        /// Path to the workflow spec JSON file
        spec_path: PathBuf,

        /// Directory that receives the generated files
        #[arg(short, long)]
        out: PathBuf,

        /// Write files even when structural validation fails
        #[arg(long)]
        skip_validation: bool,

        /// Optional path to also persist the bundle in binary form
        #[arg(long)]
        bundle: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Classify { text, top, catalog } => {
            let catalog = load_catalog(catalog.as_deref());
            run_classify(&text, top, &catalog);
        }
        Command::Generate {
            spec_path,
            out,
            skip_validation,
            bundle,
        } => run_generate(&spec_path, &out, skip_validation, bundle.as_deref()),
    }
}

fn load_catalog(path: Option<&std::path::Path>) -> PatternCatalog {
    match path {
        None => PatternCatalog::builtin(),
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!(
                    "Failed to read catalog file '{}': {}",
                    path.display(),
                    e
                ))
            });
            PatternCatalog::from_json(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Invalid catalog: {}", e)))
        }
    }
}

fn run_classify(text: &str, top: usize, catalog: &PatternCatalog) {
    let results = classify(text, catalog);

    for result in results.iter().take(top.max(1)) {
        println!(
            "{:<20} confidence {:.2}",
            result.pattern_id, result.confidence
        );
        if result.confidence == 0.0 {
            println!("  (no signal; proceed only with explicit confirmation)");
            continue;
        }
        println!("  matched: {}", result.matched_indicators.join(", "));
        for sketch in &result.suggested_nodes {
            println!("  node {:<20} [{}] {}", sketch.name, sketch.kind, sketch.purpose);
        }
    }
}

fn run_generate(
    spec_path: &std::path::Path,
    out: &std::path::Path,
    skip_validation: bool,
    bundle_path: Option<&std::path::Path>,
) {
    let total_start = Instant::now();

    // --- 1. Load and convert the spec document ---
    let spec_json = fs::read_to_string(spec_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read spec file '{}': {}",
            spec_path.display(),
            e
        ))
    });
    let raw: RawWorkflow = serde_json::from_str(&spec_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse spec JSON: {}", e)));
    let spec = raw
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Spec conversion failed: {}", e)));

    // --- 2. Resolve dependencies and generate ---
    let deps = resolve(&spec.pattern_id, &spec.project_name)
        .unwrap_or_else(|e| exit_with_error(&format!("Dependency resolution failed: {}", e)));

    let pattern_id = spec.pattern_id.clone();
    let generate_start = Instant::now();
    let bundle = Generator::builder(spec, deps)
        .build()
        .generate_bundle()
        .unwrap_or_else(|e| exit_with_error(&format!("Generation failed: {}", e)));
    let generate_duration = generate_start.elapsed();

    println!(
        "Generated {} artifacts for pattern '{}' in {:?}",
        bundle.artifacts.len(),
        pattern_id,
        generate_duration
    );

    // --- 3. Validate before touching the filesystem ---
    let validate_start = Instant::now();
    let reports = validate(&bundle.artifacts, &pattern_id);
    let validate_duration = validate_start.elapsed();

    print!("{}", ReportFormatter::format_reports(&reports));
    println!("Validation took {:?}", validate_duration);

    let passed = all_pass(&reports);
    if !passed && !skip_validation {
        let rule = first_blocking_rule(&reports).unwrap_or("UNKNOWN");
        eprintln!("\nError: validation failed on rule {}; nothing was written", rule);
        std::process::exit(1);
    }

    // --- 4. Hand the artifacts to the filesystem sink ---
    bundle.write_to_dir(out).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to write scaffold: {}", e));
    });
    println!("Scaffold written to {}", out.display());

    if let Some(path) = bundle_path {
        bundle
            .save(&path.display().to_string())
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save bundle: {}", e)));
        println!("Bundle saved to {}", path.display());
    }

    println!("Total: {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(2);
}
