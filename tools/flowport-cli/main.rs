use clap::{Parser, ValueEnum};
use flowport::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlatformCli {
    Zapier,
    N8n,
    Make,
}

impl From<PlatformCli> for Platform {
    fn from(value: PlatformCli) -> Self {
        match value {
            PlatformCli::Zapier => Platform::Zapier,
            PlatformCli::N8n => Platform::N8n,
            PlatformCli::Make => Platform::Make,
        }
    }
}

/// Converts workflow exports between Zapier, n8n and Make
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the exported workflow JSON file
    input: PathBuf,

    /// Platform that produced the export (detected from the file when omitted)
    #[arg(short, long, value_enum)]
    from: Option<PlatformCli>,

    /// Target platform; repeat for several. Defaults to every other platform
    #[arg(short, long, value_enum)]
    to: Vec<PlatformCli>,

    /// JSON file with extra capability mappings
    #[arg(short, long)]
    mappings: Option<PathBuf>,

    /// Directory the converted workflows are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Print a migration complexity report for the source workflow
    #[arg(long)]
    report: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let source_json = fs::read_to_string(&cli.input).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            cli.input.display(),
            e
        ))
    });
    let source: serde_json::Value = serde_json::from_str(&source_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)));

    let from = match cli.from {
        Some(platform) => Platform::from(platform),
        None => detect_platform(&source).unwrap_or_else(|e| {
            exit_with_error(&format!("{} (pass --from to name the platform)", e))
        }),
    };
    println!("Source platform: {}", from);

    // --- 2. Registry ---
    let registry = match &cli.mappings {
        Some(path) => load_registry(path),
        None => AppRegistry::global().clone(),
    };
    let converter = Converter::new(&registry);

    if cli.report {
        print_report(&WorkflowDocument::coerce(&source, from));
    }

    // --- 3. Conversion ---
    let targets: Vec<Platform> = if cli.to.is_empty() {
        from.others().collect()
    } else {
        cli.to.iter().copied().map(Platform::from).collect()
    };

    fs::create_dir_all(&cli.output_dir).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to create output directory '{}': {}",
            cli.output_dir.display(),
            e
        ))
    });

    for to in targets {
        let result = converter.convert(&source, from, to);
        let file_name = output_file_name(result.workflow.name().unwrap_or_default(), to);
        let path = cli.output_dir.join(file_name);

        let json = result
            .workflow
            .to_json_pretty()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize workflow: {}", e)));
        fs::write(&path, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
        });

        print_summary(&result, &path);
    }

    println!("\nTotal Execution: {:?}", total_start.elapsed());
}

fn load_registry(path: &Path) -> AppRegistry {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read mappings file '{}': {}",
            path.display(),
            e
        ))
    });
    AppRegistry::builder()
        .with_json_mappings(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid mappings file: {}", e)))
        .build()
}

fn print_summary(result: &ConversionResult, path: &Path) {
    let validation = &result.validation;
    println!("\n--- {} ---", result.platform);
    println!("Written to:     {}", path.display());
    println!(
        "Mapped Steps:   {} ({}%)",
        validation.mapped_steps,
        validation.confidence()
    );
    println!("Unmapped Steps: {}", validation.unmapped_steps);
    println!("Success:        {}", validation.success);
    for warning in &validation.warnings {
        println!("  -> {}", warning);
    }
}

fn print_report(document: &WorkflowDocument) {
    let report = analyze(document);
    println!("\n--- Complexity Report ---");
    println!("Steps:       {}", report.steps_count);
    println!("Score:       {} ({:?})", report.score, report.level);
    println!("Loops:       {}", report.has_loops);
    println!("AI:          {}", report.has_ai);
    println!("Custom Code: {}", report.has_custom_code);
    println!("Branches:    {}", report.has_branches);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
