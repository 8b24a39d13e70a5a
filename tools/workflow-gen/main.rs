use clap::{Parser, ValueEnum};
use flowport::platform::Platform;
use flowport::registry::AppRegistry;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate sample workflow exports for the flowport converter
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The platform whose export format is generated
    #[arg(short, long, value_enum, default_value_t = PlatformCli::Zapier)]
    platform: PlatformCli,

    /// The number of steps in the generated workflow
    #[arg(short, long, default_value_t = 5)]
    steps: usize,

    /// Share of steps that use an app no registry knows about (0.0 to 1.0)
    #[arg(long, default_value_t = 0.2)]
    unknown_ratio: f64,

    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlatformCli {
    Zapier,
    N8n,
    Make,
}

const UNKNOWN_APPS: &[&str] = &["LegacyCRM", "InternalBilling", "AcmeTickets", "OldFax"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.unknown_ratio) {
        eprintln!(
            "Error: --unknown-ratio ({}) must be between 0.0 and 1.0",
            cli.unknown_ratio
        );
        std::process::exit(1);
    }

    let platform = match cli.platform {
        PlatformCli::Zapier => Platform::Zapier,
        PlatformCli::N8n => Platform::N8n,
        PlatformCli::Make => Platform::Make,
    };
    let known = AppRegistry::global().native_ids(platform);

    println!(
        "Generating a {}-step {} workflow ({}% unknown apps)...",
        cli.steps,
        platform,
        (cli.unknown_ratio * 100.0).round()
    );

    let identifiers: Vec<String> = (0..cli.steps)
        .map(|_| pick_identifier(&mut rng, &known, platform, cli.unknown_ratio))
        .collect();

    let workflow = match platform {
        Platform::Zapier => generate_zap(&mut rng, &identifiers),
        Platform::N8n => generate_n8n(&mut rng, &identifiers),
        Platform::Make => generate_make(&mut rng, &identifiers),
    };

    let json_output = serde_json::to_string_pretty(&workflow)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow to '{}'",
        cli.output
    );

    Ok(())
}

/// Picks a known native identifier, or an invented one with probability `unknown_ratio`.
fn pick_identifier(
    rng: &mut impl Rng,
    known: &[&str],
    platform: Platform,
    unknown_ratio: f64,
) -> String {
    let known_pick = known.choose(rng).filter(|_| !rng.random_bool(unknown_ratio));
    if let Some(id) = known_pick {
        return id.to_string();
    }
    let app = UNKNOWN_APPS.choose(rng).copied().unwrap_or("LegacyCRM");
    match platform {
        Platform::Zapier => app.to_string(),
        Platform::N8n => format!("n8n-nodes-custom.{}", app.to_lowercase()),
        Platform::Make => format!("{}:Run", app.to_lowercase()),
    }
}

fn generate_zap(rng: &mut impl Rng, apps: &[String]) -> Value {
    let steps: Vec<Value> = apps
        .iter()
        .enumerate()
        .map(|(i, app)| {
            json!({
                "id": i + 1,
                "app": app,
                "event": if i == 0 { "trigger" } else { "action" },
                "label": format!("Step {}", i + 1),
                "params": { "value": rng.random_range(1..1000) }
            })
        })
        .collect();
    json!({ "title": "Generated Zap", "steps": steps })
}

fn generate_n8n(rng: &mut impl Rng, node_types: &[String]) -> Value {
    let names: Vec<String> = (1..=node_types.len()).map(|i| format!("Node {}", i)).collect();
    let nodes: Vec<Value> = node_types
        .iter()
        .zip(&names)
        .enumerate()
        .map(|(i, (node_type, name))| {
            json!({
                "id": format!("node-{}", i + 1),
                "name": name,
                "type": node_type,
                "typeVersion": 1,
                "position": [250 + i as i64 * 200, rng.random_range(200..400)],
                "parameters": { "value": format!("={{{{ $json.field{} }}}}", i) }
            })
        })
        .collect();

    let mut connections = serde_json::Map::new();
    for pair in names.windows(2) {
        connections.insert(
            pair[0].clone(),
            json!({ "main": [[{ "node": pair[1], "type": "main", "index": 0 }]] }),
        );
    }

    json!({ "name": "Generated Workflow", "nodes": nodes, "connections": connections })
}

fn generate_make(rng: &mut impl Rng, modules: &[String]) -> Value {
    let flow: Vec<Value> = modules
        .iter()
        .enumerate()
        .map(|(i, module)| {
            json!({
                "id": i + 1,
                "module": module,
                "version": 1,
                "parameters": {},
                "mapper": { "value": format!("{{{{{}.value}}}}", i) },
                "metadata": { "designer": { "x": i as i64 * 300, "y": rng.random_range(0..200) } }
            })
        })
        .collect();
    json!({ "name": "Generated Scenario", "flow": flow })
}
