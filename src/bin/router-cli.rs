use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use path_router::config::loader::load_config;
use path_router::lifecycle::build_router;
use path_router::routing::normalize;

#[derive(Parser)]
#[command(name = "router-cli")]
#[command(about = "Inspect route configuration without starting a server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a path
    Normalize { path: String },
    /// List routes in match order, per method
    Routes {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show which route a request would hit and the parameters it binds
    Resolve {
        #[arg(short, long)]
        config: PathBuf,

        #[arg(short, long, default_value = "GET")]
        method: String,

        path: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Normalize { path } => json!({ "input": path, "normalized": normalize(&path) }),
        Commands::Routes { config } => {
            let router = build_router(&load_config(&config)?);
            let routes: Vec<Value> = router
                .routes()
                .iter()
                .map(|route| {
                    json!({
                        "method": route.method(),
                        "path": route.template().as_str(),
                        "params": route.template().param_names().collect::<Vec<_>>(),
                    })
                })
                .collect();
            Value::Array(routes)
        }
        Commands::Resolve { config, method, path } => {
            let router = build_router(&load_config(&config)?);
            let resolved = router.resolve(&method, &path);
            match resolved {
                Some(m) => json!({
                    "matched": true,
                    "method": m.route.method(),
                    "route": m.route.template().as_str(),
                    "params": m.params,
                }),
                None => json!({
                    "matched": false,
                    "method": method.to_ascii_uppercase(),
                    "path": normalize(&path),
                }),
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
