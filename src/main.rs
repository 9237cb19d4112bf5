//! menu-options
//!
//! Resolves a menu tree configuration into fully populated option sets.
//!
//! # Architecture Overview
//!
//! ```text
//!   menu.toml ──▶ config ──▶ routing (route name → Class::method)
//!                   │            │
//!                   │            ▼
//!                   │        metadata (parameters, markers → fragments)
//!                   │            │
//!                   ▼            ▼
//!               resolver: node > item > method > class > defaults
//!                   │
//!                   ▼
//!               resolved tree (JSON on stdout)
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use menu_options::config::load_config;
use menu_options::observability::init_logging;
use menu_options::resolver::count_nodes;
use menu_options::{HandlerRegistry, MenuConfig, MenuDocument, OptionResolver, StaticRouteTable};

#[derive(Parser)]
#[command(name = "menu-options")]
#[command(about = "Resolve menu option trees against routes and controller metadata", long_about = None)]
struct Cli {
    /// Log level, overrides `observability.log_level`
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the menu and print it as JSON
    Resolve {
        /// Path to the TOML configuration
        config: PathBuf,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Include the named items table in the output
        #[arg(long)]
        items: bool,
    },
    /// Validate and resolve the menu, printing a summary
    Check {
        /// Path to the TOML configuration
        config: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { config, pretty, items } => {
            let config = load_config(&config)?;
            init_logging(cli.log_level.as_deref().unwrap_or(&config.observability.log_level));

            let document = resolve(config)?;
            let output = if items {
                to_json(&document, pretty)?
            } else {
                to_json(&document.tree, pretty)?
            };
            println!("{}", output);
        }
        Commands::Check { config: path } => {
            let config = load_config(&path)?;
            init_logging(cli.log_level.as_deref().unwrap_or(&config.observability.log_level));

            let document = resolve(config)?;
            let nodes: usize = document.tree.values().map(count_nodes).sum();
            println!(
                "{}: ok ({} roots, {} nodes)",
                path.display(),
                document.tree.len(),
                nodes
            );
        }
    }

    Ok(())
}

fn resolve(config: MenuConfig) -> Result<MenuDocument, Box<dyn Error>> {
    let routes = StaticRouteTable::from_config(&config.routes);
    let registry = HandlerRegistry::from_config(&config.handlers, &config.classes)?;

    let mut resolver =
        OptionResolver::with_registry(&routes, &registry).with_max_depth(config.resolver.max_depth);
    Ok(resolver.normalize(config.menu)?)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
