use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mzansi_assembler::ContextAssembler;
use mzansi_core::{ContextQuery, Route};
use mzansi_knowledge::{FareEstimator, KnowledgeStore, RankLocator, RouteMatcher, SafetyAdvisor};
use mzansi_observability::{init_tracing, AppMetrics};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "mzansi")]
#[command(about = "Mzansi Route knowledge engine CLI")]
struct Cli {
    /// Path to the taxi dataset document.
    #[arg(long, env = "MZANSI_KB_PATH", default_value = "data/taxi-routes.json")]
    kb: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assemble the prompt-context block for a query.
    Context {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Probe whether curated data exists for an origin/destination pair.
    Route { from: String, to: String },
    /// List taxi ranks matching a location.
    Ranks {
        location: String,
        #[arg(long)]
        city: Option<String>,
    },
    /// Show the applicable safety tips.
    Safety {
        #[arg(long, default_value = "day")]
        time: String,
        #[arg(long, default_value = "general")]
        category: String,
    },
    /// Show the fare schedule, or the tier for a distance in km.
    Fare {
        #[arg(long)]
        distance: Option<f64>,
    },
    /// Report the dataset load state and counts.
    Status,
}

#[derive(Debug, Serialize)]
struct RouteProbe {
    curated: bool,
    route: Option<Route>,
    note: &'static str,
}

fn main() -> Result<()> {
    init_tracing("mzansi_cli");
    let cli = Cli::parse();

    let store = Arc::new(KnowledgeStore::open(&cli.kb));

    match cli.command {
        Command::Context { from, to, message } => {
            let assembler = ContextAssembler::new(store, AppMetrics::shared());
            let context = assembler.build_context(&ContextQuery {
                user_location: from,
                destination: to,
                message,
            });
            println!("{context}");
        }
        Command::Route { from, to } => {
            let matcher = RouteMatcher::new(store);
            let route = matcher.find_route(&from, &to);
            let probe = RouteProbe {
                curated: route.is_some(),
                note: if route.is_some() {
                    "specific route found in curated data"
                } else {
                    "no curated route data, general knowledge applies"
                },
                route,
            };
            println!("{}", serde_json::to_string_pretty(&probe)?);
        }
        Command::Ranks { location, city } => {
            let locator = RankLocator::new(store);
            let ranks = locator.find_nearby_ranks(&location, city.as_deref());
            println!("{}", serde_json::to_string_pretty(&ranks)?);
        }
        Command::Safety { time, category } => {
            let advisor = SafetyAdvisor::new(store);
            let tips = advisor.safety_tips(&time, &category);
            println!("{}", serde_json::to_string_pretty(&tips)?);
        }
        Command::Fare { distance } => {
            let estimator = FareEstimator::new(store);
            match estimator.fare_info(distance) {
                Some(info) => println!("{}", serde_json::to_string_pretty(&info)?),
                None => println!("null"),
            }
        }
        Command::Status => {
            println!("{}", serde_json::to_string_pretty(&store.status())?);
        }
    }

    Ok(())
}
