//! `aisle` - route planning demo driver

use aisle_oracle::{OpenAiOracle, OracleConfig, RouteOracle, ScriptedOracle};
use aisle_planner::{CartItem, PlanRequest, PlannerConfig, RoutePlanner, StoreModel};
use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, Command};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("aisle")
        .version(aisle_planner::VERSION)
        .about("In-store route planning")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("plan")
                .about("Plan a shopping route for a cart")
                .arg(
                    Arg::new("layout")
                        .long("layout")
                        .required(true)
                        .help("Path to a layout text file (comma/newline grid)"),
                )
                .arg(
                    Arg::new("item")
                        .long("item")
                        .action(ArgAction::Append)
                        .required(true)
                        .help("Cart item as \"label@location\", repeatable"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a TOML planner config file"),
                )
                .arg(
                    Arg::new("scripted")
                        .long("scripted")
                        .help("Path to a JSON array of location ids to use as the proposal"),
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .value_parser(value_parser!(u64))
                        .help("Oracle deadline in seconds (overrides config)"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse and validate a layout file")
                .arg(
                    Arg::new("layout")
                        .long("layout")
                        .required(true)
                        .help("Path to a layout text file"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("plan", matches)) => {
            let layout_path = matches
                .get_one::<String>("layout")
                .expect("required by clap");
            let layout = std::fs::read_to_string(layout_path)
                .with_context(|| format!("reading layout file {layout_path}"))?;

            let mut cart = Vec::new();
            for raw in matches
                .get_many::<String>("item")
                .expect("required by clap")
            {
                cart.push(parse_item(raw)?);
            }

            let mut config = match matches.get_one::<String>("config") {
                Some(path) => PlannerConfig::from_toml_file(path)
                    .with_context(|| format!("loading config file {path}"))?,
                None => PlannerConfig::new(),
            };
            if let Some(&secs) = matches.get_one::<u64>("timeout") {
                config = config.with_oracle_timeout_secs(secs);
            }
            let oracle = build_oracle(matches.get_one::<String>("scripted"))?;
            let planner = RoutePlanner::new(oracle, config);

            let plan = planner.plan(&PlanRequest::new(layout, cart)).await?;
            let route: Vec<String> = plan.sequence.iter().map(ToString::to_string).collect();
            println!("{}", route.join(" -> "));
            if !plan.skipped.is_empty() {
                println!("skipped (not in layout): {}", plan.skipped.join(", "));
            }
        }
        Some(("check", matches)) => {
            let layout_path = matches
                .get_one::<String>("layout")
                .expect("required by clap");
            let layout = std::fs::read_to_string(layout_path)
                .with_context(|| format!("reading layout file {layout_path}"))?;

            let model = StoreModel::from_layout(&layout)?;
            println!(
                "{} rows x {} cols, {} locations, {} aisle links",
                model.grid.rows(),
                model.grid.cols(),
                model.graph.node_count(),
                model.graph.edge_count()
            );
        }
        _ => unreachable!("clap requires a subcommand"),
    }

    Ok(())
}

/// Split a `label@location` cart argument
fn parse_item(raw: &str) -> anyhow::Result<CartItem> {
    match raw.rsplit_once('@') {
        Some((label, location)) if !label.is_empty() && !location.is_empty() => {
            Ok(CartItem::new(label.trim(), location.trim()))
        }
        _ => bail!("cart item must look like \"label@location\", got {raw:?}"),
    }
}

/// Pick the proposal oracle for this run
///
/// A `--scripted` file wins, then `OPENAI_API_KEY`. With neither, the
/// empty scripted oracle makes every call fail and planning happens
/// locally.
fn build_oracle(scripted: Option<&String>) -> anyhow::Result<Arc<dyn RouteOracle>> {
    if let Some(path) = scripted {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scripted proposal {path}"))?;
        let sequence: Vec<String> =
            serde_json::from_str(&text).with_context(|| format!("parsing {path} as a JSON array"))?;
        return Ok(Arc::new(ScriptedOracle::proposing(sequence)));
    }
    if std::env::var("OPENAI_API_KEY").is_ok() {
        let oracle = OpenAiOracle::new(OracleConfig::from_env())?;
        Ok(Arc::new(oracle))
    } else {
        tracing::info!("OPENAI_API_KEY not set, planning locally");
        Ok(Arc::new(ScriptedOracle::new()))
    }
}
