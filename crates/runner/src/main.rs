use lobsim_runner::{RunSummary, SimulationParams, SimulationRun, run_simulation, sweep_seeds};
use serde::Serialize;

const DEFAULT_STEPS: usize = 40;
const DEFAULT_TAIL: usize = 8;

fn print_help() {
    eprintln!(
        r#"lobsim - limit order book dynamics simulator

USAGE:
    lobsim [OPTIONS]

OPTIONS:
    --config <PATH>       Load parameters from a JSON file
    --steps <N>           Number of events to simulate (default: 40)
    --seed <N>            Override the generator seed
    --tail <N>            Event log lines to print (default: 8)
    --sweep <FROM>..<TO>  Run every seed in the range and print summaries
    --json                Print machine-readable JSON
    --help                Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG              Log level filter (default: info)

EXAMPLES:
    # Run the default scenario
    lobsim

    # Heavier market flow, 120 steps
    lobsim --config flow.json --steps 120

    # Compare seeds 1 through 20
    lobsim --sweep 1..20 --json
"#
    );
}

#[derive(Debug)]
struct CliArgs {
    config_path: Option<String>,
    steps: usize,
    seed: Option<i64>,
    tail: usize,
    sweep: Option<(i64, i64)>,
    json: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    params: &'a SimulationParams,
    summary: Option<RunSummary>,
    run: &'a SimulationRun,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} requires a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn parse_range(value: Option<&String>) -> Result<(i64, i64), String> {
    let value = value.ok_or_else(|| "--sweep requires a range".to_string())?;
    let (from, to) = value
        .split_once("..")
        .ok_or_else(|| format!("Invalid range: {} (expected FROM..TO)", value))?;
    let from: i64 = from
        .parse()
        .map_err(|_| format!("Invalid range start: {}", from))?;
    let to: i64 = to.parse().map_err(|_| format!("Invalid range end: {}", to))?;
    if to < from {
        return Err(format!("Empty range: {}", value));
    }
    Ok((from, to))
}

/// Returns `Ok(None)` when help was requested
fn parse_args(args: &[String]) -> Result<Option<CliArgs>, String> {
    let mut cli = CliArgs {
        config_path: None,
        steps: DEFAULT_STEPS,
        seed: None,
        tail: DEFAULT_TAIL,
        sweep: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(None),
            "--config" | "-c" => {
                i += 1;
                cli.config_path = Some(parse_value("--config", args.get(i))?);
            }
            "--steps" | "-n" => {
                i += 1;
                cli.steps = parse_value("--steps", args.get(i))?;
            }
            "--seed" | "-s" => {
                i += 1;
                cli.seed = Some(parse_value("--seed", args.get(i))?);
            }
            "--tail" => {
                i += 1;
                cli.tail = parse_value("--tail", args.get(i))?;
            }
            "--sweep" => {
                i += 1;
                cli.sweep = Some(parse_range(args.get(i))?);
            }
            "--json" => cli.json = true,
            arg => return Err(format!("Unknown argument: {}", arg)),
        }
        i += 1;
    }

    Ok(Some(cli))
}

fn print_run(params: &SimulationParams, run: &SimulationRun, tail: usize) {
    println!(
        "seed={} mid={} tick={} levels={} base_size={}",
        params.seed, params.mid, params.tick_size, params.levels, params.base_size
    );
    println!(
        "rates: market={:.2} cancel={:.2} limit={:.2} (order size {})",
        params.market_rate,
        params.cancel_rate,
        params.limit_probability(),
        params.market_order_size
    );
    println!();
    println!("{:>5}  {:>8}  {:>9}  {:>10}", "step", "spread", "imbalance", "microprice");
    for point in run.series() {
        println!(
            "{:>5}  {:>8.4}  {:>9.4}  {:>10.4}",
            point.step, point.spread, point.imbalance, point.microprice
        );
    }

    if let Some(summary) = run.summary() {
        println!();
        println!("Final spread:      {:.4}", summary.final_spread);
        println!("Final imbalance:   {:.4}", summary.final_imbalance);
        println!("Final microprice:  {:.4}", summary.final_microprice);
        println!(
            "Events simulated:  {} ({} market, {} cancel, {} limit)",
            summary.events_simulated, summary.market_orders, summary.cancels, summary.limit_arrivals
        );
    }

    println!();
    println!("Recent events:");
    for event in run.recent_events(tail) {
        println!("  {}", event);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let cli = match parse_args(&args) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            print_help();
            std::process::exit(1);
        }
    };

    let mut params = match &cli.config_path {
        Some(path) => {
            log::info!("Loading parameters from: {}", path);
            SimulationParams::from_file(path)?
        }
        None => SimulationParams::default(),
    };
    if let Some(seed) = cli.seed {
        if cli.sweep.is_some() {
            log::warn!("--seed is ignored when --sweep is given");
        }
        params = params.with_seed(seed);
    }
    params.validate()?;

    if let Some((from, to)) = cli.sweep {
        let outcomes = sweep_seeds(&params, from..=to, cli.steps).await?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        } else {
            println!(
                "{:>6}  {:>10}  {:>10}  {:>12}  {:>6}",
                "seed", "mean sprd", "final sprd", "microprice", "mkt"
            );
            for outcome in &outcomes {
                println!(
                    "{:>6}  {:>10.4}  {:>10.4}  {:>12.4}  {:>6}",
                    outcome.seed,
                    outcome.summary.mean_spread,
                    outcome.summary.final_spread,
                    outcome.summary.final_microprice,
                    outcome.summary.market_orders
                );
            }
        }
        return Ok(());
    }

    let run = run_simulation(&params, cli.steps);
    if cli.json {
        let report = RunReport {
            params: &params,
            summary: run.summary(),
            run: &run,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_run(&params, &run, cli.tail);
    }

    Ok(())
}
