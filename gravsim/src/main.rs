use gravsim::{ScenarioConfig, Scenario, Scale, Simulation, StopHandle};
use gravsim::{bench_forces, bench_ticks};
use gravsim::logging::init_logging;

use clap::Parser;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long, default_value = "sun_earth.yaml")]
    file_name: String,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Log body positions every N ticks
    #[arg(long, default_value_t = 30)]
    every: u64,

    /// Time the force pass and ticks instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;
    debug!(?scenario_cfg, "scenario loaded");
    Ok(scenario_cfg)
}

// hook up ctrl-c to a stop at the next tick boundary
fn stop_on_kill(stop: StopHandle) {
    let result = ctrlc::set_handler(move || {
        info!("stopping simulation (process received kill signal)");
        stop.stop();
    });
    if let Err(e) = result {
        warn!(%e, "error setting kill signal handler");
    }
}

// stand-in renderer: report every body in display units
fn report(sim: &Simulation, scale: &Scale) {
    let days = sim.system().t / gravsim::DAY;
    for b in sim.bodies() {
        let d = scale.to_display(b.position());
        info!(tick = sim.tick(), days, body = b.identity(), x = d.x, y = d.y, vx = b.velocity().x, vy = b.velocity().y);
    }
    let sys = sim.system();
    debug!(energy = sys.total_energy(sim.parameters().g), px = sys.momentum().x, py = sys.momentum().y, "conservation");
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    if args.bench {
        bench_forces()?;
        bench_ticks()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { engine, scale, mut simulation } = Scenario::build_scenario(scenario_cfg)?;
    info!(
        bodies = simulation.bodies().len(),
        parallel = engine.parallel,
        dt = simulation.parameters().timestep,
        scale = scale.per_au(),
        "starting simulation"
    );

    let stop = simulation.stop_handle();
    stop_on_kill(stop.clone());

    report(&simulation, &scale);
    let every = args.every.max(1);
    let ticks = simulation.run(|sim| {
        if sim.tick() % every == 0 {
            report(sim, &scale);
        }
        if args.ticks.map_or(false, |limit| sim.tick() >= limit) {
            stop.stop();
        }
    })?;

    info!(ticks, days = simulation.system().t / gravsim::DAY, "simulation stopped");
    Ok(())
}
