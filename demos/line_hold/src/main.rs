//! line_hold: steer a boat onto the line `y = 0` and record its track.
//!
//! ```text
//! line_hold [RUN_CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file the reference run is used: boat at (0, -20),
//! heading 45°, speed 1, ramped rudder, 5000 steps, PID policy.  Output goes
//! to `output/line_hold/` by default: `states.csv` (full state per step) and
//! `trace.dat` (gnuplot `x y`).  `RUST_LOG=debug` shows periodic progress.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::info;

use helm_agent::AgentState;
use helm_control::Controller;
use helm_core::Step;
use helm_output::{CsvWriter, OutputWriter, SimOutputObserver, TraceWriter};
use helm_sim::{ObserverResult, RunConfig, SimBuilder, SimError, SimObserver, TraceRecorder};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUTPUT_DIR: &str = "output/line_hold";
/// Steps at the end of the run used to judge the settled amplitude.
const TRAILING_WINDOW:    usize = 1_000;

// ── Observer wrapper to keep an in-memory copy ───────────────────────────────

struct RecordingObserver<W: OutputWriter> {
    output: SimOutputObserver<W>,
    trace:  TraceRecorder,
}

impl<W: OutputWriter> SimObserver for RecordingObserver<W> {
    fn on_start(&mut self, step: Step, initial: &AgentState) -> ObserverResult {
        self.trace.on_start(step, initial)?;
        self.output.on_start(step, initial)
    }

    fn on_step(&mut self, step: Step, state: &AgentState) -> ObserverResult {
        self.trace.on_step(step, state)?;
        self.output.on_step(step, state)
    }

    fn on_end(&mut self, final_step: Step) -> ObserverResult {
        self.output.on_end(final_step)
    }

    fn on_abort(&mut self, step: Step, error: &SimError) {
        self.output.on_abort(step, error);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    // 1. Run configuration.
    let run = match &config_path {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("loading run config {}", path.display()))?,
        None => RunConfig::default(),
    };
    info!(
        "config: {} steps, controller {:?}, agent {:?}",
        run.sim.total_steps, run.controller, run.agent
    );

    // 2. Build sim.
    let mut sim = SimBuilder::from_run_config(&run).build()?;

    // 3. Set up output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let writer = (CsvWriter::new(&output_dir)?, TraceWriter::new(&output_dir)?);
    let mut obs = RecordingObserver {
        output: SimOutputObserver::new(writer),
        trace:  TraceRecorder::new(),
    };

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    let agent = sim.agent();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  controller          : {}", sim.controller().name());
    println!("  steps               : {}", sim.step().0);
    println!("  rows written        : {}", obs.output.rows_written());
    println!("  final state         : {agent}");
    if let Some(peak) = obs.trace.trailing_peak_abs_y(TRAILING_WINDOW) {
        println!("  trailing peak |y|   : {peak:.4} (last {TRAILING_WINDOW} states)");
    }
    print_files(&output_dir);

    Ok(())
}

fn print_files(dir: &Path) {
    for name in [CsvWriter::FILE_NAME, TraceWriter::FILE_NAME] {
        println!("  {:<20}: {}", name, dir.join(name).display());
    }
}
