use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use intersection_sim::console::{self, TokenReader};
use intersection_sim::simulation::{IntersectionScheduler, SimulationMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Yellow pass then green pass on the active road each cycle
    Phased,
    /// Active road goes straight to green, one pass per cycle
    Basic,
    /// Ignore the lights, every vehicle moves
    Advanced,
}

impl From<Mode> for SimulationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Phased => SimulationMode::Phased,
            Mode::Basic => SimulationMode::Basic,
            Mode::Advanced => SimulationMode::Advanced,
        }
    }
}

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Round-robin traffic light intersection simulation")]
struct Cli {
    /// How the lights are driven each cycle
    #[arg(long, value_enum, default_value = "phased")]
    mode: Mode,

    /// Read the scenario from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Never print interactive prompts
    #[arg(long)]
    no_prompt: bool,

    /// Print totals after the run
    #[arg(long)]
    summary: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let interactive = cli.input.is_none() && !cli.no_prompt && stdin.is_terminal();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path)
                .with_context(|| format!("Failed to open scenario file {}", path.display()))?,
        )),
        None => Box::new(stdin.lock()),
    };

    let mut stdout = io::stdout();
    let mut tokens = TokenReader::new(reader);
    let prompts: Option<&mut dyn Write> = if interactive {
        Some(&mut stdout)
    } else {
        None
    };
    let scenario = console::read_scenario(&mut tokens, prompts, cli.mode.into())
        .context("Failed to read scenario")?;

    let mode = scenario.config.mode;
    let cycles = scenario.cycles;
    let mut scheduler =
        IntersectionScheduler::new(scenario.config).context("Failed to set up intersection")?;

    let mut out = stdout.lock();
    for _ in 0..cycles {
        let report = scheduler.step_cycle();
        out.write_all(console::render_cycle(&report, mode).as_bytes())
            .context("Failed to write report")?;
    }

    let summary = scheduler.summary();
    info!(
        "Run complete: {} cycles over {} roads with {} vehicles",
        summary.cycles_run, summary.roads, summary.vehicles
    );

    if cli.summary {
        out.write_all(console::render_summary(&summary).as_bytes())
            .context("Failed to write summary")?;
    }
    out.flush().context("Failed to flush output")?;

    Ok(())
}
