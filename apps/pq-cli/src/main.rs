use clap::{Args, Parser, Subcommand};
use pq_app::{
    AppError, AppResult, ControlSession, Evaluation, HINTS, Scenario, SIGN_CONVENTION,
    rating_arc,
};
use pq_controls::{control_position_for, q_for_power_factor};
use pq_core::OperatingPoint;
use pq_project::{AppConfig, LoadedConfig, load_config, save_config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pq-cli")]
#[command(about = "PQ Teach CLI - generator P/Q capability explorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MachineArgs {
    /// Configuration file (YAML, or JSON for .json)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the apparent power rating in MVA
    #[arg(short, long)]
    rating: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the operating point for governor and excitation settings
    Point {
        /// Governor setting in percent (0-100)
        #[arg(short, long, default_value_t = 50.0, allow_negative_numbers = true)]
        governor: f64,
        /// Excitation setting in percent (0-100, 50 = unity)
        #[arg(short, long, default_value_t = 50.0, allow_negative_numbers = true)]
        excitation: f64,
        #[command(flatten)]
        machine: MachineArgs,
    },
    /// Solve the reactive power for a power factor target at fixed P
    Pf {
        /// Active power in MW
        #[arg(short, long)]
        p: f64,
        /// Power factor (positive = lagging, negative = leading)
        #[arg(long, allow_negative_numbers = true)]
        pf: f64,
        #[command(flatten)]
        machine: MachineArgs,
    },
    /// List preset scenarios
    Scenarios {
        /// Print the scenarios as YAML instead of a summary
        #[arg(long)]
        yaml: bool,
        #[command(flatten)]
        machine: MachineArgs,
    },
    /// Apply a preset scenario and evaluate it
    Preset {
        /// Scenario name, as printed by `scenarios`
        name: String,
        #[command(flatten)]
        machine: MachineArgs,
    },
    /// Print the rating half circle as CSV (q_mvar,p_mw)
    Envelope {
        /// Number of points along the arc
        #[arg(short, long, default_value_t = 181)]
        samples: usize,
        #[command(flatten)]
        machine: MachineArgs,
    },
    /// Show the effective configuration
    Config {
        /// Configuration file (YAML, or JSON for .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the effective configuration to this file
        #[arg(short, long)]
        write: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Point {
            governor,
            excitation,
            machine,
        } => cmd_point(governor, excitation, &machine),
        Commands::Pf { p, pf, machine } => cmd_pf(p, pf, &machine),
        Commands::Scenarios { yaml, machine } => cmd_scenarios(yaml, &machine),
        Commands::Preset { name, machine } => cmd_preset(&name, &machine),
        Commands::Envelope { samples, machine } => cmd_envelope(samples, &machine),
        Commands::Config { config, write } => cmd_config(config, write),
    }
}

/// Config warnings are reported through `tracing` by the loader.
fn load(config: Option<&PathBuf>) -> LoadedConfig {
    load_config(config.map(|p| p.as_path()))
}

fn session_for(machine: &MachineArgs) -> AppResult<ControlSession> {
    let loaded = load(machine.config.as_ref());
    let mut session = ControlSession::new(loaded.config);
    if let Some(rating) = machine.rating {
        session.set_rating(rating)?;
    }
    Ok(session)
}

fn print_evaluation(eval: &Evaluation) {
    println!(
        "Machine: S = {:.1} MVA, P_max = {:.1} MW, Q_max = {:.1} MVAr",
        eval.limits.s_rated_mva, eval.limits.p_max_mw, eval.limits.q_max_mvar
    );
    println!();
    println!("  {:<14} {:>10}", "Quantity", "Value");
    for (quantity, value) in eval.readout.rows() {
        println!("  {:<14} {:>10}", quantity, value);
    }
    println!();
    if eval.violations.is_empty() {
        println!("✓ Operating point is within machine limits");
    } else {
        for message in eval.messages() {
            println!("⚠ {}", message);
        }
    }
    println!("{}", SIGN_CONVENTION);
}

fn cmd_point(governor: f64, excitation: f64, machine: &MachineArgs) -> AppResult<()> {
    let mut session = session_for(machine)?;
    session.position.governor_percent = governor;
    session.position.excitation_percent = excitation;

    println!(
        "Governor {:.1}%  Excitation {:.1}%",
        session.position.governor_percent, session.position.excitation_percent
    );
    print_evaluation(&session.evaluate());
    println!();
    println!("Hints:");
    for hint in HINTS {
        println!("  - {}", hint);
    }
    Ok(())
}

fn cmd_pf(p: f64, pf: f64, machine: &MachineArgs) -> AppResult<()> {
    if !(-1.0..=1.0).contains(&pf) {
        return Err(AppError::InvalidInput(format!(
            "power factor must lie in [-1, 1], got {}",
            pf
        )));
    }
    let session = session_for(machine)?;
    let limits = session.limits();

    let q = q_for_power_factor(p, pf, &limits);
    let (point, violations) = OperatingPoint::new(p, q).clamp_to_limits(&limits);
    let position = control_position_for(&point, &limits);

    println!("Target PF {:+.3} at P = {:.2} MW", pf, p);
    println!("  Q        = {:.2} MVAr", point.q_mvar);
    match point.power_factor() {
        Some(actual) => println!("  PF       = {:+.3}", actual),
        None => println!("  PF       = {}", pq_app::UNDEFINED),
    }
    println!("  Governor   {:.1}%", position.governor_percent);
    println!("  Excitation {:.1}%", position.excitation_percent);
    for violation in violations {
        println!("⚠ {}", violation);
    }
    Ok(())
}

fn print_scenario(scenario: &Scenario, session: &ControlSession) {
    let limits = session.limits();
    let op = &scenario.operating_point;
    let position = control_position_for(op, &limits);
    println!("  {}", scenario.name);
    println!("    {}", scenario.description);
    println!(
        "    P = {:.2} MW, Q = {:+.2} MVAr -> governor {:.1}%, excitation {:.1}%",
        op.p_mw, op.q_mvar, position.governor_percent, position.excitation_percent
    );
}

fn cmd_scenarios(yaml: bool, machine: &MachineArgs) -> AppResult<()> {
    let session = session_for(machine)?;
    if yaml {
        print!("{}", render_scenarios(&session.scenarios())?);
        return Ok(());
    }
    println!("Preset scenarios (S = {:.1} MVA):", session.rating_mva);
    for scenario in session.scenarios() {
        print_scenario(&scenario, &session);
    }
    Ok(())
}

fn cmd_preset(name: &str, machine: &MachineArgs) -> AppResult<()> {
    let mut session = session_for(machine)?;
    session.select_preset(Some(name))?;
    if let Some(scenario) = session.selected_scenario() {
        println!("Preset: {}", scenario.name);
        println!("{}", scenario.description);
        println!();
    }
    print_evaluation(&session.evaluate());
    Ok(())
}

fn cmd_envelope(samples: usize, machine: &MachineArgs) -> AppResult<()> {
    let session = session_for(machine)?;
    println!("q_mvar,p_mw");
    for [q, p] in rating_arc(session.rating_mva, samples) {
        println!("{:.6},{:.6}", q, p);
    }
    Ok(())
}

fn cmd_config(config: Option<PathBuf>, write: Option<PathBuf>) -> AppResult<()> {
    let loaded = load(config.as_ref());
    if let Some(path) = write {
        save_config(&path, &loaded.config)?;
        println!("✓ Configuration written to {}", path.display());
        return Ok(());
    }
    print!("{}", render_config(&loaded.config)?);
    tracing::debug!(warnings = loaded.warnings.len(), "configuration printed");
    Ok(())
}

fn render_config(config: &AppConfig) -> AppResult<String> {
    serde_yaml::to_string(config)
        .map_err(|e| AppError::InvalidInput(format!("Failed to serialize config: {}", e)))
}

fn render_scenarios(scenarios: &[Scenario]) -> AppResult<String> {
    serde_yaml::to_string(scenarios)
        .map_err(|e| AppError::InvalidInput(format!("Failed to serialize scenarios: {}", e)))
}
