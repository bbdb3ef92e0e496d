use clap::{Parser, Subcommand, ValueEnum};
use momentum_core::report::readout_lines;
use momentum_core::{build_demo, Animator, Command, Demo, DemoConfig, DemoKind};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod viewer;

#[derive(Parser)]
#[command(name = "momentum")]
#[command(about = "Momentum - Collision, explosion and rocket demos", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demo headless and print its momentum readout
    Run {
        demo: DemoArg,

        /// Number of frames to simulate
        #[arg(long, default_value_t = 200)]
        frames: u64,

        /// YAML preset with demo parameters
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for the explosion and rocket random draws
        #[arg(long)]
        seed: Option<u64>,

        /// Frame at which to fire the demo trigger (detonates the explosion)
        #[arg(long)]
        trigger_at: Option<u64>,
    },
    /// Open a window and animate a demo
    View {
        demo: DemoArg,

        /// YAML preset, reloaded whenever the file changes
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DemoArg {
    Elastic1d,
    Inelastic1d,
    Collision2d,
    Explosion,
    Rocket,
}

impl From<DemoArg> for DemoKind {
    fn from(arg: DemoArg) -> Self {
        match arg {
            DemoArg::Elastic1d => DemoKind::Elastic1d,
            DemoArg::Inelastic1d => DemoKind::Inelastic1d,
            DemoArg::Collision2d => DemoKind::Collision2d,
            DemoArg::Explosion => DemoKind::Explosion,
            DemoArg::Rocket => DemoKind::Rocket,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            demo,
            frames,
            config,
            seed,
            trigger_at,
        } => run_demo(demo.into(), frames, config.as_deref(), seed, trigger_at),
        Commands::View { demo, config } => viewer::launch(demo.into(), config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<DemoConfig, momentum_core::ConfigError> {
    match path {
        Some(path) => DemoConfig::load(path),
        None => Ok(DemoConfig::default()),
    }
}

fn run_demo(
    kind: DemoKind,
    frames: u64,
    config: Option<&Path>,
    seed: Option<u64>,
    trigger_at: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config)?;
    if seed.is_some() {
        config.explosion.seed = seed;
        config.rocket.seed = seed;
    }

    let demo = build_demo(kind, &config)?;
    let planar = matches!(kind, DemoKind::Collision2d | DemoKind::Explosion);

    println!("{}", kind);
    for line in readout_lines(&demo.readout(), planar) {
        println!("  {}", line);
    }

    let mut animator = Animator::new(demo);
    animator.command(Command::Start);
    let trigger = trigger_at.or_else(|| (kind == DemoKind::Explosion).then_some(1));
    if trigger == Some(0) {
        animator.command(Command::Trigger);
    }
    let ran = animator.run(frames, |_, frame| {
        (Some(frame) == trigger).then_some(Command::Trigger)
    });

    println!("after {} frames ({:.2} s)", ran, animator.demo().elapsed());
    for line in readout_lines(&animator.demo().readout(), planar) {
        println!("  {}", line);
    }

    Ok(())
}
