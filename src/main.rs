// src/main.rs
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use otg_core::{config, sample, solve};

/// Command-line front end for the single-DOF online trajectory generator.
#[derive(Debug, Parser)]
#[command(name = "otg-cli", about = "Time-optimal jerk-limited trajectory solver")]
struct Args {
    /// Initial position
    p0: f64,
    /// Initial velocity
    v0: f64,
    /// Initial acceleration
    a0: f64,
    /// Target position
    pf: f64,
    /// Target velocity
    vf: f64,

    /// Path to a TOML file with v_max/a_max/j_max/sample_dt
    #[arg(long, default_value = "otg.toml")]
    config: PathBuf,

    /// Override the configured velocity bound
    #[arg(long)]
    v_max: Option<f64>,
    /// Override the configured acceleration bound
    #[arg(long)]
    a_max: Option<f64>,
    /// Override the configured jerk bound
    #[arg(long)]
    j_max: Option<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match config::load_config(&args.config) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "could not load config, using defaults");
            config::Config::default()
        }
    };
    if let Some(v_max) = args.v_max {
        config.v_max = v_max;
    }
    if let Some(a_max) = args.a_max {
        config.a_max = a_max;
    }
    if let Some(j_max) = args.j_max {
        config.j_max = j_max;
    }

    tracing::info!(
        p0 = args.p0,
        v0 = args.v0,
        a0 = args.a0,
        pf = args.pf,
        vf = args.vf,
        v_max = config.v_max,
        a_max = config.a_max,
        j_max = config.j_max,
        "solving profile"
    );

    let profile = match solve(
        args.p0,
        args.v0,
        args.a0,
        args.pf,
        args.vf,
        config.v_max,
        config.a_max,
        config.j_max,
    ) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::error!(error = %err, "no feasible profile");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(duration = profile.duration(), "profile found");

    println!("t,p,v,a");
    let total = profile.duration();
    let dt = config.sample_dt.max(1e-6);
    let mut tau = 0.0;
    while tau < total {
        let (p, v, a) = sample(&profile, tau);
        println!("{tau:.6},{p:.6},{v:.6},{a:.6}");
        tau += dt;
    }
    let (p, v, a) = sample(&profile, total);
    println!("{total:.6},{p:.6},{v:.6},{a:.6}");

    ExitCode::SUCCESS
}
