//! Command-line runner for the coverage planner.
//!
//! Reads a planning job as JSON, runs the planner, and writes the response
//! JSON to stdout or a file.
//!
//! # Usage
//!
//! ```bash
//! # Plan a job and print the trajectory
//! lepa-plan --job job.json
//!
//! # Read from stdin, pretty-print to a file
//! cat job.json | lepa-plan --job - --output trajectory.json --pretty
//! ```

use clap::Parser;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

use lepa_plan::{PlanError, PlanRequest};

/// Coverage path planner for wall-finishing robots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the job request JSON file, or `-` for stdin
    #[arg(short, long)]
    job: String,

    /// Output path for the response JSON (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the output JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let input = match read_job(&args.job) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: cannot read job '{}': {}", args.job, e);
            return ExitCode::from(1);
        }
    };

    let request: PlanRequest = match serde_json::from_str(&input) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("error: malformed job request: {}", e);
            return ExitCode::from(1);
        }
    };

    log::info!(
        "planning job '{}': wall {}x{}, {} obstacles",
        request.job_name.as_deref().unwrap_or("unnamed"),
        request.wall.width,
        request.wall.height,
        request.obstacles.len()
    );

    let response = match request.run() {
        Ok(response) => response,
        Err(e @ PlanError::InvalidParameters(_)) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
        Err(e @ PlanError::CollisionDetected { .. }) => {
            // Planner self-inconsistency, not a caller mistake
            eprintln!("error: {}", e);
            return ExitCode::from(3);
        }
    };

    log::info!(
        "planned {} waypoints, {:.2} m, coverage {:.1}%",
        response.meta.num_waypoints,
        response.meta.path_length_m,
        response.meta.coverage_fraction * 100.0
    );
    for warning in &response.meta.warnings {
        log::warn!("planner warning: {}", warning);
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };
    let json = match json {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: cannot serialize response: {}", e);
            return ExitCode::from(1);
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("error: cannot write '{}': {}", path, e);
                return ExitCode::from(1);
            }
            log::info!("wrote {}", path);
        }
        None => println!("{}", json),
    }

    ExitCode::SUCCESS
}

fn read_job(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}
