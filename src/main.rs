use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use crawl_decision::cli::commands::{cmd_classify, cmd_run};
use crawl_decision::cli::config::{Cli, Commands, build_limits, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Run {
            observations,
            run_id,
            max_pages,
            max_depth,
            max_visits_per_url,
            format,
            output,
            trace,
        } => {
            let limits = build_limits(&config, max_pages, max_depth, max_visits_per_url);

            // Resolve report settings: CLI > config > defaults
            let format = format.unwrap_or_else(|| config.run.format.clone());
            let output = output.or_else(|| config.run.output.clone());
            let trace = trace.or_else(|| config.run.trace.clone());

            let run_id = run_id.unwrap_or_else(default_run_id);

            let defect_free = cmd_run(
                &observations,
                &run_id,
                limits,
                &format,
                output.as_deref(),
                trace.as_deref(),
                cli.verbose,
            )?;
            if !defect_free {
                std::process::exit(1);
            }
        }
        Commands::Classify { observation } => {
            cmd_classify(&observation)?;
        }
    }

    Ok(())
}

fn default_run_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("run-{}", millis)
}
