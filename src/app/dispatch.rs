use anyhow::Result;
use tracing::info;

use namegauge::config::EngineConfig;
use namegauge::engine::{NameGauge, require_name};
use namegauge::links::NextStepLinks;

use crate::app::render;
use crate::cli::commands::{Cli, Commands};

/// Route a parsed command line to the engine and print the result.
pub fn dispatch(cli: Cli, config: EngineConfig) -> Result<()> {
    let engine = NameGauge::new(&config)?;

    match &cli.command {
        Commands::Single { name } => {
            require_name(name, "name")?;
            let report = engine.evaluate(name);
            info!(name = %report.normalized_name, "single evaluation");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let links = build_links(&cli, &report.normalized_name);
                render::single(&report, links.as_ref());
            }
        }

        Commands::Compare { name_a, name_b } => {
            require_name(name_a, "name A")?;
            require_name(name_b, "name B")?;
            let result = engine.compare(name_a, name_b);
            info!(preferred = %result.preferred_name, "compare evaluation");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let links = build_links(&cli, &result.preferred_name);
                render::compare(&result, links.as_ref());
            }
        }
    }

    Ok(())
}

fn build_links(cli: &Cli, name: &str) -> Option<NextStepLinks> {
    if cli.no_links {
        None
    } else {
        Some(NextStepLinks::for_name(name))
    }
}
