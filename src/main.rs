use anyhow::{Context, Result};
use clap::Parser;

use fly_camera::cli::{Cli, Command};
use fly_camera::settings::CameraSettings;
use fly_camera::trace::{self, InputTrace};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            trace: trace_path,
            settings,
            aspect,
            final_only,
        } => {
            let mut input = InputTrace::load(&trace_path)
                .with_context(|| format!("failed to load trace {}", trace_path.display()))?;

            if let Some(path) = settings {
                let overrides = CameraSettings::load(&path)
                    .with_context(|| format!("failed to load settings {}", path.display()))?;
                input.settings = Some(overrides);
            }

            let reports = trace::replay(&input, aspect).context("replay failed")?;
            let skipped = reports.iter().filter(|r| r.movement_skipped).count();
            log::info!("replayed {} frames ({} with skipped movement)", reports.len(), skipped);

            let json = if final_only {
                serde_json::to_string_pretty(&reports.last())?
            } else {
                serde_json::to_string_pretty(&reports)?
            };
            println!("{json}");
        }
        Command::Defaults => {
            println!("{}", CameraSettings::default().to_json_pretty()?);
        }
    }

    Ok(())
}
