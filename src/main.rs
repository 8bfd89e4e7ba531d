use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use zcl_meter_rs::{
    init_logger, log_info, AttributeReport, AttributeValue, Cluster, InMemoryAttributeStore,
    MeterDeviceManager, SPM02_EXPOSES,
};

#[derive(Parser)]
#[command(name = "zcl-meter-cli")]
#[command(about = "CLI tool for decoding energy-meter attribute reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a JSON capture of attribute reports and print the payloads
    Decode { file: PathBuf },
    /// List the output quantities declared for SPM02-class meters
    Exposes,
}

/// One primed attribute in a capture file.
#[derive(Deserialize)]
struct CapturedAttribute {
    device: String,
    endpoint: u8,
    cluster: Cluster,
    attribute: String,
    value: AttributeValue,
}

/// A capture file: primed attribute cache plus the reports to decode.
#[derive(Deserialize)]
struct Capture {
    #[serde(default)]
    attributes: Vec<CapturedAttribute>,
    reports: Vec<AttributeReport>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    match cli.command {
        Commands::Decode { file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("reading capture file {}", file.display()))?;
            let capture: Capture =
                serde_json::from_str(&raw).context("parsing capture file")?;

            let store = Arc::new(InMemoryAttributeStore::new());
            for attr in &capture.attributes {
                store.set_attribute(
                    &attr.device,
                    attr.endpoint,
                    attr.cluster,
                    &attr.attribute,
                    attr.value.clone(),
                );
            }

            let manager = MeterDeviceManager::new(store);
            for report in &capture.reports {
                let payload = manager.decode(report)?;
                println!("{}", serde_json::to_string(&payload)?);
            }
            log_info(&format!("Decoded {} reports", capture.reports.len()));
        }
        Commands::Exposes => {
            for expose in SPM02_EXPOSES {
                println!("{} [{}] - {}", expose.name, expose.unit, expose.label);
            }
        }
    }

    Ok(())
}
