#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use anyhow::{anyhow, Result};
use clap::Parser;
use orbit_config::{parse_tx_hash, ConfigGenerator, GeneratedArtifacts};
use orbit_providers_alloy::AlloyChainReader;
use std::process::ExitCode;
use tracing::{error, info, warn};

mod cli;
use cli::{init_tracing_subscriber, OrbitSetupCli};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let cli = OrbitSetupCli::parse();
    if let Err(e) = init_tracing_subscriber(cli.v) {
        eprintln!("Failed to initialize tracing: {e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(written) => {
            info!(
                target: "orbit_setup",
                "Wrote {} and {}",
                written.node_config.display(),
                written.l3_config.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(target: "orbit_setup", "{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: OrbitSetupCli) -> Result<GeneratedArtifacts> {
    let tx_hash = cli.tx_hash().ok_or_else(|| {
        anyhow!("No creation transaction hash provided. Pass it as an argument or via TX_HASH.")
    })?;
    // Rejected before any request reaches the parent chain.
    let tx_hash = parse_tx_hash(tx_hash)?;

    let cfg = cli.generator_config();
    let url = cfg.parent_chain.rpc_url.parse()?;
    let reader = AlloyChainReader::new_http(url);

    match reader.chain_id().await {
        Ok(id) if id != cfg.parent_chain.id => warn!(
            target: "orbit_setup",
            "Parent chain RPC reports chain ID {id}, expected {}",
            cfg.parent_chain.id
        ),
        Ok(_) => {}
        Err(e) => warn!(target: "orbit_setup", "Could not query the parent chain ID: {e}"),
    }

    let written = ConfigGenerator::new(reader, cfg).generate(tx_hash).await?;
    Ok(written)
}
