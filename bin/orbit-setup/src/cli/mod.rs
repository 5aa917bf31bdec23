//! This module contains all CLI-specific code for the orbit-setup binary.

use clap::{
    builder::styling::{AnsiColor, Color, Style},
    ArgAction, Parser,
};
use orbit_config::{
    GeneratorConfig, OperatorKeys, ParentChain, PrivateKey, ARBITRUM_SEPOLIA_CHAIN_ID,
    ARBITRUM_SEPOLIA_RPC_URL, DEFAULT_MIN_L2_BASE_FEE,
};
use std::path::PathBuf;

mod parser;
use parser::parse_rpc_url;

mod tracing_util;
pub(crate) use tracing_util::init_tracing_subscriber;

const ABOUT: &str = "
orbit-setup reads the transaction that created an Arbitrum Orbit rollup from its parent chain and
generates the two documents needed to run the chain: node-config.json, the startup config of the
chain's Nitro node, and l3-config.json, the deployment record consumed by staking and
token-bridge tooling.
";

/// The orbit-setup CLI application arguments.
#[derive(Parser, Clone, Debug)]
#[command(about = ABOUT, version, styles = cli_styles())]
pub(crate) struct OrbitSetupCli {
    /// Verbosity level (0-4)
    #[arg(long, short, action = ArgAction::Count)]
    pub(crate) v: u8,
    /// Hash of the rollup-creation transaction. Takes precedence over `--tx-hash`.
    #[clap(value_name = "TX_HASH")]
    pub(crate) tx_hash_arg: Option<String>,
    /// Hash of the rollup-creation transaction.
    #[clap(long = "tx-hash", value_name = "TX_HASH", env = "TX_HASH")]
    pub(crate) tx_hash_flag: Option<String>,
    /// Name of the chain, written to both configs.
    #[clap(long, env)]
    pub(crate) chain_name: String,
    /// Private key of the deployer, which also owns the chain and collects its fees.
    #[clap(long, env, hide_env_values = true)]
    pub(crate) deployer_private_key: PrivateKey,
    /// Private key of the validator.
    #[clap(long, env, hide_env_values = true)]
    pub(crate) validator_private_key: PrivateKey,
    /// Private key of the batch poster.
    #[clap(long, env, hide_env_values = true)]
    pub(crate) batch_poster_private_key: PrivateKey,
    /// Chain ID of the parent chain the rollup was created on.
    #[clap(long, env, default_value_t = ARBITRUM_SEPOLIA_CHAIN_ID)]
    pub(crate) parent_chain_id: u64,
    /// Parent-chain JSON-RPC endpoint (eth namespace required).
    #[clap(long, env, default_value = ARBITRUM_SEPOLIA_RPC_URL, value_parser = parse_rpc_url)]
    pub(crate) parent_chain_rpc_url: String,
    /// Minimum L2 base fee of the chain, in wei.
    #[clap(long, env, default_value_t = DEFAULT_MIN_L2_BASE_FEE)]
    pub(crate) min_l2_base_fee: u64,
    /// Directory the configs are written to. Must exist.
    #[clap(long, env, default_value = ".")]
    pub(crate) output_dir: PathBuf,
}

impl OrbitSetupCli {
    /// Returns the creation transaction hash as given, positional argument first.
    pub(crate) fn tx_hash(&self) -> Option<&str> {
        self.tx_hash_arg.as_deref().or(self.tx_hash_flag.as_deref())
    }

    /// Builds the [GeneratorConfig] described by the arguments.
    pub(crate) fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            chain_name: self.chain_name.clone(),
            keys: OperatorKeys {
                deployer: self.deployer_private_key.clone(),
                validator: self.validator_private_key.clone(),
                batch_poster: self.batch_poster_private_key.clone(),
            },
            parent_chain: ParentChain {
                id: self.parent_chain_id,
                rpc_url: self.parent_chain_rpc_url.clone(),
            },
            min_l2_base_fee: self.min_l2_base_fee,
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Styles for the CLI application.
const fn cli_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
        .header(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .error(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .valid(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_config::test_utils::{
        generator_config, BATCH_POSTER_KEY, DEPLOYER_KEY, VALIDATOR_KEY,
    };

    const ZERO_KEY: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";
    const HASH: &str = "0x8b4fd1ab2b1f1b39a3f1fd24ba4b4a44f67a8b2b4bcb2a7b0e84f1d0e0f2a6c1";

    fn required_flags() -> Vec<&'static str> {
        vec![
            "orbit-setup",
            "--chain-name",
            "my-chain",
            "--deployer-private-key",
            DEPLOYER_KEY,
            "--validator-private-key",
            VALIDATOR_KEY,
            "--batch-poster-private-key",
            BATCH_POSTER_KEY,
        ]
    }

    #[test]
    fn test_defaults() {
        let mut args = required_flags();
        args.push(HASH);
        let cli = OrbitSetupCli::try_parse_from(args).unwrap();

        assert_eq!(cli.v, 0);
        assert_eq!(cli.tx_hash(), Some(HASH));
        assert_eq!(cli.generator_config(), generator_config("."));
    }

    #[test]
    fn test_overrides() {
        let mut args = required_flags();
        args.extend([
            "-vvv",
            "--tx-hash",
            HASH,
            "--parent-chain-id",
            "42161",
            "--parent-chain-rpc-url",
            "https://arb1.arbitrum.io/rpc",
            "--min-l2-base-fee",
            "10000000",
            "--output-dir",
            "/tmp/orbit",
        ]);
        let cli = OrbitSetupCli::try_parse_from(args).unwrap();
        let cfg = cli.generator_config();

        assert_eq!(cli.v, 3);
        assert_eq!(cli.tx_hash(), Some(HASH));
        assert_eq!(cfg.parent_chain.id, 42161);
        assert_eq!(cfg.parent_chain.rpc_url, "https://arb1.arbitrum.io/rpc");
        assert_eq!(cfg.min_l2_base_fee, 10_000_000);
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/orbit"));
    }

    #[test]
    fn test_positional_hash_takes_precedence() {
        let mut args = required_flags();
        args.extend(["--tx-hash", "0x1234", HASH]);
        let cli = OrbitSetupCli::try_parse_from(args).unwrap();
        assert_eq!(cli.tx_hash(), Some(HASH));
    }

    #[test]
    fn test_malformed_hash_is_left_to_the_generator() {
        let mut args = required_flags();
        args.push("not-a-hash");
        let cli = OrbitSetupCli::try_parse_from(args).unwrap();
        assert_eq!(cli.tx_hash(), Some("not-a-hash"));
    }

    #[test]
    fn test_invalid_arguments() {
        let cases = [
            ("--deployer-private-key", "0x1234"),
            ("--validator-private-key", "zz"),
            ("--batch-poster-private-key", ZERO_KEY),
            ("--parent-chain-rpc-url", "ws://localhost:8548"),
            ("--min-l2-base-fee", "abc"),
        ];
        for (flag, value) in cases {
            let mut args = required_flags();
            match args.iter().position(|a| *a == flag) {
                Some(i) => args[i + 1] = value,
                None => args.extend([flag, value]),
            }
            args.push(HASH);
            assert!(OrbitSetupCli::try_parse_from(args).is_err(), "{flag} {value}");
        }
    }

    #[test]
    fn test_missing_chain_name() {
        let mut args = required_flags();
        args.drain(1..3);
        args.push(HASH);
        assert!(OrbitSetupCli::try_parse_from(args).is_err());
    }
}
