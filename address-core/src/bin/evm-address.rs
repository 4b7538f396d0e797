use clap::{Args, Parser, Subcommand};
use evm_address::{
    chains::evm::units, crypto::digest_hex, AddressError, AddressResult, AddressValidator,
    EvmConfig, HashVariant, HexCodec,
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Derive, checksum and validate EVM account addresses.
#[derive(Parser)]
#[command(name = "evm-address", version)]
pub struct App {
    #[command(flatten)]
    global: GlobalArgs,

    /// The subcommand to run
    #[command(subcommand)]
    subcommand: Subcommands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Hash primitive used for checksums and derivation. opts: (keccak256, sha3-256)
    #[arg(long, global = true)]
    hash: Option<HashVariant>,

    /// JSON config file, e.g. `{ "hash": "keccak256" }`. `--hash` takes precedence.
    #[arg(long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// The log level for traces. opts: (error, debug, info, warn, trace)
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,
}

#[derive(Subcommand)]
pub enum Subcommands {
    /// Derive the checksummed address of a hex public key (65-byte 0x04.. or 64-byte).
    Derive { public_key: String },

    /// Apply the mixed-case checksum to an address.
    Checksum { address: String },

    /// Check address format and, when a hash is configured, checksum casing.
    Validate { address: String },

    /// Hash a message and print the digest as hex.
    Hash {
        message: String,

        /// Treat the message as hex-encoded bytes instead of UTF-8 text.
        #[arg(long)]
        hex: bool,
    },

    /// Convert a wei amount to ether.
    ToEther { wei: String },

    /// Convert an ether amount to wei.
    ToWei { ether: String },
}

fn main() -> ExitCode {
    let app = App::parse();
    init_tracing(app.global.log_level);

    match run(&app) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `--hash` wins over `--config`; with neither, hashing commands refuse to guess.
fn resolve_config(args: &GlobalArgs) -> AddressResult<Option<EvmConfig>> {
    if let Some(hash) = args.hash {
        return Ok(Some(EvmConfig::new(hash)));
    }
    match &args.config_path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                AddressError::Config(format!("cannot read {}: {}", path.display(), e))
            })?;
            let config = EvmConfig::from_json(&json)?;
            debug!(path = %path.display(), hash = %config.hash, "loaded config");
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

fn require_config(args: &GlobalArgs) -> AddressResult<EvmConfig> {
    resolve_config(args)?.ok_or_else(|| {
        AddressError::Config(
            "no hash primitive configured: pass --hash <keccak256|sha3-256> or --config <file>"
                .to_string(),
        )
    })
}

/// Returns `Ok(false)` when the command ran but the answer is negative.
fn run(app: &App) -> AddressResult<bool> {
    match &app.subcommand {
        Subcommands::Derive { public_key } => {
            let config = require_config(&app.global)?;
            println!("{}", config.deriver().derive(public_key)?);
        }
        Subcommands::Checksum { address } => {
            let config = require_config(&app.global)?;
            println!("{}", config.checksummer().checksum(address)?);
        }
        Subcommands::Validate { address } => {
            let format_ok = AddressValidator::is_valid_format(address);
            println!("format:   {}", if format_ok { "valid" } else { "invalid" });
            if !format_ok {
                return Ok(false);
            }

            let Some(config) = resolve_config(&app.global)? else {
                return Ok(true);
            };
            let checksum_ok = AddressValidator::is_valid_checksum(address, config.hash);
            println!(
                "checksum: {} ({})",
                if checksum_ok { "valid" } else { "mismatch" },
                config.hash
            );
            if !checksum_ok {
                println!("expected: {}", config.checksummer().checksum(address)?);
            }
            return Ok(checksum_ok);
        }
        Subcommands::Hash { message, hex } => {
            let config = require_config(&app.global)?;
            let bytes = if *hex {
                HexCodec::decode(message)?
            } else {
                message.as_bytes().to_vec()
            };
            println!("{}", digest_hex(&config.hash, &bytes));
        }
        Subcommands::ToEther { wei } => println!("{}", units::wei_to_ether(wei)?),
        Subcommands::ToWei { ether } => println!("{}", units::ether_to_wei(ether)?),
    }
    Ok(true)
}
