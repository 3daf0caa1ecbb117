// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

mod commands;
mod config;
mod output;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use commands::codegen::KeySource;
use log::LevelFilter;
use ust_verifier::InputPolicy;

#[derive(Parser)]
#[command(
    name = "ust",
    about = "Verify user-state-transition Groth16 proofs over BN254"
)]
struct Cli {
    /// Print a single JSON document on stdout
    #[arg(long, global = true)]
    json: bool,
    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify a proof against the embedded key
    Verify {
        /// snarkjs proof.json or a JSON array of 8 words
        #[arg(long)]
        proof: PathBuf,
        /// JSON array of public inputs
        #[arg(long)]
        public: PathBuf,
        /// Ignore public inputs beyond the circuit's count
        #[arg(long)]
        truncate: bool,
    },
    /// Print the embedded verifying key
    Vk,
    /// Render a snarkjs verification key as a Rust table
    Codegen {
        /// snarkjs verification_key.json
        #[arg(long, required_unless_present = "ark_vk", conflicts_with = "ark_vk")]
        vk: Option<PathBuf>,
        /// Hex-encoded compressed arkworks verifying key
        #[arg(long)]
        ark_vk: Option<PathBuf>,
        /// Name of the generated static
        #[arg(long, default_value = "VERIFYING_KEY")]
        name: String,
    },
    /// Show or change ~/.ust/config.json
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print current settings
    Show,
    /// Set a key (input_policy, color)
    Set { key: String, value: String },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{:>5}|{:<24}| {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // a second init only happens under test harnesses
    let _ = builder.try_init();
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    // `config` must stay usable when the file itself is what needs repair
    let config = match cli.command {
        Cmd::Config { .. } => config::Config::default(),
        _ => config::load_config()?,
    };
    output::set_color(config.color);

    match cli.command {
        Cmd::Verify {
            proof,
            public,
            truncate,
        } => {
            let policy = if truncate {
                InputPolicy::Truncate
            } else {
                config.input_policy.into()
            };
            log::debug!("verify: policy {policy:?}");
            let outcome = commands::verify::run(&proof, &public, policy)?;
            return Ok(outcome.exit_code());
        }
        Cmd::Vk => commands::vk::run()?,
        Cmd::Codegen { vk, ark_vk, name } => {
            let source = match (&vk, &ark_vk) {
                (Some(path), _) => KeySource::Snarkjs(path),
                (None, Some(path)) => KeySource::Arkworks(path),
                (None, None) => anyhow::bail!("codegen needs --vk or --ark-vk"),
            };
            commands::codegen::run(source, &name)?
        }
        Cmd::Config { action } => match action {
            ConfigCmd::Show => commands::config::show()?,
            ConfigCmd::Set { key, value } => commands::config::set(&key, &value)?,
        },
    }
    Ok(0)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    init_logger(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            if output::is_json() {
                output::json_output(serde_json::json!({ "error": format!("{e:#}") }));
            } else {
                output::error_msg(&format!("{e:#}"));
            }
            ExitCode::from(2)
        }
    }
}
