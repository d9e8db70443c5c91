// src/bin/classic_cipher.rs
//! Command-line front end: encrypt or decrypt one text with either engine

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use classic_ciphers::config::{load_or_default, resolve_path};
use classic_ciphers::{Cipher, CipherKind, Config, GronsfeldCipher, RouteCipher};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "classic-cipher")]
#[command(author, version, about = "Route and Gronsfeld ciphers for Russian text")]
struct Cli {
    /// TOML config with default engine and keys
    #[arg(long, global = true, env = "CLASSIC_CIPHERS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt TEXT (or stdin)
    Encrypt(Job),
    /// Decrypt TEXT (or stdin)
    Decrypt(Job),
}

#[derive(Args)]
struct Job {
    /// Engine to use: route or gronsfeld
    #[arg(long, short)]
    cipher: Option<CipherKind>,

    /// Route cipher column count
    #[arg(long, allow_negative_numbers = true)]
    columns: Option<i64>,

    /// Gronsfeld key phrase
    #[arg(long, short)]
    key: Option<String>,

    /// Text to process; read from stdin when omitted
    text: Option<String>,
}

impl Job {
    fn engine(&self, config: &Config) -> Result<Box<dyn Cipher + Send + Sync>> {
        let kind = self.cipher.unwrap_or(config.cipher.default);
        debug!(%kind, "selected engine");
        let engine: Box<dyn Cipher + Send + Sync> = match kind {
            CipherKind::Route => {
                let columns = self.columns.unwrap_or(config.route.columns);
                Box::new(RouteCipher::new(columns).context("bad route key")?)
            }
            CipherKind::Gronsfeld => {
                let key = self.key.as_deref().unwrap_or(&config.gronsfeld.key);
                Box::new(GronsfeldCipher::new(key).context("bad gronsfeld key")?)
            }
        };
        Ok(engine)
    }

    fn input(&self) -> Result<Vec<u8>> {
        match &self.text {
            Some(text) => Ok(text.clone().into_bytes()),
            None => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(resolve_path);
    let config = load_or_default(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let output = match cli.command {
        Commands::Encrypt(job) => {
            let engine = job.engine(&config)?;
            engine.encrypt_bytes(&job.input()?).context("encryption failed")?
        }
        Commands::Decrypt(job) => {
            let engine = job.engine(&config)?;
            engine.decrypt_bytes(&job.input()?).context("decryption failed")?
        }
    };

    info!(len = output.chars().count(), "done");
    println!("{output}");
    Ok(())
}
