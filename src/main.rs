use std::path::{Path, PathBuf};

use cardano_wallet_client::mnemonic::{DEFAULT_LANGUAGE, DEFAULT_WORD_COUNT};
use cardano_wallet_client::{ApiResponse, CardanoWallet, Config, WalletFamily};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// cardano-wallet - command line companion for the cardano-wallet REST API
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Full base URL, e.g. https://localhost:8090/v2 (overrides host, port and protocol)
    #[arg(long, global = true)]
    url: Option<String>,

    #[arg(long, global = true)]
    host: Option<String>,

    #[arg(long, global = true)]
    port: Option<u16>,

    #[arg(long, global = true)]
    protocol: Option<String>,

    /// CA certificate bundle (PEM)
    #[arg(long, global = true)]
    cacert: Option<PathBuf>,

    /// Client certificate and key (PEM)
    #[arg(long, global = true)]
    pem: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mnemonic sentence locally
    Mnemonic {
        #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
        words: usize,
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        language: String,
    },
    /// Query network information
    Network {
        #[arg(value_enum)]
        query: NetworkQuery,
    },
    /// List wallets of one family
    Wallets {
        #[arg(short, long, value_enum, default_value_t = Family::Shelley)]
        family: Family,
    },
    /// Submit a serialized transaction through the proxy endpoint
    Submit { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkQuery {
    Information,
    Clock,
    Parameters,
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    Shelley,
    Byron,
    Shared,
}

impl From<Family> for WalletFamily {
    fn from(family: Family) -> Self {
        match family {
            Family::Shelley => Self::Shelley,
            Family::Byron => Self::Byron,
            Family::Shared => Self::Shared,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let response = match &cli.command {
        Commands::Mnemonic { words, language } => {
            let sentence = cardano_wallet_client::mnemonic_sentence(*words, language)?;
            println!("{}", sentence.join(" "));
            return Ok(());
        }
        Commands::Network { query } => {
            let network = connect(&cli)?.misc().network();
            match query {
                NetworkQuery::Information => network.information().await?,
                NetworkQuery::Clock => network.clock().await?,
                NetworkQuery::Parameters => network.parameters().await?,
            }
        }
        Commands::Wallets { family } => {
            let client = connect(&cli)?;
            match WalletFamily::from(*family) {
                WalletFamily::Shelley => client.shelley().wallets().list().await?,
                WalletFamily::Byron => client.byron().wallets().list().await?,
                WalletFamily::Shared => client.shared().wallets().list().await?,
            }
        }
        Commands::Submit { file } => {
            let transaction = std::fs::read(file)
                .wrap_err_with(|| format!("failed to read {}", file.display()))?;
            connect(&cli)?
                .misc()
                .proxy()
                .submit_external_transaction(transaction)
                .await?
        }
    };

    print_response(&response)?;
    Ok(())
}

fn connect(cli: &Cli) -> Result<CardanoWallet> {
    Ok(CardanoWallet::new(resolve_config(cli)?)?)
}

/// `--config`, else the per-user config file if present, else defaults;
/// flags override whatever was loaded.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let loaded = match config_file(cli.config.as_deref()) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let config = apply_flags(loaded, cli);

    tracing::debug!(base_url = %config.base_url(), "configuration resolved");
    Ok(config)
}

/// `--host`, `--port` and `--protocol` drop a `url` loaded from file, since
/// a full URL would otherwise shadow them. `--url` always wins.
fn apply_flags(mut config: Config, cli: &Cli) -> Config {
    if cli.host.is_some() || cli.port.is_some() || cli.protocol.is_some() {
        config.url = None;
    }

    if let Some(url) = &cli.url {
        config = config.with_url(url);
    }
    if let Some(host) = &cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(protocol) = &cli.protocol {
        config = config.with_protocol(protocol);
    }
    if let Some(cacert) = &cli.cacert {
        config = config.with_ca_cert(cacert);
    }
    if let Some(pem) = &cli.pem {
        config = config.with_client_cert(pem);
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    config
}

fn config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    dirs::config_dir()
        .map(|dir| dir.join("cardano-wallet").join("config.json"))
        .filter(|path| path.is_file())
}

fn print_response(response: &ApiResponse) -> Result<()> {
    println!("{}", response.status());
    match response.json() {
        Some(json) => println!("{}", serde_json::to_string_pretty(json)?),
        None => println!("{}", response.text()),
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
