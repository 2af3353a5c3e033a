//! Hybrid Digest CLI
//!
//! Hashes files (or stdin) with a registry algorithm and prints the
//! algorithm dispatch table used by RSA signing and hybrid encryption.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hybrid_digest::{
    digest_reader, Algorithm, ConfigManager, DigestBytes, ExportFormat, OutputEncoding,
};
use miette::{Context, IntoDiagnostic, Result};

#[derive(Parser)]
#[command(name = "hybrid-digest")]
#[command(about = "Digest algorithm registry for RSA signing and hybrid encryption")]
#[command(long_about = "
Hybrid Digest - compute message digests and inspect algorithm pairings

EXAMPLES:
    # Hash a file with the configured default algorithm
    hybrid-digest hash release.tar.gz

    # Hash stdin with SHA-512, base64 output
    cat message.bin | hybrid-digest hash -a sha512 -e base64

    # Check a file against a known digest
    hybrid-digest hash release.tar.gz -a sha256 --expect e3b0c442...

    # Show which hash, padding and cipher each algorithm selects
    hybrid-digest list

ENVIRONMENT VARIABLES:
    RUST_LOG        Logging level (debug, info, warn, error)
")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the digest of a file, or stdin when no file is given
    Hash {
        /// File to hash
        file: Option<PathBuf>,

        /// Digest algorithm (overrides the configured default)
        #[arg(short, long, value_enum)]
        algorithm: Option<AlgorithmArg>,

        /// Output encoding (overrides the configured default)
        #[arg(short, long, value_enum)]
        encoding: Option<EncodingArg>,

        /// Expected digest in hex; exit with an error on mismatch
        #[arg(long)]
        expect: Option<String>,
    },

    /// Print the algorithm dispatch table
    List,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show {
        /// Export format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ExportFormatArg,
    },
    /// Write a default configuration file if none exists
    Init,
    /// Set a configuration value
    Set {
        /// default_algorithm | read_buffer_size | output_encoding | uppercase_hex
        key: String,
        value: String,
    },
    /// Print the configuration file path
    Path,
}

#[derive(ValueEnum, Clone, Copy)]
enum AlgorithmArg {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Gcm,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha1 => Algorithm::Sha1,
            AlgorithmArg::Sha224 => Algorithm::Sha224,
            AlgorithmArg::Sha256 => Algorithm::Sha256,
            AlgorithmArg::Sha384 => Algorithm::Sha384,
            AlgorithmArg::Sha512 => Algorithm::Sha512,
            AlgorithmArg::Gcm => Algorithm::Gcm,
        }
    }
}

#[derive(ValueEnum, Clone, Copy)]
enum EncodingArg {
    Hex,
    Base64,
}

impl From<EncodingArg> for OutputEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Hex => OutputEncoding::Hex,
            EncodingArg::Base64 => OutputEncoding::Base64,
        }
    }
}

#[derive(ValueEnum, Clone, Copy)]
enum ExportFormatArg {
    Toml,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Toml => ExportFormat::Toml,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config_manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };

    match cli.command {
        Commands::Hash {
            file,
            algorithm,
            encoding,
            expect,
        } => handle_hash_command(
            &config_manager,
            file,
            algorithm.map(Into::into),
            encoding.map(Into::into),
            expect,
        ),
        Commands::List => {
            print_dispatch_table();
            Ok(())
        }
        Commands::Config { action } => handle_config_command(&config_manager, action),
    }
}

fn handle_hash_command(
    config_manager: &ConfigManager,
    file: Option<PathBuf>,
    algorithm: Option<Algorithm>,
    encoding: Option<OutputEncoding>,
    expect: Option<String>,
) -> Result<()> {
    let mut config = config_manager.load_or_default()?;
    if let Some(encoding) = encoding {
        config.output_encoding = encoding;
    }
    let algorithm = algorithm.unwrap_or(config.default_algorithm);

    let (digest, label) = match &file {
        Some(path) => {
            let handle = File::open(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
            let digest = digest_reader(BufReader::new(handle), algorithm, config.read_buffer_size)?;
            (digest, path.display().to_string())
        }
        None => {
            let stdin = io::stdin();
            let digest = digest_reader(stdin.lock(), algorithm, config.read_buffer_size)?;
            (digest, "-".to_string())
        }
    };

    println!("{}  {}", config.encode(&digest), label);

    if let Some(expected) = expect {
        let expected = DigestBytes::from_hex(algorithm, &expected)
            .into_diagnostic()
            .wrap_err("Invalid --expect value")?;
        if expected != digest {
            return Err(miette::miette!(
                "{algorithm} digest mismatch for {label}: expected {}, got {}",
                expected.to_hex(),
                digest.to_hex()
            ));
        }
        log::info!("{algorithm} digest verified for {label}");
    }

    Ok(())
}

fn print_dispatch_table() {
    println!(
        "{:<8} {:>6}  {:<8} {:<22} {:<12} {:<6}",
        "NAME", "LENGTH", "HASH", "SIGNATURE PADDING", "CIPHER", "WRAP"
    );
    for algorithm in Algorithm::ALL {
        let signature = algorithm.signature_pairing();
        let encryption = algorithm.encryption_pairing();
        println!(
            "{:<8} {:>6}  {:<8} {:<22} {:<12} {:<6}",
            algorithm.as_str(),
            algorithm.length(),
            algorithm.hash_family().as_str(),
            signature.padding.as_str(),
            encryption.cipher.as_str(),
            encryption.padding.as_str(),
        );
    }
}

fn handle_config_command(config_manager: &ConfigManager, action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show { format } => {
            let rendered = config_manager.export_config(format.into())?;
            println!("{rendered}");
        }
        ConfigCommands::Init => {
            config_manager.load_or_create_default()?;
            println!(
                "Configuration file: {}",
                config_manager.config_path().display()
            );
        }
        ConfigCommands::Set { key, value } => {
            config_manager
                .update_value(&key, &value)
                .wrap_err_with(|| format!("Failed to set {key}"))?;
            println!("Set {key} = {value}");
        }
        ConfigCommands::Path => {
            println!("{}", config_manager.config_path().display());
        }
    }
    Ok(())
}
