//! Scheduling Service - operator commands for clinic staff records.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{HashedPassword, SecurePassword};
use scheduling_service_lib::SchedulingServiceConfig;

#[derive(Parser)]
#[command(name = "scheduling-service")]
#[command(about = "Dental clinic scheduling tools")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a staff password for seeding a user record
    HashPassword {
        #[arg(long, env = "STAFF_PASSWORD")]
        password: String,
    },
    /// Check a password against a stored hash and salt (hex)
    VerifyPassword {
        #[arg(long)]
        hash: String,
        #[arg(long)]
        salt: String,
        #[arg(long, env = "STAFF_PASSWORD")]
        password: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = SchedulingServiceConfig::from_env();

    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!(service = %config.service.service_name, "Configuration loaded");

    let result = match cli.command {
        Commands::HashPassword { password } => hash_password(password),
        Commands::VerifyPassword {
            hash,
            salt,
            password,
        } => verify_password(&hash, &salt, &password),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn hash_password(password: String) -> Result<(), Box<dyn std::error::Error>> {
    let password = SecurePassword::parse(password)?;
    let hashed = HashedPassword::from_plaintext(&password);

    println!("hash: {}", hex::encode(hashed.hash()));
    println!("salt: {}", hex::encode(hashed.salt()));
    Ok(())
}

fn verify_password(
    hash: &str,
    salt: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let stored = HashedPassword::from_parts(&hex::decode(hash)?, &hex::decode(salt)?)?;

    if stored.is_match(password) {
        println!("match");
        Ok(())
    } else {
        Err("password does not match".into())
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, default_level: &str) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
