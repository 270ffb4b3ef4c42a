pub mod init;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mathmerise")]
#[command(version)]
#[command(about = "A lightweight math reference site", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "mathmerise.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new site directory with a default config
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Run the web server
    Serve {
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Apply pending database migrations
    Migrate,
    /// Reset the database and load sample categories and topics
    Seed,
}
