//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tuishujun-bot")]
#[command(about = "Telegram bot for tuishujun.com book lookups", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TUISHUJUN_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Look up one book and print its cover URL and caption (needs TUISHUJUN_API_TOKEN only).
    Lookup {
        book_id: String,
    },
}
