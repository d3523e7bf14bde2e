//! Sitewatch - website uptime monitor.
//!
//! Checks every configured site once and prints a status table; with
//! `--mail`, also sends the summary as an HTML email. Periodic execution is
//! left to cron or similar.

use clap::Parser;
use sitewatch_core::{monitor, tracing_setup, Config, HttpFetch, SmtpMailer};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "sitewatch")]
#[command(version)]
#[command(about = "A website monitor", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Send the HTML summary email to the configured recipients
    #[arg(short, long)]
    mail: bool,
}

#[tokio::main]
async fn main() {
    tracing_setup::init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            debug!("{}", e);
            println!("No such config file.");
            process::exit(1);
        }
    };

    let mailer = if cli.mail {
        match config.sender.clone() {
            Some(sender) => Some(SmtpMailer::new(sender, config.recipients.clone())),
            None => {
                eprintln!("Mail requested but no sender is configured.");
                process::exit(1);
            }
        }
    } else {
        None
    };

    let fetch = HttpFetch::new();

    if let Err(e) = monitor::run(&config, &fetch, mailer.as_ref()).await {
        error!("{}", e);
        process::exit(1);
    }
}
