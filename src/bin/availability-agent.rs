use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use availability_agent::config::settings::{AgentSettings, LogFormat, LoggingConfig};
use availability_agent::helpers::time::parse_target_date;
use availability_agent::scheduler::driver::Driver;
use availability_agent::utils::constants::{AVAILABILITY_URL, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_USER_AGENT, TOKEN_URL};
use availability_agent::utils::logging::{self, LogLevel};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report availability strictly before this day (YYYY-MM-DD)
    #[arg(value_parser = parse_target_date)]
    target: NaiveDate,
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
    /// Seconds between the starts of two polls
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    interval_secs: u64,
    /// Upper bound for each HTTP request; unbounded when absent
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    request_timeout_secs: Option<u64>,
    #[arg(long, default_value = TOKEN_URL)]
    token_url: String,
    #[arg(long, default_value = AVAILABILITY_URL)]
    availability_url: String,
    /// Client identification; change it if the token endpoint answers 403
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
}

impl Args {
    fn settings(&self) -> AgentSettings {
        AgentSettings {
            token_url: self.token_url.clone(),
            availability_url: self.availability_url.clone(),
            user_agent: self.user_agent.clone(),
            poll_interval: Duration::from_secs(self.interval_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            logging: LoggingConfig::new(self.log_level.as_str().to_owned(), self.log_format),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read arguments, set up logging
    // -------------------------------

    let args = Args::parse();
    let settings = args.settings();
    logging::init_logging(&settings.logging);

    // -------------------------------
    // 2. Build clients
    // -------------------------------

    let driver = Driver::from_settings(&settings, args.target)?;

    // -------------------------------
    // 3. Poll until something fails
    // -------------------------------

    info!("Agent starting...");
    let mut stdout = std::io::stdout().lock();
    driver.run(&mut stdout).await?;

    Ok(())
}
