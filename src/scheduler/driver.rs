use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::credential::Credential;
use crate::config::settings::AgentSettings;
use crate::errors::AgentError;
use crate::filter::matches::{find_matches, write_matches, Match};
use crate::helpers::time::now_utc;
use crate::sources::availability::AvailabilityClient;
use crate::sources::fetch::build_client;
use crate::sources::token::TokenProvider;

/// Polls on a fixed period: refresh token if needed, fetch, filter, print.
///
/// The held credential is a plain value threaded through the loop. Any error
/// ends the loop and is returned to the caller.
#[derive(Debug, Clone)]
pub struct Driver {
    token_provider: TokenProvider,
    availability_client: AvailabilityClient,
    target: NaiveDate,
    poll_interval: Duration,
}

impl Driver {
    pub fn new(
        token_provider: TokenProvider,
        availability_client: AvailabilityClient,
        target: NaiveDate,
        poll_interval: Duration,
    ) -> Self {
        Self { token_provider, availability_client, target, poll_interval }
    }

    pub fn from_settings(settings: &AgentSettings, target: NaiveDate) -> Result<Self, AgentError> {
        let client = build_client(settings)?;
        Ok(Self::new(
            TokenProvider::new(client.clone(), settings.token_url.clone(), settings.user_agent.clone()),
            AvailabilityClient::new(client, settings.availability_url.clone(), settings.user_agent.clone()),
            target,
            settings.poll_interval,
        ))
    }

    /// One poll. Takes the credential held so far, hands back the one to keep.
    pub async fn tick(
        &self,
        credential: Option<Credential>,
        now: DateTime<Utc>,
    ) -> Result<(Credential, Vec<Match>), AgentError> {
        let credential = self.token_provider.get_valid_credential(credential, now).await?;
        let days = self.availability_client.query(&credential.value).await?;
        debug!("fetched {} calendar days", days.len());

        let matches = find_matches(&days, self.target)?;
        Ok((credential, matches))
    }

    /// Runs until the first error. Ticks are spaced by start time; the first
    /// poll happens one period after startup and a slow poll pushes the next
    /// one back rather than triggering a catch-up burst.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), AgentError> {
        info!("watching for availability before {} every {:?}", self.target, self.poll_interval);

        let mut ticker = interval_at(Instant::now() + self.poll_interval, self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut credential: Option<Credential> = None;
        loop {
            ticker.tick().await;
            let (current, matches) = self.tick(credential.take(), now_utc()).await?;
            credential = Some(current);
            write_matches(out, &matches)?;
        }
    }
}
