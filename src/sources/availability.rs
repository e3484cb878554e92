use http::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AgentError;
use crate::sources::fetch::{decode_body, with_client_identification};

/// Response wrapper from the availability endpoint
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CalendarAvailabilityResponse {
    #[serde(rename = "calendar-availabilities")]
    pub availabilities: Vec<DayAvailability>,
}

/// One calendar day
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    /// `YYYY-MM-DD`, parsed lazily by the filter
    pub date: String,
    /// day level marker, see `NO_AVAILABILITY_STATUS`
    pub availability: String,
    pub facilities: Vec<FacilityStatus>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FacilityStatus {
    #[serde(rename = "facilityName")]
    pub facility_name: String,
    pub available: bool,
    pub blocked: bool,
}

#[derive(Debug, Clone)]
pub struct AvailabilityClient {
    client: Client,
    url: String,
    user_agent: String,
}

impl AvailabilityClient {
    pub fn new(client: Client, url: String, user_agent: String) -> Self {
        Self { client, url, user_agent }
    }

    /// Fetch the calendar with the given bearer token.
    ///
    /// The status code is not inspected: an error page simply fails to decode.
    pub async fn query(&self, token: &str) -> Result<Vec<DayAvailability>, AgentError> {
        let request = with_client_identification(self.client.get(&self.url), &self.user_agent)
            .header(AUTHORIZATION, format!("Bearer {}", token));
        let response = request.send().await?;
        debug!("availability endpoint answered {}", response.status());

        let calendar: CalendarAvailabilityResponse = decode_body(response).await?;
        Ok(calendar.availabilities)
    }
}
