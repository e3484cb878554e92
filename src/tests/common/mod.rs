// tests/common/mod.rs
pub use httpmock::prelude::*;
pub use serde_json::json;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use httpmock::Mock;
use reqwest::Client;

use crate::config::settings::AgentSettings;
use crate::scheduler::driver::Driver;
use crate::sources::availability::AvailabilityClient;
use crate::sources::token::TokenProvider;
use crate::utils::constants::DEFAULT_USER_AGENT;

pub const TOKEN_PATH: &str = "/com-shared/api/get-token/";
pub const AVAILABILITY_PATH: &str = "/availability/api/v2/availabilities/";

/// Settings pointing both endpoints at the mock server.
pub fn mock_settings(server: &MockServer) -> AgentSettings {
    AgentSettings {
        token_url: server.url(TOKEN_PATH),
        availability_url: format!("{}?sku=66282&sku=66283", server.url(AVAILABILITY_PATH)),
        ..AgentSettings::default()
    }
}

pub fn token_provider(server: &MockServer) -> TokenProvider {
    let settings = mock_settings(server);
    TokenProvider::new(Client::new(), settings.token_url, settings.user_agent)
}

pub fn availability_client(server: &MockServer) -> AvailabilityClient {
    let settings = mock_settings(server);
    AvailabilityClient::new(Client::new(), settings.availability_url, settings.user_agent)
}

pub fn driver(server: &MockServer, target: &str) -> Driver {
    Driver::from_settings(&mock_settings(server), date(target)).expect("driver")
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("test date")
}

pub fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
}

pub async fn mock_token<'a>(server: &'a MockServer, token: &str, expires_in: &str) -> Mock<'a> {
    let body = json!({
        "access_token": token,
        "token_type": "BEARER",
        "expires_in": expires_in,
        "status_code": 200
    });
    server
        .mock_async(|when, then| {
            when.method(POST).path(TOKEN_PATH).header("user-agent", DEFAULT_USER_AGENT);
            then.status(200).header("content-type", "application/json").json_body(body);
        })
        .await
}

pub async fn mock_calendar<'a>(server: &'a MockServer, token: &str, days: serde_json::Value) -> Mock<'a> {
    let authorization = format!("Bearer {}", token);
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(AVAILABILITY_PATH)
                .query_param("sku", "66282")
                .header("user-agent", DEFAULT_USER_AGENT)
                .header("authorization", authorization);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "calendar-availabilities": days }));
        })
        .await
}
