use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::LadderSource;
use crate::error::LadderError;
use crate::ingest::loose_u32;
use crate::models::{LadderKey, LadderStanding};
use crate::Result;


/// Body returned by the hosted ladder function.
///
/// `position` and `points` have been seen both as numbers and as numeric
/// strings, so they are kept loose until [`parse_ladder_response`].
#[derive(Debug, Deserialize)]
pub(crate) struct LadderResponse {
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub points: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Calls the hosted ladder function: `GET <base>?compId=<c>&fixtureId=<f>`.
#[derive(Debug, Clone)]
pub struct HttpLadderSource {
    client: Client,
    base_url: String,
}

impl HttpLadderSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("club-perf/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, key: LadderKey) -> std::result::Result<LadderStanding, LadderError> {
        let params = [
            ("compId", key.competition.to_string()),
            ("fixtureId", key.fixture.to_string()),
        ];

        debug!(%key, url = %self.base_url, "requesting ladder position");

        let body = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        parse_ladder_response(&body)
    }
}

impl LadderSource for HttpLadderSource {
    fn lookup(
        &self,
        key: LadderKey,
    ) -> impl Future<Output = std::result::Result<LadderStanding, LadderError>> + Send {
        self.fetch(key)
    }
}

/// Turn a raw response body into a standing, or the per-key error it reports.
pub(crate) fn parse_ladder_response(
    body: &[u8],
) -> std::result::Result<LadderStanding, LadderError> {
    let response: LadderResponse =
        serde_json::from_slice(body).map_err(|e| LadderError::Malformed(e.to_string()))?;

    if let Some(err) = response.error.filter(|e| !e.trim().is_empty()) {
        return Err(LadderError::Upstream(err));
    }

    Ok(LadderStanding {
        position: coerce_field("position", response.position.as_ref())?,
        points: coerce_field("points", response.points.as_ref())?,
    })
}

fn coerce_field(
    name: &str,
    value: Option<&Value>,
) -> std::result::Result<Option<u32>, LadderError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => loose_u32(v)
            .map(Some)
            .ok_or_else(|| LadderError::Malformed(format!("{name} is not a number: {v}"))),
    }
}
