//! Pre-run smoke checks against the target service.
//!
//! Two synchronous probes run before any load is generated: a root ping
//! and one full shorten/lookup round-trip. Either failing aborts the run
//! before ammo is fired.
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

use crate::error::{ProbeError, ProbeResult};

/// The shortener answers lookups with a temporary redirect.
const SHORT_LINK_STATUS: StatusCode = StatusCode::TEMPORARY_REDIRECT;

pub struct Prober {
    client: Client,
    no_redirect: Client,
    base: Url,
}

impl Prober {
    /// # Errors
    ///
    /// Returns `ProbeError::Http` when a client cannot be constructed.
    pub fn new(base: Url) -> ProbeResult<Self> {
        let client = Client::builder().build()?;
        let no_redirect = Client::builder().redirect(Policy::none()).build()?;
        Ok(Self {
            client,
            no_redirect,
            base,
        })
    }

    /// GETs the service root; expects 200 with a non-empty body.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::UnexpectedStatus` or `ProbeError::EmptyBody`
    /// when the target misbehaves, `ProbeError::Http` on transport failure.
    pub fn ping(&self) -> ProbeResult<()> {
        let response = self.client.get(self.base.clone()).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeError::UnexpectedStatus {
                context: "ping",
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        if body.is_empty() {
            return Err(ProbeError::EmptyBody);
        }
        debug!(bytes = body.len(), "ping probe body received");
        Ok(())
    }

    /// Submits `target` for shortening, then resolves the returned short
    /// link without following redirects; expects a 307 whose Location is
    /// the submitted URL.
    ///
    /// # Errors
    ///
    /// Returns the specific probe error for each broken step: unexpected
    /// status, missing `ShortUrl`, missing or mismatched `Location`.
    pub fn shorten_roundtrip(&self, target: &str) -> ProbeResult<()> {
        let add_url = self.base.join("api/add")?;
        let response = self
            .client
            .post(add_url)
            .json(&serde_json::json!({ "url": target }))
            .send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeError::UnexpectedStatus {
                context: "shorten",
                status: status.as_u16(),
            });
        }
        let payload: serde_json::Value = response.json()?;
        let short = payload
            .get("ShortUrl")
            .and_then(serde_json::Value::as_str)
            .filter(|value| !value.is_empty())
            .ok_or(ProbeError::MissingShortUrl)?;
        debug!(short, "shorten probe received short link");

        let short_url = self.base.join(short)?;
        let redirect = self.no_redirect.get(short_url).send()?;
        let redirect_status = redirect.status();
        if redirect_status != SHORT_LINK_STATUS {
            return Err(ProbeError::UnexpectedStatus {
                context: "short link",
                status: redirect_status.as_u16(),
            });
        }
        let location = redirect
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ProbeError::MissingLocation)?;
        if location != target {
            return Err(ProbeError::LocationMismatch {
                expected: target.to_owned(),
                actual: location.to_owned(),
            });
        }
        Ok(())
    }
}
