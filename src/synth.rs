//! Round-based synthesis of the ammo request stream.
//!
//! Each round emits one request per traffic pattern against a URL-shortener
//! target: a root ping, a shorten submission with a random payload URL, and
//! a lookup of a random short token. The stream is lazy so the encoder
//! never holds more than one request.
use rand::Rng;
use url::Url;

use crate::ammo::Request;
use crate::error::AmmoResult;

pub const TAG_ROOT: &str = "root";
pub const TAG_ADD: &str = "add";
pub const TAG_GET: &str = "get";

const SHORTEN_TOKEN_LEN: usize = 10;
const LOOKUP_TOKEN_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct RequestSynthesizer {
    base: String,
    add_url: String,
    rounds: u64,
    payload_prefix: String,
}

impl RequestSynthesizer {
    #[must_use]
    pub fn new(base: &Url, rounds: u64, payload_prefix: impl Into<String>) -> Self {
        let mut base = base.as_str().to_owned();
        if !base.ends_with('/') {
            base.push('/');
        }
        let add_url = format!("{}api/add", base);
        Self {
            base,
            add_url,
            rounds,
            payload_prefix: payload_prefix.into(),
        }
    }

    /// Lazy request stream: `rounds * 3` requests in a fixed
    /// root / add / get cycle.
    #[must_use]
    pub fn requests(&self) -> RequestStream<'_> {
        RequestStream {
            synthesizer: self,
            round: 0,
            slot: 0,
        }
    }

    fn root_request(&self) -> AmmoResult<Request> {
        Request::get(self.base.as_str(), TAG_ROOT)
    }

    fn add_request(&self) -> AmmoResult<Request> {
        let payload = format!(
            "{}{}",
            self.payload_prefix,
            random_token(SHORTEN_TOKEN_LEN)
        );
        Request::post_json(
            self.add_url.as_str(),
            TAG_ADD,
            serde_json::json!({ "url": payload }),
        )
    }

    fn get_request(&self) -> AmmoResult<Request> {
        let path = format!("{}{}", self.base, random_token(LOOKUP_TOKEN_LEN));
        Request::get(path, TAG_GET)
    }
}

fn random_token(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_index| char::from(rng.gen_range(b'A'..=b'Z')))
        .collect()
}

pub struct RequestStream<'synth> {
    synthesizer: &'synth RequestSynthesizer,
    round: u64,
    slot: u8,
}

impl Iterator for RequestStream<'_> {
    type Item = AmmoResult<Request>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.round >= self.synthesizer.rounds {
            return None;
        }
        let item = match self.slot {
            0 => self.synthesizer.root_request(),
            1 => self.synthesizer.add_request(),
            _ => self.synthesizer.get_request(),
        };
        if self.slot >= 2 {
            self.slot = 0;
            self.round = self.round.saturating_add(1);
        } else {
            self.slot = self.slot.saturating_add(1);
        }
        Some(item)
    }
}
