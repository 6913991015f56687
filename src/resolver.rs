//! Frequency resolution with cache-first lookups.

use crate::cache::FrequencyCache;
use crate::error::LookupError;
use crate::frequency::{FrequencyRecord, Lookup};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://dwds.de/api/frequency/";

/// Something that can answer a frequency query over the network.
pub trait FrequencySource {
    fn fetch(&self, query: &str) -> Result<FrequencyRecord, LookupError>;
}

impl<S: FrequencySource + ?Sized> FrequencySource for &S {
    fn fetch(&self, query: &str) -> Result<FrequencyRecord, LookupError> {
        (**self).fetch(query)
    }
}

/// Service payload. `total` arrives as a string.
#[derive(Deserialize, Debug)]
pub struct FrequencyResponse {
    pub hits: i64,
    pub total: String,
    pub frequency: i64,
    pub q: String,
}

impl FrequencyResponse {
    pub fn into_record(self, query: &str) -> Result<FrequencyRecord, LookupError> {
        let hits = u64::try_from(self.hits).map_err(|_| LookupError::NegativeHits(self.hits))?;
        let total = self
            .total
            .trim()
            .parse::<u64>()
            .map_err(|_| LookupError::InvalidTotal(self.total.clone()))?;
        Ok(FrequencyRecord {
            hits,
            total,
            frequency: self.frequency,
            query: query.to_string(),
        })
    }
}

/// Parse a service response body into a record for `query`. Payloads missing
/// any field are rejected.
pub fn parse_response(body: &str, query: &str) -> Result<FrequencyRecord, LookupError> {
    let payload: FrequencyResponse = serde_json::from_str(body)?;
    payload.into_record(query)
}

/// Blocking HTTP client for the corpus frequency service.
pub struct HttpFrequencySource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpFrequencySource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("freqdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn request_url(&self, query: &str) -> String {
        format!("{}?q={}", self.base_url, urlencoding::encode(query))
    }
}

impl FrequencySource for HttpFrequencySource {
    fn fetch(&self, query: &str) -> Result<FrequencyRecord, LookupError> {
        let url = self.request_url(query);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }
        let body = response.text()?;
        parse_response(&body, query)
    }
}

/// Resolves query keys through the cache, falling back to the source once per
/// unseen key. Failures are cached as [`Lookup::NotFound`].
pub struct FrequencyResolver<'a, S> {
    cache: &'a mut FrequencyCache,
    source: S,
    network_calls: usize,
}

impl<'a, S: FrequencySource> FrequencyResolver<'a, S> {
    pub fn new(cache: &'a mut FrequencyCache, source: S) -> Self {
        Self {
            cache,
            source,
            network_calls: 0,
        }
    }

    pub fn resolve(&mut self, query_key: &str) -> Lookup {
        if query_key.is_empty() {
            return Lookup::NotFound;
        }

        if let Some(cached) = self.cache.get(query_key) {
            log::debug!("cache hit for {:?}", query_key);
            return cached.clone();
        }

        self.network_calls += 1;
        let lookup = match self.source.fetch(query_key) {
            Ok(record) => Lookup::Found(record),
            Err(e) => {
                log::warn!("Error fetching frequency data for {:?}: {}", query_key, e);
                Lookup::NotFound
            }
        };
        self.cache.put(query_key, lookup.clone());
        lookup
    }

    /// Number of keys sent to the source so far.
    pub fn network_calls(&self) -> usize {
        self.network_calls
    }
}
