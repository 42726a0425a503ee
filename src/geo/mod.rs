mod error;
mod parse;

pub use error::GeoError;

use log::debug;
use reqwest::{Client, ClientBuilder};

/// Forwarding header consulted before the socket address. The spelling
/// is the one the upstream proxies actually send, not the standard
/// `x-forwarded-for`.
pub const FORWARDED_HEADER: &str = "x-forwarder-for";

/// Pick the client address: a non-empty forwarding-header value wins,
/// otherwise the peer's socket address is used. Both are trimmed.
pub fn client_ip(forwarded: Option<&str>, remote: &str) -> String {
    match forwarded {
        Some(value) if !value.trim().is_empty() => value.trim().into(),
        _ => remote.trim().into(),
    }
}

/// Locality text scraped from the provider page. Whatever could not be
/// split into province/city lands in `other`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub province: String,
    pub city: String,
    pub other: String,
}

/// Best-effort IP geolocation against an HTML lookup page.
#[derive(Debug, Clone)]
pub struct GeoLookup {
    client: Client,
    base_url: String,
}

const DEFAULT_URL: &str = "http://www.tongcha.com/index-ip1.php?ip=";

impl GeoLookup {
    pub fn new() -> Result<GeoLookup, GeoError> {
        GeoLookup::with_url(DEFAULT_URL)
    }

    pub fn with_url(base_url: &str) -> Result<GeoLookup, GeoError> {
        let client = ClientBuilder::new().build()?;
        Ok(GeoLookup {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn get_url(&self) -> String {
        self.base_url.clone()
    }

    pub async fn locate(&self, ip: &str) -> Result<Location, GeoError> {
        let url = format!("{}{}", self.base_url, ip);
        debug!("fetching {url}");
        let html = self.client.get(&url).send().await?.text().await?;
        parse::location(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_header_wins() {
        assert!(client_ip(Some("218.10.58.98"), "10.0.0.1") == "218.10.58.98");
        assert!(client_ip(Some(" 218.10.58.98 "), "10.0.0.1") == "218.10.58.98");
    }

    #[test]
    fn falls_back_to_socket_address() {
        assert!(client_ip(None, " 10.0.0.1") == "10.0.0.1");
        assert!(client_ip(Some(""), "10.0.0.1") == "10.0.0.1");
        assert!(client_ip(Some("   "), "10.0.0.1") == "10.0.0.1");
    }
}
