use crate::document::meta_content;
use anyhow::{Context as _, Error, anyhow};
use log::info;
use url::Url;

/// How long the transport waits on the streaming connection before falling
/// back to long polling.
pub const LONG_POLL_FALLBACK_MS: u64 = 2500;

const ENDPOINT: &str = "/live";

/// Opens the long-lived connection. Implemented by whatever transport layer
/// the embedder uses; this crate only assembles the URL it should open.
pub trait Transport {
    type Handle;

    /// # Errors
    /// Transport-defined.
    fn open(&mut self, url: &Url) -> Result<Self::Handle, Error>;
}

/// The live-socket handle: endpoint plus authentication/context parameters.
///
/// Owned by the caller for the page's lifetime; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSocket {
    params: Vec<(String, String)>,
}

impl LiveSocket {
    /// Read the bootstrap tokens out of the hosting document and assemble
    /// the connection parameters.
    ///
    /// The csrf token is mandatory and its absence fails the bootstrap
    /// before any connection attempt; the csp token is optional. The host
    /// name rides along as a context parameter.
    ///
    /// # Errors
    /// Returns an error if the document has no `csrf-token` meta element.
    pub fn bootstrap(document: &str, host: &str) -> Result<Self, Error> {
        let csrf = meta_content(document, "csrf-token")
            .ok_or_else(|| anyhow!("document is missing the csrf-token meta element"))?;
        let csp = meta_content(document, "csp-token");

        let mut params = vec![("_csrf_token".to_owned(), csrf)];
        if let Some(csp) = csp {
            params.push(("_csp_token".to_owned(), csp));
        }
        params.push(("_host".to_owned(), host.to_owned()));

        info!(target: "live_client", "bootstrapped live socket for host {host}");
        Ok(Self { params })
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// The websocket URL under `base`, with the bootstrap parameters as
    /// query pairs.
    ///
    /// # Errors
    /// Returns an error if `base` cannot be a base URL.
    pub fn websocket_url(&self, base: &Url) -> Result<Url, Error> {
        let mut url = base
            .join(&format!("{ENDPOINT}/websocket"))
            .context("live endpoint does not fit the base URL")?;
        url.query_pairs_mut().extend_pairs(self.params.iter());
        Ok(url)
    }

    /// Open the connection through the given transport and hand back its
    /// handle. The connection is expected to live as long as the page; it
    /// is never explicitly closed here.
    ///
    /// # Errors
    /// Propagates URL assembly and transport errors.
    pub fn connect<T: Transport>(&self, transport: &mut T, base: &Url) -> Result<T::Handle, Error> {
        let url = self.websocket_url(base)?;
        transport.open(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<html><head>
        <meta name="csp-token" content="csp-1"/>
        <meta name="csrf-token" content="csrf-1"/>
    </head><body></body></html>"#;

    /// Transport double that records every open attempt.
    #[derive(Default)]
    struct Recording {
        opened: Vec<Url>,
    }

    impl Transport for Recording {
        type Handle = usize;

        fn open(&mut self, url: &Url) -> Result<usize, Error> {
            self.opened.push(url.clone());
            Ok(self.opened.len())
        }
    }

    #[test]
    fn params_carry_both_tokens_and_the_host() {
        let socket = LiveSocket::bootstrap(DOCUMENT, "example.com").unwrap();
        assert_eq!(
            socket.params(),
            [
                ("_csrf_token".to_owned(), "csrf-1".to_owned()),
                ("_csp_token".to_owned(), "csp-1".to_owned()),
                ("_host".to_owned(), "example.com".to_owned()),
            ]
        );
    }

    #[test]
    fn csp_token_is_optional() {
        let socket = LiveSocket::bootstrap(
            r#"<meta name="csrf-token" content="csrf-1"/>"#,
            "example.com",
        )
        .unwrap();
        assert!(socket.params().iter().all(|(key, _)| key != "_csp_token"));
    }

    #[test]
    fn missing_csrf_token_fails_the_bootstrap() {
        let result = LiveSocket::bootstrap("<html><head></head></html>", "example.com");
        assert!(result.is_err());
    }

    #[test]
    fn websocket_url_carries_the_query() {
        let socket = LiveSocket::bootstrap(DOCUMENT, "example.com").unwrap();
        let base = Url::parse("https://example.com/").unwrap();
        let url = socket.websocket_url(&base).unwrap();
        assert_eq!(url.path(), "/live/websocket");
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        assert_eq!(query[0], ("_csrf_token".to_owned(), "csrf-1".to_owned()));
        assert_eq!(query[2], ("_host".to_owned(), "example.com".to_owned()));
    }

    #[test]
    fn connect_opens_exactly_one_connection() {
        let socket = LiveSocket::bootstrap(DOCUMENT, "example.com").unwrap();
        let base = Url::parse("https://example.com/").unwrap();
        let mut transport = Recording::default();
        let handle = socket.connect(&mut transport, &base).unwrap();
        assert_eq!(handle, 1);
        assert_eq!(transport.opened.len(), 1);
        assert!(transport.opened[0].as_str().starts_with("https://example.com/live/websocket?"));
    }
}
