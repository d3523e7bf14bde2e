//! Sequential site checking.
//!
//! One GET per configured site, strictly in site-name order, each result
//! printed as soon as it is computed.

use crate::report;
use crate::types::{CheckResult, Status};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, USER_AGENT};
use std::collections::BTreeMap;
use tracing::debug;

/// Browser-like request headers. These only exist to reduce the chance of
/// being rejected by naive bot filters.
const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_ENCODING_VALUE: &str = "gzip, deflate, sdch";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.8,zh-CN;q=0.6,zh;q=0.4,ja;q=0.2";
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/51.0.2704.103 Safari/537.36";

pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// The HTTP seam: issue one GET and report the response status code.
///
/// Injectable so the check loop can be exercised without a network.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn get(&self, url: &str) -> Result<u16, FetchError>;
}

/// Production [`Fetch`] implementation backed by reqwest.
///
/// No explicit request timeout is configured; whatever the client enforces
/// by default applies.
#[derive(Clone)]
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetch {
    async fn get(&self, url: &str) -> Result<u16, FetchError> {
        let response = self.client.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}

/// Check every configured site, in site-name order.
///
/// Classification: 200 becomes `OK`, any other code is carried verbatim, and
/// any request failure becomes `TIMEOUT`. Each result is printed to stdout
/// immediately, interleaved with the request loop.
pub async fn check_sites<F: Fetch>(
    websites: &BTreeMap<String, String>,
    fetch: &F,
) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(websites.len());

    for (site, url) in websites {
        let status = match fetch.get(url).await {
            Ok(200) => Status::Ok,
            Ok(code) => Status::Http(code),
            Err(e) => {
                debug!("Request to {} failed: {}", url, e);
                Status::Timeout
            }
        };

        let result = CheckResult::new(site.clone(), url.clone(), status);
        println!("{}", report::text_row(&result));
        results.push(result);
    }

    results
}
