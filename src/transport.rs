use std::io::Read;

use tracing::debug;
use url::Url;

use crate::prelude::*;

pub type HttpClient = ureq::Agent;

/// Performs a blocking GET and hands back the response body.
///
/// Implemented for [`ureq::Agent`]. Anything else (a recorder, a proxy) can be plugged into an
/// [`Explorer`](crate::Explorer) through [`Explorer::with_transport`](crate::Explorer::with_transport).
pub trait Transport {
    /// non success statuses must come back as [`ApiError::Status`]
    fn get(&self, url: &Url) -> Result<String>;
}

impl Transport for HttpClient {
    fn get(&self, url: &Url) -> Result<String> {
        let path = url.path().to_string();
        let response = match HttpClient::get(self, url.as_str()).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                debug!(path = %path, status, "api returned an error status");
                return Err(ApiError::Status { url: path, status });
            }
            Err(ureq::Error::Transport(transport)) => {
                let reason = transport_reason(&transport);
                return Err(redacted_transport_error(url, path, reason));
            }
        };
        // auction dumps go well past the size limit of `Response::into_string`
        let mut body = String::new();
        if let Err(e) = response.into_reader().read_to_string(&mut body) {
            return Err(redacted_transport_error(url, path, e.to_string()));
        }
        Ok(body)
    }
}

/// kind, message and cause of a ureq failure. the request url is left out
fn transport_reason(transport: &ureq::Transport) -> String {
    let mut reason = transport.kind().to_string();
    if let Some(message) = transport.message() {
        reason.push_str(": ");
        reason.push_str(message);
    }
    if let Some(cause) = std::error::Error::source(transport) {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
    }
    reason
}

/// The full url carries the api key in its query, so only the path may appear in the error.
fn redacted_transport_error(url: &Url, path: String, reason: String) -> ApiError {
    let reason = reason.replace(url.as_str(), &path);
    debug!(path = %path, reason = %reason, "request failed");
    ApiError::Transport {
        url: path,
        source: reason.into(),
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<String> {
        (**self).get(url)
    }
}

/// agent used by [`Explorer::new`](crate::Explorer::new)
pub fn default_client() -> HttpClient {
    ureq::AgentBuilder::new()
        .user_agent(concat!("wowapi/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
pub(crate) mod stub {
    use std::{cell::RefCell, collections::VecDeque};

    use super::*;

    /// canned answer for one request
    pub enum StubReply {
        Body(String),
        Status(u16),
        Unreachable,
    }

    impl StubReply {
        pub fn body(body: impl Into<String>) -> Self {
            Self::Body(body.into())
        }
    }

    /// Replays replies in order and remembers every requested url.
    pub struct StubTransport {
        replies: RefCell<VecDeque<StubReply>>,
        requests: RefCell<Vec<String>>,
    }

    impl StubTransport {
        pub fn new(replies: impl IntoIterator<Item = StubReply>) -> Self {
            Self {
                replies: RefCell::new(replies.into_iter().collect()),
                requests: RefCell::default(),
            }
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for StubTransport {
        fn get(&self, url: &Url) -> Result<String> {
            self.requests.borrow_mut().push(url.to_string());
            let path = url.path().to_string();
            match self.replies.borrow_mut().pop_front() {
                Some(StubReply::Body(body)) => Ok(body),
                Some(StubReply::Status(status)) => Err(ApiError::Status { url: path, status }),
                Some(StubReply::Unreachable) | None => Err(ApiError::Transport {
                    url: path,
                    source: "host unreachable".into(),
                }),
            }
        }
    }
}
