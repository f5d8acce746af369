use miette::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong while talking to the api.
///
/// The `url` carried by the request variants is only the path of the request,
/// so the api key never ends up in logs or error reports.
#[derive(Diagnostic, Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed")]
    #[diagnostic(code(wowapi::transport), help("check connectivity to the regional host"))]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("request to {url} returned http status {status}")]
    #[diagnostic(code(wowapi::status))]
    Status { url: String, status: u16 },
    #[error("failed to convert json from {url} into {target}")]
    #[diagnostic(code(wowapi::decode))]
    Decode {
        url: String,
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid url: {0}")]
    #[diagnostic(code(wowapi::invalid_url))]
    InvalidUrl(#[from] url::ParseError),
    #[error("unknown region: {0}")]
    #[diagnostic(code(wowapi::unknown_region))]
    UnknownRegion(String),
    #[error("unknown locale: {0}")]
    #[diagnostic(code(wowapi::unknown_locale))]
    UnknownLocale(String),
}

impl ApiError {
    /// http status of the failed request, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
