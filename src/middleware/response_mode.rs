use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// How the client wants the result rendered, resolved once at the
/// boundary so handlers never branch on raw headers.
///
/// Resolution order:
/// - `HX-Request: true` (the in-place swap marker) wins;
/// - an `Accept` mentioning `text/html` means a full-page browser;
/// - everything else is treated as an API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// In-place swap client: HTML fragments.
    Fragment,
    /// Full-page browser: reads render HTML, mutations redirect to `/`.
    Navigate,
    /// API client: JSON payloads.
    Json,
}

impl ResponseMode {
    pub fn from_parts(parts: &Parts) -> Self {
        let header = |name: &str| parts.headers.get(name).and_then(|v| v.to_str().ok());

        if let Some(hv) = header("hx-request")
            && hv.eq_ignore_ascii_case("true")
        {
            return ResponseMode::Fragment;
        }
        if let Some(accept) = header("accept")
            && accept.contains("text/html")
        {
            return ResponseMode::Navigate;
        }
        ResponseMode::Json
    }

    pub fn wants_html(self) -> bool {
        matches!(self, ResponseMode::Fragment | ResponseMode::Navigate)
    }
}

impl<S> FromRequestParts<S> for ResponseMode
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
