//! Base URL handling and response decoding shared by the API clients

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::SourceError;

/// The API endpoint to retrieve resources from
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    url: String,
}

impl Endpoint {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        Self { url }
    }

    /// Append a resource path, e.g. `guilds/profile`
    pub(crate) fn append_path(&self, path: &str) -> String {
        let mut full_url = self.url.clone();
        full_url.push_str(path.trim_start_matches('/'));
        full_url
    }
}

/// Decode a JSON body on 200, mapping other statuses to [`SourceError`]
pub(crate) async fn read_json<M>(
    service: &'static str,
    what: impl FnOnce() -> String,
    response: Response,
) -> Result<M, SourceError>
where
    M: DeserializeOwned,
{
    match response.status() {
        StatusCode::OK => response.json().await.map_err(SourceError::http(service)),
        // Raider.io answers unknown guilds with 400
        StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => Err(SourceError::NotFound {
            service,
            what: what(),
        }),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SourceError::Auth {
            service,
            message: format!("status {}", response.status().as_u16()),
        }),
        status => Err(SourceError::Status {
            service,
            status: status.as_u16(),
            url: response.url().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_path() {
        let endpoint = Endpoint::new("https://raider.io/api/v1");
        assert_eq!(
            endpoint.append_path("guilds/profile"),
            "https://raider.io/api/v1/guilds/profile"
        );

        let endpoint = Endpoint::new("http://127.0.0.1:9000/");
        assert_eq!(endpoint.append_path("/raiding/static-data"), "http://127.0.0.1:9000/raiding/static-data");
    }
}
