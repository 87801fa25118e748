// SPDX-FileCopyrightText: 2026 The uazapi-purge Authors
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

#[derive(Debug, Clone)]
pub struct ApiError {
    pub endpoint: String,
    pub code: u16,
    pub canonical_reason: Option<String>,
    pub message: Option<String>,
}

impl ApiError {
    pub(crate) fn from_response(endpoint: &str, resp: reqwest::blocking::Response) -> Self {
        let status = resp.status();
        // The body is only informational; an unreadable one is left out.
        let message = resp.text().ok().filter(|text| !text.is_empty());
        Self {
            endpoint: endpoint.to_string(),
            code: status.as_u16(),
            canonical_reason: status.canonical_reason().map(str::to_string),
            message,
        }
    }

    /// `<code> - <body>`, as shown for a failed deletion.
    pub fn status_line(&self) -> String {
        format!("{} - {}", self.code, self.message.as_deref().unwrap_or(""))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = if let Some(reason) = &self.canonical_reason {
            format!("{} {}", self.code, reason)
        } else {
            format!("{}", self.code)
        };
        if let Some(message) = &self.message {
            write!(
                f,
                "'{}' from API endpoint '{}': {}",
                error, self.endpoint, message
            )
        } else {
            write!(f, "'{}' from API endpoint '{}'", error, self.endpoint)
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug)]
pub enum Error {
    SerdeJson(serde_json::Error),
    Toml(toml::de::Error),
    Reqwest(reqwest::Error),
    Api(ApiError),
    MissingAdminToken,
}

impl Error {
    /// Short form used in per-instance failure lines.
    pub fn status_line(&self) -> String {
        match self {
            Self::Api(err) => err.status_line(),
            err => err.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SerdeJson(err) => write!(f, "{}", err),
            Self::Toml(err) => write!(f, "{}", err),
            Self::Reqwest(err) => write!(f, "{}", err),
            Self::Api(err) => write!(f, "{}", err),
            Self::MissingAdminToken => write!(
                f,
                "No admin token configured; set `{}` or `admin_token` in the conf file",
                crate::conf::ADMIN_TOKEN_VAR
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SerdeJson(err) => Some(err),
            Self::Toml(err) => Some(err),
            Self::Reqwest(err) => Some(err),
            Self::Api(err) => Some(err),
            Self::MissingAdminToken => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJson(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(message: Option<&str>) -> ApiError {
        ApiError {
            endpoint: "https://example.uazapi.com/instance".to_string(),
            code: 404,
            canonical_reason: Some("Not Found".to_string()),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn display_with_message() {
        assert_eq!(
            api_error(Some("instance not found")).to_string(),
            "'404 Not Found' from API endpoint 'https://example.uazapi.com/instance': instance not found"
        );
    }

    #[test]
    fn display_without_message() {
        assert_eq!(
            api_error(None).to_string(),
            "'404 Not Found' from API endpoint 'https://example.uazapi.com/instance'"
        );
    }

    #[test]
    fn status_line() {
        let err = Error::from(api_error(Some("{\"error\":\"invalid token\"}")));
        assert_eq!(err.status_line(), "404 - {\"error\":\"invalid token\"}");
        assert_eq!(Error::from(api_error(None)).status_line(), "404 - ");
    }
}
