// SPDX-FileCopyrightText: 2026 The uazapi-purge Authors
//
// SPDX-License-Identifier: MPL-2.0

use log::debug;
use reqwest::{header::ACCEPT, StatusCode};
use serde_json::Value;
use std::borrow::Cow;

pub mod conf;
mod error;

pub use conf::{uazapi_conf, Conf};
pub use error::{ApiError, Error};

const JSON: &str = "application/json";
const UNNAMED: &str = "unnamed";

/// Record returned by `GET /instance/all`. Only `name` and `token` are
/// interpreted. `name` is a display label and may hold any JSON value.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Instance {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Instance {
    /// Strings as-is, other values as JSON text, `unnamed` when absent or null.
    pub fn display_name(&self) -> Cow<'_, str> {
        match &self.name {
            None | Some(Value::Null) => Cow::Borrowed(UNNAMED),
            Some(Value::String(name)) => Cow::Borrowed(name.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

/// First 10 characters of a credential, for logs.
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(10).collect();
    format!("{}...", prefix)
}

pub struct Client {
    http: reqwest::blocking::Client,
    conf: Conf,
}

impl Client {
    pub fn new(conf: Conf) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self { http, conf })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.conf.base_url(), path)
    }

    /// Lists every instance using the admin token. Any non-2xx status is an
    /// error. A `null` or empty body means there are no instances.
    pub fn list_instances(&self) -> Result<Vec<Instance>, Error> {
        let url = self.url("/instance/all");
        let admin_token = self.conf.admin_token()?;
        debug!("GET {} (admintoken: {})", url, mask_token(admin_token));

        let resp = self
            .http
            .get(&url)
            .header(ACCEPT, JSON)
            .header("admintoken", admin_token)
            .send()?;
        if !resp.status().is_success() {
            debug!("GET {} returned {}", url, resp.status());
            return Err(ApiError::from_response(&url, resp).into());
        }

        let body = resp.bytes()?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let instances: Option<Vec<Instance>> = serde_json::from_slice(&body)?;
        Ok(instances.unwrap_or_default())
    }

    /// Deletes the instance owned by `token`. Only `200 OK` counts as
    /// success. Without a token the request is still sent, minus the header.
    pub fn delete_instance(&self, token: Option<&str>) -> Result<(), Error> {
        let url = self.url("/instance");
        debug!(
            "DELETE {} (token: {})",
            url,
            token.map(mask_token).as_deref().unwrap_or("<none>")
        );

        let mut req = self.http.delete(&url).header(ACCEPT, JSON);
        if let Some(token) = token {
            req = req.header("token", token);
        }
        let resp = req.send()?;
        if resp.status() != StatusCode::OK {
            debug!("DELETE {} returned {}", url, resp.status());
            return Err(ApiError::from_response(&url, resp).into());
        }
        Ok(())
    }
}
