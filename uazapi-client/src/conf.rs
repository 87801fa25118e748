// SPDX-FileCopyrightText: 2026 The uazapi-purge Authors
//
// SPDX-License-Identifier: MPL-2.0

use once_cell::sync::Lazy;
use std::{env, fs};

use crate::Error;

const DEFAULT_BASE_URL: &str = "https://hairfycombr.uazapi.com";
const CONF_PATH: &str = "/etc/uazapi-purge.conf";

pub const CONF_PATH_VAR: &str = "UAZAPI_CONF";
pub const BASE_URL_VAR: &str = "UAZAPI_BASE_URL";
pub const ADMIN_TOKEN_VAR: &str = "UAZAPI_ADMIN_TOKEN";

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Conf {
    base_url: Option<String>,
    admin_token: Option<String>,
}

impl Conf {
    pub fn new(base_url: impl Into<String>, admin_token: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            admin_token: Some(admin_token.into()),
        }
    }

    pub fn from_toml(bytes: &[u8]) -> Result<Self, Error> {
        Ok(toml::from_slice(bytes)?)
    }

    /// Overlay values found through `lookup`, which is `env::var` outside of
    /// tests. Empty values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|value| !value.is_empty());
        if let Some(base_url) = non_empty(BASE_URL_VAR) {
            self.base_url = Some(base_url);
        }
        if let Some(admin_token) = non_empty(ADMIN_TOKEN_VAR) {
            self.admin_token = Some(admin_token);
        }
        self
    }

    /// Environment, then conf file, then built-in defaults.
    pub fn load() -> Self {
        let path = env::var(CONF_PATH_VAR).unwrap_or_else(|_| CONF_PATH.to_string());
        let file_conf = match fs::read(&path) {
            Ok(bytes) => Self::from_toml(&bytes).unwrap_or_else(|err| {
                eprintln!("Failed to parse `{}`: {}", path, err);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        file_conf.with_env(|var| env::var(var).ok())
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn admin_token(&self) -> Result<&str, Error> {
        match self.admin_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(Error::MissingAdminToken),
        }
    }
}

#[doc(hidden)]
pub fn uazapi_conf() -> &'static Conf {
    static CONF: Lazy<Conf> = Lazy::new(Conf::load);
    &CONF
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let conf = Conf::default();
        assert_eq!(conf.base_url(), DEFAULT_BASE_URL);
        assert!(matches!(conf.admin_token(), Err(Error::MissingAdminToken)));
    }

    #[test]
    fn file_values() {
        let conf = Conf::from_toml(
            br#"
            base_url = "https://example.uazapi.com/"
            admin_token = "from-file"
            "#,
        )
        .unwrap();
        assert_eq!(conf.base_url(), "https://example.uazapi.com");
        assert_eq!(conf.admin_token().unwrap(), "from-file");
    }

    #[test]
    fn env_overrides_file() {
        let conf = Conf::from_toml(b"admin_token = \"from-file\"")
            .unwrap()
            .with_env(env_of(&[
                (ADMIN_TOKEN_VAR, "from-env"),
                (BASE_URL_VAR, "http://localhost:8080"),
            ]));
        assert_eq!(conf.base_url(), "http://localhost:8080");
        assert_eq!(conf.admin_token().unwrap(), "from-env");
    }

    #[test]
    fn empty_env_ignored() {
        let conf = Conf::from_toml(b"admin_token = \"from-file\"")
            .unwrap()
            .with_env(env_of(&[(ADMIN_TOKEN_VAR, "")]));
        assert_eq!(conf.admin_token().unwrap(), "from-file");
    }

    #[test]
    fn empty_token_is_missing() {
        let conf = Conf::new("http://localhost", "");
        assert!(matches!(conf.admin_token(), Err(Error::MissingAdminToken)));
    }

    #[test]
    fn invalid_file() {
        assert!(matches!(
            Conf::from_toml(b"base_url = ["),
            Err(Error::Toml(_))
        ));
    }
}
