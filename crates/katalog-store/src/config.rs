// SPDX-License-Identifier: Apache-2.0

use std::env;

pub const ENV_STORE_URL: &str = "KATALOG_STORE_URL";
pub const ENV_STORE_KEY: &str = "KATALOG_STORE_KEY";

/// Store endpoint configuration. Both values come from the environment;
/// either one missing puts the application in degrade-to-empty mode.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
}

impl StoreConfig {
    #[must_use]
    pub fn new(endpoint: Option<String>, access_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.filter(|v| !v.trim().is_empty()),
            access_key: access_key.filter(|v| !v.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var(ENV_STORE_URL).ok(), env::var(ENV_STORE_KEY).ok())
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.endpoint.as_deref(), self.access_key.as_deref()) {
            (Some(endpoint), Some(access_key)) => Some((endpoint, access_key)),
            _ => None,
        }
    }
}
