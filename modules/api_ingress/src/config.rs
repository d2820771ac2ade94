use serde::{Deserialize, Serialize};

/// HTTP host configuration, read from `modules.api_ingress`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ApiIngressConfig {
    #[serde(default)]
    pub cors_enabled: bool,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    #[serde(default = "default_request_timeout_sec")]
    pub request_timeout_sec: u64,
}

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self {
            cors_enabled: false,
            body_limit_bytes: default_body_limit_bytes(),
            request_timeout_sec: default_request_timeout_sec(),
        }
    }
}

fn default_body_limit_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_request_timeout_sec() -> u64 {
    30
}
