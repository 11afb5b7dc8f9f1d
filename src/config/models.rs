//! Configuration data structures for the camlens relay.
//!
//! This module defines the schema for the application settings, including
//! server parameters, provider endpoints and credentials, and upstream
//! timeout behavior.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Vision-language provider endpoints, model ids, and credentials.
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Outbound HTTP client settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `5001`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Per-provider endpoints, model identifiers, and credentials.
///
/// Credentials are optional at startup: a request selecting a provider whose
/// credential is missing fails for that request only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Bearer credential for the default (SiliconFlow/Qwen) provider.
    #[serde(default)]
    pub siliconflow_api_key: Option<String>,

    /// Bearer credential for the alternate (StepFun) provider.
    #[serde(default)]
    pub stepfun_api_key: Option<String>,

    /// Chat-completions endpoint for the default provider.
    #[serde(default = "default_siliconflow_api_url")]
    pub siliconflow_api_url: String,

    /// Chat-completions endpoint for the alternate provider.
    #[serde(default = "default_stepfun_api_url")]
    pub stepfun_api_url: String,

    /// Model identifier sent to the default provider.
    #[serde(default = "default_qwen_model")]
    pub qwen_model: String,

    /// Model identifier sent to the alternate provider.
    #[serde(default = "default_stepfun_model")]
    pub stepfun_model: String,
}

/// Settings for the outbound provider call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Request timeout in seconds for the provider call.
    /// Default: `60`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            siliconflow_api_key: None,
            stepfun_api_key: None,
            siliconflow_api_url: default_siliconflow_api_url(),
            stepfun_api_url: default_stepfun_api_url(),
            qwen_model: default_qwen_model(),
            stepfun_model: default_stepfun_model(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_siliconflow_api_url() -> String {
    "https://api.siliconflow.cn/v1/chat/completions".to_string()
}

fn default_stepfun_api_url() -> String {
    "https://api.stepfun.com/v1/chat/completions".to_string()
}

fn default_qwen_model() -> String {
    "Qwen/Qwen2.5-VL-32B-Instruct".to_string()
}

fn default_stepfun_model() -> String {
    "step-1o-turbo-vision".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
