//! Provider adapter: model choice → endpoint, credential, and payload.
//!
//! Both providers speak the same OpenAI-compatible chat-completions shape;
//! the only differences are the endpoint URL, the model identifier, and the
//! bearer credential. One table resolves the choice, one builder produces
//! the payload.

mod models;

pub use models::*;

use crate::config::ProvidersConfig;
use crate::error::{RelayError, Result};

/// Logical model selection from the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChoice {
    Qwen,
    Stepfun,
}

impl ModelChoice {
    /// Parse the optional `model` form value. Only `"stepfun"` selects the
    /// alternate provider; anything else (including absence) falls back to
    /// the default.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "stepfun" => ModelChoice::Stepfun,
            _ => ModelChoice::Qwen,
        }
    }
}

/// A provider resolved for one request: where to send, what to claim, how to
/// authenticate.
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    pub name: &'static str,
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
}

/// Resolve a model choice against the configured providers.
///
/// Fails before any network activity if the chosen provider's credential is
/// unset or empty.
pub fn resolve(choice: ModelChoice, config: &ProvidersConfig) -> Result<ResolvedProvider> {
    let (name, endpoint, model, key, key_var) = match choice {
        ModelChoice::Qwen => (
            "siliconflow",
            &config.siliconflow_api_url,
            &config.qwen_model,
            &config.siliconflow_api_key,
            "SILICONFLOW_API_KEY",
        ),
        ModelChoice::Stepfun => (
            "stepfun",
            &config.stepfun_api_url,
            &config.stepfun_model,
            &config.stepfun_api_key,
            "STEPFUN_API_KEY",
        ),
    };

    let api_key = key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| RelayError::Config(format!("{} is not set", key_var)))?;

    Ok(ResolvedProvider {
        name,
        endpoint: endpoint.clone(),
        model: model.clone(),
        api_key: api_key.to_string(),
    })
}

/// Build the chat-completion payload for a resolved provider.
///
/// Content order is fixed: map image, then camera image, then the prompt.
pub fn build_payload(
    provider: &ResolvedProvider,
    map_b64: &str,
    camera_b64: &str,
    prompt: &str,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: provider.model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::webp_image(map_b64),
                ContentPart::webp_image(camera_b64),
                ContentPart::text(prompt),
            ],
        }],
        stream: false,
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
        response_format: ResponseFormat {
            format_type: "text".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProvidersConfig;

    fn config_with_keys() -> ProvidersConfig {
        ProvidersConfig {
            siliconflow_api_key: Some("sf-key".to_string()),
            stepfun_api_key: Some("step-key".to_string()),
            ..ProvidersConfig::default()
        }
    }

    #[test]
    fn test_model_choice_parsing() {
        assert_eq!(ModelChoice::parse("stepfun"), ModelChoice::Stepfun);
        assert_eq!(ModelChoice::parse(" stepfun "), ModelChoice::Stepfun);
        assert_eq!(ModelChoice::parse("qwen"), ModelChoice::Qwen);
        assert_eq!(ModelChoice::parse(""), ModelChoice::Qwen);
        assert_eq!(ModelChoice::parse("gpt-4"), ModelChoice::Qwen);
    }

    #[test]
    fn test_resolve_default_provider() {
        let provider = resolve(ModelChoice::Qwen, &config_with_keys()).unwrap();
        assert_eq!(provider.name, "siliconflow");
        assert_eq!(provider.model, "Qwen/Qwen2.5-VL-32B-Instruct");
        assert_eq!(provider.api_key, "sf-key");
        assert!(provider.endpoint.contains("siliconflow"));
    }

    #[test]
    fn test_resolve_alternate_provider() {
        let provider = resolve(ModelChoice::Stepfun, &config_with_keys()).unwrap();
        assert_eq!(provider.name, "stepfun");
        assert_eq!(provider.model, "step-1o-turbo-vision");
        assert_eq!(provider.api_key, "step-key");
    }

    #[test]
    fn test_missing_credential_fails() {
        let config = ProvidersConfig::default();
        let err = resolve(ModelChoice::Stepfun, &config).unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
        assert!(err.to_string().contains("STEPFUN_API_KEY"));
    }

    #[test]
    fn test_empty_credential_fails() {
        let config = ProvidersConfig {
            siliconflow_api_key: Some("   ".to_string()),
            ..ProvidersConfig::default()
        };
        let err = resolve(ModelChoice::Qwen, &config).unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn test_payload_shape_and_ordering() {
        let provider = resolve(ModelChoice::Qwen, &config_with_keys()).unwrap();
        let payload = build_payload(&provider, "MAP64", "CAM64", "what do you see?");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["model"], "Qwen/Qwen2.5-VL-32B-Instruct");
        assert_eq!(json["stream"], false);
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["response_format"]["type"], "text");

        let content = &json["messages"][0]["content"];
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(content[0]["type"], "image_url");
        assert_eq!(
            content[0]["image_url"]["url"],
            "data:image/webp;base64,MAP64"
        );
        assert_eq!(content[0]["image_url"]["detail"], "high");
        assert_eq!(
            content[1]["image_url"]["url"],
            "data:image/webp;base64,CAM64"
        );
        assert_eq!(content[2]["type"], "text");
        assert_eq!(content[2]["text"], "what do you see?");
    }
}
