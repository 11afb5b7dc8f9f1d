// Provider table and payload tests

use camlens::config::ProvidersConfig;
use camlens::error::RelayError;
use camlens::provider::{build_payload, resolve, ModelChoice};

fn config() -> ProvidersConfig {
    ProvidersConfig {
        siliconflow_api_key: Some("sf-secret".to_string()),
        stepfun_api_key: Some("step-secret".to_string()),
        ..ProvidersConfig::default()
    }
}

#[test]
fn test_default_points_at_siliconflow() {
    let provider = resolve(ModelChoice::parse("anything-else"), &config()).unwrap();
    assert_eq!(provider.name, "siliconflow");
    assert_eq!(
        provider.endpoint,
        "https://api.siliconflow.cn/v1/chat/completions"
    );
    assert_eq!(provider.model, "Qwen/Qwen2.5-VL-32B-Instruct");
}

#[test]
fn test_stepfun_selects_alternate() {
    let provider = resolve(ModelChoice::parse("stepfun"), &config()).unwrap();
    assert_eq!(provider.name, "stepfun");
    assert_eq!(provider.endpoint, "https://api.stepfun.com/v1/chat/completions");
    assert_eq!(provider.model, "step-1o-turbo-vision");
    assert_eq!(provider.api_key, "step-secret");
}

#[test]
fn test_missing_default_credential() {
    let config = ProvidersConfig::default();
    let err = resolve(ModelChoice::Qwen, &config).unwrap_err();
    assert!(matches!(err, RelayError::Config(_)));
    assert!(err.to_string().contains("SILICONFLOW_API_KEY"));
}

#[test]
fn test_payload_fixed_generation_parameters() {
    let provider = resolve(ModelChoice::Stepfun, &config()).unwrap();
    let payload = build_payload(&provider, "m", "c", "p");
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["model"], "step-1o-turbo-vision");
    assert_eq!(json["stream"], false);
    assert_eq!(json["max_tokens"], 1024);
    assert_eq!(json["temperature"], 0.5);
    assert_eq!(json["response_format"], serde_json::json!({"type": "text"}));
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
}

#[test]
fn test_payload_map_image_precedes_camera_image() {
    let provider = resolve(ModelChoice::Qwen, &config()).unwrap();
    let payload = build_payload(&provider, "MAPDATA", "CAMDATA", "describe");
    let json = serde_json::to_value(&payload).unwrap();
    let content = json["messages"][0]["content"].as_array().unwrap();

    assert_eq!(content.len(), 3);
    assert!(content[0]["image_url"]["url"]
        .as_str()
        .unwrap()
        .ends_with("MAPDATA"));
    assert!(content[1]["image_url"]["url"]
        .as_str()
        .unwrap()
        .ends_with("CAMDATA"));
    assert_eq!(content[2]["text"], "describe");
}
