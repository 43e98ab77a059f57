use ddv_advisor::{AdvisorSettings, ChatClient, ModelAdvisor};
use ddv_model::{
    AdvisorError, CorrectionAdvisor, CorrectionRequest, SampleGenerator, SampleRequest,
};
use mockito::Matcher;

fn settings(server: &mockito::Server) -> AdvisorSettings {
    AdvisorSettings {
        base_url: format!("{}/v1", server.url()),
        model: "test-model".to_string(),
        timeout_secs: 5,
        ..AdvisorSettings::default()
    }
}

fn completion(content: &str) -> String {
    serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

fn correction_request() -> CorrectionRequest {
    CorrectionRequest {
        table_name: "SLS_ORDER_FACT".to_string(),
        column_name: "ORD_DTE".to_string(),
        english_name: "Order Date".to_string(),
        table_failure_reason: "Table name must start with 'T'.".to_string(),
        ..CorrectionRequest::default()
    }
}

#[test]
fn suggestion_is_parsed_from_fenced_reply() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "test-model",
            "temperature": 0.0
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion(
            "```json\n{\"Suggested Table Name\": \"T_SLS_ORD_FACT\", \"Suggested Column Name\": \"SLS_ORD_DTE\", \"Additional Notes\": \"Added T prefix.\"}\n```",
        ))
        .create();

    let client = ChatClient::with_api_key(&settings(&server), "test-key").expect("client");
    let advisor = ModelAdvisor::new(client);
    let suggestion = advisor.suggest(&correction_request()).expect("suggestion");

    mock.assert();
    assert_eq!(suggestion.suggested_table_name, "T_SLS_ORD_FACT");
    assert_eq!(suggestion.suggested_column_name, "SLS_ORD_DTE");
    assert_eq!(suggestion.additional_notes, "Added T prefix.");
}

#[test]
fn http_error_maps_to_api_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(429)
        .with_body("rate limited")
        .create();

    let client = ChatClient::with_api_key(&settings(&server), "test-key").expect("client");
    let error = ModelAdvisor::new(client)
        .suggest(&correction_request())
        .expect_err("429");

    mock.assert();
    assert_eq!(
        error,
        AdvisorError::Api {
            status: 429,
            message: "rate limited".to_string()
        }
    );
}

#[test]
fn samples_require_three_values() {
    let mut server = mockito::Server::new();
    let _ok = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex("CUS_NAM".to_string()))
        .with_status(200)
        .with_body(completion(r#"{"samples": ["Acme Ltd", "Globex", "Initech"]}"#))
        .create();
    let _short = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex("CUS_CDE".to_string()))
        .with_status(200)
        .with_body(completion(r#"{"samples": ["A1"]}"#))
        .create();

    let client = ChatClient::with_api_key(&settings(&server), "test-key").expect("client");
    let advisor = ModelAdvisor::new(client);

    let request = SampleRequest {
        column_name: "CUS_NAM".to_string(),
        ..SampleRequest::default()
    };
    let samples = advisor.generate(&request).expect("samples");
    assert_eq!(samples[1], "Globex");

    let request = SampleRequest {
        column_name: "CUS_CDE".to_string(),
        ..SampleRequest::default()
    };
    let error = advisor.generate(&request).expect_err("one sample");
    assert!(matches!(error, AdvisorError::InvalidResponse(_)));
}

#[test]
fn missing_api_key_is_reported() {
    let settings = AdvisorSettings {
        api_key_env: "DDV_TEST_KEY_THAT_IS_NOT_SET".to_string(),
        ..AdvisorSettings::default()
    };
    match ChatClient::from_settings(&settings) {
        Err(AdvisorError::MissingApiKey(name)) => assert_eq!(name, "DDV_TEST_KEY_THAT_IS_NOT_SET"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("client built without a key"),
    }
}
