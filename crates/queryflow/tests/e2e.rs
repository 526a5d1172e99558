// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the complete Queryflow pipeline.
//!
//! Each test wires the real pipeline with either a scripted mock provider or
//! a wiremock HTTP server. Tests are independent and order-insensitive.

use std::sync::Arc;
use std::time::Duration;

use queryflow::Pipeline;
use queryflow_classifier::{ClassifierArtifact, ModelClassifier, RuleClassifier};
use queryflow_cohere::CohereClient;
use queryflow_test_utils::{MockCompletion, MockOutcome, RecordingDelay};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rule_pipeline(mock: Arc<MockCompletion>) -> Pipeline {
    Pipeline::new(Box::new(RuleClassifier::new()), mock)
}

// ---- Query to formatted answer ----

#[tokio::test]
async fn technical_query_produces_disclaimed_answer() {
    let mock = Arc::new(MockCompletion::with_replies(vec!["Use a linked list."]));
    let pipeline = rule_pipeline(mock.clone());

    let answer = pipeline.run("How do I implement a queue?").await.unwrap();

    assert!(answer.contains("Use a linked list."));
    assert!(answer.contains("simulated AI response"));
    assert!(
        !answer.contains("contacting technical support"),
        "technical answers carry no escalation note"
    );
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn troubleshooting_query_gains_escalation_before_disclaimer() {
    let mock = Arc::new(MockCompletion::with_replies(vec!["Reinstall the driver."]));
    let pipeline = rule_pipeline(mock);

    let answer = pipeline
        .run("I'm getting an error when installing Node.js")
        .await
        .unwrap();

    let escalation = answer.find("contacting technical support").unwrap();
    let disclaimer = answer.find("simulated AI response").unwrap();
    assert!(answer.contains("Reinstall the driver."));
    assert!(escalation < disclaimer, "escalation note precedes disclaimer");
}

#[tokio::test]
async fn blank_completion_falls_back_to_stock_answer() {
    let mock = Arc::new(MockCompletion::with_replies(vec!["   "]));
    let pipeline = rule_pipeline(mock);

    let answer = pipeline.run("What is a monad?").await.unwrap();
    assert!(answer.contains("No response was received."));
}

// ---- Input validation ----

#[tokio::test]
async fn empty_query_is_rejected_without_touching_the_provider() {
    let mock = Arc::new(MockCompletion::with_replies(vec!["never used"]));
    let pipeline = rule_pipeline(mock.clone());

    let err = pipeline.run("   \t\n").await.unwrap_err();
    assert_eq!(err.kind(), "InvalidInput");
    assert_eq!(mock.calls(), 0);
}

// ---- Retry against a real HTTP boundary ----

#[tokio::test]
async fn pipeline_recovers_from_one_transient_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "message": "service overloaded"
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": {
                "content": [{"type": "text", "text": "Reinstall X."}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let delay = Arc::new(RecordingDelay::new());
    let client = CohereClient::new(
        "test-api-key".into(),
        "command-r-plus-08-2024".into(),
        2,
        Duration::from_millis(50),
    )
    .unwrap()
    .with_base_url(server.uri())
    .with_delay(delay.clone());

    let pipeline = Pipeline::new(Box::new(RuleClassifier::new()), Arc::new(client));
    // Troubleshooting-only triggers, so the escalation note must appear.
    let answer = pipeline.run("I get an error installing X").await.unwrap();

    assert!(answer.contains("Reinstall X."));
    assert!(answer.contains("contacting technical support"));
    assert_eq!(delay.count(), 1);
}

#[tokio::test]
async fn exhausted_retries_surface_as_service_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;

    let client = CohereClient::new(
        "test-api-key".into(),
        "command-r-plus-08-2024".into(),
        2,
        Duration::from_millis(50),
    )
    .unwrap()
    .with_base_url(server.uri())
    .with_delay(Arc::new(RecordingDelay::new()));

    let pipeline = Pipeline::new(Box::new(RuleClassifier::new()), Arc::new(client));
    let err = pipeline.run("any query at all").await.unwrap_err();
    assert_eq!(err.kind(), "ServiceFailure");
}

// ---- Trained model classifier in the full pipeline ----

#[tokio::test]
async fn trained_artifact_drives_the_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("query_classifier.json");
    queryflow::train::run_train(&path).unwrap();

    let artifact = ClassifierArtifact::load(&path).unwrap();
    assert_eq!(artifact.labels.len(), 4);

    let classifier = ModelClassifier::load(&path).unwrap();
    let mock = Arc::new(MockCompletion::with_outcomes(vec![
        MockOutcome::Reply("Check the installer log.".into()),
    ]));
    let pipeline = Pipeline::new(Box::new(classifier), mock);

    let answer = pipeline
        .run("I'm getting an error when installing Node.js")
        .await
        .unwrap();
    assert!(answer.contains("Check the installer log."));
    assert!(
        answer.contains("contacting technical support"),
        "trained model should classify installer errors as troubleshooting"
    );
}
