//! HTTP gateway integration tests against a mock endpoint

use bapsang_core::contact::{submit_contact, ContactGateway, HttpContactGateway};
use bapsang_core::types::{ContactFormData, FormSubmitResult};
use httpmock::prelude::*;

fn valid_form() -> ContactFormData {
    ContactFormData {
        kindergarten_name: "해밀유치원".to_string(),
        contact: "010-1234-5678".to_string(),
        privacy_agreed: true,
    }
}

#[tokio::test]
async fn test_submission_posts_json_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/contact")
            .json_body_partial(
                r#"{
                    "kindergarten_name": "해밀유치원",
                    "contact": "010-1234-5678",
                    "privacy_agreed": true
                }"#,
            );
        then.status(200).json_body_obj(&FormSubmitResult::ok(
            "문의가 접수되었습니다.",
        ));
    });

    let gateway = HttpContactGateway::new(server.url("/contact"));
    let result = gateway.submit(&valid_form()).await.unwrap();

    mock.assert();
    assert!(result.success);
    assert_eq!(result.message, "문의가 접수되었습니다.");
}

#[tokio::test]
async fn test_empty_success_body_still_accepted() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(204);
    });

    let gateway = HttpContactGateway::new(server.url("/contact"));
    let result = gateway.submit(&valid_form()).await.unwrap();

    assert!(result.success);
    assert!(!result.message.is_empty());
}

#[tokio::test]
async fn test_server_error_surfaces_failure_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(500);
    });

    let gateway = HttpContactGateway::new(server.url("/contact"));
    let result = gateway.submit(&valid_form()).await.unwrap();

    assert!(!result.success);
    assert!(result.message.contains("500"));
}

#[tokio::test]
async fn test_unreachable_endpoint_folds_into_failure_result() {
    // Nothing listens on this port; submit_contact should still hand the
    // form a displayable failure message rather than an error.
    let gateway = HttpContactGateway::new("http://127.0.0.1:1/contact");

    let result = submit_contact(&gateway, &valid_form())
        .await
        .expect("valid form passes validation");

    assert!(!result.success);
    assert!(!result.message.is_empty());
}

#[tokio::test]
async fn test_invalid_form_never_reaches_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(200);
    });

    let gateway = HttpContactGateway::new(server.url("/contact"));
    let mut form = valid_form();
    form.kindergarten_name = String::new();

    let errors = submit_contact(&gateway, &form)
        .await
        .expect_err("empty name fails validation");

    assert!(errors.kindergarten_name.is_some());
    mock.assert_hits(0);
}
