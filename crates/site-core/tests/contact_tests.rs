use site_core::contact::{
    qr_code_url, EmailPayload, SendStatus, TemplateParams, EMAIL_SERVICE_ID, EMAIL_TEMPLATE_ID,
};

fn sample_params() -> TemplateParams {
    TemplateParams {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Great site".to_owned(),
    }
}

#[test]
fn payload_matches_the_endpoint_shape() {
    let payload = EmailPayload::new(sample_params());
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["service_id"], EMAIL_SERVICE_ID);
    assert_eq!(value["template_id"], EMAIL_TEMPLATE_ID);
    assert!(value["user_id"].is_string());
    assert_eq!(value["template_params"]["name"], "Ada");
    assert_eq!(value["template_params"]["email"], "ada@example.com");
    assert_eq!(value["template_params"]["subject"], "Hello");
    assert_eq!(value["template_params"]["message"], "Great site");
}

#[test]
fn status_machine_walks_idle_sending_done() {
    let mut status = SendStatus::default();
    assert_eq!(status, SendStatus::Idle);

    assert!(status.begin());
    assert!(status.is_sending());
    // Double submit while in flight is refused.
    assert!(!status.begin());

    status.finish(true);
    assert_eq!(status, SendStatus::Sent);
}

#[test]
fn failure_allows_a_manual_retry() {
    let mut status = SendStatus::default();
    assert!(status.begin());
    status.finish(false);
    assert_eq!(status, SendStatus::Failed);

    // Either path back works: straight resubmit or reset to the form.
    assert!(status.begin());
    status.finish(false);
    status.reset();
    assert_eq!(status, SendStatus::Idle);
}

#[test]
fn qr_url_embeds_the_encoded_target() {
    let url = qr_code_url("https%3A%2F%2Fexample.com%2Far-view%2Far-interface");
    assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=150x150&data="));
    assert!(url.ends_with("https%3A%2F%2Fexample.com%2Far-view%2Far-interface"));
}
