//! Outbound contact-form payload and send-status machine, plus the QR
//! image URL builder. The network call itself lives in the web frontend;
//! everything here is plain data.

use serde::Serialize;

pub const EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAIL_SERVICE_ID: &str = "service_2nqw5mc";
pub const EMAIL_TEMPLATE_ID: &str = "template_f81b3aa";
pub const EMAIL_PUBLIC_KEY: &str = "MMmQdXHE9G1xWitAg";
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Clone, Debug, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Body POSTed to the transactional-email endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct EmailPayload {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub user_id: &'static str,
    pub template_params: TemplateParams,
}

impl EmailPayload {
    pub fn new(params: TemplateParams) -> Self {
        Self {
            service_id: EMAIL_SERVICE_ID,
            template_id: EMAIL_TEMPLATE_ID,
            user_id: EMAIL_PUBLIC_KEY,
            template_params: params,
        }
    }
}

/// Inline send state: one shot, no retry beyond re-showing the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SendStatus {
    /// Enter `Sending` unless a send is already in flight.
    pub fn begin(&mut self) -> bool {
        if *self == SendStatus::Sending {
            return false;
        }
        *self = SendStatus::Sending;
        true
    }

    pub fn finish(&mut self, ok: bool) {
        *self = if ok { SendStatus::Sent } else { SendStatus::Failed };
    }

    /// Back to the empty form (the manual retry affordance).
    pub fn reset(&mut self) {
        *self = SendStatus::Idle;
    }

    pub fn is_sending(self) -> bool {
        self == SendStatus::Sending
    }
}

/// `encoded_target` must already be URL-encoded; the result is rendered
/// directly as an `<img>` source with no further error handling.
pub fn qr_code_url(encoded_target: &str) -> String {
    format!("{QR_ENDPOINT}?size=150x150&data={encoded_target}")
}
