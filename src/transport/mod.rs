//! Transport layer: wire-format details (body composition and response
//! decoding) for each endpoint. Signatures are computed here, at encode
//! time, over the operation's recipient set.

mod pull_mobile_status;
mod pull_status;
mod send_multi_sms;
mod send_sms;

pub use pull_mobile_status::encode_pull_mobile_status_body;
pub use pull_status::{
    decode_pull_callback_response, decode_pull_reply_response, encode_pull_status_body,
};
pub use send_multi_sms::{
    decode_send_multi_sms_response, encode_send_multi_body, encode_send_multi_template_body,
};
pub use send_sms::{
    decode_send_sms_response, encode_send_single_body, encode_send_single_template_body,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
