//! Typed Rust client for the Tencent Cloud SMS (`tlssmssvr`) HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport
//! layer for wire-format details (body composition, request signing,
//! response decoding), and a thin client layer with one façade type per
//! operation family: single sends, batch sends, and the two status
//! pullers.
//!
//! ```rust,no_run
//! use qcloudsms::{
//!     Credentials, MessageText, MessageType, Mobile, NationCode, Recipient, SendOptions,
//!     SendSingle, SmsSingleSender,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), qcloudsms::QcloudSmsError> {
//!     let sender = SmsSingleSender::new(Credentials::new("1400000", "...")?);
//!     let recipient = Recipient::new(NationCode::new("86")?, Mobile::new("13800001111")?);
//!     let request = SendSingle::new(
//!         MessageType::Regular,
//!         recipient,
//!         MessageText::new("hello")?,
//!         SendOptions::default(),
//!     );
//!     let response = sender.send(request).await?;
//!     println!("result: {:?}", response.result);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod sign;
mod transport;

pub use client::{
    Credentials, QcloudSmsError, SmsClientBuilder, SmsMobileStatusPuller, SmsMultiSender,
    SmsSingleSender, SmsStatusPuller,
};
pub use domain::{
    AppId, AppKey, DeliveryReport, MaxReports, MessageText, MessageType, Mobile,
    MobileStatusQuery, MultiSendResponse, NationCode, Nonce, PhoneNumber, PullCallbackResponse,
    PullReplyResponse, PullType, Recipient, ReplyMessage, ReportStatus, ResultCode, SendDetail,
    SendMulti, SendMultiTemplate, SendOptions, SendSingle, SendSingleTemplate, SendSmsResponse,
    SignName, TemplateId, UnixTimestamp, ValidationError,
};
