//! Domain layer: strong types with validation and invariants (no network I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    MobileStatusQuery, SendMulti, SendMultiTemplate, SendOptions, SendSingle, SendSingleTemplate,
};
pub use response::{
    DeliveryReport, MultiSendResponse, PullCallbackResponse, PullReplyResponse, ReplyMessage,
    ReportStatus, ResultCode, SendDetail, SendSmsResponse,
};
pub use validation::ValidationError;
pub use value::{
    AppId, AppKey, MaxReports, MessageText, MessageType, Mobile, NationCode, Nonce, PhoneNumber,
    PullType, Recipient, SignName, TemplateId, UnixTimestamp,
};
