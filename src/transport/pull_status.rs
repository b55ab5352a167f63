use serde::{Deserialize, Serialize};

use crate::domain::{
    AppKey, DeliveryReport, MaxReports, Nonce, PullCallbackResponse, PullReplyResponse, PullType,
    ReplyMessage, ReportStatus, ResultCode, UnixTimestamp,
};
use crate::sign;
use crate::transport::TransportError;

#[derive(Debug, Serialize)]
pub struct PullStatusBody {
    sig: String,
    #[serde(rename = "type")]
    kind: i32,
    time: u64,
    max: u32,
}

/// Pulls carry no recipient context, so the signature omits the mobile
/// suffix entirely.
pub fn encode_pull_status_body(
    kind: PullType,
    max: MaxReports,
    app_key: &AppKey,
    random: Nonce,
    time: UnixTimestamp,
) -> PullStatusBody {
    PullStatusBody {
        sig: sign::calculate_signature::<&str>(
            app_key.as_str(),
            random.value(),
            time.value(),
            &[],
        ),
        kind: kind.as_i32(),
        time: time.value(),
        max: max.value(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum TransportReportStatus {
    Success,
    Fail,
}

impl From<TransportReportStatus> for ReportStatus {
    fn from(value: TransportReportStatus) -> Self {
        match value {
            TransportReportStatus::Success => ReportStatus::Success,
            TransportReportStatus::Fail => ReportStatus::Fail,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PullCallbackJsonResponse {
    result: i32,
    #[serde(default)]
    errmsg: String,
    #[serde(default)]
    count: Option<u32>,
    #[serde(default)]
    data: Vec<DeliveryReportJson>,
}

#[derive(Debug, Deserialize)]
struct DeliveryReportJson {
    #[serde(default)]
    user_receive_time: Option<String>,
    #[serde(default)]
    nationcode: Option<String>,
    #[serde(default)]
    mobile: Option<String>,
    #[serde(default)]
    report_status: Option<TransportReportStatus>,
    #[serde(default)]
    errmsg: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    sid: Option<String>,
}

pub fn decode_pull_callback_response(json: &str) -> Result<PullCallbackResponse, TransportError> {
    let parsed: PullCallbackJsonResponse = serde_json::from_str(json)?;
    Ok(PullCallbackResponse {
        result: ResultCode::new(parsed.result),
        errmsg: parsed.errmsg,
        count: parsed.count,
        data: parsed
            .data
            .into_iter()
            .map(|report| DeliveryReport {
                user_receive_time: report.user_receive_time,
                nation_code: report.nationcode,
                mobile: report.mobile,
                report_status: report.report_status.map(Into::into),
                errmsg: report.errmsg,
                description: report.description,
                sid: report.sid,
            })
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
struct PullReplyJsonResponse {
    result: i32,
    #[serde(default)]
    errmsg: String,
    #[serde(default)]
    count: Option<u32>,
    #[serde(default)]
    data: Vec<ReplyMessageJson>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessageJson {
    #[serde(default)]
    nationcode: Option<String>,
    #[serde(default)]
    mobile: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    sign: Option<String>,
    #[serde(default)]
    time: Option<u64>,
    #[serde(default)]
    extend: Option<String>,
    #[serde(default)]
    sid: Option<String>,
}

pub fn decode_pull_reply_response(json: &str) -> Result<PullReplyResponse, TransportError> {
    let parsed: PullReplyJsonResponse = serde_json::from_str(json)?;
    Ok(PullReplyResponse {
        result: ResultCode::new(parsed.result),
        errmsg: parsed.errmsg,
        count: parsed.count,
        data: parsed
            .data
            .into_iter()
            .map(|reply| ReplyMessage {
                nation_code: reply.nationcode,
                mobile: reply.mobile,
                text: reply.text,
                sign: reply.sign,
                time: reply.time.map(UnixTimestamp::new),
                extend: reply.extend,
                sid: reply.sid,
            })
            .collect(),
    })
}
