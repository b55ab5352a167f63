use serde::{Deserialize, Serialize};

use super::send_sms::{TelEntry, extend_and_ext};
use crate::domain::{
    AppKey, MultiSendResponse, Nonce, Recipient, ResultCode, SendDetail, SendMulti,
    SendMultiTemplate, UnixTimestamp,
};
use crate::sign;
use crate::transport::TransportError;

fn tel_entries(recipients: &[Recipient]) -> Vec<TelEntry> {
    recipients.iter().map(TelEntry::from_recipient).collect()
}

fn mobiles(recipients: &[Recipient]) -> Vec<&str> {
    recipients
        .iter()
        .map(|recipient| recipient.mobile().as_str())
        .collect()
}

#[derive(Debug, Serialize)]
pub struct SendMultiBody {
    tel: Vec<TelEntry>,
    #[serde(rename = "type")]
    kind: i32,
    msg: String,
    sig: String,
    time: u64,
    extend: String,
    ext: String,
}

pub fn encode_send_multi_body(
    request: &SendMulti,
    app_key: &AppKey,
    random: Nonce,
    time: UnixTimestamp,
) -> SendMultiBody {
    let (extend, ext) = extend_and_ext(request.options());
    SendMultiBody {
        tel: tel_entries(request.recipients()),
        kind: request.kind().as_i32(),
        msg: request.text().as_str().to_owned(),
        sig: sign::calculate_signature(
            app_key.as_str(),
            random.value(),
            time.value(),
            &mobiles(request.recipients()),
        ),
        time: time.value(),
        extend,
        ext,
    }
}

#[derive(Debug, Serialize)]
pub struct SendMultiTemplateBody {
    tel: Vec<TelEntry>,
    sign: String,
    tpl_id: u32,
    params: Vec<String>,
    sig: String,
    time: u64,
    extend: String,
    ext: String,
}

pub fn encode_send_multi_template_body(
    request: &SendMultiTemplate,
    app_key: &AppKey,
    random: Nonce,
    time: UnixTimestamp,
) -> SendMultiTemplateBody {
    let (extend, ext) = extend_and_ext(request.options());
    SendMultiTemplateBody {
        tel: tel_entries(request.recipients()),
        sign: request.sign().as_str().to_owned(),
        tpl_id: request.template_id().value(),
        params: request.params().to_vec(),
        sig: sign::calculate_signature(
            app_key.as_str(),
            random.value(),
            time.value(),
            &mobiles(request.recipients()),
        ),
        time: time.value(),
        extend,
        ext,
    }
}

#[derive(Debug, Deserialize)]
struct MultiSendJsonResponse {
    result: i32,
    #[serde(default)]
    errmsg: String,
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    detail: Vec<SendDetailJson>,
}

#[derive(Debug, Deserialize)]
struct SendDetailJson {
    result: i32,
    #[serde(default)]
    errmsg: String,
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    fee: Option<u32>,
    #[serde(default)]
    nationcode: Option<String>,
    #[serde(default)]
    mobile: Option<String>,
}

pub fn decode_send_multi_sms_response(json: &str) -> Result<MultiSendResponse, TransportError> {
    let parsed: MultiSendJsonResponse = serde_json::from_str(json)?;
    Ok(MultiSendResponse {
        result: ResultCode::new(parsed.result),
        errmsg: parsed.errmsg,
        ext: parsed.ext,
        detail: parsed
            .detail
            .into_iter()
            .map(|detail| SendDetail {
                result: ResultCode::new(detail.result),
                errmsg: detail.errmsg,
                sid: detail.sid,
                fee: detail.fee,
                nation_code: detail.nationcode,
                mobile: detail.mobile,
            })
            .collect(),
    })
}
