use serde::{Deserialize, Serialize};

use crate::domain::{
    AppKey, Nonce, Recipient, ResultCode, SendOptions, SendSingle, SendSingleTemplate,
    SendSmsResponse, UnixTimestamp,
};
use crate::sign;
use crate::transport::TransportError;

#[derive(Debug, Clone, Serialize)]
/// Wire form of the `tel` object.
pub struct TelEntry {
    nationcode: String,
    mobile: String,
}

impl TelEntry {
    pub fn from_recipient(recipient: &Recipient) -> Self {
        Self {
            nationcode: recipient.nation_code().as_str().to_owned(),
            mobile: recipient.mobile().as_str().to_owned(),
        }
    }
}

/// Unset optional fields go out as empty strings.
pub fn or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

pub fn extend_and_ext(options: &SendOptions) -> (String, String) {
    (
        or_empty(options.extend.as_ref()),
        or_empty(options.ext.as_ref()),
    )
}

#[derive(Debug, Serialize)]
pub struct SendSingleBody {
    tel: TelEntry,
    #[serde(rename = "type")]
    kind: i32,
    msg: String,
    sig: String,
    time: u64,
    extend: String,
    ext: String,
}

pub fn encode_send_single_body(
    request: &SendSingle,
    app_key: &AppKey,
    random: Nonce,
    time: UnixTimestamp,
) -> SendSingleBody {
    let (extend, ext) = extend_and_ext(request.options());
    SendSingleBody {
        tel: TelEntry::from_recipient(request.recipient()),
        kind: request.kind().as_i32(),
        msg: request.text().as_str().to_owned(),
        sig: sign::calculate_signature(
            app_key.as_str(),
            random.value(),
            time.value(),
            &[request.recipient().mobile().as_str()],
        ),
        time: time.value(),
        extend,
        ext,
    }
}

#[derive(Debug, Serialize)]
pub struct SendSingleTemplateBody {
    tel: TelEntry,
    sign: String,
    tpl_id: u32,
    params: Vec<String>,
    sig: String,
    time: u64,
    extend: String,
    ext: String,
}

pub fn encode_send_single_template_body(
    request: &SendSingleTemplate,
    app_key: &AppKey,
    random: Nonce,
    time: UnixTimestamp,
) -> SendSingleTemplateBody {
    let (extend, ext) = extend_and_ext(request.options());
    SendSingleTemplateBody {
        tel: TelEntry::from_recipient(request.recipient()),
        sign: request.sign().as_str().to_owned(),
        tpl_id: request.template_id().value(),
        params: request.params().to_vec(),
        sig: sign::calculate_signature(
            app_key.as_str(),
            random.value(),
            time.value(),
            &[request.recipient().mobile().as_str()],
        ),
        time: time.value(),
        extend,
        ext,
    }
}

#[derive(Debug, Deserialize)]
struct SendSmsJsonResponse {
    result: i32,
    #[serde(default)]
    errmsg: String,
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    fee: Option<u32>,
}

pub fn decode_send_sms_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    Ok(SendSmsResponse {
        result: ResultCode::new(parsed.result),
        errmsg: parsed.errmsg,
        ext: parsed.ext,
        sid: parsed.sid,
        fee: parsed.fee,
    })
}
