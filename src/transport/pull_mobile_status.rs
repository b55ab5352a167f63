use serde::Serialize;

use crate::domain::{AppKey, MobileStatusQuery, Nonce, PullType, UnixTimestamp};
use crate::sign;

#[derive(Debug, Serialize)]
pub struct PullMobileStatusBody {
    sig: String,
    #[serde(rename = "type")]
    kind: i32,
    time: u64,
    max: u32,
    begin_time: u64,
    end_time: u64,
    nationcode: String,
    mobile: String,
}

/// Same envelope as the plain pull, narrowed to one mobile and a time
/// window. The mobile filter does not participate in the signature.
pub fn encode_pull_mobile_status_body(
    kind: PullType,
    query: &MobileStatusQuery,
    app_key: &AppKey,
    random: Nonce,
    time: UnixTimestamp,
) -> PullMobileStatusBody {
    PullMobileStatusBody {
        sig: sign::calculate_signature::<&str>(
            app_key.as_str(),
            random.value(),
            time.value(),
            &[],
        ),
        kind: kind.as_i32(),
        time: time.value(),
        max: query.max().value(),
        begin_time: query.begin_time().value(),
        end_time: query.end_time().value(),
        nationcode: query.recipient().nation_code().as_str().to_owned(),
        mobile: query.recipient().mobile().as_str().to_owned(),
    }
}
