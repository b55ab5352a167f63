use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::validation::ValidationError;

use phonenumber::country;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SDK application id (`sdkappid`), issued by the SMS provider.
///
/// Invariant: non-empty after trimming.
pub struct AppId(String);

impl AppId {
    /// Query parameter name carrying this value (`sdkappid`).
    pub const FIELD: &'static str = "sdkappid";

    /// Create a validated [`AppId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SDK application key, the shared secret behind every request signature.
///
/// Invariant: non-empty after trimming. The key itself is never sent on the
/// wire; only digests derived from it are.
pub struct AppKey(String);

impl AppKey {
    /// Canonical-string field name this value is hashed under (`appkey`).
    pub const FIELD: &'static str = "appkey";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Nation dialing code (`nationcode`), e.g. `86` for China or `1` for the USA.
///
/// Invariant: non-empty after trimming. No format validation is performed;
/// the value is sent as the string given. Numeric inputs should be formatted
/// by the caller ([`Recipient::from_phone_number`] does this for parsed
/// numbers).
pub struct NationCode(String);

impl NationCode {
    /// Wire field name (`nationcode`).
    pub const FIELD: &'static str = "nationcode";

    /// Create a validated [`NationCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Mobile number in national form (`mobile`), without the dialing code.
///
/// Invariant: non-empty after trimming. No format validation is performed;
/// the value participates byte-for-byte in the request signature.
pub struct Mobile(String);

impl Mobile {
    /// Wire field name (`mobile`).
    pub const FIELD: &'static str = "mobile";

    /// Create a validated [`Mobile`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One message recipient: the wire `tel` object.
pub struct Recipient {
    nation_code: NationCode,
    mobile: Mobile,
}

impl Recipient {
    /// Wire field name of the recipient object(s) (`tel`).
    pub const FIELD: &'static str = "tel";

    /// Pair a nation code with a mobile number.
    pub fn new(nation_code: NationCode, mobile: Mobile) -> Self {
        Self {
            nation_code,
            mobile,
        }
    }

    /// Split a parsed [`PhoneNumber`] into nation code + national number.
    pub fn from_phone_number(phone: &PhoneNumber) -> Self {
        Self {
            nation_code: NationCode(phone.parsed().code().value().to_string()),
            mobile: Mobile(phone.parsed().national().value().to_string()),
        }
    }

    pub fn nation_code(&self) -> &NationCode {
        &self.nation_code
    }

    pub fn mobile(&self) -> &Mobile {
        &self.mobile
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// This is an opt-in convenience; the wire path accepts any non-empty
/// string. Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit
    /// country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Mobile::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message content (`msg`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Wire field name (`msg`).
    pub const FIELD: &'static str = "msg";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS user sign (`sign`) attached to template sends, e.g. a brand name.
///
/// Invariant: non-empty after trimming.
pub struct SignName(String);

impl SignName {
    /// Wire field name (`sign`).
    pub const FIELD: &'static str = "sign";

    /// Create a validated [`SignName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sign.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Server-side message template id (`tpl_id`).
pub struct TemplateId(u32);

impl TemplateId {
    /// Wire field name (`tpl_id`).
    pub const FIELD: &'static str = "tpl_id";

    /// Wrap a template id.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying id.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message category (`type`) for send operations.
pub enum MessageType {
    /// Normal SMS (`0`).
    #[default]
    Regular,
    /// Marketing SMS (`1`).
    Marketing,
}

impl MessageType {
    /// Wire field name (`type`).
    pub const FIELD: &'static str = "type";

    /// Integer discriminant sent on the wire.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Regular => 0,
            Self::Marketing => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Report category (`type`) for pull operations.
pub enum PullType {
    /// Delivery (callback) reports (`0`).
    Callback,
    /// Reply messages (`1`).
    Reply,
}

impl PullType {
    /// Wire field name (`type`).
    pub const FIELD: &'static str = "type";

    /// Integer discriminant sent on the wire.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Callback => 0,
            Self::Reply => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Maximum number of reports to pull in one call (`max`).
///
/// Invariant: strictly positive.
pub struct MaxReports(u32);

impl MaxReports {
    /// Wire field name (`max`).
    pub const FIELD: &'static str = "max";

    /// Create a validated [`MaxReports`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::ZeroMax);
        }
        Ok(Self(value))
    }

    /// Get the underlying limit.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds (`time`).
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Wire field name (`time`).
    pub const FIELD: &'static str = "time";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Current system time in unix seconds.
    pub fn now() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(elapsed.as_secs())
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-request random nonce (`random`), mixed into the signature to
/// prevent replay.
///
/// Invariant: `0..=99_999`. A fresh value is drawn for every call; no
/// uniqueness across calls is guaranteed or required.
pub struct Nonce(u32);

impl Nonce {
    /// Wire field name (`random`).
    pub const FIELD: &'static str = "random";

    /// Largest representable nonce.
    pub const MAX: u32 = 99_999;

    /// Create a validated [`Nonce`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::NonceOutOfRange {
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Draw a fresh nonce from the thread-local RNG.
    pub fn fresh() -> Self {
        Self(rand::thread_rng().gen_range(0..=Self::MAX))
    }

    /// Get the underlying value.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let app_id = AppId::new(" 1400000 ").unwrap();
        assert_eq!(app_id.as_str(), "1400000");
        assert!(AppId::new("  ").is_err());

        let app_key = AppKey::new(" secret ").unwrap();
        assert_eq!(app_key.as_str(), "secret");
        assert!(AppKey::new("").is_err());

        let nation = NationCode::new(" 86 ").unwrap();
        assert_eq!(nation.as_str(), "86");
        assert!(NationCode::new("  ").is_err());

        let mobile = Mobile::new(" 13800001111 ").unwrap();
        assert_eq!(mobile.as_str(), "13800001111");
        assert!(Mobile::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let sign = SignName::new(" Acme ").unwrap();
        assert_eq!(sign.as_str(), "Acme");
        assert!(SignName::new("  ").is_err());
    }

    #[test]
    fn non_numeric_mobile_is_accepted_as_given() {
        // The wire path performs no format validation by contract.
        let mobile = Mobile::new("not-a-number").unwrap();
        assert_eq!(mobile.as_str(), "not-a-number");
    }

    #[test]
    fn message_type_and_pull_type_discriminants() {
        assert_eq!(MessageType::Regular.as_i32(), 0);
        assert_eq!(MessageType::Marketing.as_i32(), 1);
        assert_eq!(PullType::Callback.as_i32(), 0);
        assert_eq!(PullType::Reply.as_i32(), 1);
    }

    #[test]
    fn max_reports_rejects_zero() {
        assert!(MaxReports::new(0).is_err());
        assert_eq!(MaxReports::new(1).unwrap().value(), 1);
    }

    #[test]
    fn nonce_range_is_enforced() {
        assert!(Nonce::new(0).is_ok());
        assert!(Nonce::new(Nonce::MAX).is_ok());
        assert!(Nonce::new(Nonce::MAX + 1).is_err());
    }

    #[test]
    fn fresh_nonce_stays_in_range() {
        for _ in 0..64 {
            assert!(Nonce::fresh().value() <= Nonce::MAX);
        }
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+8613800001111").unwrap();
        let p2 = PhoneNumber::parse(None, "+86 138 0000 1111").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+8613800001111");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn recipient_from_phone_number_splits_code_and_national() {
        let phone = PhoneNumber::parse(None, "+8613800001111").unwrap();
        let recipient = Recipient::from_phone_number(&phone);
        assert_eq!(recipient.nation_code().as_str(), "86");
        assert_eq!(recipient.mobile().as_str(), "13800001111");
    }

    #[test]
    fn phone_number_parses_with_default_region() {
        let phone = PhoneNumber::parse(Some(phonenumber::country::Id::CN), "13800001111").unwrap();
        assert_eq!(phone.e164(), "+8613800001111");
    }
}
