use crate::domain::validation::ValidationError;
use crate::domain::value::{
    MaxReports, MessageText, MessageType, Recipient, SignName, TemplateId, UnixTimestamp,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional pass-through fields shared by every send operation.
///
/// Unset values serialize as empty strings; `ext` is echoed back by the
/// server unchanged.
pub struct SendOptions {
    pub extend: Option<String>,
    pub ext: Option<String>,
}

#[derive(Debug, Clone)]
/// A plain message to one recipient.
pub struct SendSingle {
    kind: MessageType,
    recipient: Recipient,
    text: MessageText,
    options: SendOptions,
}

impl SendSingle {
    pub fn new(
        kind: MessageType,
        recipient: Recipient,
        text: MessageText,
        options: SendOptions,
    ) -> Self {
        Self {
            kind,
            recipient,
            text,
            options,
        }
    }

    pub fn kind(&self) -> MessageType {
        self.kind
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// A templated message to one recipient.
pub struct SendSingleTemplate {
    recipient: Recipient,
    template_id: TemplateId,
    params: Vec<String>,
    sign: SignName,
    options: SendOptions,
}

impl SendSingleTemplate {
    pub fn new(
        recipient: Recipient,
        template_id: TemplateId,
        params: Vec<String>,
        sign: SignName,
        options: SendOptions,
    ) -> Self {
        Self {
            recipient,
            template_id,
            params,
            sign,
            options,
        }
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn sign(&self) -> &SignName {
        &self.sign
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// A plain message to several recipients at once.
pub struct SendMulti {
    kind: MessageType,
    recipients: Vec<Recipient>,
    text: MessageText,
    options: SendOptions,
}

impl SendMulti {
    /// Validate the recipient list up front; an empty list is rejected
    /// before any request is composed.
    pub fn new(
        kind: MessageType,
        recipients: Vec<Recipient>,
        text: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        Ok(Self {
            kind,
            recipients,
            text,
            options,
        })
    }

    pub fn kind(&self) -> MessageType {
        self.kind
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// A templated message to several recipients at once.
pub struct SendMultiTemplate {
    recipients: Vec<Recipient>,
    template_id: TemplateId,
    params: Vec<String>,
    sign: SignName,
    options: SendOptions,
}

impl SendMultiTemplate {
    /// Validate the recipient list up front; an empty list is rejected
    /// before any request is composed. `params` may be empty when the
    /// template has no placeholders.
    pub fn new(
        recipients: Vec<Recipient>,
        template_id: TemplateId,
        params: Vec<String>,
        sign: SignName,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Recipient::FIELD,
            });
        }
        Ok(Self {
            recipients,
            template_id,
            params,
            sign,
            options,
        })
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn sign(&self) -> &SignName {
        &self.sign
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Filter for per-mobile status pulls: one recipient and a time window.
pub struct MobileStatusQuery {
    recipient: Recipient,
    begin_time: UnixTimestamp,
    end_time: UnixTimestamp,
    max: MaxReports,
}

impl MobileStatusQuery {
    pub fn new(
        recipient: Recipient,
        begin_time: UnixTimestamp,
        end_time: UnixTimestamp,
        max: MaxReports,
    ) -> Self {
        Self {
            recipient,
            begin_time,
            end_time,
            max,
        }
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn begin_time(&self) -> UnixTimestamp {
        self.begin_time
    }

    pub fn end_time(&self) -> UnixTimestamp {
        self.end_time
    }

    pub fn max(&self) -> MaxReports {
        self.max
    }
}
