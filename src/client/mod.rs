//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    AppId, AppKey, MaxReports, MobileStatusQuery, MultiSendResponse, Nonce, PullCallbackResponse,
    PullReplyResponse, PullType, SendMulti, SendMultiTemplate, SendSingle, SendSingleTemplate,
    SendSmsResponse, UnixTimestamp, ValidationError,
};

const DEFAULT_SEND_SMS_ENDPOINT: &str = "https://yun.tim.qq.com/v5/tlssmssvr/sendsms";
const DEFAULT_SEND_MULTI_SMS_ENDPOINT: &str = "https://yun.tim.qq.com/v5/tlssmssvr/sendmultisms2";
const DEFAULT_PULL_STATUS_ENDPOINT: &str = "https://yun.tim.qq.com/v5/tlssmssvr/pullstatus";
const DEFAULT_PULL_MOBILE_STATUS_ENDPOINT: &str =
    "https://yun.tim.qq.com/v5/tlssmssvr/pullstatus4mobile";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).json(&body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// SDK credentials shared by every operation issued from one sender or
/// puller instance.
pub struct Credentials {
    app_id: AppId,
    app_key: AppKey,
}

impl Credentials {
    /// Validate and pair an application id with its key.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            app_id: AppId::new(app_id)?,
            app_key: AppKey::new(app_key)?,
        })
    }

    /// Pair already-validated values.
    pub fn from_parts(app_id: AppId, app_key: AppKey) -> Self {
        Self { app_id, app_key }
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    pub fn app_key(&self) -> &AppKey {
        &self.app_key
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by the sender and puller façades.
pub enum QcloudSmsError {
    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured endpoint URL could not be parsed.
    #[error("invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    /// Request body serialization failure.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Clone)]
/// Shared core of the façade types: credentials, one endpoint, and the
/// HTTP transport. One POST per operation, no retries.
struct Gateway {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl Gateway {
    fn new(credentials: Credentials, endpoint: impl Into<String>) -> Self {
        Self {
            credentials,
            endpoint: endpoint.into(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    fn app_key(&self) -> &AppKey {
        &self.credentials.app_key
    }

    /// Build the per-call URL: the endpoint plus
    /// `?sdkappid=<app_id>&random=<random>`, where `random` is the same
    /// nonce mixed into the body signature.
    fn request_url(&self, random: Nonce) -> Result<String, QcloudSmsError> {
        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair(AppId::FIELD, self.credentials.app_id.as_str())
            .append_pair(Nonce::FIELD, &random.value().to_string());
        Ok(url.into())
    }

    async fn post(
        &self,
        random: Nonce,
        body: serde_json::Value,
    ) -> Result<HttpResponse, QcloudSmsError> {
        let url = self.request_url(random)?;
        debug!(url = %url, "dispatching sms gateway request");

        let response = self
            .http
            .post_json(&url, body)
            .await
            .map_err(QcloudSmsError::Transport)?;

        if !(200..=299).contains(&response.status) {
            warn!(
                status = response.status,
                "sms gateway returned non-success http status"
            );
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(QcloudSmsError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response)
    }
}

fn to_body(value: &impl serde::Serialize) -> Result<serde_json::Value, QcloudSmsError> {
    serde_json::to_value(value).map_err(QcloudSmsError::Encode)
}

fn parse_error(err: crate::transport::TransportError) -> QcloudSmsError {
    QcloudSmsError::Parse(Box::new(err))
}

#[derive(Debug, Clone)]
/// Builder shared by the four façade types.
///
/// Use this when you need to customize the endpoint, timeout, or
/// user-agent; `new()` on each façade covers the common case.
pub struct SmsClientBuilder {
    credentials: Credentials,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsClientBuilder {
    /// Create a builder with the default endpoint and no timeout or
    /// user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the endpoint URL of the façade being built.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    fn build_gateway(self, default_endpoint: &str) -> Result<Gateway, QcloudSmsError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| QcloudSmsError::Transport(Box::new(err)))?;

        Ok(Gateway {
            credentials: self.credentials,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| default_endpoint.to_owned()),
            http: Arc::new(ReqwestTransport { client }),
        })
    }

    /// Build a [`SmsSingleSender`].
    pub fn build_single_sender(self) -> Result<SmsSingleSender, QcloudSmsError> {
        Ok(SmsSingleSender {
            gateway: self.build_gateway(DEFAULT_SEND_SMS_ENDPOINT)?,
        })
    }

    /// Build a [`SmsMultiSender`].
    pub fn build_multi_sender(self) -> Result<SmsMultiSender, QcloudSmsError> {
        Ok(SmsMultiSender {
            gateway: self.build_gateway(DEFAULT_SEND_MULTI_SMS_ENDPOINT)?,
        })
    }

    /// Build a [`SmsStatusPuller`].
    pub fn build_status_puller(self) -> Result<SmsStatusPuller, QcloudSmsError> {
        Ok(SmsStatusPuller {
            gateway: self.build_gateway(DEFAULT_PULL_STATUS_ENDPOINT)?,
        })
    }

    /// Build a [`SmsMobileStatusPuller`].
    pub fn build_mobile_status_puller(self) -> Result<SmsMobileStatusPuller, QcloudSmsError> {
        Ok(SmsMobileStatusPuller {
            gateway: self.build_gateway(DEFAULT_PULL_MOBILE_STATUS_ENDPOINT)?,
        })
    }
}

#[derive(Clone)]
/// Sends one message to one recipient per call.
pub struct SmsSingleSender {
    gateway: Gateway,
}

impl SmsSingleSender {
    /// Create a sender against the default endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            gateway: Gateway::new(credentials, DEFAULT_SEND_SMS_ENDPOINT),
        }
    }

    /// Start building a sender with custom settings.
    pub fn builder(credentials: Credentials) -> SmsClientBuilder {
        SmsClientBuilder::new(credentials)
    }

    /// Send a plain message.
    ///
    /// Callers that only need best-effort delivery can discard the result;
    /// the provider's `result` code is returned inside the response rather
    /// than mapped to an error.
    pub async fn send(&self, request: SendSingle) -> Result<SendSmsResponse, QcloudSmsError> {
        let random = Nonce::fresh();
        let now = UnixTimestamp::now();
        let body = crate::transport::encode_send_single_body(
            &request,
            self.gateway.app_key(),
            random,
            now,
        );
        let response = self.gateway.post(random, to_body(&body)?).await?;
        crate::transport::decode_send_sms_response(&response.body).map_err(parse_error)
    }

    /// Send a templated message.
    pub async fn send_with_template(
        &self,
        request: SendSingleTemplate,
    ) -> Result<SendSmsResponse, QcloudSmsError> {
        let random = Nonce::fresh();
        let now = UnixTimestamp::now();
        let body = crate::transport::encode_send_single_template_body(
            &request,
            self.gateway.app_key(),
            random,
            now,
        );
        let response = self.gateway.post(random, to_body(&body)?).await?;
        crate::transport::decode_send_sms_response(&response.body).map_err(parse_error)
    }
}

#[derive(Clone)]
/// Sends one message to several recipients per call.
pub struct SmsMultiSender {
    gateway: Gateway,
}

impl SmsMultiSender {
    /// Create a sender against the default endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            gateway: Gateway::new(credentials, DEFAULT_SEND_MULTI_SMS_ENDPOINT),
        }
    }

    /// Start building a sender with custom settings.
    pub fn builder(credentials: Credentials) -> SmsClientBuilder {
        SmsClientBuilder::new(credentials)
    }

    /// Send a plain message to every recipient in the request.
    pub async fn send(&self, request: SendMulti) -> Result<MultiSendResponse, QcloudSmsError> {
        let random = Nonce::fresh();
        let now = UnixTimestamp::now();
        let body = crate::transport::encode_send_multi_body(
            &request,
            self.gateway.app_key(),
            random,
            now,
        );
        let response = self.gateway.post(random, to_body(&body)?).await?;
        crate::transport::decode_send_multi_sms_response(&response.body).map_err(parse_error)
    }

    /// Send a templated message to every recipient in the request.
    pub async fn send_with_template(
        &self,
        request: SendMultiTemplate,
    ) -> Result<MultiSendResponse, QcloudSmsError> {
        let random = Nonce::fresh();
        let now = UnixTimestamp::now();
        let body = crate::transport::encode_send_multi_template_body(
            &request,
            self.gateway.app_key(),
            random,
            now,
        );
        let response = self.gateway.post(random, to_body(&body)?).await?;
        crate::transport::decode_send_multi_sms_response(&response.body).map_err(parse_error)
    }
}

#[derive(Clone)]
/// Pulls delivery and reply reports for the whole application.
pub struct SmsStatusPuller {
    gateway: Gateway,
}

impl SmsStatusPuller {
    /// Create a puller against the default endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            gateway: Gateway::new(credentials, DEFAULT_PULL_STATUS_ENDPOINT),
        }
    }

    /// Start building a puller with custom settings.
    pub fn builder(credentials: Credentials) -> SmsClientBuilder {
        SmsClientBuilder::new(credentials)
    }

    async fn pull(
        &self,
        kind: PullType,
        max: MaxReports,
    ) -> Result<HttpResponse, QcloudSmsError> {
        let random = Nonce::fresh();
        let now = UnixTimestamp::now();
        let body = crate::transport::encode_pull_status_body(
            kind,
            max,
            self.gateway.app_key(),
            random,
            now,
        );
        self.gateway.post(random, to_body(&body)?).await
    }

    /// Pull up to `max` delivery reports.
    pub async fn pull_callback(
        &self,
        max: MaxReports,
    ) -> Result<PullCallbackResponse, QcloudSmsError> {
        let response = self.pull(PullType::Callback, max).await?;
        crate::transport::decode_pull_callback_response(&response.body).map_err(parse_error)
    }

    /// Pull up to `max` reply messages.
    pub async fn pull_reply(&self, max: MaxReports) -> Result<PullReplyResponse, QcloudSmsError> {
        let response = self.pull(PullType::Reply, max).await?;
        crate::transport::decode_pull_reply_response(&response.body).map_err(parse_error)
    }
}

#[derive(Clone)]
/// Pulls delivery and reply reports for a single mobile number within a
/// time window.
pub struct SmsMobileStatusPuller {
    gateway: Gateway,
}

impl SmsMobileStatusPuller {
    /// Create a puller against the default endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            gateway: Gateway::new(credentials, DEFAULT_PULL_MOBILE_STATUS_ENDPOINT),
        }
    }

    /// Start building a puller with custom settings.
    pub fn builder(credentials: Credentials) -> SmsClientBuilder {
        SmsClientBuilder::new(credentials)
    }

    async fn pull(
        &self,
        kind: PullType,
        query: &MobileStatusQuery,
    ) -> Result<HttpResponse, QcloudSmsError> {
        let random = Nonce::fresh();
        let now = UnixTimestamp::now();
        let body = crate::transport::encode_pull_mobile_status_body(
            kind,
            query,
            self.gateway.app_key(),
            random,
            now,
        );
        self.gateway.post(random, to_body(&body)?).await
    }

    /// Pull delivery reports for the queried mobile number.
    pub async fn pull_callback(
        &self,
        query: MobileStatusQuery,
    ) -> Result<PullCallbackResponse, QcloudSmsError> {
        let response = self.pull(PullType::Callback, &query).await?;
        crate::transport::decode_pull_callback_response(&response.body).map_err(parse_error)
    }

    /// Pull reply messages for the queried mobile number.
    pub async fn pull_reply(
        &self,
        query: MobileStatusQuery,
    ) -> Result<PullReplyResponse, QcloudSmsError> {
        let response = self.pull(PullType::Reply, &query).await?;
        crate::transport::decode_pull_reply_response(&response.body).map_err(parse_error)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use hex::encode as hex_encode;
    use sha2::{Digest, Sha256};

    use crate::domain::{
        MessageText, MessageType, Mobile, NationCode, Recipient, ReportStatus, SendOptions,
        SignName, TemplateId,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_url: Option<String>,
        last_body: Option<serde_json::Value>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_url: None,
                    last_body: None,
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn last_request(&self) -> (String, serde_json::Value) {
            let state = self.state.lock().unwrap();
            (
                state.last_url.clone().expect("no request recorded"),
                state.last_body.clone().expect("no request recorded"),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            body: serde_json::Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, response_body) = {
                    let mut state = self.state.lock().unwrap();
                    state.last_url = Some(url.to_owned());
                    state.last_body = Some(body);
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse {
                    status,
                    body: response_body,
                })
            })
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("1400000", "abc").unwrap()
    }

    fn recipient(mobile: &str) -> Recipient {
        Recipient::new(
            NationCode::new("86").unwrap(),
            Mobile::new(mobile).unwrap(),
        )
    }

    fn gateway(endpoint: &str, transport: FakeTransport) -> Gateway {
        Gateway {
            credentials: credentials(),
            endpoint: endpoint.to_owned(),
            http: Arc::new(transport),
        }
    }

    fn query_params(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    const SEND_OK: &str = r#"{"result": 0, "errmsg": "OK", "ext": "", "sid": "sid-1", "fee": 1}"#;

    #[tokio::test]
    async fn send_composes_signed_request_and_parses_response() {
        let transport = FakeTransport::new(200, SEND_OK);
        let sender = SmsSingleSender {
            gateway: gateway("https://example.invalid/v5/tlssmssvr/sendsms", transport.clone()),
        };

        let request = SendSingle::new(
            MessageType::Regular,
            recipient("13800001111"),
            MessageText::new("hello").unwrap(),
            SendOptions::default(),
        );
        let response = sender.send(request).await.unwrap();
        assert!(response.result.is_ok());
        assert_eq!(response.sid.as_deref(), Some("sid-1"));

        let (url, body) = transport.last_request();
        assert!(url.starts_with("https://example.invalid/v5/tlssmssvr/sendsms?"));
        let params = query_params(&url);
        assert_eq!(params[0].0, "sdkappid");
        assert_eq!(params[0].1, "1400000");
        assert_eq!(params[1].0, "random");

        let random: u32 = params[1].1.parse().unwrap();
        assert!(random <= Nonce::MAX);

        assert_eq!(
            body["tel"],
            serde_json::json!({"nationcode": "86", "mobile": "13800001111"})
        );
        assert_eq!(body["type"], 0);
        assert_eq!(body["msg"], "hello");
        assert_eq!(body["extend"], "");
        assert_eq!(body["ext"], "");

        // The body signature must match the formula for the nonce in the
        // query string and the timestamp in the body.
        let time = body["time"].as_u64().unwrap();
        let canonical = format!("appkey=abc&random={random}&time={time}&mobile=13800001111");
        assert_eq!(
            body["sig"],
            serde_json::Value::String(hex_encode(Sha256::digest(canonical.as_bytes())))
        );
    }

    #[tokio::test]
    async fn send_with_template_resolves_on_200() {
        let transport = FakeTransport::new(200, SEND_OK);
        let sender = SmsSingleSender {
            gateway: gateway("https://example.invalid/sendsms", transport.clone()),
        };

        let request = SendSingleTemplate::new(
            recipient("13800001111"),
            TemplateId::new(7839),
            vec!["1234".to_owned()],
            SignName::new("Acme").unwrap(),
            SendOptions::default(),
        );
        let response = sender.send_with_template(request).await.unwrap();
        assert!(response.result.is_ok());

        let (_, body) = transport.last_request();
        assert_eq!(body["tpl_id"], 7839);
        assert_eq!(body["sign"], "Acme");
        assert_eq!(body["params"], serde_json::json!(["1234"]));
    }

    #[tokio::test]
    async fn send_with_template_rejects_on_500() {
        let transport = FakeTransport::new(500, "oops");
        let sender = SmsSingleSender {
            gateway: gateway("https://example.invalid/sendsms", transport),
        };

        let request = SendSingleTemplate::new(
            recipient("13800001111"),
            TemplateId::new(7839),
            vec!["1234".to_owned()],
            SignName::new("Acme").unwrap(),
            SendOptions::default(),
        );
        let err = sender.send_with_template(request).await.unwrap_err();
        assert!(matches!(
            err,
            QcloudSmsError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn empty_error_body_maps_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let sender = SmsSingleSender {
            gateway: gateway("https://example.invalid/sendsms", transport),
        };

        let request = SendSingle::new(
            MessageType::Regular,
            recipient("13800001111"),
            MessageText::new("hello").unwrap(),
            SendOptions::default(),
        );
        let err = sender.send(request).await.unwrap_err();
        assert!(matches!(
            err,
            QcloudSmsError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn unparsable_body_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let sender = SmsSingleSender {
            gateway: gateway("https://example.invalid/sendsms", transport),
        };

        let request = SendSingle::new(
            MessageType::Regular,
            recipient("13800001111"),
            MessageText::new("hello").unwrap(),
            SendOptions::default(),
        );
        let err = sender.send(request).await.unwrap_err();
        assert!(matches!(err, QcloudSmsError::Parse(_)));
    }

    #[tokio::test]
    async fn invalid_endpoint_is_rejected_before_dispatch() {
        let transport = FakeTransport::new(200, SEND_OK);
        let sender = SmsSingleSender {
            gateway: gateway("not a url", transport.clone()),
        };

        let request = SendSingle::new(
            MessageType::Regular,
            recipient("13800001111"),
            MessageText::new("hello").unwrap(),
            SendOptions::default(),
        );
        let err = sender.send(request).await.unwrap_err();
        assert!(matches!(err, QcloudSmsError::Endpoint(_)));
        assert!(transport.state.lock().unwrap().last_url.is_none());
    }

    #[tokio::test]
    async fn multi_send_signs_over_every_mobile() {
        let json = r#"
        {
          "result": 0,
          "errmsg": "OK",
          "ext": "",
          "detail": [
            {"result": 0, "errmsg": "OK", "sid": "sid-1", "fee": 1,
             "nationcode": "86", "mobile": "13800001111"},
            {"result": 0, "errmsg": "OK", "sid": "sid-2", "fee": 1,
             "nationcode": "86", "mobile": "13800002222"}
          ]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let sender = SmsMultiSender {
            gateway: gateway("https://example.invalid/sendmultisms2", transport.clone()),
        };

        let request = SendMulti::new(
            MessageType::Marketing,
            vec![recipient("13800001111"), recipient("13800002222")],
            MessageText::new("sale").unwrap(),
            SendOptions::default(),
        )
        .unwrap();
        let response = sender.send(request).await.unwrap();
        assert_eq!(response.detail.len(), 2);
        assert_eq!(response.detail[1].sid.as_deref(), Some("sid-2"));

        let (url, body) = transport.last_request();
        let params = query_params(&url);
        let random: u32 = params[1].1.parse().unwrap();
        let time = body["time"].as_u64().unwrap();
        let canonical =
            format!("appkey=abc&random={random}&time={time}&mobile=13800001111,13800002222");
        assert_eq!(
            body["sig"],
            serde_json::Value::String(hex_encode(Sha256::digest(canonical.as_bytes())))
        );
        assert_eq!(body["type"], 1);
    }

    #[tokio::test]
    async fn status_puller_signs_without_mobile_suffix() {
        let json = r#"{"result": 0, "errmsg": "ok", "count": 0, "data": []}"#;
        let transport = FakeTransport::new(200, json);
        let puller = SmsStatusPuller {
            gateway: gateway("https://example.invalid/pullstatus", transport.clone()),
        };

        let response = puller
            .pull_callback(MaxReports::new(10).unwrap())
            .await
            .unwrap();
        assert!(response.result.is_ok());
        assert!(response.data.is_empty());

        let (url, body) = transport.last_request();
        assert_eq!(body["type"], 0);
        assert_eq!(body["max"], 10);

        let params = query_params(&url);
        let random: u32 = params[1].1.parse().unwrap();
        let time = body["time"].as_u64().unwrap();
        let canonical = format!("appkey=abc&random={random}&time={time}");
        assert_eq!(
            body["sig"],
            serde_json::Value::String(hex_encode(Sha256::digest(canonical.as_bytes())))
        );
    }

    #[tokio::test]
    async fn status_puller_reply_parses_messages() {
        let json = r#"
        {
          "result": 0,
          "errmsg": "ok",
          "count": 1,
          "data": [
            {"nationcode": "86", "mobile": "13800001111", "text": "STOP",
             "sign": "Acme", "time": 1700000123, "extend": "", "sid": "sid-9"}
          ]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let puller = SmsStatusPuller {
            gateway: gateway("https://example.invalid/pullstatus", transport.clone()),
        };

        let response = puller
            .pull_reply(MaxReports::new(1).unwrap())
            .await
            .unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].text.as_deref(), Some("STOP"));

        let (_, body) = transport.last_request();
        assert_eq!(body["type"], 1);
    }

    #[tokio::test]
    async fn mobile_status_puller_carries_filter_fields() {
        let json = r#"
        {
          "result": 0,
          "errmsg": "ok",
          "count": 1,
          "data": [
            {"user_receive_time": "2026-08-06 10:30:03", "nationcode": "86",
             "mobile": "13800001111", "report_status": "SUCCESS",
             "errmsg": "DELIVRD", "description": "delivered", "sid": "sid-1"}
          ]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let puller = SmsMobileStatusPuller {
            gateway: gateway("https://example.invalid/pullstatus4mobile", transport.clone()),
        };

        let query = MobileStatusQuery::new(
            recipient("13800001111"),
            UnixTimestamp::new(1_700_000_000),
            UnixTimestamp::new(1_700_003_600),
            MaxReports::new(10).unwrap(),
        );
        let response = puller.pull_callback(query).await.unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(
            response.data[0].report_status,
            Some(ReportStatus::Success)
        );

        let (_, body) = transport.last_request();
        assert_eq!(body["begin_time"], 1_700_000_000u64);
        assert_eq!(body["end_time"], 1_700_003_600u64);
        assert_eq!(body["nationcode"], "86");
        assert_eq!(body["mobile"], "13800001111");
        assert_eq!(body["type"], 0);
    }

    #[test]
    fn credentials_constructor_validates_inputs() {
        assert!(Credentials::new("   ", "abc").is_err());
        assert!(Credentials::new("1400000", "").is_err());
    }

    #[test]
    fn builder_endpoint_override_is_applied() {
        let sender = SmsSingleSender::builder(credentials())
            .endpoint("https://example.invalid/sendsms")
            .build_single_sender()
            .unwrap();
        assert_eq!(sender.gateway.endpoint, "https://example.invalid/sendsms");

        let puller = SmsStatusPuller::builder(credentials())
            .build_status_puller()
            .unwrap();
        assert_eq!(puller.gateway.endpoint, DEFAULT_PULL_STATUS_ENDPOINT);
    }

    #[test]
    fn builder_accepts_timeout_and_user_agent() {
        let sender = SmsMultiSender::builder(credentials())
            .timeout(Duration::from_secs(5))
            .user_agent("qcloudsms-tests")
            .build_multi_sender()
            .unwrap();
        assert_eq!(sender.gateway.endpoint, DEFAULT_SEND_MULTI_SMS_ENDPOINT);
    }
}
