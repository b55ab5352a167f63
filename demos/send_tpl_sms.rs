use std::io;

use qcloudsms::{
    Credentials, Mobile, NationCode, Recipient, SendOptions, SendSingleTemplate, SignName,
    SmsSingleSender, TemplateId,
};

fn require_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_id = require_env("QCLOUDSMS_APP_ID")?;
    let app_key = require_env("QCLOUDSMS_APP_KEY")?;
    let mobile = require_env("QCLOUDSMS_MOBILE")?;
    let template_id: u32 = require_env("QCLOUDSMS_TEMPLATE_ID")?.parse()?;
    let sign = require_env("QCLOUDSMS_SIGN")?;
    let params = std::env::var("QCLOUDSMS_PARAMS")
        .map(|raw| raw.split(',').map(str::to_owned).collect::<Vec<_>>())
        .unwrap_or_default();

    let sender = SmsSingleSender::new(Credentials::new(app_id, app_key)?);
    let recipient = Recipient::new(NationCode::new("86")?, Mobile::new(mobile)?);
    let request = SendSingleTemplate::new(
        recipient,
        TemplateId::new(template_id),
        params,
        SignName::new(sign)?,
        SendOptions::default(),
    );

    let response = sender.send_with_template(request).await?;
    println!(
        "result: {:?}, errmsg: {}, sid: {:?}",
        response.result, response.errmsg, response.sid
    );

    Ok(())
}
