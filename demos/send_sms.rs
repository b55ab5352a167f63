use std::io;

use qcloudsms::{
    Credentials, MessageText, MessageType, Mobile, NationCode, Recipient, SendOptions, SendSingle,
    SmsSingleSender,
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
    let nation_code =
        std::env::var("QCLOUDSMS_NATION_CODE").unwrap_or_else(|_| "86".to_owned());
    let message = std::env::var("QCLOUDSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the qcloudsms example.".to_owned());

    let sender = SmsSingleSender::new(Credentials::new(app_id, app_key)?);
    let recipient = Recipient::new(NationCode::new(nation_code)?, Mobile::new(mobile)?);
    let request = SendSingle::new(
        MessageType::Regular,
        recipient,
        MessageText::new(message)?,
        SendOptions::default(),
    );

    let response = sender.send(request).await?;
    println!(
        "result: {:?}, errmsg: {}, sid: {:?}, fee: {:?}",
        response.result, response.errmsg, response.sid, response.fee
    );

    Ok(())
}
