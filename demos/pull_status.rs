use std::io;

use qcloudsms::{Credentials, MaxReports, SmsStatusPuller};

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

    let puller = SmsStatusPuller::new(Credentials::new(app_id, app_key)?);
    let max = MaxReports::new(10)?;

    let callbacks = puller.pull_callback(max).await?;
    println!(
        "delivery reports: result: {:?}, count: {:?}",
        callbacks.result, callbacks.count
    );
    for report in &callbacks.data {
        println!("  {:?} {:?} {:?}", report.mobile, report.report_status, report.sid);
    }

    let replies = puller.pull_reply(max).await?;
    println!(
        "replies: result: {:?}, count: {:?}",
        replies.result, replies.count
    );
    for reply in &replies.data {
        println!("  {:?} {:?}", reply.mobile, reply.text);
    }

    Ok(())
}
