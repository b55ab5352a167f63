use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use qcloudsms::{
    Credentials, MaxReports, Mobile, MobileStatusQuery, NationCode, Recipient,
    SmsMobileStatusPuller, UnixTimestamp,
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

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let query = MobileStatusQuery::new(
        Recipient::new(NationCode::new("86")?, Mobile::new(mobile)?),
        UnixTimestamp::new(now - 24 * 3600),
        UnixTimestamp::new(now),
        MaxReports::new(10)?,
    );

    let puller = SmsMobileStatusPuller::new(Credentials::new(app_id, app_key)?);
    let response = puller.pull_callback(query).await?;
    println!(
        "result: {:?}, errmsg: {}, count: {:?}",
        response.result, response.errmsg, response.count
    );
    for report in &response.data {
        println!(
            "  {:?} {:?} {:?} {:?}",
            report.user_receive_time, report.mobile, report.report_status, report.description
        );
    }

    Ok(())
}
