use std::io;

use android_sms_gateway::{AsyncApiClient, Credentials, DEFAULT_URL};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = std::env::var("ASG_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ASG_TOKEN environment variable is required",
        )
    })?;
    let endpoint = std::env::var("ASG_ENDPOINT").unwrap_or_else(|_| DEFAULT_URL.to_owned());
    let path = std::env::args().nth(1).unwrap_or_else(|| "/health".to_owned());

    let client = AsyncApiClient::builder(Credentials::bearer(token)?)
        .base_url(endpoint)
        .build()?;

    let response: serde_json::Value = client.get_json(&path).await?;
    println!("{response:#}");

    Ok(())
}
