use std::io;

use android_sms_gateway::{ApiClient, Credentials, DEFAULT_URL};
use tracing_subscriber::EnvFilter;

/// Builds a blocking client with Basic auth and issues a GET against `path`
/// (first CLI argument, `/health` by default).
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let login = required_env("ASG_LOGIN")?;
    let password = required_env("ASG_PASSWORD")?;
    let endpoint = std::env::var("ASG_ENDPOINT").unwrap_or_else(|_| DEFAULT_URL.to_owned());
    let path = std::env::args().nth(1).unwrap_or_else(|| "/health".to_owned());

    let client = ApiClient::builder(Credentials::basic(login, password)?)
        .base_url(endpoint)
        .build()?;

    for (name, _) in client.headers().iter() {
        println!("header: {name}");
    }

    let response: serde_json::Value = client.get_json(&path)?;
    println!("{response:#}");

    Ok(())
}

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
