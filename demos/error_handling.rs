//! Example: Telling transport failures apart from empty results.
//!
//! Run with: cargo run --example error_handling

use std::sync::Arc;

use mite_api_client::MiteError;
use mite_api_client::auth::StaticCredentials;
use mite_api_client::rest::MiteClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration problems surface when building the client.
    match MiteClient::new("demo/1.0", "acme", "line\nbreak") {
        Err(MiteError::InvalidHeader(name)) => println!("Rejected credential header: {name}"),
        other => println!("Unexpected: {other:?}"),
    }

    // Nothing listens here, so the request itself fails.
    let client = MiteClient::builder()
        .base_url("http://127.0.0.1:1")
        .credentials(Arc::new(StaticCredentials::new("acme", "api_key")))
        .build()?;

    match client.get_myself().await {
        Ok(Some(user)) => println!("Authorized as {}", user.name),
        Ok(None) => println!("Request completed but mite returned no user"),
        Err(e) if e.is_transport() => println!("Network failure: {e}"),
        Err(e) => println!("Other error: {e}"),
    }

    Ok(())
}
