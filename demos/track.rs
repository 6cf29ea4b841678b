//! Example: Create a time entry and toggle the tracker on it.
//!
//! Run with: MITE_ACCOUNT=acme MITE_API_KEY=... cargo run --example track -- "note"

use std::sync::Arc;

use mite_api_client::auth::EnvCredentials;
use mite_api_client::rest::MiteClient;
use mite_api_client::rest::time_entries::NewTimeEntry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let Some(credentials) = EnvCredentials::try_from_env() else {
        println!("Set MITE_ACCOUNT and MITE_API_KEY to run this example.");
        return Ok(());
    };
    let client = MiteClient::builder()
        .credentials(Arc::new(credentials))
        .build()?;

    // Stop whatever is running first.
    if let Some(running) = client.get_tracking_time_entry().await? {
        println!("Stopping timer on #{} ({})", running.id, running.note);
        client.stop_tracker(running.id).await?;
        return Ok(());
    }

    let note = std::env::args().nth(1).unwrap_or_else(|| "Tracked from example".to_string());
    let Some(entry) = client.create_time_entry(&NewTimeEntry::new().note(note)).await? else {
        println!("Could not create a time entry");
        return Ok(());
    };

    match client.start_tracker(entry.id).await? {
        Some(tracker) if tracker.is_running() => println!("Tracking #{}", entry.id),
        _ => println!("Created #{} but could not start the timer", entry.id),
    }

    Ok(())
}
