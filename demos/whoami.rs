//! Example: Check credentials and print the user, account and today's entries.
//!
//! Run with: MITE_ACCOUNT=acme MITE_API_KEY=... cargo run --example whoami

use std::sync::Arc;

use mite_api_client::auth::EnvCredentials;
use mite_api_client::rest::MiteClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let Some(credentials) = EnvCredentials::try_from_env() else {
        println!("Set MITE_ACCOUNT and MITE_API_KEY to run this example.");
        return Ok(());
    };

    let client = MiteClient::builder()
        .user_agent("mite-whoami/0.1")
        .credentials(Arc::new(credentials))
        .build()?;

    let Some(me) = client.get_myself().await? else {
        println!("Not authorized for account {}", client.account_name());
        return Ok(());
    };
    println!("{} <{}> ({})", me.name, me.email, me.role);

    if let Some(account) = client.get_account().await? {
        println!("Account: {} [{}]", account.title, account.currency);
    }

    let entries = client.get_time_entries_for_today().await?;
    let total: u32 = entries.iter().map(|e| e.minutes).sum();
    for entry in &entries {
        println!(
            "  {:>4} min  {:<20} {}",
            entry.minutes,
            entry.project_name.as_deref().unwrap_or("-"),
            entry.note
        );
    }
    println!("Total today: {}h {:02}m", total / 60, total % 60);

    Ok(())
}
