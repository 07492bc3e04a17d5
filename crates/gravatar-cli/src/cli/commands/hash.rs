//! `gravatar hash <email>` – print the email hash.

use anyhow::Result;
use gravatar_core::{normalize_email, EmailHash};

pub fn run_hash(email: &str) -> Result<()> {
    let hash = EmailHash::of(email);
    tracing::debug!("hash normalized={:?} hash={}", normalize_email(email), hash);
    println!("{hash}");
    Ok(())
}
