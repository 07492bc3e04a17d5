//! `gravatar url <email>` – print the avatar URL.

use anyhow::Result;
use gravatar_core::avatar_url;
use gravatar_core::config::GravatarConfig;

use crate::cli::AvatarArgs;

pub fn run_url(email: &str, args: &AvatarArgs, cfg: &GravatarConfig) -> Result<()> {
    let options = args.apply(cfg.avatar_options());
    let url = avatar_url(email, &options, args.secure_context);
    tracing::debug!("url options={:?} url={}", options, url);
    println!("{url}");
    Ok(())
}
