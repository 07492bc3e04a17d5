//! `gravatar img <email>` – print the `<img />` tag (or its attributes as JSON).

use anyhow::{Context, Result};
use gravatar_core::avatar_image;
use gravatar_core::config::GravatarConfig;

use crate::cli::AvatarArgs;

pub fn run_img(email: &str, args: &AvatarArgs, cfg: &GravatarConfig, json: bool) -> Result<()> {
    let options = args.apply(cfg.avatar_options());
    let image = avatar_image(email, &options, args.secure_context);
    tracing::debug!("img options={:?} src={}", options, image.src);
    if json {
        let out = serde_json::to_string_pretty(&image).context("serialize image")?;
        println!("{out}");
    } else {
        println!("{}", image.to_html());
    }
    Ok(())
}
