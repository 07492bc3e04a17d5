//! `gravatar config` – show config path, effective defaults and accepted codes.

use anyhow::{Context, Result};
use gravatar_core::config;
use gravatar_core::{DefaultImage, Rating};

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init()?;
    let rendered = toml::to_string_pretty(&cfg).context("serialize config")?;
    println!("# {}", path.display());
    print!("{rendered}");

    println!();
    println!("# default_image codes:");
    for image in DefaultImage::ALL {
        println!("#   {:<10} {}", format!("{:?}", image.code()), image.description());
    }
    println!("# rating codes:");
    for rating in Rating::ALL {
        println!("#   {:<10} {}", format!("{:?}", rating.code()), rating.description());
    }
    Ok(())
}
