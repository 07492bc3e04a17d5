//! Avatar option flags shared by `url` and `img`.

use clap::Args;
use gravatar_core::{AvatarOptions, DefaultImage, Rating};

/// Flags that override the configured avatar options.
#[derive(Debug, Clone, Default, Args)]
pub struct AvatarArgs {
    /// Size in pixels (default: 80).
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub size: Option<i32>,

    /// Built-in default image: 404, mm, identicon, monsterid, wavatar, retro, or default.
    /// A configured default_image_url still wins; pass --default-url "" to clear it.
    #[arg(long = "default", short = 'd', value_name = "CODE")]
    pub default_image: Option<DefaultImage>,

    /// Custom default image URL (overrides --default).
    #[arg(long, value_name = "URL")]
    pub default_url: Option<String>,

    /// Prefer the default image over the user's own avatar.
    #[arg(long)]
    pub force_default: bool,

    /// Highest content rating to serve: g, pg, r, x.
    #[arg(long, short = 'r')]
    pub rating: Option<Rating>,

    /// Always use https.
    #[arg(long)]
    pub force_secure: bool,

    /// The embedding page is already served over https.
    #[arg(long)]
    pub secure_context: bool,

    /// CSS class attribute (default: "gravatar").
    #[arg(long = "class", value_name = "CLASS")]
    pub css_class: Option<String>,

    /// Image alt attribute (default: "Gravatar image").
    #[arg(long)]
    pub alt: Option<String>,
}

impl AvatarArgs {
    /// Layer these flags over `base`. Boolean flags can only switch on.
    pub fn apply(&self, mut base: AvatarOptions) -> AvatarOptions {
        if let Some(size) = self.size {
            base.size = size;
        }
        if let Some(image) = self.default_image {
            base.default_image = image;
        }
        if let Some(url) = &self.default_url {
            base.default_image_url = Some(url.clone());
        }
        if let Some(rating) = self.rating {
            base.rating = rating;
        }
        if let Some(class) = &self.css_class {
            base.css_class = Some(class.clone());
        }
        if let Some(alt) = &self.alt {
            base.alt = Some(alt.clone());
        }
        base.force_default |= self.force_default;
        base.force_secure |= self.force_secure;
        base
    }
}
