//! `<img>` element for an avatar: URL plus presentational attributes.

use maud::Escaper;
use serde::Serialize;
use std::fmt::{self, Write as _};

use crate::avatar_url::avatar_url;
use crate::options::AvatarOptions;

/// Resolved `src`, `class` and `alt` of an avatar image.
///
/// Values are stored unescaped; escaping happens when rendering markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarImage {
    pub src: String,
    pub class: String,
    pub alt: String,
}

/// Build the avatar URL and resolve the class/alt defaults.
pub fn avatar_image(email: &str, options: &AvatarOptions, secure_context: bool) -> AvatarImage {
    AvatarImage {
        src: avatar_url(email, options, secure_context),
        class: options.css_class().to_string(),
        alt: options.alt().to_string(),
    }
}

impl AvatarImage {
    /// Self-closing `<img />` markup with attribute values escaped.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AvatarImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<img src=\"{}\" class=\"{}\" alt=\"{}\" />",
            escape_attribute(&self.src),
            escape_attribute(&self.class),
            escape_attribute(&self.alt)
        )
    }
}

/// Escape a value for a double-quoted HTML attribute (`&`, `<`, `>`, `"`).
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    // Writing into a String cannot fail.
    let _ = Escaper::new(&mut out).write_str(value);
    out
}
