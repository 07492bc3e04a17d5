//! Avatar display options: default-image policy, content rating, and the
//! per-call option set with its documented defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseOptionError;

/// Size in pixels when the caller does not pick one.
pub const DEFAULT_SIZE: i32 = 80;
/// `class` attribute used when none (or an empty one) is supplied.
pub const DEFAULT_CSS_CLASS: &str = "gravatar";
/// `alt` attribute used when none (or an empty one) is supplied.
pub const DEFAULT_ALT: &str = "Gravatar image";

/// Built-in image Gravatar serves when the email has no avatar of its own.
///
/// Most of these are generated from the email hash, so each address gets a
/// stable, unique image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DefaultImage {
    /// Gravatar logo.
    #[default]
    Default,
    /// Return HTTP 404 instead of an image.
    Http404,
    /// Cartoon silhouette of a person; does not vary by hash.
    MysteryMan,
    /// Geometric pattern.
    Identicon,
    /// Generated monster.
    MonsterId,
    /// Generated face.
    Wavatar,
    /// 8-bit arcade-style pixelated face.
    Retro,
}

impl DefaultImage {
    pub const ALL: [DefaultImage; 7] = [
        DefaultImage::Default,
        DefaultImage::Http404,
        DefaultImage::MysteryMan,
        DefaultImage::Identicon,
        DefaultImage::MonsterId,
        DefaultImage::Wavatar,
        DefaultImage::Retro,
    ];

    /// Value of the `d` query parameter. `Default` is the empty string.
    pub fn code(self) -> &'static str {
        match self {
            DefaultImage::Default => "",
            DefaultImage::Http404 => "404",
            DefaultImage::MysteryMan => "mm",
            DefaultImage::Identicon => "identicon",
            DefaultImage::MonsterId => "monsterid",
            DefaultImage::Wavatar => "wavatar",
            DefaultImage::Retro => "retro",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DefaultImage::Default => "Gravatar logo",
            DefaultImage::Http404 => "no image; respond with HTTP 404",
            DefaultImage::MysteryMan => "cartoon-style silhouette of a person",
            DefaultImage::Identicon => "geometric pattern based on the email hash",
            DefaultImage::MonsterId => "generated monster with varying colors and faces",
            DefaultImage::Wavatar => "generated faces with differing features and backgrounds",
            DefaultImage::Retro => "8-bit arcade-style pixelated face",
        }
    }
}

impl fmt::Display for DefaultImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultImage::Default => f.write_str("default"),
            other => f.write_str(other.code()),
        }
    }
}

impl FromStr for DefaultImage {
    type Err = ParseOptionError;

    /// Accepts the service codes and variant names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let image = match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => DefaultImage::Default,
            "404" | "http404" => DefaultImage::Http404,
            "mm" | "mysteryman" | "mystery-man" => DefaultImage::MysteryMan,
            "identicon" => DefaultImage::Identicon,
            "monsterid" | "monster-id" => DefaultImage::MonsterId,
            "wavatar" => DefaultImage::Wavatar,
            "retro" => DefaultImage::Retro,
            _ => return Err(ParseOptionError::DefaultImage(s.to_string())),
        };
        Ok(image)
    }
}

impl TryFrom<String> for DefaultImage {
    type Error = ParseOptionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DefaultImage> for &'static str {
    fn from(image: DefaultImage) -> Self {
        image.code()
    }
}

/// Self-declared maturity rating. Only images at or below the requested
/// rating are returned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Rating {
    /// Suitable for any audience.
    #[default]
    G,
    /// Rude gestures, lesser swear words, mild violence.
    Pg,
    /// Harsh profanity, intense violence, nudity, hard drug use.
    R,
    /// Hardcore sexual imagery or extremely disturbing violence.
    X,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::G, Rating::Pg, Rating::R, Rating::X];

    /// Value of the `r` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rating::G => "suitable for display on all websites with any audience type",
            Rating::Pg => "rude gestures, provocatively dressed individuals, lesser swear words, mild violence",
            Rating::R => "harsh profanity, intense violence, nudity, or hard drug use",
            Rating::X => "hardcore sexual imagery or extremely disturbing violence",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rating {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "g" => Ok(Rating::G),
            "pg" => Ok(Rating::Pg),
            "r" => Ok(Rating::R),
            "x" => Ok(Rating::X),
            _ => Err(ParseOptionError::Rating(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rating {
    type Error = ParseOptionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rating> for &'static str {
    fn from(rating: Rating) -> Self {
        rating.code()
    }
}

/// Everything that shapes one avatar URL and its `<img>` attributes.
///
/// Build with struct update syntax over [`AvatarOptions::default`]:
///
/// ```
/// use gravatar_core::{AvatarOptions, DefaultImage, Rating};
///
/// let opts = AvatarOptions {
///     size: 120,
///     default_image: DefaultImage::Retro,
///     rating: Rating::Pg,
///     ..AvatarOptions::default()
/// };
/// assert_eq!(opts.css_class(), "gravatar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarOptions {
    /// Size in pixels, passed through verbatim (no bounds checking).
    pub size: i32,
    /// Named fallback image; ignored when `default_image_url` is non-empty.
    pub default_image: DefaultImage,
    /// Custom fallback image URL.
    pub default_image_url: Option<String>,
    /// Always serve the default image, even when the user has an avatar.
    pub force_default: bool,
    pub rating: Rating,
    /// Always use https, regardless of the embedding request.
    pub force_secure: bool,
    pub css_class: Option<String>,
    pub alt: Option<String>,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            default_image: DefaultImage::Default,
            default_image_url: None,
            force_default: false,
            rating: Rating::G,
            force_secure: false,
            css_class: None,
            alt: None,
        }
    }
}

impl AvatarOptions {
    /// Custom default-image URL, if one is set and non-empty.
    pub fn custom_default_url(&self) -> Option<&str> {
        self.default_image_url.as_deref().filter(|u| !u.is_empty())
    }

    /// `class` attribute, falling back to `"gravatar"`.
    pub fn css_class(&self) -> &str {
        non_empty_or(self.css_class.as_deref(), DEFAULT_CSS_CLASS)
    }

    /// `alt` attribute, falling back to `"Gravatar image"`.
    pub fn alt(&self) -> &str {
        non_empty_or(self.alt.as_deref(), DEFAULT_ALT)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}
