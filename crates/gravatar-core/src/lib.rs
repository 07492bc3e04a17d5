//! Gravatar avatar URLs and `<img>` tags from email addresses.
//!
//! The email is trimmed and lower-cased, hashed with MD5, and combined with
//! the display options into
//! `{scheme}://{subdomain}.gravatar.com/avatar/{hash}?s=..&d=..[&f=y]&r=..`.

pub mod avatar_url;
pub mod config;
pub mod error;
pub mod hash;
pub mod image;
pub mod logging;
pub mod options;

pub use avatar_url::{avatar_url, Transport, SERVICE_HOST};
pub use error::ParseOptionError;
pub use hash::{normalize_email, EmailHash};
pub use image::{avatar_image, AvatarImage};
pub use options::{AvatarOptions, DefaultImage, Rating};
