//! Errors for options arriving as text (CLI flags, config file).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionError {
    /// Not one of the default-image codes or names.
    #[error("unknown default image {0:?} (expected one of: 404, mm, identicon, monsterid, wavatar, retro, default)")]
    DefaultImage(String),
    /// Not one of g, pg, r, x.
    #[error("unknown rating {0:?} (expected one of: g, pg, r, x)")]
    Rating(String),
}
