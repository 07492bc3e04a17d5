//! Avatar URL construction.
//!
//! `{scheme}://{subdomain}.gravatar.com/avatar/{hash}?s={size}&d={default}[&f=y]&r={rating}`
//!
//! Pure and infallible: every email (empty included) and every option set
//! yields a URL, and identical inputs yield identical output.

mod query;
mod transport;

pub use query::{build_query, default_image_param, encode_component};
pub use transport::Transport;

use crate::hash::EmailHash;
use crate::options::AvatarOptions;

/// Host serving avatars, without the subdomain.
pub const SERVICE_HOST: &str = "gravatar.com";

/// Builds the avatar URL for `email`.
///
/// `secure_context` reports whether the embedding request already runs over
/// a secure transport; together with `options.force_secure` it selects
/// `https://secure.` over `http://www.`.
///
/// # Examples
///
/// ```
/// use gravatar_core::{avatar_url, AvatarOptions, DefaultImage, Rating};
///
/// let opts = AvatarOptions {
///     default_image: DefaultImage::Identicon,
///     rating: Rating::Pg,
///     ..AvatarOptions::default()
/// };
/// assert_eq!(
///     avatar_url("user@example.com", &opts, false),
///     "http://www.gravatar.com/avatar/b58996c504c5638798eb6b511e6f49af?s=80&d=identicon&r=pg"
/// );
/// ```
pub fn avatar_url(email: &str, options: &AvatarOptions, secure_context: bool) -> String {
    let transport = Transport::resolve(options.force_secure, secure_context);
    format!(
        "{}://{}.{}/avatar/{}?{}",
        transport.scheme(),
        transport.subdomain(),
        SERVICE_HOST,
        EmailHash::of(email),
        build_query(options)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DefaultImage, Rating};

    #[test]
    fn default_options_plain_url() {
        assert_eq!(
            avatar_url("user@example.com", &AvatarOptions::default(), false),
            "http://www.gravatar.com/avatar/b58996c504c5638798eb6b511e6f49af?s=80&d=&r=g"
        );
    }

    #[test]
    fn secure_context_switches_scheme_and_subdomain() {
        let url = avatar_url("user@example.com", &AvatarOptions::default(), true);
        assert!(url.starts_with("https://secure.gravatar.com/avatar/"), "{url}");
    }

    #[test]
    fn force_secure_without_secure_context() {
        let opts = AvatarOptions {
            force_secure: true,
            ..AvatarOptions::default()
        };
        let url = avatar_url("user@example.com", &opts, false);
        assert!(url.starts_with("https://secure.gravatar.com/avatar/"), "{url}");
    }

    #[test]
    fn empty_email_still_yields_url() {
        assert_eq!(
            avatar_url("", &AvatarOptions::default(), false),
            "http://www.gravatar.com/avatar/d41d8cd98f00b204e9800998ecf8427e?s=80&d=&r=g"
        );
    }

    #[test]
    fn all_options_together() {
        let opts = AvatarOptions {
            size: 200,
            default_image: DefaultImage::Retro,
            force_default: true,
            rating: Rating::R,
            force_secure: true,
            ..AvatarOptions::default()
        };
        assert_eq!(
            avatar_url(" Test@Example.COM ", &opts, false),
            "https://secure.gravatar.com/avatar/55502f40dc8b7c769880b10874abc9d0?s=200&d=retro&f=y&r=r"
        );
    }
}
