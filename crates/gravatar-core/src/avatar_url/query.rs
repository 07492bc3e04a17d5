//! Query string for the avatar endpoint.
//!
//! Parameter order is fixed: `s`, `d`, optional `f=y`, `r`.

use std::borrow::Cow;
use url::form_urlencoded;

use crate::options::AvatarOptions;

/// Value of the `d` parameter: the encoded custom URL when set, otherwise
/// the named policy's code (empty for the Gravatar logo).
pub fn default_image_param(options: &AvatarOptions) -> Cow<'_, str> {
    match options.custom_default_url() {
        Some(url) => Cow::Owned(encode_component(url)),
        None => Cow::Borrowed(options.default_image.code()),
    }
}

/// Form-style percent-encoding (space becomes `+`) for one query value.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Build `s=..&d=..[&f=y]&r=..` without the leading `?`.
pub fn build_query(options: &AvatarOptions) -> String {
    let mut query = format!("s={}&d={}", options.size, default_image_param(options));
    if options.force_default {
        query.push_str("&f=y");
    }
    query.push_str("&r=");
    query.push_str(options.rating.code());
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DefaultImage, Rating};

    #[test]
    fn default_options_query() {
        assert_eq!(build_query(&AvatarOptions::default()), "s=80&d=&r=g");
    }

    #[test]
    fn force_default_sits_between_d_and_r() {
        let opts = AvatarOptions {
            size: 32,
            default_image: DefaultImage::Wavatar,
            force_default: true,
            rating: Rating::X,
            ..AvatarOptions::default()
        };
        assert_eq!(build_query(&opts), "s=32&d=wavatar&f=y&r=x");
    }

    #[test]
    fn custom_url_is_encoded_and_replaces_code() {
        let opts = AvatarOptions {
            default_image: DefaultImage::Identicon,
            default_image_url: Some("https://example.com/img/no avatar.png?x=1&y=2".to_string()),
            ..AvatarOptions::default()
        };
        assert_eq!(
            default_image_param(&opts),
            "https%3A%2F%2Fexample.com%2Fimg%2Fno+avatar.png%3Fx%3D1%26y%3D2"
        );
        assert!(!build_query(&opts).contains("identicon"));
    }

    #[test]
    fn relative_custom_url_is_encoded() {
        assert_eq!(
            encode_component("/images/no-gravatar.png"),
            "%2Fimages%2Fno-gravatar.png"
        );
    }

    #[test]
    fn form_encoding_escapes_punctuation_with_uppercase_hex() {
        assert_eq!(
            encode_component("http://example.com/a(1)!.png"),
            "http%3A%2F%2Fexample.com%2Fa%281%29%21.png"
        );
        assert_eq!(encode_component("a*b-c_d.e~f"), "a*b-c_d.e%7Ef");
    }

    #[test]
    fn size_is_passed_through_verbatim() {
        let zero = AvatarOptions {
            size: 0,
            ..AvatarOptions::default()
        };
        let negative = AvatarOptions {
            size: -5,
            ..AvatarOptions::default()
        };
        assert!(build_query(&zero).starts_with("s=0&"));
        assert!(build_query(&negative).starts_with("s=-5&"));
    }
}
