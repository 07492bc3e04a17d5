//! Scheme and subdomain selection.

/// Transport the avatar is requested over. Scheme and subdomain always pair:
/// `http` with `www`, `https` with `secure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Plain,
    Secure,
}

impl Transport {
    /// Secure when forced by the caller or when the embedding request is
    /// already served over a secure connection.
    pub fn resolve(force_secure: bool, secure_context: bool) -> Self {
        if force_secure || secure_context {
            Transport::Secure
        } else {
            Transport::Plain
        }
    }

    pub fn scheme(self) -> &'static str {
        match self {
            Transport::Plain => "http",
            Transport::Secure => "https",
        }
    }

    pub fn subdomain(self) -> &'static str {
        match self {
            Transport::Plain => "www",
            Transport::Secure => "secure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_truth_table() {
        assert_eq!(Transport::resolve(false, false), Transport::Plain);
        assert_eq!(Transport::resolve(true, false), Transport::Secure);
        assert_eq!(Transport::resolve(false, true), Transport::Secure);
        assert_eq!(Transport::resolve(true, true), Transport::Secure);
    }

    #[test]
    fn scheme_and_subdomain_pair() {
        assert_eq!(
            (Transport::Plain.scheme(), Transport::Plain.subdomain()),
            ("http", "www")
        );
        assert_eq!(
            (Transport::Secure.scheme(), Transport::Secure.subdomain()),
            ("https", "secure")
        );
    }
}
