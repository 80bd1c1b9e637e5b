use url::Url;

/// The service address the original deployment shipped with.
pub const DEFAULT_ENDPOINT: &str = "https://203.161.56.90:3002/api/obfuscate-folder";

/// Environment override for the service address.
pub const ENDPOINT_ENV_VAR: &str = "OBFUSCATOR_ENDPOINT";

/// Resolve the obfuscation service address, honoring the env override.
pub fn obfuscator_endpoint() -> String {
    resolve_endpoint(std::env::var(ENDPOINT_ENV_VAR).ok())
}

/// An override must be an absolute http(s) URL; anything else falls back to
/// the default.
pub fn resolve_endpoint(configured: Option<String>) -> String {
    match configured {
        Some(raw) => match Url::parse(&raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => raw,
            _ => {
                tracing::warn!(
                    "Ignoring invalid {} value {:?}, using the default endpoint",
                    ENDPOINT_ENV_VAR,
                    raw
                );
                DEFAULT_ENDPOINT.to_string()
            }
        },
        None => DEFAULT_ENDPOINT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        assert_eq!(resolve_endpoint(None), DEFAULT_ENDPOINT);
    }

    #[test]
    fn accepts_an_absolute_http_url() {
        let override_url = "http://localhost:3002/api/obfuscate-folder".to_string();
        assert_eq!(resolve_endpoint(Some(override_url.clone())), override_url);
    }

    #[test]
    fn rejects_non_http_schemes() {
        let configured = Some("file:///etc/passwd".to_string());
        assert_eq!(resolve_endpoint(configured), DEFAULT_ENDPOINT);
    }

    #[test]
    fn rejects_garbage() {
        let configured = Some("not a url at all".to_string());
        assert_eq!(resolve_endpoint(configured), DEFAULT_ENDPOINT);
    }
}
