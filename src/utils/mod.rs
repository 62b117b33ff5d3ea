use uuid::Uuid;

/// Builds an identifier of the form `<prefix><32 hex chars>` from a fresh
/// random v4 UUID.
pub fn prefixed_token(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}

pub fn unix_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_token_format() {
        let token = prefixed_token("chatcmpl-");
        let hex = token.strip_prefix("chatcmpl-").unwrap();
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_prefixed_tokens_differ() {
        assert_ne!(prefixed_token("x-"), prefixed_token("x-"));
    }

    #[test]
    fn test_unix_timestamp_is_seconds() {
        let now = unix_timestamp();
        // after 2020-01-01 and not in milliseconds
        assert!(now > 1_577_836_800);
        assert!(now < 100_000_000_000);
    }
}
