use serde::{Deserialize, Serialize};
use std::fmt;

/// Short hex id attached to each request's log span.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Opaque, client-generated conversation key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_length() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
    }

    #[test]
    fn correlation_id_is_hex() {
        let cid = new_correlation_id();
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_id_keeps_client_value() {
        let sid = SessionId::new("9b2f7c1e-browser-tab");
        assert_eq!(sid.as_str(), "9b2f7c1e-browser-tab");
        assert_eq!(sid.to_string(), "9b2f7c1e-browser-tab");
    }

    #[test]
    fn session_id_from_str_and_string_agree() {
        let a = SessionId::from("abc");
        let b = SessionId::from(String::from("abc"));
        assert_eq!(a, b);
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let sid = SessionId::new("abc");
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sid);
    }

    #[test]
    fn session_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SessionId::new("one"));
        set.insert(SessionId::new("one"));
        set.insert(SessionId::new("two"));
        assert_eq!(set.len(), 2);
    }
}
