use std::fmt;

/// A client currently associated with the access point.
///
/// The identifier is the text the status table lists for the client (a MAC address on
/// every firmware seen so far), with surrounding whitespace trimmed. Empty cells never
/// become records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceRecord(String);

impl DeviceRecord {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DeviceRecord {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DeviceRecord {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<&str> for DeviceRecord {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
