use serde::Serialize;

/// One value of [`ClientMetadata::to_array`](super::ClientMetadata::to_array).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(u32),
    Null,
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<u32> for MetadataValue {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<Option<&str>> for MetadataValue {
    fn from(s: Option<&str>) -> Self {
        s.map(Self::from).unwrap_or(Self::Null)
    }
}
