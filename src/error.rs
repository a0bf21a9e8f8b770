/// Field order a client is expected to send.
pub const EXPECTED_FORMAT: &str = "platform;environment;version;os-version;device";

/// A header that cannot be turned into [`ClientMetadata`](crate::ClientMetadata).
///
/// Every variant is a bad-request class failure; callers answer it with a
/// `400` and the `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("the {header_name} header is missing")]
    MissingHeader { header_name: String },
    #[error("unsupported platform, expected one of [{}] in format {}", .allowed.join(", "), EXPECTED_FORMAT)]
    UnsupportedPlatform { allowed: Vec<String> },
    #[error("unsupported environment, expected one of [{}] in format {}", .allowed.join(", "), EXPECTED_FORMAT)]
    UnsupportedEnvironment { allowed: Vec<String> },
    #[error("version is missing, expected format {}", EXPECTED_FORMAT)]
    MissingVersion,
    #[error("device os version is missing, expected format {}", EXPECTED_FORMAT)]
    MissingDeviceOsVersion,
    #[error("device is missing, expected format {}", EXPECTED_FORMAT)]
    MissingDevice,
}

impl ValidationError {
    pub fn status_code(&self) -> u16 {
        400
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
