use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_HEADER_NAME: &str = "X-Client-Metadata";
pub const DEFAULT_PLATFORMS: [&str; 3] = ["ios", "android", "web"];
pub const DEFAULT_ENVIRONMENTS: [&str; 3] = ["local", "staging", "production"];

/// Allow-lists and header name the parser validates against.
///
/// Read-only once built. Loaded documents may omit any field; omitted fields
/// take the value from [`default_configuration`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    header_name: String,
    platforms: Vec<String>,
    environments: Vec<String>,
}

/// The configuration used when the caller supplies none.
pub fn default_configuration() -> Configuration {
    Configuration {
        header_name: DEFAULT_HEADER_NAME.to_owned(),
        platforms: DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect(),
        environments: DEFAULT_ENVIRONMENTS.iter().map(|e| e.to_string()).collect(),
    }
}

impl Default for Configuration {
    fn default() -> Self {
        default_configuration()
    }
}

impl Configuration {
    pub fn new(
        header_name: impl Into<String>,
        platforms: impl IntoIterator<Item = impl Into<String>>,
        environments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        Self {
            header_name: header_name.into(),
            platforms: platforms.into_iter().map(Into::into).collect(),
            environments: environments.into_iter().map(Into::into).collect(),
        }
        .validated()
    }

    /// Parse a YAML document such as:
    ///
    /// ```yaml
    /// header_name: X-App-Info
    /// platforms: [ios, android, web]
    /// environments: [local, production]
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validated()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading client metadata configuration");
        Self::from_yaml_str(&content)
    }

    fn validated(self) -> Result<Self> {
        if self.platforms.is_empty() {
            return Err(Error::InvalidConfiguration("no platforms are allowed"));
        }
        if self.environments.is_empty() {
            return Err(Error::InvalidConfiguration("no environments are allowed"));
        }
        if self.platforms.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::InvalidConfiguration("platforms must not be blank"));
        }
        if self.environments.iter().any(|e| e.trim().is_empty()) {
            return Err(Error::InvalidConfiguration("environments must not be blank"));
        }
        Ok(self)
    }

    /// Name of the HTTP header carrying the metadata. Only used in messages.
    pub fn header_name(&self) -> &str {
        &self.header_name
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn environments(&self) -> &[String] {
        &self.environments
    }

    pub fn allows_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    pub fn allows_environment(&self, environment: &str) -> bool {
        self.environments.iter().any(|e| e == environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_includes_web() {
        let config = default_configuration();
        assert!(config.allows_platform("web"));
        assert!(config.allows_environment("production"));
        assert_eq!(config.header_name(), DEFAULT_HEADER_NAME);
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn yaml_fills_missing_fields_from_default() {
        let config = Configuration::from_yaml_str("platforms: [ios, web]\n").unwrap();
        assert_eq!(config.platforms(), ["ios", "web"]);
        assert!(!config.allows_platform("android"));
        assert_eq!(config.environments(), default_configuration().environments());
        assert_eq!(config.header_name(), DEFAULT_HEADER_NAME);
    }

    #[test]
    fn empty_allow_list_is_rejected() {
        let err = Configuration::from_yaml_str("environments: []\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = Configuration::new("X-Test", Vec::<String>::new(), ["local"]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn blank_allow_list_entry_is_rejected() {
        let err = Configuration::from_yaml_str("platforms: [\"\", ios]\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = Configuration::from_yaml_str("environments: [local, \"  \"]\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = Configuration::new("X-Test", ["ios"], ["", "local"]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let config = default_configuration();
        assert!(!config.allows_platform("IOS"));
        assert!(!config.allows_environment(""));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = Configuration::from_yaml_str("platforms: {").unwrap_err();
        assert!(matches!(err, Error::YAML(_)));
    }
}
