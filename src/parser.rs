use crate::config::{default_configuration, Configuration};
use crate::error::ValidationError;
use crate::helpers::{segment, version_components};
use crate::types::{ClientMetadata, NativeFields, WEB_PLATFORM};

const DELIMITER: char = ';';

/// Parse and validate a raw client metadata header.
///
/// Segments are read in the order `platform;environment;version;os-version;device`
/// and the first failing check is returned. For the web platform only the
/// first two segments are read. `config` falls back to
/// [`default_configuration`] when `None`.
pub fn parse(
    header: Option<&str>,
    config: Option<&Configuration>,
) -> Result<ClientMetadata, ValidationError> {
    match config {
        Some(config) => parse_with(header, config),
        None => parse_with(header, &default_configuration()),
    }
}

fn parse_with(header: Option<&str>, config: &Configuration) -> Result<ClientMetadata, ValidationError> {
    let result = validate(header, config);
    match &result {
        Ok(metadata) => tracing::trace!(
            platform = metadata.platform(),
            environment = metadata.environment(),
            "parsed client metadata header"
        ),
        Err(error) => tracing::debug!(
            header_name = config.header_name(),
            %error,
            "rejected client metadata header"
        ),
    }
    result
}

fn validate(header: Option<&str>, config: &Configuration) -> Result<ClientMetadata, ValidationError> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => {
            return Err(ValidationError::MissingHeader {
                header_name: config.header_name().to_owned(),
            })
        }
    };
    let segments: Vec<&str> = header.split(DELIMITER).collect();

    let platform = segment(&segments, 0)
        .filter(|p| config.allows_platform(p))
        .ok_or_else(|| ValidationError::UnsupportedPlatform {
            allowed: config.platforms().to_vec(),
        })?;

    let environment = segment(&segments, 1)
        .filter(|e| config.allows_environment(e))
        .ok_or_else(|| ValidationError::UnsupportedEnvironment {
            allowed: config.environments().to_vec(),
        })?;

    if platform == WEB_PLATFORM {
        return Ok(ClientMetadata::web(platform, environment));
    }

    let version = segment(&segments, 2).ok_or(ValidationError::MissingVersion)?;
    let device_os_version = segment(&segments, 3).ok_or(ValidationError::MissingDeviceOsVersion)?;
    let device = segment(&segments, 4).ok_or(ValidationError::MissingDevice)?;

    Ok(ClientMetadata::native(
        platform,
        environment,
        NativeFields {
            version,
            components: version_components(version),
            device_os_version,
            device,
        },
    ))
}

/// Parser bound to one [`Configuration`].
///
/// Holds no state besides the configuration, so a single instance can be
/// shared across threads and requests.
#[derive(Debug, Clone, Default)]
pub struct HeaderParser {
    config: Configuration,
}

impl HeaderParser {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    pub fn parse(&self, header: Option<&str>) -> Result<ClientMetadata, ValidationError> {
        parse_with(header, &self.config)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn header_name(&self) -> &str {
        self.config.header_name()
    }
}
