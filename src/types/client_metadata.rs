use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use super::MetadataValue;
use crate::error::ValidationError;

/// Platform that sends no version or device segments.
pub const WEB_PLATFORM: &str = "web";
pub const WEB_VERSION: &str = "0.0.0";

/// Keys of [`ClientMetadata::to_array`], in output order.
pub const FIELD_NAMES: [&str; 8] = [
    "platform",
    "environment",
    "version",
    "majorVersion",
    "minorVersion",
    "patchVersion",
    "deviceOsVersion",
    "device",
];

/// Validated contents of one client metadata header.
///
/// Only obtainable through [`parse`](crate::parse) (or `FromStr`), so the
/// platform and environment are always allow-listed and every non-web value
/// carries its version and device fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMetadata {
    platform: String,
    environment: String,
    version: String,
    major_version: u32,
    minor_version: u32,
    patch_version: u32,
    device_os_version: Option<String>,
    device: Option<String>,
}

/// Version and device segments of a non-web header.
pub(crate) struct NativeFields<'a> {
    pub version: &'a str,
    pub components: [u32; 3],
    pub device_os_version: &'a str,
    pub device: &'a str,
}

impl ClientMetadata {
    pub(crate) fn web(platform: &str, environment: &str) -> Self {
        Self {
            platform: platform.to_owned(),
            environment: environment.to_owned(),
            version: WEB_VERSION.to_owned(),
            major_version: 0,
            minor_version: 0,
            patch_version: 0,
            device_os_version: None,
            device: None,
        }
    }

    pub(crate) fn native(platform: &str, environment: &str, fields: NativeFields<'_>) -> Self {
        let [major, minor, patch] = fields.components;
        Self {
            platform: platform.to_owned(),
            environment: environment.to_owned(),
            version: fields.version.to_owned(),
            major_version: major,
            minor_version: minor,
            patch_version: patch,
            device_os_version: Some(fields.device_os_version.to_owned()),
            device: Some(fields.device.to_owned()),
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn major_version(&self) -> u32 {
        self.major_version
    }

    pub fn minor_version(&self) -> u32 {
        self.minor_version
    }

    pub fn patch_version(&self) -> u32 {
        self.patch_version
    }

    /// `None` only for the web platform.
    pub fn device_os_version(&self) -> Option<&str> {
        self.device_os_version.as_deref()
    }

    /// `None` only for the web platform.
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn is_web(&self) -> bool {
        self.platform == WEB_PLATFORM
    }

    /// All eight fields keyed by their wire names, in [`FIELD_NAMES`] order.
    /// Absent device fields map to [`MetadataValue::Null`].
    pub fn to_array(&self) -> IndexMap<&'static str, MetadataValue> {
        let values: [MetadataValue; 8] = [
            self.platform().into(),
            self.environment().into(),
            self.version().into(),
            self.major_version.into(),
            self.minor_version.into(),
            self.patch_version.into(),
            self.device_os_version().into(),
            self.device().into(),
        ];
        FIELD_NAMES.into_iter().zip(values).collect()
    }

    /// Render back into header form.
    ///
    /// Web metadata becomes `platform;environment;` with the trailing
    /// delimiter. Anything after the environment in the parsed web header
    /// is not kept.
    pub fn to_header_string(&self) -> String {
        match (&self.device_os_version, &self.device) {
            (Some(os), Some(device)) if !self.is_web() => format!(
                "{};{};{};{};{}",
                self.platform, self.environment, self.version, os, device
            ),
            _ => format!("{};{};", self.platform, self.environment),
        }
    }
}

impl fmt::Display for ClientMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header_string())
    }
}

/// Parses against [`default_configuration`](crate::default_configuration).
impl FromStr for ClientMetadata {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(Some(s), None)
    }
}
