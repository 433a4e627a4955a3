//! Settings structures.

use propmap_core::{MapperOptions, TelemetryConfig};
use serde::{Deserialize, Serialize};

/// Root settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropmapConfig {
    /// Mapper behavior.
    #[serde(default)]
    pub mapper: MapperOptions,

    /// Subscriber setup.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
