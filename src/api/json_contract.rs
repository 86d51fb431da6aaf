use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ChartEngineConfig, ZoomWindowPolicy};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisted chart setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub engine: ChartEngineConfig,
    #[serde(default)]
    pub zoom: ZoomWindowPolicy,
}

impl ChartEngineConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// Parses and validates a config JSON document. Missing fields take
    /// their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()
    }
}

impl ChartConfigJsonContractV1 {
    #[must_use]
    pub fn new(engine: ChartEngineConfig, zoom: ZoomWindowPolicy) -> Self {
        Self {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            engine,
            zoom,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config contract: {e}"))
        })?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart config schema version: {}",
                payload.schema_version
            )));
        }
        payload.engine.validate()?;
        payload.zoom.validate()?;
        Ok(payload)
    }
}
