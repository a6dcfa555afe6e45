use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{PanelConfig, PanelSnapshot};

pub const PANEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;
pub const PANEL_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PanelSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PanelConfig,
}

impl PanelSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = PanelSnapshotJsonContractV1 {
            schema_version: PANEL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PanelSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PanelSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != PANEL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl PanelConfig {
    pub fn to_json_contract_v1_pretty(self) -> ChartResult<String> {
        let payload = PanelConfigJsonContractV1 {
            schema_version: PANEL_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config or the versioned envelope, then validates.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let config = match serde_json::from_str::<PanelConfig>(input) {
            Ok(config) => config,
            Err(_) => {
                let payload: PanelConfigJsonContractV1 =
                    serde_json::from_str(input).map_err(|e| {
                        ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
                    })?;
                if payload.schema_version != PANEL_CONFIG_JSON_SCHEMA_V1 {
                    return Err(ChartError::InvalidData(format!(
                        "unsupported config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
        };
        config.validate()
    }
}
