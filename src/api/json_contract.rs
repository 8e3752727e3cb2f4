use serde::Serialize;

use crate::error::{ChartError, ChartResult};
use crate::render::CompiledOption;

pub const COMPILED_OPTION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledOptionJsonContractV1<'a> {
    pub schema_version: u32,
    pub option: &'a CompiledOption,
}

impl CompiledOption {
    /// Versioned envelope for hosts that ship the option across a boundary.
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CompiledOptionJsonContractV1 {
            schema_version: COMPILED_OPTION_JSON_SCHEMA_V1,
            option: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize option contract v1: {e}"))
        })
    }
}

/// Extracts the raw option from a v1 envelope, or accepts a bare option
/// object as-is.
pub fn option_value_from_json_compat_str(input: &str) -> ChartResult<serde_json::Value> {
    let mut value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse option json payload: {e}")))?;

    let Some(version) = value.get("schemaVersion").cloned() else {
        return Ok(value);
    };
    if version.as_u64() != Some(u64::from(COMPILED_OPTION_JSON_SCHEMA_V1)) {
        return Err(ChartError::InvalidData(format!(
            "unsupported option schema version: {version}"
        )));
    }
    value
        .get_mut("option")
        .map(serde_json::Value::take)
        .ok_or_else(|| ChartError::InvalidData("option contract is missing `option`".to_owned()))
}
