use materials_service::{DEFAULT_LIMIT, MaterialRecord};
use serde::{Deserialize, Serialize};

/// Request payload for /api/materials.
#[derive(Debug, Deserialize)]
pub struct MaterialsRequest {
    /// Chemical system, e.g. `Li-Fe-O`. Takes precedence over `formula`.
    #[serde(default)]
    pub chemsys: Option<String>,
    /// Chemical formula, e.g. `LiFePO4`.
    #[serde(default)]
    pub formula: Option<String>,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Response payload for /api/materials.
#[derive(Debug, Serialize)]
pub struct MaterialsResponse {
    pub data: Vec<MaterialRecord>,
}
