use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub error: bool,
}

impl HealthCheckResponse {
    pub fn healthy() -> Self {
        Self { error: false }
    }
}
