use crate::points::models::Summary;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SummarizePointsResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub result: Summary,
}

impl SummarizePointsResponse {
    pub fn success(count: usize, result: Summary) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: format!("Received {count} points."),
            result,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResponseStatus {
    Success,
}
