use crate::points::aggregate;
use crate::points::extractors::ValidatedPoints;
use crate::points::responses::SummarizePointsResponse;
use axum::response::Json;

#[axum::debug_handler]
pub async fn summarize(ValidatedPoints(points): ValidatedPoints) -> Json<SummarizePointsResponse> {
    let summary = aggregate::summarize(&points);
    tracing::debug!(points = points.count(), ?summary, "Summarized points.");
    Json(SummarizePointsResponse::success(points.count(), summary))
}
