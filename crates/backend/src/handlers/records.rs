use axum::{extract::Query, Json};
use serde::Deserialize;

use contracts::records::SalesRecord;

use crate::shared::data::store;

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    1000
}

/// Raw record listing for the data-grid view.
pub async fn list(Query(params): Query<ListParams>) -> Json<Vec<SalesRecord>> {
    let dataset = store::get_dataset();
    let limit = params.limit.min(dataset.len());
    Json(dataset[..limit].to_vec())
}
