use contracts::records::SalesRecord;

use super::error::DataError;
use super::loader;

/// Fetch and parse the CSV feed from a remote URL.
pub async fn fetch_csv(url: &str) -> Result<Vec<SalesRecord>, DataError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(DataError::Status(response.status().as_u16()));
    }
    let text = response.text().await?;
    loader::parse_csv(&text)
}

/// Fetch a JSON array of records from the analytics API.
pub async fn fetch_json(url: &str) -> Result<Vec<SalesRecord>, DataError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(DataError::Status(response.status().as_u16()));
    }
    let records = response.json::<Vec<SalesRecord>>().await?;
    Ok(records)
}
