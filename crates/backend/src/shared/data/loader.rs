use std::path::Path;

use contracts::records::sales_record::parse_date;
use contracts::records::SalesRecord;

use super::error::DataError;

/// Map a raw feed header to its canonical name.
fn canonical_header(header: &str) -> &str {
    match header.trim() {
        "Postal Code" => "PostalCode",
        "Sub-Category" => "SubCategory",
        h => h,
    }
}

/// Parse the superstore CSV feed into sales records.
///
/// Rows with unparseable dates or measures are skipped with a warning
/// rather than aborting the whole load; the engine downstream assumes
/// well-typed input.
pub fn parse_csv(csv_text: &str) -> Result<Vec<SalesRecord>, DataError> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping malformed CSV record: {}", e);
                skipped += 1;
                continue;
            }
        };

        match record_from_row(&headers, &row) {
            Some(record) => records.push(record),
            None => {
                tracing::warn!("Skipping CSV row {}: missing or unparseable fields", row_no + 2);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} of {} CSV rows", skipped, records.len() + skipped);
    }

    Ok(records)
}

/// Load and parse a CSV export from disk.
pub fn load_csv_file(path: &Path) -> Result<Vec<SalesRecord>, DataError> {
    let text = std::fs::read_to_string(path)?;
    parse_csv(&text)
}

fn record_from_row(headers: &csv::StringRecord, row: &csv::StringRecord) -> Option<SalesRecord> {
    // Field lookup by canonical header name (case-insensitive).
    let get = |name: &str| -> Option<&str> {
        headers
            .iter()
            .position(|h| canonical_header(h).eq_ignore_ascii_case(name))
            .and_then(|i| row.get(i))
            .map(str::trim)
    };
    let text = |name: &str| get(name).unwrap_or("").to_string();
    let number = |name: &str| -> Option<f64> {
        match get(name).unwrap_or("") {
            "" => Some(0.0),
            v => v.parse::<f64>().ok(),
        }
    };

    Some(SalesRecord {
        no: number("No")? as u32,
        row_id: number("RowID")? as u32,
        order_id: text("OrderID"),
        order_date: parse_date(get("OrderDate")?)?,
        ship_date: parse_date(get("ShipDate")?)?,
        ship_mode: text("ShipMode"),
        customer_id: text("CustomerID"),
        customer_name: text("CustomerName"),
        segment: text("Segment"),
        country: text("Country"),
        city: text("City"),
        state: text("State"),
        postal_code: text("PostalCode"),
        region: text("Region"),
        product_id: text("ProductID"),
        category: text("Category"),
        sub_category: text("SubCategory"),
        product_name: text("ProductName"),
        sales: number("Sales")?,
        quantity: number("Quantity")? as u32,
        discount: number("Discount")?,
        profit: number("Profit")?,
    })
}
