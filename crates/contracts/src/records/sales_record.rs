use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sales transaction line from the superstore feed.
///
/// Records are read-only inputs: the engine never mutates them, it only
/// consumes `&[SalesRecord]` slices. Field names on the wire follow the
/// feed headers (`OrderID`, `Sub-Category`, ...); measures tolerate both
/// JSON numbers and numeric strings because the remote analytics API is
/// inconsistent about quoting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "No", deserialize_with = "flexible::u32_field", default)]
    pub no: u32,
    #[serde(rename = "RowID", deserialize_with = "flexible::u32_field", default)]
    pub row_id: u32,
    #[serde(rename = "OrderID", default)]
    pub order_id: String,
    #[serde(rename = "OrderDate", with = "flexible::date")]
    pub order_date: NaiveDate,
    #[serde(rename = "ShipDate", with = "flexible::date")]
    pub ship_date: NaiveDate,
    #[serde(rename = "ShipMode", default)]
    pub ship_mode: String,
    #[serde(rename = "CustomerID", default)]
    pub customer_id: String,
    #[serde(rename = "CustomerName", default)]
    pub customer_name: String,
    #[serde(rename = "Segment", default)]
    pub segment: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "City", default)]
    pub city: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "PostalCode", alias = "Postal Code", default)]
    pub postal_code: String,
    #[serde(rename = "Region", default)]
    pub region: String,
    #[serde(rename = "ProductID", default)]
    pub product_id: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "SubCategory", alias = "Sub-Category", default)]
    pub sub_category: String,
    #[serde(rename = "ProductName", default)]
    pub product_name: String,
    #[serde(rename = "Sales", deserialize_with = "flexible::f64_field", default)]
    pub sales: f64,
    #[serde(rename = "Quantity", deserialize_with = "flexible::u32_field", default)]
    pub quantity: u32,
    #[serde(rename = "Discount", deserialize_with = "flexible::f64_field", default)]
    pub discount: f64,
    #[serde(rename = "Profit", deserialize_with = "flexible::f64_field", default)]
    pub profit: f64,
}

impl Default for SalesRecord {
    fn default() -> Self {
        Self {
            no: 0,
            row_id: 0,
            order_id: String::new(),
            order_date: NaiveDate::default(),
            ship_date: NaiveDate::default(),
            ship_mode: String::new(),
            customer_id: String::new(),
            customer_name: String::new(),
            segment: String::new(),
            country: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            region: String::new(),
            product_id: String::new(),
            category: String::new(),
            sub_category: String::new(),
            product_name: String::new(),
            sales: 0.0,
            quantity: 0,
            discount: 0.0,
            profit: 0.0,
        }
    }
}

/// Parse an ISO-like date string. The CSV feed uses `YYYY-MM-DD`, older
/// exports use `M/D/YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .ok()
}

mod flexible {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Num(f64),
        Text(String),
    }

    pub fn f64_field<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Num(n) => Ok(n),
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| de::Error::custom(format!("invalid number {:?}: {}", s, e))),
        }
    }

    pub fn u32_field<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64_field(deserializer).map(|n| n as u32)
    }

    pub mod date {
        use super::*;

        pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.format("%Y-%m-%d").to_string())
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            super::super::parse_date(&s)
                .ok_or_else(|| de::Error::custom(format!("unparseable date {:?}", s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_string_measures() {
        let json = r#"{
            "No": 1, "RowID": "17",
            "OrderID": "CA-2024-1001",
            "OrderDate": "2024-03-15", "ShipDate": "3/18/2024",
            "ShipMode": "Second Class",
            "CustomerID": "AB-100", "CustomerName": "Ana Beltran",
            "Segment": "Consumer",
            "Country": "United States", "City": "Austin", "State": "Texas",
            "Postal Code": "73301", "Region": "Central",
            "ProductID": "FUR-CH-001", "Category": "Furniture",
            "Sub-Category": "Chairs", "ProductName": "Desk Chair",
            "Sales": "261.96", "Quantity": "2", "Discount": 0.2, "Profit": "-12.5"
        }"#;

        let record: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.row_id, 17);
        assert_eq!(record.postal_code, "73301");
        assert_eq!(record.sub_category, "Chairs");
        assert_eq!(record.order_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(record.ship_date, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        assert_eq!(record.sales, 261.96);
        assert_eq!(record.quantity, 2);
        assert_eq!(record.profit, -12.5);
    }

    #[test]
    fn test_serialize_uses_feed_headers() {
        let record = SalesRecord {
            order_id: "CA-1".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["OrderID"], "CA-1");
        assert_eq!(value["SubCategory"], "");
        assert_eq!(value["OrderDate"], "1970-01-01");
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_date("2024-01-05"), Some(expected));
        assert_eq!(parse_date("1/5/2024"), Some(expected));
        assert_eq!(parse_date("2024/01/05"), Some(expected));
        assert_eq!(parse_date("not a date"), None);
    }
}
