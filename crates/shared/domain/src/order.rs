//! Order record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::us_date;

/// A piece of work a customer pays an executor for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Order {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "Move furniture"))]
    pub name: String,
    pub description: String,
    /// Start date as MM/DD/YYYY
    #[serde(with = "us_date")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "01/15/2024"))]
    pub start_date: NaiveDate,
    /// End date as MM/DD/YYYY
    #[serde(with = "us_date")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "02/01/2024"))]
    pub end_date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = 5000))]
    pub price: i32,
    /// References `User::id`
    pub customer_id: i32,
    /// References `User::id`
    pub executor_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(start: &str) -> serde_json::Value {
        json!({
            "id": 7,
            "name": "Paint",
            "description": "Paint the fence",
            "start_date": start,
            "end_date": "02/01/2024",
            "price": 1200,
            "customer_id": 1,
            "executor_id": 2
        })
    }

    #[test]
    fn dates_are_read_and_written_as_month_day_year() {
        let order: Order = serde_json::from_value(payload("01/15/2024")).unwrap();
        assert_eq!(order.start_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let back = serde_json::to_value(&order).unwrap();
        assert_eq!(back["start_date"], "01/15/2024");
        assert_eq!(back["end_date"], "02/01/2024");
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = serde_json::from_value::<Order>(payload("2024-01-15")).unwrap_err();
        assert!(err.to_string().contains("MM/DD/YYYY"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut raw = payload("01/15/2024");
        raw["address"] = json!("somewhere");
        assert!(serde_json::from_value::<Order>(raw).is_ok());
    }
}
