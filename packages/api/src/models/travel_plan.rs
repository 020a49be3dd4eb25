//! # Travel plan records
//!
//! [`TravelPlan`] is the fixed client-side shape of a record returned by
//! `GET travel/`. The server owns these records; the client only reads them.
//!
//! Plans created from the dashboard carry only a title, so the server may send
//! `null` dates and a `null` or missing description. Dates decode to `None`, a
//! missing description decodes to an empty string. Any other fields the server
//! includes are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A travel plan as listed by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelPlan {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Body of `POST travel/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTravelPlan {
    pub title: String,
}

impl NewTravelPlan {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let json = r#"{
            "id": 7,
            "title": "Paris Trip",
            "start_date": "2025-05-01",
            "end_date": "2025-05-09",
            "description": "Museums",
            "owner": 3,
            "created_at": "2025-01-01T10:00:00Z"
        }"#;
        let plan: TravelPlan = serde_json::from_str(json).unwrap();

        assert_eq!(plan.id, 7);
        assert_eq!(plan.title, "Paris Trip");
        assert_eq!(plan.start_date, NaiveDate::from_ymd_opt(2025, 5, 1));
        assert_eq!(plan.end_date, NaiveDate::from_ymd_opt(2025, 5, 9));
        assert_eq!(plan.description, "Museums");
    }

    #[test]
    fn test_title_only_record() {
        let json = r#"{ "id": 1, "title": "Lisbon", "start_date": null, "end_date": null, "description": null }"#;
        let plan: TravelPlan = serde_json::from_str(json).unwrap();
        assert!(plan.start_date.is_none());
        assert!(plan.end_date.is_none());
        assert_eq!(plan.description, "");

        let json = r#"{ "id": 2, "title": "Rome" }"#;
        let plan: TravelPlan = serde_json::from_str(json).unwrap();
        assert!(plan.start_date.is_none());
        assert_eq!(plan.description, "");
    }

    #[test]
    fn test_new_plan_body() {
        let body = serde_json::to_value(NewTravelPlan::new("Paris Trip")).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Paris Trip" }));
    }
}
