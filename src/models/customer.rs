use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
    pub total_appointments: u32,
    pub total_spent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
    /// Money paid in advance and not yet consumed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_balance: Option<f64>,
}

impl Customer {
    pub fn new(id: String, name: String, email: String, phone: String, join_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            join_date,
            total_appointments: 0,
            total_spent: 0.0,
            notes: None,
            preferences: Vec::new(),
            advance_balance: None,
        }
    }
}
