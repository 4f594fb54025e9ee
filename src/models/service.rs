use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32, // minutes
    pub category: String,
    /// Staff members able to perform this service.
    #[serde(default)]
    pub staff_ids: Vec<String>,
}

impl Service {
    pub fn performed_by(&self, staff_id: &str) -> bool {
        self.staff_ids.iter().any(|id| id == staff_id)
    }
}
