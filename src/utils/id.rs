use uuid::Uuid;

/// Short random identifier: first 8 hex digits of a v4 UUID.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
