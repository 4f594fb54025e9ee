use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }
}

/// Identity of whoever is issuing a command.
///
/// Admins may omit the id; staff and customers are always bound to
/// their own staff/customer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub role: Role,
    pub id: Option<String>,
}

impl Caller {
    pub fn admin() -> Self {
        Self {
            role: Role::Admin,
            id: None,
        }
    }

    pub fn staff(id: impl Into<String>) -> Self {
        Self {
            role: Role::Staff,
            id: Some(id.into()),
        }
    }

    pub fn customer(id: impl Into<String>) -> Self {
        Self {
            role: Role::Customer,
            id: Some(id.into()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_staff(&self) -> bool {
        self.role == Role::Staff
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }

    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}
