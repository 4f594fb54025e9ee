//! Customers, services and staff: lookups, edits and screen-style searches.

use crate::errors::{AppError, AppResult};
use crate::models::customer::Customer;
use crate::models::service::Service;
use crate::models::staff::StaffMember;

#[derive(Debug, Default, Clone)]
pub struct Directory {
    pub customers: Vec<Customer>,
    pub services: Vec<Service>,
    pub staff: Vec<StaffMember>,
}

/// Shared behaviour of the three record kinds kept in the directory.
pub trait Record {
    const KIND: &'static str;
    fn id(&self) -> &str;
}

impl Record for Customer {
    const KIND: &'static str = "Customer";
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Service {
    const KIND: &'static str = "Service";
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for StaffMember {
    const KIND: &'static str = "Staff member";
    fn id(&self) -> &str {
        &self.id
    }
}

fn find<'a, T: Record>(items: &'a [T], id: &str) -> AppResult<&'a T> {
    items
        .iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| AppError::not_found(T::KIND, id))
}

fn insert<T: Record>(items: &mut Vec<T>, item: T) -> AppResult<()> {
    if items.iter().any(|r| r.id() == item.id()) {
        return Err(AppError::Validation(format!(
            "{} with id '{}' already exists",
            T::KIND,
            item.id()
        )));
    }
    items.push(item);
    Ok(())
}

fn replace<T: Record>(items: &mut [T], item: T) -> AppResult<()> {
    let slot = items
        .iter_mut()
        .find(|r| r.id() == item.id())
        .ok_or_else(|| AppError::not_found(T::KIND, item.id()))?;
    *slot = item;
    Ok(())
}

fn remove<T: Record>(items: &mut Vec<T>, id: &str) -> AppResult<T> {
    let idx = items
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| AppError::not_found(T::KIND, id))?;
    Ok(items.remove(idx))
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl Directory {
    pub fn customer(&self, id: &str) -> AppResult<&Customer> {
        find(&self.customers, id)
    }

    pub fn service(&self, id: &str) -> AppResult<&Service> {
        find(&self.services, id)
    }

    pub fn staff_member(&self, id: &str) -> AppResult<&StaffMember> {
        find(&self.staff, id)
    }

    pub fn add_customer(&mut self, c: Customer) -> AppResult<()> {
        insert(&mut self.customers, c)
    }

    pub fn add_service(&mut self, s: Service) -> AppResult<()> {
        insert(&mut self.services, s)
    }

    pub fn add_staff(&mut self, m: StaffMember) -> AppResult<()> {
        insert(&mut self.staff, m)
    }

    pub fn update_customer(&mut self, c: Customer) -> AppResult<()> {
        replace(&mut self.customers, c)
    }

    pub fn update_service(&mut self, s: Service) -> AppResult<()> {
        replace(&mut self.services, s)
    }

    pub fn update_staff(&mut self, m: StaffMember) -> AppResult<()> {
        replace(&mut self.staff, m)
    }

    pub fn remove_customer(&mut self, id: &str) -> AppResult<Customer> {
        remove(&mut self.customers, id)
    }

    pub fn remove_service(&mut self, id: &str) -> AppResult<Service> {
        remove(&mut self.services, id)
    }

    pub fn remove_staff(&mut self, id: &str) -> AppResult<StaffMember> {
        remove(&mut self.staff, id)
    }

    /// Record on both sides that `staff_id` performs `service_id`.
    /// Unknown ids on either side are ignored.
    pub fn link(&mut self, service_id: &str, staff_id: &str) {
        if let Some(s) = self.services.iter_mut().find(|s| s.id == service_id)
            && !s.staff_ids.iter().any(|id| id == staff_id)
        {
            s.staff_ids.push(staff_id.to_string());
        }
        if let Some(m) = self.staff.iter_mut().find(|m| m.id == staff_id)
            && !m.service_ids.iter().any(|id| id == service_id)
        {
            m.service_ids.push(service_id.to_string());
        }
    }

    /// Drop every reference to a removed staff member from the services.
    pub fn unlink_staff(&mut self, staff_id: &str) {
        for s in &mut self.services {
            s.staff_ids.retain(|id| id != staff_id);
        }
    }

    /// Drop every reference to a removed service from the staff.
    pub fn unlink_service(&mut self, service_id: &str) {
        for m in &mut self.staff {
            m.service_ids.retain(|id| id != service_id);
        }
    }

    /// Name or email (case-insensitive), or phone (verbatim substring).
    pub fn search_customers(&self, query: &str) -> Vec<&Customer> {
        let q = query.to_lowercase();
        self.customers
            .iter()
            .filter(|c| contains_ci(&c.name, &q) || contains_ci(&c.email, &q) || c.phone.contains(query))
            .collect()
    }

    /// Name or description match, restricted to `category` unless it is `all`.
    pub fn search_services(&self, query: &str, category: &str) -> Vec<&Service> {
        let q = query.to_lowercase();
        self.services
            .iter()
            .filter(|s| contains_ci(&s.name, &q) || contains_ci(&s.description, &q))
            .filter(|s| category.eq_ignore_ascii_case("all") || s.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Name or position match, restricted to positions containing `position`
    /// unless it is `all`.
    pub fn search_staff(&self, query: &str, position: &str) -> Vec<&StaffMember> {
        let q = query.to_lowercase();
        let p = position.to_lowercase();
        self.staff
            .iter()
            .filter(|m| contains_ci(&m.name, &q) || contains_ci(&m.position, &q))
            .filter(|m| p == "all" || contains_ci(&m.position, &p))
            .collect()
    }

    /// Distinct service categories, first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for s in &self.services {
            if !out.contains(&s.category.as_str()) {
                out.push(&s.category);
            }
        }
        out
    }

    /// Distinct first words of staff positions, lowercased.
    pub fn positions(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for m in &self.staff {
            let first = m.position.split(' ').next().unwrap_or("").to_lowercase();
            if !first.is_empty() && !out.contains(&first) {
                out.push(first);
            }
        }
        out
    }
}
