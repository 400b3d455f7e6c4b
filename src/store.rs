use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::types::employee::{Employee, NewEmployee};

/// In-memory employee records. Lives as long as the process.
#[derive(Clone, Default)]
pub struct EmployeeStore {
    records: Arc<DashMap<String, Employee>>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, new: NewEmployee) -> Result<Employee, AppError> {
        let employee = validate(new)?;
        self.records.insert(employee.id.clone(), employee.clone());
        tracing::info!("Stored employee {} ({} total)", employee.id, self.records.len());
        Ok(employee)
    }

    /// All records, ordered by surname then first name.
    pub fn list(&self) -> Vec<Employee> {
        let mut employees: Vec<Employee> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        employees.sort_by(|a, b| {
            (&a.last_name, &a.first_name, &a.id).cmp(&(&b.last_name, &b.first_name, &b.id))
        });
        employees
    }

    pub fn remove(&self, id: &str) -> Option<Employee> {
        self.records.remove(id).map(|(_, employee)| employee)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(new: NewEmployee) -> Result<Employee, AppError> {
    let required = |value: Option<String>| -> Result<String, AppError> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::BadRequest("All employee fields are required.".to_string()))
    };

    Ok(Employee {
        id: Uuid::new_v4().to_string(),
        first_name: required(new.first_name)?,
        last_name: required(new.last_name)?,
        phone: required(new.phone)?,
        gender: required(new.gender)?,
        position: required(new.position)?,
        id_number: required(new.id_number)?,
        email: required(new.email)?,
        image: required(new.image)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(first: &str, last: &str) -> NewEmployee {
        NewEmployee {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            phone: Some("555-0100".to_string()),
            gender: Some("F".to_string()),
            position: Some("Guide".to_string()),
            id_number: Some("ID-1".to_string()),
            email: Some("guide@example.com".to_string()),
            image: Some("https://example.com/a.png".to_string()),
        }
    }

    #[test]
    fn add_list_remove() {
        let store = EmployeeStore::new();
        let b = store.add(complete("Ana", "Silva")).expect("add");
        let a = store.add(complete("Rui", "Costa")).expect("add");

        let listed = store.list();
        assert_eq!(listed, vec![a.clone(), b.clone()]);

        assert_eq!(store.remove(&a.id), Some(a));
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove("missing"), None);
    }

    #[test]
    fn blank_fields_are_rejected() {
        let store = EmployeeStore::new();
        let mut new = complete("Ana", "Silva");
        new.email = Some("   ".to_string());
        assert!(matches!(store.add(new), Err(AppError::BadRequest(_))));

        let mut new = complete("Ana", "Silva");
        new.image = None;
        assert!(store.add(new).is_err());
        assert!(store.is_empty());
    }
}
