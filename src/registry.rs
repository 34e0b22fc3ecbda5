use tracing::{info, instrument, warn};

use crate::domain::{Employee, EmployeeId, Person, Role, User, UserId};
use crate::error::RegistryError;

/// Owned store of every registered user and employee.
///
/// Both collections are append-only and kept in registration order; the
/// email is unique within each of them.
#[derive(Debug, Default)]
pub struct Registry {
    users: Vec<User>,
    employees: Vec<Employee>,
    next_user_id: u64,
    next_employee_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user unless one with the same email already exists.
    #[instrument(skip(self, phone))]
    pub fn register_user(&mut self, name: &str, email: &str, phone: &str) -> Result<UserId, RegistryError> {
        if self.users.iter().any(|user| user.person.email == email) {
            warn!("User already registered");
            return Err(RegistryError::DuplicateEmail {
                kind: "User",
                email: email.to_string(),
            });
        }

        self.next_user_id += 1;
        let id = format!("user_{}", self.next_user_id);
        self.users.push(User::new(id.clone(), Person::new(name, email, phone)));
        info!(user_id = %id, "User registered");
        Ok(id)
    }

    /// Registers an employee unless one with the same email already exists.
    #[instrument(skip(self, phone, role), fields(role = %role.as_ref()))]
    pub fn register_employee(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        role: impl AsRef<str>,
        salary: f64,
    ) -> Result<EmployeeId, RegistryError> {
        if self.employees.iter().any(|employee| employee.person.email == email) {
            warn!("Employee already registered");
            return Err(RegistryError::DuplicateEmail {
                kind: "Employee",
                email: email.to_string(),
            });
        }

        self.next_employee_id += 1;
        let id = format!("employee_{}", self.next_employee_id);
        let role = Role::from(role.as_ref());
        self.employees
            .push(Employee::new(id.clone(), Person::new(name, email, phone), role, salary));
        info!(employee_id = %id, "Employee registered");
        Ok(id)
    }

    pub fn user(&self, id: &str) -> Result<&User, RegistryError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or_else(|| RegistryError::UserNotFound(id.to_string()))
    }

    pub fn user_mut(&mut self, id: &str) -> Result<&mut User, RegistryError> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| RegistryError::UserNotFound(id.to_string()))
    }

    pub fn employee(&self, id: &str) -> Result<&Employee, RegistryError> {
        self.employees
            .iter()
            .find(|employee| employee.id == id)
            .ok_or_else(|| RegistryError::EmployeeNotFound(id.to_string()))
    }

    pub fn employee_mut(&mut self, id: &str) -> Result<&mut Employee, RegistryError> {
        self.employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| RegistryError::EmployeeNotFound(id.to_string()))
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.person.email == email)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }
}
