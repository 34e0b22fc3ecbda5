use std::fmt;

use tracing::info;

use crate::clients::RoomHandle;
use crate::domain::{Movie, Person, Role, Screening};
use crate::error::EmployeeError;

pub type EmployeeId = String;

/// A member of staff.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: EmployeeId,
    pub person: Person,
    pub salary: f64,
    role: Role,
}

impl Employee {
    pub fn new(id: impl Into<String>, person: Person, role: impl Into<Role>, salary: f64) -> Self {
        Self {
            id: id.into(),
            person,
            salary,
            role: role.into(),
        }
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Replaces the role unconditionally; any role can follow any other.
    pub fn change_role(&mut self, new_role: impl Into<Role>) {
        let previous = std::mem::replace(&mut self.role, new_role.into());
        info!(
            employee = %self.person.name,
            from = %previous,
            to = %self.role,
            "Role changed"
        );
    }

    /// Schedules `movie` in `room`. Only administrators may do this.
    pub fn create_screening(
        &self,
        movie: Movie,
        room: &RoomHandle,
        showtime: impl Into<String>,
    ) -> Result<Screening, EmployeeError> {
        if !self.role.is_administrator() {
            return Err(EmployeeError::PermissionDenied {
                employee: self.person.name.clone(),
                role: self.role.to_string(),
            });
        }
        let screening = Screening::new(movie, room.clone(), showtime);
        info!(employee = %self.person.name, %screening, "Screening created");
        Ok(screening)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.person.name, self.role)
    }
}
