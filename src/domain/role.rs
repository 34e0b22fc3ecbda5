use std::fmt;

/// An employee's job.
///
/// Only [`Role::Administrator`] carries extra privileges. Any string that is
/// not one of the known role names is kept verbatim in [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Cashier,
    Cleaning,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Administrator => "Administrator",
            Role::Cashier => "Cashier",
            Role::Cleaning => "Cleaning",
            Role::Other(name) => name,
        }
    }

    pub fn is_administrator(&self) -> bool {
        matches!(self, Role::Administrator)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        match name {
            "Administrator" => Role::Administrator,
            "Cashier" => Role::Cashier,
            "Cleaning" => Role::Cleaning,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Role::from(name.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
