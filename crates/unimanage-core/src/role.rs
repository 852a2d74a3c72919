//! User roles and role-gated capabilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four roles a signed-in user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Faculty,
    Student,
    DepartmentHead,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Faculty, Role::Student, Role::DepartmentHead];

    /// Wire name (`department_head`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Faculty => "faculty",
            Role::Student => "student",
            Role::DepartmentHead => "department_head",
        }
    }

    /// Human readable name shown under the user's name in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
            Role::DepartmentHead => "Department Head",
        }
    }

    /// Whether this role holds the given capability.
    pub fn can(&self, capability: Capability) -> bool {
        capability.roles().contains(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name one of the four roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "faculty" => Ok(Role::Faculty),
            "student" => Ok(Role::Student),
            "department_head" => Ok(Role::DepartmentHead),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Actions on the exams page that only some roles may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ScheduleExams,
    EnterGrades,
    /// See every student's results instead of only one's own.
    ReviewAllResults,
}

impl Capability {
    /// Roles granted this capability.
    pub fn roles(&self) -> &'static [Role] {
        match self {
            Capability::ScheduleExams | Capability::EnterGrades => &[Role::Admin, Role::Faculty],
            Capability::ReviewAllResults => &[Role::Admin, Role::Faculty, Role::DepartmentHead],
        }
    }
}
