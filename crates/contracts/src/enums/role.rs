use serde::{Deserialize, Serialize};

/// Global role of a D.A.D user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can do anything
    Admin,
    /// Supervisor of one or more entities
    Ri,
    /// Project manager, given to a user on first login
    #[default]
    Pm,
    /// Substitute of a project manager, same rights
    Deputy,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Ri => "ri",
            Role::Pm => "pm",
            Role::Deputy => "deputy",
        }
    }

    /// Label shown next to a user
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Ri => "Supervisor",
            Role::Pm => "Project Manager",
            Role::Deputy => "Deputy",
        }
    }

    /// Sort rank: admin first, deputy last
    pub fn rank(&self) -> u8 {
        match self {
            Role::Admin => 0,
            Role::Ri => 1,
            Role::Pm => 2,
            Role::Deputy => 3,
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::Admin, Role::Ri, Role::Pm, Role::Deputy]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(Role::Admin),
            "ri" => Some(Role::Ri),
            "pm" => Some(Role::Pm),
            "deputy" => Some(Role::Deputy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
