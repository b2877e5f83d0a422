use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Role tag attached to a session by the API.
///
/// Comparing roles on the client only decides what the UI shows; the API
/// enforces the same rules again on every request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Path a freshly registered account is sent to once the confirmation
    /// screen has been shown.
    pub fn landing_after_register(&self) -> &'static str {
        match self {
            Role::User => "/events",
            Role::Admin | Role::Student => "/",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role tag is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "student" => Ok(Role::Student),
            "user" => Ok(Role::User),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags_case_insensitively() {
        assert_eq!(Role::from_str("admin"), Ok(Role::Admin));
        assert_eq!(Role::from_str(" Student "), Ok(Role::Student));
        assert_eq!(Role::from_str("USER"), Ok(Role::User));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!(Role::from_str("root"), Err(UnknownRole("root".to_string())));
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn display_matches_wire_format() {
        for role in [Role::Admin, Role::Student, Role::User] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }

    #[test]
    fn register_landing_depends_on_role() {
        assert_eq!(Role::User.landing_after_register(), "/events");
        assert_eq!(Role::Admin.landing_after_register(), "/");
        assert_eq!(Role::Student.landing_after_register(), "/");
    }
}
