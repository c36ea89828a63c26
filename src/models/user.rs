use serde::{Deserialize, Serialize};

/// Summary of an identity record, embedded read-only in employee
/// representations. The identity provider owns the full record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

impl UserSummary {
    /// "First Last" when either name part is set, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str) -> UserSummary {
        UserSummary {
            id: 1,
            username: "jdoe".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: "jdoe@example.com".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(user("Jane", "Doe").display_name(), "Jane Doe");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        assert_eq!(user("", "").display_name(), "jdoe");
    }

    #[test]
    fn display_name_handles_partial_name() {
        assert_eq!(user("Jane", "").display_name(), "Jane");
    }
}
