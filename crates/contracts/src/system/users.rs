use serde::{Deserialize, Serialize};

/// Account attached to orders and activity entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    /// "First Last", falling back to the user name
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.user_name.clone().unwrap_or_default()
        } else {
            full
        }
    }

    /// Avatar fallback: first letters of first and last name
    pub fn initials(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_name_and_initials() {
        let user = User {
            first_name: Some("grace".into()),
            last_name: Some("Hopper".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "grace Hopper");
        assert_eq!(user.initials(), "GH");
    }

    #[test]
    fn test_display_name_falls_back_to_user_name() {
        let user = User {
            user_name: Some("admin".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "admin");
        assert_eq!(user.initials(), "");
    }
}
