//! Signed-in account display

use super::Describe;
use crate::client::models::AdminProfile;
use crate::output::formatters::or_na;

impl Describe for AdminProfile {
    fn describe(&self) -> Vec<(&'static str, String)> {
        let user = self.user.as_ref();
        vec![
            ("ID", user.map(|u| u.id.to_string()).unwrap_or_else(|| or_na(None))),
            ("Name", or_na(user.and_then(|u| u.name.as_deref()))),
            ("Email", or_na(user.and_then(|u| u.email.as_deref()))),
            ("Kind", or_na(user.and_then(|u| u.kind.as_deref()))),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_fields() {
        let profile: AdminProfile = serde_json::from_value(json!({
            "usuario": {"id": 1, "nome": "Admin", "email": "admin@example.com", "tipo": "admin"}
        }))
        .unwrap();

        let fields = profile.describe();
        assert_eq!(fields[1], ("Name", "Admin".to_string()));
        assert_eq!(fields[3], ("Kind", "admin".to_string()));
    }

    #[test]
    fn test_empty_profile() {
        let fields = AdminProfile::default().describe();
        assert!(fields.iter().all(|(_, value)| value == "N/A"));
    }
}
