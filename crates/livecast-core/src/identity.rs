use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Local user identity for one app run.
///
/// The same random string doubles as user id and display name, matching the
/// upstream UIKit convention. Constructed explicitly and passed into the
/// home/room flows; never kept in process-global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalIdentity {
    pub user_id: String,
    pub user_name: String,
}

impl LocalIdentity {
    /// Generate a fresh random identity (32 lowercase hex chars).
    pub fn generate() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self {
            user_id: id.clone(),
            user_name: id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identities_differ() {
        let a = LocalIdentity::generate();
        let b = LocalIdentity::generate();
        assert_ne!(a.user_id, b.user_id);
    }

    #[test]
    fn identity_is_32_lowercase_hex_chars() {
        let id = LocalIdentity::generate();
        assert_eq!(id.user_id.len(), 32);
        assert!(id.user_id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn name_matches_id() {
        let id = LocalIdentity::generate();
        assert_eq!(id.user_id, id.user_name);
    }
}
