use crate::auth::repo_types::User;

impl User {
    /// Find a user by (already normalized) email in a snapshot.
    pub fn find_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
        users.iter().find(|u| u.email == email)
    }

    /// Find a user by id in a snapshot.
    pub fn find_by_id(users: &[User], id: u64) -> Option<&User> {
        users.iter().find(|u| u.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn user(id: u64, email: &str) -> User {
        User {
            id,
            email: email.into(),
            password: "hash".into(),
            name: format!("user {id}"),
            phone: "555".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn lookups_hit_and_miss() {
        let users = vec![user(1, "a@example.com"), user(3, "b@example.com")];
        assert_eq!(User::find_by_email(&users, "b@example.com").map(|u| u.id), Some(3));
        assert!(User::find_by_email(&users, "c@example.com").is_none());
        assert_eq!(User::find_by_id(&users, 1).map(|u| u.email.as_str()), Some("a@example.com"));
        assert!(User::find_by_id(&users, 2).is_none());
    }

    #[test]
    fn user_document_uses_camel_case() {
        let json = serde_json::to_value(user(1, "a@example.com")).unwrap();
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert!(json.get("created_at").is_none());
    }
}
