use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::store::Record;

/// User record in the users collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,                    // assigned by next_id
    pub email: String,              // trimmed, lowercased, unique
    pub password: String,           // Argon2 PHC string, never the plain text
    pub name: String,
    pub phone: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Record for User {
    fn id(&self) -> u64 {
        self.id
    }
}
