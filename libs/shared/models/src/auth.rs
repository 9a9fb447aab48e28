use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in portal user. There is no account backend, so everything
/// here is derived from the credentials given at sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl User {
    /// Builds a user for `email`, naming them after the email's local part
    /// ("jane.doe@x" becomes "Jane Doe").
    pub fn from_email(id: impl Into<String>, email: &str) -> Self {
        Self {
            id: id.into(),
            name: display_name(email),
            email: email.to_string(),
            signed_in_at: Utc::now(),
        }
    }
}

fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let words: Vec<String> = local
        .split(|c: char| c == '.' || c == '_' || c == '-' || c == '+')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        "User".to_string()
    } else {
        words.join(" ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}
