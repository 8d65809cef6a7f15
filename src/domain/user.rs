use serde::{Deserialize, Serialize};

use super::ProfileForm;

/// The signed-in user's profile as the backend reports it.
///
/// The screen keeps a possibly-stale copy of this for display and editing.
/// `password` is only ever sent, never expected back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UserBody")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Wire shape of a user. Backends send the id as `id`, `_id` or both, as a
/// string or a number.
#[derive(Deserialize)]
struct UserBody {
    #[serde(default)]
    id: Option<WireId>,
    #[serde(default, rename = "_id")]
    object_id: Option<WireId>,
    name: String,
    email: String,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(id) => id,
            WireId::Signed(id) => id.to_string(),
            WireId::Unsigned(id) => id.to_string(),
        }
    }
}

impl From<UserBody> for User {
    fn from(body: UserBody) -> Self {
        Self {
            id: body.id.or(body.object_id).map(String::from).unwrap_or_default(),
            name: body.name,
            email: body.email,
            password: body.password,
        }
    }
}

/// Payload for seeding a user into the local backend.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

/// Partial update applied by the local backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Notes
    /// The `id` field is left empty; the backend assigns it.
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: email.into(),
            password: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Copy of this user with the form's fields laid over it.
    pub fn merged_with(&self, form: &ProfileForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            ..self.clone()
        }
    }

    /// Copy of this user carrying a new password.
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self {
            password: Some(password.into()),
            ..self.clone()
        }
    }

    /// Drops the password so it never leaves the store.
    pub fn redacted(mut self) -> Self {
        self.password = None;
        self
    }
}

impl From<&User> for UserPatch {
    fn from(user: &User) -> Self {
        Self {
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            password: user.password.clone(),
        }
    }
}
