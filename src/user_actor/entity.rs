use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{User, UserCreate, UserPatch};

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;

    fn id(&self) -> &String { &self.id }

    fn from_create(id: String, payload: UserCreate) -> Result<Self, FrameworkError> {
        let user = Self {
            id,
            name: payload.name,
            email: payload.email,
            password: payload.password,
        };
        require_fields(&user)?;
        Ok(user)
    }

    /// Applies the patch fields that are present.
    ///
    /// # Fields Updated
    /// - `name`, `email`: must stay non-empty
    /// - `password`: replaced when given, never echoed back (see [`Entity::snapshot`])
    fn on_update(&mut self, patch: UserPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            if password.is_empty() {
                return Err(FrameworkError::Rejected("Password must not be empty".to_string()));
            }
            self.password = Some(password);
        }
        require_fields(self)
    }

    fn snapshot(&self) -> Self {
        self.clone().redacted()
    }
}

fn require_fields(user: &User) -> Result<(), FrameworkError> {
    if user.name.trim().is_empty() {
        return Err(FrameworkError::Rejected("Name required".to_string()));
    }
    if user.email.trim().is_empty() {
        return Err(FrameworkError::Rejected("Email required".to_string()));
    }
    Ok(())
}
