use super::User;

/// Editable mirror of the profile fields shown on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

impl ProfileForm {
    /// Overwrites the form fields with the user's current values.
    pub fn patch_from(&mut self, user: &User) {
        self.name = user.name.clone();
        self.email = user.email.clone();
    }
}
