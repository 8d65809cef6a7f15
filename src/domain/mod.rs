pub mod user;
pub mod form;

pub use user::*;
pub use form::*;
