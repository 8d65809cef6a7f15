//! The profile ("my info") screen and the texts it shows.

pub mod notices;
pub mod screen;

pub use notices::{Locale, Notices};
pub use screen::{ActionOutcome, ProfileScreen};
