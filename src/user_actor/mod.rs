//! Store rules for the signed-in user's profile when served by the local backend.

pub mod entity;
