//! Domain layer - token page logic independent of any data source

pub mod actions;
pub mod format;
pub mod layout;
pub mod pair;
pub mod providers;
pub mod token;
