//! Data transfer objects for the HTTP surface.

pub mod verification;

pub use verification::{CallbackQuery, InitiateQuery};
