//! Cache module for correlation state storage
//!
//! Holds pending verification requests between the authorization redirect
//! and the provider callback. Entries are bounded by a TTL and a capacity
//! cap so abandoned flows cannot grow the store without limit.

pub mod correlation_store;

#[cfg(test)]
mod tests;

pub use correlation_store::{
    InMemoryCorrelationStore, DEFAULT_CAPACITY, DEFAULT_TTL_SECONDS,
};
