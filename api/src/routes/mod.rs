//! Route handlers for the VerifyRelay HTTP surface
//!
//! - `GET /_/health` - liveness probe
//! - `GET /prepStep1` - initiate the verification flow (authorization redirect)
//! - `GET /step2` - provider callback completing the flow

pub mod health;
pub mod verification;

pub use verification::AppState;
