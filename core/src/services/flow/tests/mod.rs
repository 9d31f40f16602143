//! Tests for the verification flow service

pub mod mocks;
