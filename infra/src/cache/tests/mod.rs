//! Tests for cache implementations
