//! Opaque correlation state generation.

use uuid::Uuid;

/// Generates an opaque correlation state token.
///
/// Used when the caller supplies no state of its own. UUID v4 gives
/// negligible collision probability and is unguessable enough to serve
/// as the correlation secret between redirect and callback.
pub fn generate_state() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_states_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_state()));
        }
    }

    #[test]
    fn test_generated_state_is_nonempty_and_opaque() {
        let state = generate_state();
        assert!(!state.is_empty());
        // UUID v4 text form
        assert_eq!(state.len(), 36);
    }
}
