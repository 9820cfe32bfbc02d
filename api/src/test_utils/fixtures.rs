//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Animal, State};

/// Create a test animal with default values
pub fn test_animal() -> Animal {
    test_animal_with(1, "Cão")
}

/// Create a test animal with a specific id and name
pub fn test_animal_with(id: i32, name: &str) -> Animal {
    Animal {
        id,
        name: name.to_string(),
    }
}

/// A small catalogue of animals in id order
pub fn test_animals() -> Vec<Animal> {
    vec![
        test_animal_with(1, "Cão"),
        test_animal_with(2, "Gato"),
        test_animal_with(3, "Coelho"),
    ]
}

/// Create a test state with default values
pub fn test_state() -> State {
    test_state_with(1, "Minas Gerais", "MG")
}

/// Create a test state with specific values
pub fn test_state_with(id: i32, name: &str, initials: &str) -> State {
    State {
        id,
        name: name.to_string(),
        initials: initials.to_string(),
    }
}
