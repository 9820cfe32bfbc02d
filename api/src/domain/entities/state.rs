//! State domain entity
//!
//! A Brazilian federative unit where adopters and animals are located.

/// A state as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: i32,
    pub name: String,
    /// Two-letter abbreviation, e.g. "MG"
    pub initials: String,
}
