//! Animal domain entity
//!
//! An animal species offered for adoption (e.g. dog, cat).

/// An animal as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub id: i32,
    pub name: String,
}
