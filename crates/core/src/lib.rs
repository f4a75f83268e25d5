//! Domain building blocks shared by the planet service crates.
//!
//! Holds the error taxonomy, identifier and timestamp types, the required-field
//! validator, and the search/pagination engine. Nothing here touches I/O.

pub mod error;
pub mod pagination;
pub mod search;
pub mod types;
pub mod validation;
