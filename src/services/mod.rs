//! Services module - Application services
//!
//! Services own the interfaces the transport layer depends on, so handlers
//! can be tested against substitutes instead of a real store.

pub mod pet;

// Re-exports
pub use pet::{PetApplication, PetService};
