//! Repository Layer
//!
//! Document store abstraction and the in-memory implementation.

mod memory_store;
mod traits;


pub use memory_store::MemoryStore;
pub use traits::DocumentStore;
