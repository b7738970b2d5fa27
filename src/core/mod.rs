//! Core business logic and the collaborator ports it depends on

pub mod clock;
pub mod error;
pub mod id;
pub mod item;
pub mod service;
pub mod statistics;
pub mod store;
pub mod validator;

// Re-export main types for cleaner imports
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CatalogError;
pub use id::{IdGenerator, SequenceIdGenerator};
pub use item::Item;
pub use service::CatalogService;
pub use store::ItemStore;
