// Skill Tracker - Core Library
// In-memory store of people and their skills, plus the HTTP layer over it

pub mod entities;
pub mod error;
pub mod store;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;

// Re-export commonly used types
pub use entities::{Person, PersonId, Skill, SkillId, SkillLevel};
pub use error::{StoreError, StoreResult};
pub use store::SkillStore;

#[cfg(feature = "server")]
pub use api::router;
#[cfg(feature = "server")]
pub use config::{LogFormat, ServerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
