//! Local infrastructure for the Surplus client: filesystem paths, atomic
//! TOML storage, session stores, configuration loading and the fixture
//! browse source.

pub mod config_service;
pub mod fixture_source;
pub mod paths;
pub mod session_store;
pub mod storage;

pub use config_service::ConfigService;
pub use fixture_source::FixtureDonationSource;
pub use paths::SurplusPaths;
pub use session_store::{FileSessionStore, MemorySessionStore};
