//! Client side of the conditions database (CCDB).
//!
//! [`ConditionsStore`] is the seam the upload pipeline talks to. [`HttpStore`]
//! speaks the CCDB REST layout; [`MemoryStore`] keeps everything in process.

mod config;
pub use config::CcdbConfig;

mod errors;
pub use errors::CcdbError;

mod http;
pub use http::HttpStore;

mod memory;
pub use memory::{MemoryStore, StoredObject};

mod store;
pub use store::ConditionsStore;
