mod id;
pub use id::AliasId;

mod set;
pub use set::{AliasSet, AliasSetKind};
