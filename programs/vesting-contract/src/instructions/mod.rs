pub mod initialize;
pub mod fund;
pub mod claim;
pub mod revoke;
pub mod emit_quote;

pub use initialize::*;
pub use fund::*;
pub use claim::*;
pub use revoke::*;
pub use emit_quote::*;
