pub mod admin;
pub mod buy;
pub mod initialize;

pub use admin::*;
pub use buy::*;
pub use initialize::*;
