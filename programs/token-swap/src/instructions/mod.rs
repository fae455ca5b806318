pub mod admin;
pub mod buy;
pub mod initialize;
pub mod utils;

pub use admin::*;
pub use buy::*;
pub use initialize::*;
pub use utils::*;
