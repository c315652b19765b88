pub mod cli;
pub use cli::*;

pub mod query;
pub use query::*;
