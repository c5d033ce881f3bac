pub mod cli;
pub mod feed;
pub mod lang;
pub mod loader;
pub mod parser;
pub mod schema;
pub mod store;

pub use cli::{Cli, Commands};
