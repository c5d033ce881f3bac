pub mod pipeline;
pub mod simple;
pub mod strings;
pub mod units;
pub mod weapons;
