pub mod output;
pub mod query;
pub mod resolve;
