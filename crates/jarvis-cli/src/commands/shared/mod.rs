pub mod limit;
pub mod mutation;
pub mod notify;
pub mod parse;
