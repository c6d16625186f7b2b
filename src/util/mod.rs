pub mod name;
pub mod parse;
