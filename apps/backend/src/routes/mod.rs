pub mod import;
pub mod parse;
