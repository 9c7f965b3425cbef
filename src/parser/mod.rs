pub mod formats;
pub mod gamelog;

pub use gamelog::{parse_file, parse_line};
