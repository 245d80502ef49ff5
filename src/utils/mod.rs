pub mod constants;
pub mod text;

pub use constants::*;
pub use text::{parse_query, title_case};
