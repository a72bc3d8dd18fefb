pub mod parse_int;
pub mod signal;
