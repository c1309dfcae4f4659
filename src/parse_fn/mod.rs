pub mod ascii;
pub mod datetime;
