pub mod print;
pub mod tables;
pub mod theme;
