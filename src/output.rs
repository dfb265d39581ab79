//! Report formatting

pub mod human;

pub use human::HumanFormatter;
