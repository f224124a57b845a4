//! Pure operations behind the exported symbols.

pub mod arith;
pub mod greeting;

pub use greeting::GREETING;
