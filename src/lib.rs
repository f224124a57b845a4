// lib.rs - exported C surface over a handful of pure operations
pub mod api;
pub mod common;
pub mod ops;

pub use api::ffi::{AddNumbers, FreeString, HelloWorld};
