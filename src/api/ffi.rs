//! C-compatible API exposed to the host program.
//!
//! Ownership rule: every pointer returned by `HelloWorld` belongs to the caller
//! and goes back through `FreeString` exactly once.
#![allow(non_snake_case)]

use std::os::raw::{c_char, c_int};

use crate::common::buf;
use crate::common::config::BridgeCfg;
use crate::common::error::BridgeCode;
use crate::common::log;
use crate::ops::{arith, greeting};

/// ABI version to coordinate with host bindings.
#[no_mangle]
pub extern "C" fn hello_ffi_api_version() -> u32 {
    1
}

/// Install the JSON-line logger configured from the environment.
///
/// Returns a `BridgeCode`; zero on success.
#[no_mangle]
pub extern "C" fn hello_ffi_init_logging() -> u32 {
    let outcome = BridgeCfg::load().and_then(|cfg| log::init(&cfg));
    match outcome {
        Ok(()) => BridgeCode::Ok as u32,
        Err(err) => {
            tracing::warn!(error = %err, "logging not installed");
            err.code() as u32
        }
    }
}

/// Return the greeting as a newly allocated C string (caller must free).
#[no_mangle]
pub extern "C" fn HelloWorld() -> *mut c_char {
    let text = greeting::greeting().expect("static greeting has no NUL byte");
    log::event("ffi", "hello_world", BridgeCode::Ok);
    text.as_ptr()
}

/// Free a string returned by `HelloWorld`.
///
/// # Safety
/// `ptr` must be null or a pointer from `HelloWorld` not yet freed.
#[no_mangle]
pub unsafe extern "C" fn FreeString(ptr: *mut c_char) {
    buf::release_c_string(ptr);
    log::event("ffi", "free_string", BridgeCode::Ok);
}

/// Sum two integers with two's-complement wrapping.
#[no_mangle]
pub extern "C" fn AddNumbers(a: c_int, b: c_int) -> c_int {
    let sum = arith::add(a, b);
    log::event("ffi", "add_numbers", BridgeCode::Ok);
    sum
}
