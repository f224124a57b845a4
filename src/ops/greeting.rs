//! Fixed greeting handed to the host as a C string.

use std::os::raw::c_char;
use std::ptr::NonNull;

use crate::common::buf;
use crate::common::error::BridgeResult;

/// Message returned by every greeting call.
pub const GREETING: &str = "Hello, world from Go!";

/// Allocate a fresh native copy of [`GREETING`].
pub fn greeting() -> BridgeResult<NonNull<c_char>> {
    buf::alloc_c_string(GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn each_call_is_a_separate_allocation() {
        let first = greeting().unwrap();
        let second = greeting().unwrap();
        assert_ne!(first, second);

        unsafe { buf::release_c_string(first.as_ptr()) };
        let text = unsafe { CStr::from_ptr(second.as_ptr()) };
        assert_eq!(text.to_str(), Ok(GREETING));
        unsafe { buf::release_c_string(second.as_ptr()) };
    }
}
