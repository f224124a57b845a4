//! NUL-terminated text buffers living on the C heap.
//!
//! Buffers handed across the boundary are allocated with `malloc` and must be
//! released with [`release_c_string`], never through Rust's allocator.

use std::alloc::{handle_alloc_error, Layout};
use std::os::raw::c_char;
use std::ptr::{self, NonNull};

use super::error::{BridgeError, BridgeResult};

/// Copy `text` into a fresh `malloc`ed buffer with a trailing NUL.
///
/// Ownership of the returned pointer moves to the caller. Allocation failure
/// aborts the process.
pub fn alloc_c_string(text: &str) -> BridgeResult<NonNull<c_char>> {
    let bytes = text.as_bytes();
    if let Some(position) = bytes.iter().position(|&b| b == 0) {
        return Err(BridgeError::InteriorNul { position });
    }

    let size = bytes.len() + 1;
    let raw = unsafe { libc::malloc(size) } as *mut c_char;
    let Some(buf) = NonNull::new(raw) else {
        match Layout::array::<c_char>(size) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => std::process::abort(),
        }
    };

    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr() as *const c_char, buf.as_ptr(), bytes.len());
        *buf.as_ptr().add(bytes.len()) = 0;
    }
    Ok(buf)
}

/// Release a buffer produced by [`alloc_c_string`].
///
/// # Safety
/// `ptr` must be null or a pointer from [`alloc_c_string`] that has not been
/// released yet. Null is a no-op, like `free`.
pub unsafe fn release_c_string(ptr: *mut c_char) {
    libc::free(ptr as *mut libc::c_void);
}
