//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String` and a pointer/length pair instead of
//! `Vec`. Conversion functions live here to keep `lib.rs` focused on the
//! `extern "C"` surface.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use reqprep_core::Header;

/// Convert an owned Rust string into a C string the caller must free.
///
/// Returns null if `s` contains an interior NUL byte.
pub(crate) fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// Borrow a C string as `&str`. Null and invalid UTF-8 read as `None`.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
pub(crate) unsafe fn str_from_c<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// A single HTTP header as a name/value pair of C strings.
///
/// Headers returned by this library are owned by the caller and released
/// with `reqprep_free_header` / `reqprep_free_header_list`. Header arrays
/// the caller passes in are only read, never freed.
#[repr(C)]
pub struct FfiHeader {
    pub name: *mut c_char,
    pub value: *mut c_char,
}

/// A list of headers exposed to C.
#[repr(C)]
pub struct FfiHeaderList {
    pub items: *mut FfiHeader,
    pub len: u32,
}

impl FfiHeader {
    pub(crate) fn from_core(header: Header) -> Self {
        FfiHeader {
            name: into_c_string(header.name),
            value: into_c_string(header.value),
        }
    }

    /// Free the C-string fields (but not the struct itself).
    pub(crate) fn free_fields(&self) {
        if !self.name.is_null() {
            drop(unsafe { CString::from_raw(self.name) });
        }
        if !self.value.is_null() {
            drop(unsafe { CString::from_raw(self.value) });
        }
    }
}

impl FfiHeaderList {
    /// Convert core headers into a heap-allocated `FfiHeaderList`.
    pub(crate) fn from_core(headers: Vec<Header>) -> *mut Self {
        let len = headers.len() as u32;
        let items = if headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> =
                headers.into_iter().map(FfiHeader::from_core).collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };
        Box::into_raw(Box::new(FfiHeaderList { items, len }))
    }
}

/// Copy a caller-provided header array into core headers.
///
/// Null `headers` or zero `len` is an empty list. A null or non-UTF-8 field
/// reads as an empty string.
///
/// # Safety
/// `headers` must be null or point to `len` initialized `FfiHeader` values.
pub(crate) unsafe fn headers_from_c(headers: *const FfiHeader, len: u32) -> Vec<Header> {
    if headers.is_null() || len == 0 {
        return Vec::new();
    }
    let slice = unsafe { std::slice::from_raw_parts(headers, len as usize) };
    slice
        .iter()
        .map(|h| {
            let name = unsafe { str_from_c(h.name) }.unwrap_or("");
            let value = unsafe { str_from_c(h.value) }.unwrap_or("");
            Header::new(name, value)
        })
        .collect()
}
