//! C-ABI wrapper around `reqprep-core`.
//!
//! # Overview
//! Exposes the request preparation helpers through `extern "C"` functions
//! so any language with a C FFI can build auth headers, filter header lists,
//! normalize URLs and generate ids.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Null required arguments yield null (or `false`); a null optional
//!   argument takes the core's default.
//! - The C caller owns all returned pointers and must call the matching
//!   `reqprep_free_*` function to release them.

pub mod types;

use std::ffi::CString;
use std::os::raw::c_char;
use std::panic::catch_unwind;

use types::*;

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Build an `Authorization: Basic ...` header. Null credentials are empty.
///
/// The caller must free the returned pointer with `reqprep_free_header`.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_basic_auth_header(
    username: *const c_char,
    password: *const c_char,
) -> *mut FfiHeader {
    catch_unwind(|| {
        let username = unsafe { str_from_c(username) };
        let password = unsafe { str_from_c(password) };
        let header = reqprep_core::basic_auth_header(username, password);
        Box::into_raw(Box::new(FfiHeader::from_core(header)))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Every header in `headers[0..len]` named `name`, ignoring case.
///
/// Returns an empty list when `headers` or `name` is null or `name` is
/// empty. The caller must free the result with `reqprep_free_header_list`.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_filter_headers(
    headers: *const FfiHeader,
    len: u32,
    name: *const c_char,
) -> *mut FfiHeaderList {
    catch_unwind(|| {
        let headers = unsafe { headers_from_c(headers, len) };
        let name = unsafe { str_from_c(name) }.unwrap_or("");
        let matched = reqprep_core::filter_headers(&headers, name)
            .into_iter()
            .cloned()
            .collect();
        FfiHeaderList::from_core(matched)
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Whether `headers[0..len]` contains an `Authorization` header.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_has_auth_header(headers: *const FfiHeader, len: u32) -> bool {
    catch_unwind(|| {
        let headers = unsafe { headers_from_c(headers, len) };
        reqprep_core::has_auth_header(&headers)
    })
    .unwrap_or(false)
}

/// Every `Set-Cookie` header in `headers[0..len]`, in order.
///
/// The caller must free the result with `reqprep_free_header_list`.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_get_set_cookie_headers(
    headers: *const FfiHeader,
    len: u32,
) -> *mut FfiHeaderList {
    catch_unwind(|| {
        let headers = unsafe { headers_from_c(headers, len) };
        let cookies = reqprep_core::get_set_cookie_headers(&headers)
            .into_iter()
            .cloned()
            .collect();
        FfiHeaderList::from_core(cookies)
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

/// Prefix `url` with `default_protocol` (`"http:"` when null) and `//`
/// unless it already has a scheme.
///
/// Returns null if `url` is null. Free with `reqprep_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_set_default_protocol(
    url: *const c_char,
    default_protocol: *const c_char,
) -> *mut c_char {
    catch_unwind(|| {
        let Some(url) = (unsafe { str_from_c(url) }) else {
            return std::ptr::null_mut();
        };
        let default_protocol = unsafe { str_from_c(default_protocol) };
        into_c_string(reqprep_core::set_default_protocol(url, default_protocol))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Normalize a raw or percent-encoded path.
///
/// Returns null if `input` is null. Free with `reqprep_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_flexible_encode(input: *const c_char) -> *mut c_char {
    catch_unwind(|| {
        let Some(input) = (unsafe { str_from_c(input) }) else {
            return std::ptr::null_mut();
        };
        into_c_string(reqprep_core::flexible_encode(input))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Prepare `url` for sending: default scheme, encoded path, rebuilt query.
///
/// Returns null if `url` is null or cannot be parsed.
/// Free with `reqprep_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_prepare_url_for_sending(url: *const c_char) -> *mut c_char {
    catch_unwind(|| {
        let Some(url) = (unsafe { str_from_c(url) }) else {
            return std::ptr::null_mut();
        };
        match reqprep_core::prepare_url_for_sending(url) {
            Ok(prepared) => into_c_string(prepared),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

/// Generate an id, prefixed with `prefix_` when `prefix` is non-null and
/// non-empty. Free with `reqprep_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_generate_id(prefix: *const c_char) -> *mut c_char {
    catch_unwind(|| {
        let prefix = unsafe { str_from_c(prefix) };
        into_c_string(reqprep_core::generate_id(prefix))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

/// Free an `FfiHeader` returned by `reqprep_basic_auth_header`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_free_header(header: *mut FfiHeader) {
    if header.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let header = unsafe { Box::from_raw(header) };
        header.free_fields();
    });
}

/// Free an `FfiHeaderList` returned by any header-list function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn reqprep_free_header_list(list: *mut FfiHeaderList) {
    if list.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let list = unsafe { Box::from_raw(list) };
        if !list.items.is_null() && list.len > 0 {
            let items = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(list.items, list.len as usize))
            };
            for item in items.iter() {
                item.free_fields();
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
