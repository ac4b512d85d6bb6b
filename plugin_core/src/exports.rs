//! Conversions used by the functions [`declare_plugin!`](crate::declare_plugin)
//! generates. Errors are logged here because nothing richer than a null
//! pointer crosses the C boundary, and `handle_selection` returns nothing.

use std::os::raw::c_char;
use std::ptr;

use crate::{SearchError, StaticText};

#[doc(hidden)]
pub fn text_or_null(result: Result<StaticText, SearchError>, field: &'static str) -> *const c_char {
    match result {
        Ok(text) => text.as_c_str().as_ptr(),
        Err(e) => {
            crate::log_error!(&format!("{} lookup failed", field), Some(e.to_string()));
            ptr::null()
        }
    }
}

#[doc(hidden)]
pub fn report_selection(result: Result<(), SearchError>) {
    if let Err(e) = result {
        crate::log_error!("handle_selection failed", Some(e.to_string()));
    }
}
