/// Exports the C entry points the host resolves, backed by a `static`
/// [`Catalog`](crate::Catalog).
///
/// Generates `init`, `queery`, `name`, `desc`, `icon_name` and
/// `handle_selection`. Every returned pointer refers to data inside the
/// catalog, so the host never has to free anything.
///
/// ```ignore
/// static CATALOG: Catalog = Catalog::new(c"My plugin,text-x-generic", &ENTRIES, &HANDLES);
/// plugin_core::declare_plugin!(CATALOG);
/// ```
#[macro_export]
macro_rules! declare_plugin {
    ($catalog:path) => {
        #[no_mangle]
        pub extern "C" fn init() -> *const ::std::os::raw::c_char {
            $catalog.init_c_str().as_ptr()
        }

        #[no_mangle]
        pub extern "C" fn queery(
            _input: *const ::std::os::raw::c_char,
            _max_returned: u32,
        ) -> *const $crate::SearchItemHandle {
            $catalog.terminated_handles().as_ptr()
        }

        #[no_mangle]
        pub extern "C" fn name(mh: $crate::SearchItemHandle) -> *const ::std::os::raw::c_char {
            $crate::exports::text_or_null($catalog.entry(mh).map(|e| e.name()), "name")
        }

        #[no_mangle]
        pub extern "C" fn desc(mh: $crate::SearchItemHandle) -> *const ::std::os::raw::c_char {
            $crate::exports::text_or_null($catalog.entry(mh).map(|e| e.desc()), "desc")
        }

        #[no_mangle]
        pub extern "C" fn icon_name(mh: $crate::SearchItemHandle) -> *const ::std::os::raw::c_char {
            $crate::exports::text_or_null($catalog.entry(mh).map(|e| e.icon()), "icon_name")
        }

        #[no_mangle]
        pub extern "C" fn handle_selection(mh: $crate::SearchItemHandle) {
            $crate::exports::report_selection($catalog.handle_selection(mh))
        }
    };
}
