//! Example plugin: three fixed entries, each using its string for name,
//! description and icon.
//!
//! Load the `cdylib` into the host with `engine --plugin <path>`, or use
//! [`CATALOG`] directly from Rust.

use plugin_core::{declare_plugin, Catalog, Entry, SearchItemHandle};

static ENTRIES: [Entry; 3] = [
    Entry::uniform(c"apple"),
    Entry::uniform(c"banana"),
    Entry::uniform(c"coconut"),
];

static HANDLES: [SearchItemHandle; 4] = [
    SearchItemHandle(0),
    SearchItemHandle(1),
    SearchItemHandle(2),
    SearchItemHandle::TERMINATOR,
];

pub static CATALOG: Catalog = Catalog::new(c"Example plugin,text-x-rust", &ENTRIES, &HANDLES);

declare_plugin!(CATALOG);

#[cfg(test)]
mod tests {
    use super::*;
    use plugin_core::SearchError;

    #[test]
    fn identification_string_is_fixed() {
        assert_eq!(CATALOG.init(), "Example plugin,text-x-rust");
        assert_eq!(CATALOG.init(), CATALOG.init());
    }

    #[test]
    fn query_lists_every_entry_in_order() {
        let handles: Vec<i32> = CATALOG.query().iter().map(|h| h.0).collect();
        assert_eq!(handles, vec![0, 1, 2]);
    }

    #[test]
    fn all_fields_equal_the_entry_string() {
        for (idx, expected) in ["apple", "banana", "coconut"].into_iter().enumerate() {
            let h = SearchItemHandle(idx as i32);
            assert_eq!(CATALOG.name(h).unwrap(), expected);
            assert_eq!(CATALOG.description(h).unwrap(), expected);
            assert_eq!(CATALOG.icon_name(h).unwrap(), expected);
        }
    }

    #[test]
    fn lookups_outside_the_catalog_fail() {
        for bad in [SearchItemHandle::TERMINATOR, SearchItemHandle(3), SearchItemHandle(i32::MAX)] {
            assert!(matches!(CATALOG.name(bad), Err(SearchError::InvalidHandle(h)) if h == bad.0));
            assert!(CATALOG.description(bad).is_err());
            assert!(CATALOG.icon_name(bad).is_err());
            assert!(CATALOG.handle_selection(bad).unwrap_err().is_invalid_handle());
        }
    }

    #[test]
    fn selection_confirms_the_entry() {
        let mut out = Vec::new();
        CATALOG.select_into(SearchItemHandle(2), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Example plugin handling: coconut\n");
    }
}
