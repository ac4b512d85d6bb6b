use liblogger::log_warn;
use plugin_core::{SearchItemHandle, SearchModule};
use serde::Serialize;

use crate::RegistryError;

/// One displayable match, copied out of its module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRow {
    /// Position in the flattened list across all modules.
    pub index: usize,
    #[serde(skip)]
    pub handle: SearchItemHandle,
    pub name: String,
    pub desc: String,
    pub icon: String,
}

/// The matches of a single module for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleMatches {
    #[serde(skip)]
    pub module: usize,
    pub name: String,
    pub icon: String,
    pub items: Vec<MatchRow>,
}

/// Central registry holding every module the host queries, in the order
/// they were registered.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Box<dyn SearchModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<M: SearchModule + 'static>(&mut self, module: M) {
        self.modules.push(Box::new(module));
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.modules.iter().map(|m| m.info().name.to_string()).collect()
    }

    /// Queries every module and numbers the results consecutively.
    ///
    /// A handle whose details cannot be fetched is logged and left out, so
    /// the numbering only covers rows that can be shown.
    pub fn query_all(&self, input: &str, max_per_module: u32) -> Vec<ModuleMatches> {
        let mut next_index = 0;
        self.modules
            .iter()
            .enumerate()
            .map(|(module_idx, module)| {
                let info = module.info();
                let mut items = Vec::new();
                for handle in module.query(input, max_per_module) {
                    match module.match_info(handle) {
                        Ok(m) => {
                            items.push(MatchRow {
                                index: next_index,
                                handle,
                                name: m.name.to_string(),
                                desc: m.desc.to_string(),
                                icon: m.icon.to_string(),
                            });
                            next_index += 1;
                        }
                        Err(e) => log_warn!(
                            &format!("Skipping handle {} from '{}'", handle.0, info.name),
                            Some(e.to_string())
                        ),
                    }
                }
                ModuleMatches {
                    module: module_idx,
                    name: info.name.to_string(),
                    icon: info.icon.to_string(),
                    items,
                }
            })
            .collect()
    }

    /// Runs the selection action of the `index`-th row of `matches`.
    pub fn select<'m>(&self, matches: &'m [ModuleMatches], index: usize) -> Result<&'m MatchRow, RegistryError> {
        let (group, row) = matches
            .iter()
            .flat_map(|group| group.items.iter().map(move |row| (group, row)))
            .find(|(_, row)| row.index == index)
            .ok_or_else(|| RegistryError::NoSuchMatch {
                index,
                available: matches.iter().map(|g| g.items.len()).sum(),
            })?;

        let module = self
            .modules
            .get(group.module)
            .ok_or(RegistryError::UnknownModule(group.module))?;
        module.handle_selection(row.handle)?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugin_core::{MatchInfo, PluginInfo, SearchError};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Fixed {
        name: &'static str,
        items: Vec<&'static str>,
        selected: Rc<RefCell<Vec<String>>>,
    }

    impl Fixed {
        fn new(name: &'static str, items: &[&'static str]) -> (Self, Rc<RefCell<Vec<String>>>) {
            let selected = Rc::new(RefCell::new(Vec::new()));
            let module = Fixed {
                name,
                items: items.to_vec(),
                selected: Rc::clone(&selected),
            };
            (module, selected)
        }
    }

    impl SearchModule for Fixed {
        fn info(&self) -> PluginInfo<'_> {
            PluginInfo { name: self.name, icon: "icon" }
        }

        fn query(&self, _input: &str, max_returned: u32) -> Vec<SearchItemHandle> {
            // Handle 99 exercises the skip path
            (0..self.items.len() as i32)
                .map(SearchItemHandle)
                .chain(std::iter::once(SearchItemHandle(99)))
                .take(max_returned as usize)
                .collect()
        }

        fn match_info(&self, item: SearchItemHandle) -> Result<MatchInfo<'_>, SearchError> {
            let name = item
                .index(self.items.len())
                .map(|idx| self.items[idx])
                .ok_or(SearchError::InvalidHandle(item.0))?;
            Ok(MatchInfo { name, desc: "", icon: "" })
        }

        fn handle_selection(&self, selection: SearchItemHandle) -> Result<(), SearchError> {
            let name = self.match_info(selection)?.name;
            self.selected.borrow_mut().push(name.to_string());
            Ok(())
        }
    }

    #[test]
    fn numbering_runs_across_modules() {
        let mut registry = ModuleRegistry::new();
        let (fruit, _) = Fixed::new("fruit", &["apple", "banana"]);
        let (nuts, _) = Fixed::new("nuts", &["coconut"]);
        registry.register(fruit);
        registry.register(nuts);

        let matches = registry.query_all("", 10);
        assert_eq!(registry.names(), vec!["fruit", "nuts"]);
        assert_eq!(matches.len(), 2);

        let rows: Vec<(usize, &str)> = matches
            .iter()
            .flat_map(|g| g.items.iter().map(|r| (r.index, r.name.as_str())))
            .collect();
        assert_eq!(rows, vec![(0, "apple"), (1, "banana"), (2, "coconut")]);
    }

    #[test]
    fn max_per_module_is_forwarded() {
        let mut registry = ModuleRegistry::new();
        let (fruit, _) = Fixed::new("fruit", &["apple", "banana"]);
        registry.register(fruit);

        let matches = registry.query_all("", 1);
        assert_eq!(matches[0].items.len(), 1);
    }

    #[test]
    fn select_dispatches_to_owning_module() {
        let mut registry = ModuleRegistry::new();
        let (fruit, fruit_selected) = Fixed::new("fruit", &["apple"]);
        let (nuts, nut_selected) = Fixed::new("nuts", &["coconut", "pecan"]);
        registry.register(fruit);
        registry.register(nuts);

        let matches = registry.query_all("", 10);
        let row = registry.select(&matches, 2).unwrap();
        assert_eq!(row.name, "pecan");
        assert!(fruit_selected.borrow().is_empty());
        assert_eq!(*nut_selected.borrow(), vec!["pecan".to_string()]);
    }

    #[test]
    fn select_out_of_range() {
        let mut registry = ModuleRegistry::new();
        let (fruit, _) = Fixed::new("fruit", &["apple"]);
        registry.register(fruit);

        let matches = registry.query_all("", 10);
        let err = registry.select(&matches, 5).unwrap_err();
        assert!(matches!(err, RegistryError::NoSuchMatch { index: 5, available: 1 }));
    }

    #[test]
    fn select_with_foreign_matches() {
        let registry = ModuleRegistry::new();
        let matches = vec![ModuleMatches {
            module: 3,
            name: "gone".into(),
            icon: String::new(),
            items: vec![MatchRow {
                index: 0,
                handle: SearchItemHandle(0),
                name: "x".into(),
                desc: String::new(),
                icon: String::new(),
            }],
        }];
        assert!(matches!(registry.select(&matches, 0), Err(RegistryError::UnknownModule(3))));
    }
}
