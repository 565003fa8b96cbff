use super::response::Component;
use std::collections::HashMap;

/// Lookup table from component key to component metadata
///
/// Built in payload order, so a duplicated key keeps its last occurrence.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    by_key: HashMap<String, Component>,
}

impl ComponentIndex {
    pub fn new(components: impl IntoIterator<Item = Component>) -> Self {
        let by_key = components
            .into_iter()
            .map(|component| (component.key.clone(), component))
            .collect();
        Self { by_key }
    }

    pub fn get(&self, key: &str) -> Option<&Component> {
        self.by_key.get(key)
    }

    /// Resolves the source path for a component key
    ///
    /// Order of preference: `path`, then `longName`, then the part of the
    /// key after its last `:`.
    pub fn resolve_path<'a>(&'a self, component_key: &'a str) -> &'a str {
        self.get(component_key)
            .and_then(|c| c.path.as_deref().or(c.long_name.as_deref()))
            .unwrap_or_else(|| key_suffix(component_key))
    }

    /// File name to display for a component key
    pub fn resolve_file_name<'a>(&'a self, component_key: &'a str) -> &'a str {
        file_name(self.resolve_path(component_key))
    }
}

fn key_suffix(component_key: &str) -> &str {
    component_key.rsplit(':').next().unwrap_or(component_key)
}

/// Last `/`-separated segment of a path, or the whole path
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
