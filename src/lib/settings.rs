//! JVM settings merger
//!
//! Combines the caller's options with the options a JavaFX application needs
//! to render through Monocle/EGL on the bare framebuffer. Merging happens in
//! three passes whose order matters:
//!
//! 1. caller values (with the fixed prefix entries in front)
//! 2. default properties, only where the caller did not set the key
//! 3. `java.library.path` patch, applied last so it sees both of the above

use crate::args_parser::ParsedArgs;

/// Root module every kiosk application needs
pub const REQUIRED_MODULE: &str = "javafx.controls";

/// Property patched to always include the SDK lib directory
pub const LIBRARY_PATH_PROPERTY: &str = "java.library.path";

/// Insertion-ordered property map
///
/// Setting an existing key replaces the value in place, so the rendered
/// `-D` options keep the order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a value, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set a value only if the key is absent
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.entries.push((key, value.into()));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Default Monocle/EGL properties for the given SDK lib directory
pub fn default_properties(javafx_lib: &str) -> Vec<(&'static str, String)> {
    vec![
        ("glass.platform", "Monocle".to_string()),
        ("monocle.platform", "EGL".to_string()),
        ("monocle.platform.traceConfig", "false".to_string()),
        ("monocle.egl.lib", format!("{}/libgluon_drm.so", javafx_lib)),
        ("egl.displayid", "/dev/dri/card0".to_string()),
        ("javafx.verbose", "false".to_string()),
        ("prism.verbose", "false".to_string()),
    ]
}

/// Split a delimited list, dropping empty segments, with `first` in front
pub fn prefixed_list(first: &str, raw: &str, separator: char) -> Vec<String> {
    std::iter::once(first.to_string())
        .chain(
            raw.split(separator)
                .filter(|s| !s.is_empty())
                .map(String::from),
        )
        .collect()
}

/// Final JVM settings produced from caller options and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub module_path: Vec<String>,
    pub add_modules: Vec<String>,
    pub properties: PropertyMap,
}

impl LaunchSettings {
    /// Run all merge passes in order
    pub fn merge(parsed: &ParsedArgs, javafx_lib: &str) -> Self {
        let mut settings = Self::from_caller(parsed, javafx_lib);
        settings.apply_defaults(javafx_lib);
        settings.patch_library_path(javafx_lib);
        settings
    }

    /// Pass 1: caller values behind the fixed prefix entries
    fn from_caller(parsed: &ParsedArgs, javafx_lib: &str) -> Self {
        let mut properties = PropertyMap::new();
        for (key, value) in parsed.properties.iter().filter(|(k, _)| !k.is_empty()) {
            properties.insert(key.as_str(), value.as_str());
        }

        Self {
            module_path: prefixed_list(javafx_lib, &parsed.module_path, ':'),
            add_modules: prefixed_list(REQUIRED_MODULE, &parsed.add_modules, ','),
            properties,
        }
    }

    /// Pass 2: defaults never overwrite caller keys
    fn apply_defaults(&mut self, javafx_lib: &str) {
        for (key, value) in default_properties(javafx_lib) {
            self.properties.set_default(key, value);
        }
    }

    /// Pass 3: the SDK lib directory always leads `java.library.path`
    fn patch_library_path(&mut self, javafx_lib: &str) {
        let current = self
            .properties
            .get(LIBRARY_PATH_PROPERTY)
            .unwrap_or_default()
            .to_string();
        let patched = prefixed_list(javafx_lib, &current, ':').join(":");
        self.properties.insert(LIBRARY_PATH_PROPERTY, patched);
    }

    /// Render the JVM argument list, with pass-through tokens last
    pub fn jvm_args(&self, passthrough: &[String]) -> Vec<String> {
        let mut args = vec![
            "--module-path".to_string(),
            self.module_path.join(":"),
            "--add-modules".to_string(),
            self.add_modules.join(","),
        ];
        args.extend(
            self.properties
                .iter()
                .map(|(key, value)| format!("-D{}={}", key, value)),
        );
        args.extend(passthrough.iter().cloned());
        args
    }
}
