//! Variables available to boilerplate.

use std::collections::HashMap;

use crate::domain::{naming::capitalize, plan::ResolvedTarget};

/// Context for rendering one boilerplate file.
///
/// ## Built-in Variables
///
/// | Variable            | Example          |
/// |---------------------|------------------|
/// | `NAME`              | `user`           |
/// | `NAME_CAPITALIZED`  | `User`           |
/// | `IDENTITY`          | `UserController` |
/// | `KEEL_VERSION`      | `0.1.0`          |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(raw_name: &str, display_name: &str) -> Self {
        let mut vars = HashMap::new();
        vars.insert("NAME".to_string(), raw_name.to_string());
        vars.insert("NAME_CAPITALIZED".to_string(), capitalize(raw_name));
        vars.insert("IDENTITY".to_string(), display_name.to_string());
        vars.insert("KEEL_VERSION".to_string(), crate::VERSION.to_string());
        Self { variables: vars }
    }

    /// Context for a resolved target of a request with `raw_name`.
    pub fn for_target(raw_name: &str, target: &ResolvedTarget) -> Self {
        Self::new(raw_name, &target.display_name)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
