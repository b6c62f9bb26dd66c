//! Name derivations shared by every generated file.
//!
//! Models, controllers, routes and the entrypoint patch all refer to each
//! other by name, so every name is computed here and nowhere else.

use heck::ToUpperCamelCase;

use crate::error::{GenError, Result};

/// File extension of every generated source file.
pub const EXT: &str = "js";

/// Prefix every model's router is mounted under.
pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNames {
    /// `BlogPost`
    pub pascal: String,
    /// `blogpost`, the variable name and file base name.
    pub lower: String,
    /// `blogposts`
    pub plural: String,
}

impl ModelNames {
    /// Derive all names from raw user input such as `blog post` or `blogPost`.
    pub fn derive(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GenError::invalid("Model name cannot be empty"));
        }

        let pascal = trimmed.to_upper_camel_case();
        match pascal.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => {
                return Err(GenError::invalid(format!(
                    "Model name '{}' must start with a letter",
                    trimmed
                )));
            }
        }
        if let Some(c) = pascal.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(GenError::invalid(format!(
                "Model name '{}' contains invalid character '{}'",
                trimmed, c
            )));
        }

        let lower = pascal.to_lowercase();
        let plural = format!("{lower}s");
        Ok(Self {
            pascal,
            lower,
            plural,
        })
    }

    pub fn model_path(&self) -> String {
        format!("models/{}.model.{EXT}", self.lower)
    }

    pub fn controller_path(&self) -> String {
        format!("controllers/{}.controller.{EXT}", self.lower)
    }

    pub fn routes_path(&self) -> String {
        format!("routes/{}.routes.{EXT}", self.lower)
    }

    /// `require` specifier of the model, relative to `controllers/`.
    pub fn model_module(&self) -> String {
        format!("../models/{}.model", self.lower)
    }

    /// `require` specifier of the controller, relative to `routes/`.
    pub fn controller_module(&self) -> String {
        format!("../controllers/{}.controller", self.lower)
    }

    /// `require` specifier of the router, relative to the entrypoint.
    pub fn routes_module(&self) -> String {
        format!("./routes/{}.routes", self.lower)
    }

    pub fn routes_binding(&self) -> String {
        format!("{}Routes", self.lower)
    }

    pub fn mount_path(&self) -> String {
        format!("{API_PREFIX}/{}", self.plural)
    }

    pub fn create_handler(&self) -> String {
        format!("create{}", self.pascal)
    }

    pub fn list_handler(&self) -> String {
        format!("get{}s", self.pascal)
    }

    pub fn read_handler(&self) -> String {
        format!("get{}ById", self.pascal)
    }

    pub fn update_handler(&self) -> String {
        format!("update{}", self.pascal)
    }

    pub fn delete_handler(&self) -> String {
        format!("delete{}", self.pascal)
    }

    /// Handler names in the order the controller exports them.
    pub fn handlers(&self) -> [String; 5] {
        [
            self.create_handler(),
            self.list_handler(),
            self.read_handler(),
            self.update_handler(),
            self.delete_handler(),
        ]
    }

    pub fn routes_import_line(&self) -> String {
        format!(
            "const {} = require('{}');",
            self.routes_binding(),
            self.routes_module()
        )
    }

    pub fn route_registration_line(&self) -> String {
        format!(
            "app.use('{}', {});",
            self.mount_path(),
            self.routes_binding()
        )
    }

    pub fn route_comment_line(&self) -> String {
        format!("// {} Routes", self.pascal)
    }
}
