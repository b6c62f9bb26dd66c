use super::Artifact;
use crate::naming::ModelNames;
use crate::schema::ModelSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Read,
    Update,
    Delete,
}

impl Operation {
    fn handler(self, names: &ModelNames) -> String {
        match self {
            Operation::Create => names.create_handler(),
            Operation::List => names.list_handler(),
            Operation::Read => names.read_handler(),
            Operation::Update => names.update_handler(),
            Operation::Delete => names.delete_handler(),
        }
    }
}

/// The fixed CRUD surface every model router exposes, whatever the backend.
pub const CRUD_ROUTES: [(&str, &str, Operation); 5] = [
    ("post", "/", Operation::Create),
    ("get", "/", Operation::List),
    ("get", "/:id", Operation::Read),
    ("patch", "/:id", Operation::Update),
    ("delete", "/:id", Operation::Delete),
];

pub fn render(schema: &ModelSchema) -> Artifact {
    let names = &schema.names;
    let handlers = names.handlers().join(",\n  ");
    let controller_module = names.controller_module();

    // Chain methods per path, keeping table order.
    let mut chains: Vec<(&str, String)> = Vec::new();
    for (method, path, op) in CRUD_ROUTES {
        let call = format!(".{method}({})", op.handler(names));
        match chains.iter_mut().find(|(p, _)| *p == path) {
            Some((_, chain)) => chain.push_str(&call),
            None => chains.push((path, call)),
        }
    }
    let routes: String = chains
        .iter()
        .map(|(path, chain)| format!("router.route('{path}'){chain};\n"))
        .collect();

    let content = format!(
        r#"const express = require('express');
const {{
  {handlers},
}} = require('{controller_module}');

const router = express.Router();

// {model} routes, mounted at {mount}
{routes}
module.exports = router;
"#,
        model = names.pascal,
        mount = names.mount_path(),
    );

    Artifact::new(names.routes_path(), content)
}
