use super::Artifact;

/// `(file stem, class name, StatusCodes member)` for each HTTP error class.
const ERROR_CLASSES: &[(&str, &str, &str)] = &[
    ("bad-request", "BadRequestError", "BAD_REQUEST"),
    ("not-found", "NotFoundError", "NOT_FOUND"),
    ("unauthenticated", "UnauthenticatedError", "UNAUTHORIZED"),
    ("unauthorized", "UnauthorizedError", "FORBIDDEN"),
];

const CUSTOM_API: &str = r#"class CustomAPIError extends Error {
  constructor(message) {
    super(message);
    this.name = 'CustomAPIError';
  }
}

module.exports = CustomAPIError;
"#;

fn error_class(class: &str, status: &str) -> String {
    format!(
        r#"const {{ StatusCodes }} = require('http-status-codes');
const CustomAPIError = require('./custom-api');

class {class} extends CustomAPIError {{
  constructor(message) {{
    super(message);
    this.name = '{class}';
    this.statusCode = StatusCodes.{status};
  }}
}}

module.exports = {class};
"#
    )
}

fn index() -> String {
    let mut content = String::from("const CustomAPIError = require('./custom-api');\n");
    for (stem, class, _) in ERROR_CLASSES {
        content.push_str(&format!("const {class} = require('./{stem}');\n"));
    }
    content.push_str("\nmodule.exports = {\n  CustomAPIError,\n");
    for (_, class, _) in ERROR_CLASSES {
        content.push_str(&format!("  {class},\n"));
    }
    content.push_str("};\n");
    content
}

/// The fixed `errors/` files every project gets; `errors/index.js` comes last.
pub fn artifacts() -> Vec<Artifact> {
    let mut files = vec![Artifact::new("errors/custom-api.js", CUSTOM_API)];
    for (stem, class, status) in ERROR_CLASSES {
        files.push(Artifact::new(
            format!("errors/{stem}.js"),
            error_class(class, status),
        ));
    }
    files.push(Artifact::new("errors/index.js", index()));
    files
}
