use super::{Artifact, field_list};
use crate::schema::{Backend, ModelSchema};

/// Storage calls the CRUD handlers make, per backend.
struct Storage {
    list: &'static str,
    read: &'static str,
}

fn storage(backend: Backend) -> Storage {
    match backend {
        Backend::Document => Storage {
            list: "find({})",
            read: "findById(req.params.id)",
        },
        Backend::Relational => Storage {
            list: "findAll()",
            read: "findByPk(req.params.id)",
        },
    }
}

/// One presence check per required attribute, each rejecting the request on its own.
fn required_checks(schema: &ModelSchema) -> String {
    schema
        .required_attributes()
        .map(|attr| {
            format!(
                "  if ({name} === undefined || {name} === null || {name} === '') {{\n    throw new BadRequestError('Missing required field: {name}');\n  }}\n",
                name = attr.name
            )
        })
        .collect()
}

/// `const { a, b } = req.body;` plus the object literal built from it.
fn body_binding(schema: &ModelSchema) -> (String, String) {
    if schema.attributes.is_empty() {
        ("  const payload = { ...req.body };\n".to_string(), "payload".to_string())
    } else {
        let fields = field_list(schema);
        (
            format!("  const {{ {fields} }} = req.body;\n"),
            format!("{{ {fields} }}"),
        )
    }
}

fn update_body(schema: &ModelSchema, payload: &str) -> String {
    let n = &schema.names;
    let model = &n.pascal;
    let var = &n.lower;
    match schema.backend {
        Backend::Document => format!(
            r#"  const {var} = await {model}.findByIdAndUpdate(req.params.id, {payload}, {{
    new: true,
    runValidators: true,
  }});
  if (!{var}) {{
    throw new NotFoundError(`{model} ${{req.params.id}} not found`);
  }}
  res.status(StatusCodes.OK).json({{ {var} }});
"#
        ),
        Backend::Relational => format!(
            r#"  const [updated] = await {model}.update({payload}, {{
    where: {{ id: req.params.id }},
  }});
  if (!updated) {{
    throw new NotFoundError(`{model} ${{req.params.id}} not found`);
  }}
  const {var} = await {model}.findByPk(req.params.id);
  res.status(StatusCodes.OK).json({{ {var} }});
"#
        ),
    }
}

fn delete_body(schema: &ModelSchema) -> String {
    let n = &schema.names;
    let model = &n.pascal;
    let var = &n.lower;
    match schema.backend {
        Backend::Document => format!(
            r#"  const {var} = await {model}.findByIdAndDelete(req.params.id);
  if (!{var}) {{
    throw new NotFoundError(`{model} ${{req.params.id}} not found`);
  }}
"#
        ),
        Backend::Relational => format!(
            r#"  const deleted = await {model}.destroy({{ where: {{ id: req.params.id }} }});
  if (!deleted) {{
    throw new NotFoundError(`{model} ${{req.params.id}} not found`);
  }}
"#
        ),
    }
}

pub fn render(schema: &ModelSchema) -> Artifact {
    let n = &schema.names;
    let model = &n.pascal;
    let var = &n.lower;
    let plural = &n.plural;
    let model_module = n.model_module();
    let [create, list, read, update, delete] = n.handlers();
    let calls = storage(schema.backend);
    let checks = required_checks(schema);
    let (binding, payload) = body_binding(schema);
    let update_body = update_body(schema, &payload);
    let delete_body = delete_body(schema);

    let content = format!(
        r#"const {model} = require('{model_module}');
const {{ StatusCodes }} = require('http-status-codes');
const {{ BadRequestError, NotFoundError }} = require('../errors');

// Create a {var}
const {create} = async (req, res) => {{
{binding}{checks}  const {var} = await {model}.create({payload});
  res.status(StatusCodes.CREATED).json({{ {var} }});
}};

// List all {plural}
const {list} = async (req, res) => {{
  const {plural} = await {model}.{list_call};
  res.status(StatusCodes.OK).json({{ {plural}, count: {plural}.length }});
}};

// Get one {var} by id
const {read} = async (req, res) => {{
  const {var} = await {model}.{read_call};
  if (!{var}) {{
    throw new NotFoundError(`{model} ${{req.params.id}} not found`);
  }}
  res.status(StatusCodes.OK).json({{ {var} }});
}};

// Update a {var}
const {update} = async (req, res) => {{
{binding}{update_body}}};

// Delete a {var}
const {delete} = async (req, res) => {{
{delete_body}  res.status(StatusCodes.OK).json({{ message: '{model} deleted successfully' }});
}};

module.exports = {{
  {create},
  {list},
  {read},
  {update},
  {delete},
}};
"#,
        list_call = calls.list,
        read_call = calls.read,
    );

    Artifact::new(n.controller_path(), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, SchemaAttribute};

    fn title_and_body(backend: Backend) -> ModelSchema {
        ModelSchema::new(
            "Post",
            vec![
                SchemaAttribute::new("title", FieldType::String).required(),
                SchemaAttribute::new("body", FieldType::String),
            ],
            backend,
        )
        .unwrap()
    }

    #[test]
    fn test_one_presence_check_per_required_field() {
        for backend in [Backend::Document, Backend::Relational] {
            let content = render(&title_and_body(backend)).content;
            assert_eq!(content.matches("Missing required field: title").count(), 1);
            assert_eq!(content.matches("Missing required field: body").count(), 0);
            assert_eq!(content.matches("if (title === undefined").count(), 1);
        }
    }

    #[test]
    fn test_checks_live_in_create_only() {
        let content = render(&title_and_body(Backend::Document)).content;
        let create_start = content.find("const createPost = async").unwrap();
        let list_start = content.find("const getPosts = async").unwrap();
        let check = content.find("Missing required field: title").unwrap();
        assert!(create_start < check && check < list_start);
    }

    #[test]
    fn test_each_required_field_checked_independently() {
        let schema = ModelSchema::new(
            "User",
            vec![
                SchemaAttribute::new("email", FieldType::String).required(),
                SchemaAttribute::new("active", FieldType::Boolean).required(),
            ],
            Backend::Document,
        )
        .unwrap();
        let content = render(&schema).content;
        assert_eq!(content.matches("throw new BadRequestError(").count(), 2);
        assert!(content.contains("Missing required field: email"));
        assert!(content.contains("Missing required field: active"));
    }

    #[test]
    fn test_document_storage_calls() {
        let content = render(&title_and_body(Backend::Document)).content;
        assert!(content.contains("const Post = require('../models/post.model');"));
        assert!(content.contains("const { title, body } = req.body;"));
        assert!(content.contains("await Post.create({ title, body });"));
        assert!(content.contains("await Post.find({});"));
        assert!(content.contains("await Post.findById(req.params.id);"));
        assert!(content.contains("await Post.findByIdAndUpdate(req.params.id, { title, body }"));
        assert!(content.contains("await Post.findByIdAndDelete(req.params.id);"));
        assert!(!content.contains("findByPk"));
    }

    #[test]
    fn test_relational_storage_calls() {
        let content = render(&title_and_body(Backend::Relational)).content;
        assert!(content.contains("await Post.create({ title, body });"));
        assert!(content.contains("await Post.findAll();"));
        assert!(content.contains("await Post.findByPk(req.params.id);"));
        assert!(content.contains("await Post.update({ title, body }, {"));
        assert!(content.contains("await Post.destroy({ where: { id: req.params.id } });"));
        assert!(!content.contains("findById("));
    }

    #[test]
    fn test_model_without_attributes_passes_body_through() {
        let schema = ModelSchema::new("Tag", vec![], Backend::Document).unwrap();
        let content = render(&schema).content;
        assert!(content.contains("const payload = { ...req.body };"));
        assert!(content.contains("await Tag.create(payload);"));
        assert!(!content.contains("const {  }"));
    }

    #[test]
    fn test_exports_all_handlers() {
        let content = render(&title_and_body(Backend::Relational)).content;
        let exports = &content[content.find("module.exports").unwrap()..];
        for handler in ["createPost", "getPosts", "getPostById", "updatePost", "deletePost"] {
            assert!(exports.contains(handler));
        }
    }
}
