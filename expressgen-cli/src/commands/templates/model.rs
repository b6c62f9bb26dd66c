use super::Artifact;
use crate::schema::{Backend, FieldType, ModelSchema, SchemaAttribute};

pub fn render(schema: &ModelSchema) -> Artifact {
    let content = match schema.backend {
        Backend::Document => render_mongoose(schema),
        Backend::Relational => render_sequelize(schema),
    };
    Artifact::new(schema.names.model_path(), content)
}

fn render_mongoose(schema: &ModelSchema) -> String {
    let name = &schema.names.pascal;
    let mut fields = String::new();
    for attr in &schema.attributes {
        fields.push_str(&format!("    {}: {{\n", attr.name));
        fields.push_str(&format!(
            "      type: mongoose.Schema.Types.{},\n",
            attr.ty
        ));
        if attr.required {
            fields.push_str("      required: true,\n");
        }
        if attr.unique {
            fields.push_str("      unique: true,\n");
        }
        if let Some(default) = attr.default_literal() {
            fields.push_str(&format!("      default: {default},\n"));
        }
        fields.push_str("    },\n");
    }

    format!(
        r#"const mongoose = require('mongoose');

const {name}Schema = new mongoose.Schema(
  {{
{fields}  }},
  {{ timestamps: true }}
);

module.exports = mongoose.model('{name}', {name}Schema);
"#
    )
}

/// Sequelize `DataTypes` member for a relational attribute type.
pub fn sequelize_type(ty: FieldType) -> &'static str {
    match ty {
        FieldType::Integer => "DataTypes.INTEGER",
        FieldType::Float => "DataTypes.FLOAT",
        FieldType::Boolean => "DataTypes.BOOLEAN",
        FieldType::Date => "DataTypes.DATEONLY",
        FieldType::DateTime => "DataTypes.DATE",
        _ => "DataTypes.STRING",
    }
}

fn sequelize_field(attr: &SchemaAttribute) -> String {
    let mut out = format!("    {}: {{\n", attr.name);
    out.push_str(&format!("      type: {},\n", sequelize_type(attr.ty)));
    out.push_str(&format!("      allowNull: {},\n", !attr.required));
    if attr.unique {
        out.push_str("      unique: true,\n");
    }
    if let Some(default) = attr.default_literal() {
        out.push_str(&format!("      defaultValue: {default},\n"));
    }
    out.push_str("    },\n");
    out
}

fn render_sequelize(schema: &ModelSchema) -> String {
    let name = &schema.names.pascal;
    let table = &schema.names.plural;
    let fields: String = schema.attributes.iter().map(sequelize_field).collect();

    format!(
        r#"const {{ DataTypes }} = require('sequelize');
const {{ sequelize }} = require('../db/connect');

const {name} = sequelize.define(
  '{name}',
  {{
{fields}  }},
  {{
    timestamps: true,
    paranoid: true,
    tableName: '{table}',
  }}
);

module.exports = {name};
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(backend: Backend, attributes: Vec<SchemaAttribute>) -> ModelSchema {
        ModelSchema::new("Post", attributes, backend).unwrap()
    }

    #[test]
    fn test_mongoose_model_fields_in_order() {
        let schema = post(
            Backend::Document,
            vec![
                SchemaAttribute::new("title", FieldType::String).required().unique(),
                SchemaAttribute::new("author", FieldType::ObjectId),
                SchemaAttribute::new("body", FieldType::String),
            ],
        );
        let artifact = render(&schema);
        let content = &artifact.content;

        assert_eq!(artifact.path, "models/post.model.js");
        assert!(content.contains("const mongoose = require('mongoose');"));
        assert!(content.contains("const PostSchema = new mongoose.Schema("));
        assert!(content.contains("type: mongoose.Schema.Types.ObjectId,"));
        assert!(content.contains("module.exports = mongoose.model('Post', PostSchema);"));
        assert_eq!(content.matches("required: true").count(), 1);
        assert_eq!(content.matches("unique: true").count(), 1);

        let title = content.find("title: {").unwrap();
        let author = content.find("author: {").unwrap();
        let body = content.find("body: {").unwrap();
        assert!(title < author && author < body);
    }

    #[test]
    fn test_mongoose_defaults() {
        let schema = post(
            Backend::Document,
            vec![
                SchemaAttribute::new("status", FieldType::String).with_default("draft"),
                SchemaAttribute::new("published", FieldType::Boolean).with_default("true"),
                SchemaAttribute::new("views", FieldType::Number).with_default("0"),
            ],
        );
        let content = render(&schema).content;
        assert!(content.contains("default: 'draft',"));
        assert!(content.contains("default: true,"));
        assert!(content.contains("default: 0,"));
    }

    #[test]
    fn test_sequelize_model() {
        let schema = post(
            Backend::Relational,
            vec![
                SchemaAttribute::new("title", FieldType::String).required(),
                SchemaAttribute::new("published", FieldType::Boolean).with_default("false"),
                SchemaAttribute::new("publishedOn", FieldType::Date),
                SchemaAttribute::new("status", FieldType::String).with_default("draft"),
            ],
        );
        let content = render(&schema).content;

        assert!(content.contains("const { DataTypes } = require('sequelize');"));
        assert!(content.contains("const { sequelize } = require('../db/connect');"));
        assert!(content.contains("const Post = sequelize.define("));
        assert!(content.contains("type: DataTypes.STRING,\n      allowNull: false,"));
        assert!(content.contains("type: DataTypes.BOOLEAN,\n      allowNull: true,"));
        assert!(content.contains("defaultValue: false,"));
        assert!(content.contains("defaultValue: 'draft',"));
        assert!(content.contains("type: DataTypes.DATEONLY,"));
        assert!(content.contains("tableName: 'posts',"));
        assert!(content.contains("module.exports = Post;"));
    }

    #[test]
    fn test_sequelize_type_mapping() {
        assert_eq!(sequelize_type(FieldType::String), "DataTypes.STRING");
        assert_eq!(sequelize_type(FieldType::Integer), "DataTypes.INTEGER");
        assert_eq!(sequelize_type(FieldType::Float), "DataTypes.FLOAT");
        assert_eq!(sequelize_type(FieldType::DateTime), "DataTypes.DATE");
    }

    #[test]
    fn test_date_defaults_render_as_strings() {
        let schema = post(
            Backend::Document,
            vec![SchemaAttribute::new("on", FieldType::Date).with_default("2024-01-01")],
        );
        assert!(render(&schema).content.contains("default: '2024-01-01',"));

        let schema = post(
            Backend::Relational,
            vec![SchemaAttribute::new("on", FieldType::DateTime).with_default("2024-01-01")],
        );
        assert!(render(&schema).content.contains("defaultValue: '2024-01-01',"));
    }
}
