//! Interactive collection of one model schema.

use std::collections::HashSet;

use crate::error::{GenError, Result};
use crate::naming::ModelNames;
use crate::prompt::Prompter;
use crate::report;
use crate::schema::{Backend, FieldType, ModelSchema, SchemaAttribute, validate_attribute_name};

const DONE: &str = "done";
const NO_DEFAULT: &str = "No Default";
const SPECIFY_DEFAULT: &str = "Specify Default";

/// Outcome of one collection round.
#[derive(Debug, PartialEq, Eq)]
pub enum Round {
    Model(ModelSchema),
    /// Empty model name: the user is done adding models.
    Finished,
}

enum State {
    AwaitModelName,
    AwaitAttributeName,
    AwaitAttributeType { name: String },
    AwaitRequiredFlag { attr: SchemaAttribute },
    AwaitUniqueFlag { attr: SchemaAttribute },
    AwaitDefaultChoice { attr: SchemaAttribute },
    AwaitDefaultValue { attr: SchemaAttribute },
    Finalize,
}

/// Runs prompt rounds for one backend, remembering which models this
/// session has already produced.
pub struct AttributeCollector {
    backend: Backend,
    seen_models: HashSet<String>,
}

impl AttributeCollector {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            seen_models: HashSet::new(),
        }
    }

    pub fn collect(&mut self, prompter: &mut dyn Prompter) -> Result<Round> {
        let type_options: Vec<&str> = self
            .backend
            .field_types()
            .iter()
            .map(|ty| ty.as_str())
            .collect();

        let mut names: Option<ModelNames> = None;
        let mut attributes: Vec<SchemaAttribute> = Vec::new();
        let mut state = State::AwaitModelName;

        loop {
            state = match state {
                State::AwaitModelName => {
                    let raw = prompter.text("Enter the name of the model (singular, PascalCase):")?;
                    if raw.trim().is_empty() {
                        return Ok(Round::Finished);
                    }
                    match self.check_model_name(&raw) {
                        Ok(derived) => {
                            names = Some(derived);
                            State::AwaitAttributeName
                        }
                        Err(GenError::InputValidation(msg)) => {
                            report::rejected(&msg);
                            State::AwaitModelName
                        }
                        Err(e) => return Err(e),
                    }
                }
                State::AwaitAttributeName => {
                    let Some(model) = names.as_ref() else {
                        return Err(GenError::invalid("Model name was never collected"));
                    };
                    let raw = prompter.text("Enter attribute name (or 'done' to finish):")?;
                    let name = raw.trim();
                    if name.eq_ignore_ascii_case(DONE) {
                        State::Finalize
                    } else if let Err(e) = validate_attribute_name(name, &attributes, model) {
                        report::rejected(&e.to_string());
                        State::AwaitAttributeName
                    } else {
                        State::AwaitAttributeType {
                            name: name.to_string(),
                        }
                    }
                }
                State::AwaitAttributeType { name } => {
                    let picked = prompter.choice(
                        &format!("Select type for {name}:"),
                        &type_options,
                        None,
                    )?;
                    let ty = FieldType::parse_for(&picked, self.backend)?;
                    State::AwaitRequiredFlag {
                        attr: SchemaAttribute::new(name, ty),
                    }
                }
                State::AwaitRequiredFlag { attr } => {
                    let required = prompter.confirm(&format!("Is {} required?", attr.name), false)?;
                    State::AwaitUniqueFlag {
                        attr: if required { attr.required() } else { attr },
                    }
                }
                State::AwaitUniqueFlag { attr } => {
                    let unique = prompter.confirm(&format!("Should {} be unique?", attr.name), false)?;
                    State::AwaitDefaultChoice {
                        attr: if unique { attr.unique() } else { attr },
                    }
                }
                State::AwaitDefaultChoice { attr } => {
                    let picked = prompter.choice(
                        &format!("Add a default value for {}?", attr.name),
                        &[NO_DEFAULT, SPECIFY_DEFAULT],
                        Some(NO_DEFAULT),
                    )?;
                    if picked == SPECIFY_DEFAULT {
                        State::AwaitDefaultValue { attr }
                    } else {
                        attributes.push(attr);
                        State::AwaitAttributeName
                    }
                }
                State::AwaitDefaultValue { attr } => {
                    let raw = prompter.text(&format!("Enter default value ({}):", attr.ty))?;
                    match attr.ty.normalize_default(&raw) {
                        Ok(value) => {
                            attributes.push(attr.with_default(value));
                            State::AwaitAttributeName
                        }
                        Err(GenError::InputValidation(msg)) => {
                            report::rejected(&msg);
                            State::AwaitDefaultValue { attr }
                        }
                        Err(e) => return Err(e),
                    }
                }
                State::Finalize => {
                    let Some(names) = names.take() else {
                        return Err(GenError::invalid("Model name was never collected"));
                    };
                    let schema = ModelSchema::new(&names.pascal, attributes, self.backend)?;
                    self.seen_models.insert(names.pascal);
                    return Ok(Round::Model(schema));
                }
            };
        }
    }

    fn check_model_name(&self, raw: &str) -> Result<ModelNames> {
        let names = ModelNames::derive(raw)?;
        if self.seen_models.contains(&names.pascal) {
            return Err(GenError::invalid(format!(
                "Model '{}' was already generated in this session",
                names.pascal
            )));
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::{ScriptedPrompter, script};

    #[test]
    fn test_single_attribute_round() {
        let mut prompter =
            ScriptedPrompter::new(script!["Post", "title", "String", true, false, "No Default", "done"]);
        let mut collector = AttributeCollector::new(Backend::Document);

        let Round::Model(schema) = collector.collect(&mut prompter).unwrap() else {
            panic!("expected a model");
        };
        assert_eq!(schema.name(), "Post");
        assert_eq!(schema.backend, Backend::Document);
        assert_eq!(
            schema.attributes,
            vec![SchemaAttribute {
                name: "title".to_string(),
                ty: FieldType::String,
                required: true,
                unique: false,
                default: None,
            }]
        );
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_empty_model_name_finishes() {
        let mut prompter = ScriptedPrompter::new(script![""]);
        let mut collector = AttributeCollector::new(Backend::Document);
        assert_eq!(collector.collect(&mut prompter).unwrap(), Round::Finished);

        let mut prompter = ScriptedPrompter::new(script!["   "]);
        assert_eq!(collector.collect(&mut prompter).unwrap(), Round::Finished);
    }

    #[test]
    fn test_default_value_and_order() {
        let mut prompter = ScriptedPrompter::new(script![
            "article",
            "status", "String", false, false, "Specify Default", "draft",
            "views", "Integer", false, false, "Specify Default", "0",
            "slug", "String", true, true, "No Default",
            "DONE",
        ]);
        let mut collector = AttributeCollector::new(Backend::Relational);

        let Round::Model(schema) = collector.collect(&mut prompter).unwrap() else {
            panic!("expected a model");
        };
        assert_eq!(schema.name(), "Article");
        let names: Vec<_> = schema.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["status", "views", "slug"]);
        assert_eq!(schema.attributes[0].default.as_deref(), Some("draft"));
        assert_eq!(schema.attributes[1].ty, FieldType::Integer);
        assert!(schema.attributes[2].required && schema.attributes[2].unique);
    }

    #[test]
    fn test_invalid_attribute_names_are_reprompted() {
        let mut prompter = ScriptedPrompter::new(script![
            "Post",
            "title", "String", false, false, "No Default",
            "",
            "title",
            "bad name",
            "body", "String", false, false, "No Default",
            "done",
        ]);
        let mut collector = AttributeCollector::new(Backend::Document);

        let Round::Model(schema) = collector.collect(&mut prompter).unwrap() else {
            panic!("expected a model");
        };
        assert_eq!(schema.attributes.len(), 2);
        let attribute_prompts = prompter
            .asked
            .iter()
            .filter(|m| m.starts_with("Enter attribute name"))
            .count();
        assert_eq!(attribute_prompts, 6);
    }

    #[test]
    fn test_names_used_by_generated_code_are_reprompted() {
        let mut prompter = ScriptedPrompter::new(script![
            "Comment",
            "comment",
            "updated",
            "payload",
            "req",
            "getComments",
            "text", "String", true, false, "No Default",
            "done",
        ]);
        let mut collector = AttributeCollector::new(Backend::Relational);

        let Round::Model(schema) = collector.collect(&mut prompter).unwrap() else {
            panic!("expected a model");
        };
        let names: Vec<_> = schema.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["text"]);
        let attribute_prompts = prompter
            .asked
            .iter()
            .filter(|m| m.starts_with("Enter attribute name"))
            .count();
        assert_eq!(attribute_prompts, 7);
    }

    #[test]
    fn test_invalid_defaults_are_reprompted() {
        let mut prompter = ScriptedPrompter::new(script![
            "Post",
            "views", "Number", false, false, "Specify Default", "", "ten", "3",
            "published", "Boolean", false, false, "Specify Default", "yes", "false",
            "on", "Date", false, false, "Specify Default", "2024-01-01",
            "done",
        ]);
        let mut collector = AttributeCollector::new(Backend::Document);

        let Round::Model(schema) = collector.collect(&mut prompter).unwrap() else {
            panic!("expected a model");
        };
        assert_eq!(prompter.remaining(), 0);
        let defaults: Vec<_> = schema
            .attributes
            .iter()
            .map(|a| a.default_literal().unwrap())
            .collect();
        assert_eq!(defaults, ["3", "false", "'2024-01-01'"]);
        let default_prompts = prompter
            .asked
            .iter()
            .filter(|m| m.starts_with("Enter default value"))
            .count();
        assert_eq!(default_prompts, 6);
    }

    #[test]
    fn test_repeated_model_name_is_reprompted() {
        let mut collector = AttributeCollector::new(Backend::Document);
        let mut prompter = ScriptedPrompter::new(script!["Post", "done"]);
        assert!(matches!(collector.collect(&mut prompter).unwrap(), Round::Model(_)));

        let mut prompter = ScriptedPrompter::new(script!["post", "Comment", "done"]);
        let Round::Model(schema) = collector.collect(&mut prompter).unwrap() else {
            panic!("expected a model");
        };
        assert_eq!(schema.name(), "Comment");
    }

    #[test]
    fn test_model_without_attributes() {
        let mut prompter = ScriptedPrompter::new(script!["Tag", "done"]);
        let mut collector = AttributeCollector::new(Backend::Relational);
        let Round::Model(schema) = collector.collect(&mut prompter).unwrap() else {
            panic!("expected a model");
        };
        assert!(schema.attributes.is_empty());
    }
}
