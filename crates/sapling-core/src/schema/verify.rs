use super::app::{self, InfoKind, Mapping, Model, Property};
use crate::{value::Type, Error, Result};

use std::collections::HashSet;

/// Checks a single model against the set of models it was registered with.
pub(super) struct Verify<'a> {
    pub(super) models: &'a app::Schema,
}

impl Verify<'_> {
    pub(super) fn verify(&self, model: &Model) -> Result<()> {
        self.verify_property_names_are_unique(model)?;
        self.verify_single_identifier(model)?;

        for property in &model.properties {
            self.verify_property(model, property)?;
        }

        Ok(())
    }

    fn verify_property_names_are_unique(&self, model: &Model) -> Result<()> {
        let mut seen = HashSet::new();

        for property in &model.properties {
            if !seen.insert(&property.name[..]) {
                return Err(invalid(
                    model,
                    format!("duplicate property `{}`", property.name),
                ));
            }
        }

        Ok(())
    }

    fn verify_single_identifier(&self, model: &Model) -> Result<()> {
        let ids = model
            .properties
            .iter()
            .filter(|property| property.mapping.is_id())
            .count();

        if ids > 1 {
            return Err(invalid(model, "more than one identifier property"));
        }

        Ok(())
    }

    fn verify_property(&self, model: &Model, property: &Property) -> Result<()> {
        if let Type::List(element) = &property.ty {
            if element.is_list() {
                return Err(invalid(
                    model,
                    format!("property `{}` is a collection of collections", property.name),
                ));
            }
        }

        if let Some(name) = property.ty.model_name() {
            if !self.models.contains_name(name) {
                return Err(invalid(
                    model,
                    format!(
                        "property `{}` references model `{name}`, which is not registered",
                        property.name
                    ),
                ));
            }
        }

        match &property.mapping {
            Mapping::Id => {
                if !matches!(property.ty, Type::Uuid | Type::String) {
                    return Err(unexpected_type(model, property, "Uuid or String"));
                }
            }
            Mapping::Field(field) => {
                if field.field_name.trim().is_empty() {
                    return Err(invalid(
                        model,
                        format!("property `{}` maps to an empty field name", property.name),
                    ));
                }
            }
            Mapping::Info(info) => {
                let ok = match info.kind {
                    InfoKind::TemplateId => matches!(property.ty, Type::Uuid | Type::String),
                    _ => property.ty == Type::String,
                };

                if !ok {
                    let expected = match info.kind {
                        InfoKind::TemplateId => "Uuid or String",
                        _ => "String",
                    };
                    return Err(unexpected_type(model, property, expected));
                }
            }
            Mapping::Query(query) => {
                if query.query.trim().is_empty() {
                    return Err(invalid(
                        model,
                        format!("property `{}` has an empty query", property.name),
                    ));
                }

                if !is_model_or_models(&property.ty) {
                    return Err(unexpected_type(model, property, "a model or list of models"));
                }
            }
            Mapping::Children => {
                if !matches!(&property.ty, Type::List(element) if element.is_model()) {
                    return Err(unexpected_type(model, property, "a list of models"));
                }
            }
            Mapping::Parent => {
                if !property.ty.is_model() {
                    return Err(unexpected_type(model, property, "a model"));
                }
            }
        }

        Ok(())
    }
}

fn is_model_or_models(ty: &Type) -> bool {
    match ty {
        Type::Model(_) => true,
        Type::List(element) => element.is_model(),
        _ => false,
    }
}

fn invalid(model: &Model, message: impl Into<String>) -> Error {
    Error::invalid_configuration(&model.name, message.into())
}

fn unexpected_type(model: &Model, property: &Property, expected: &str) -> Error {
    invalid(
        model,
        format!(
            "property `{}` has type {}, expected {expected}",
            property.name, property.ty
        ),
    )
}
