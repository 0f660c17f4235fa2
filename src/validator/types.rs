//! Validation finding types

use std::fmt;

use serde::Serialize;

use crate::models::Relation;
use crate::registry::ParamKind;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Which payload of a component a parameter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSection {
    Init,
    Properties,
}

impl fmt::Display for ParamSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamSection::Init => write!(f, "init"),
            ParamSection::Properties => write!(f, "properties"),
        }
    }
}

/// One semantic problem in a topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Violation {
    /// Two components share a name
    DuplicateName { name: String },

    /// A `children`/`dependencies`/`affects` entry names nothing
    UnresolvedReference {
        referrer: String,
        relation: Relation,
        target: String,
    },

    /// A component without `class` that nobody lists as a child
    UnownedComponent { name: String },

    /// A component without `class` listed as a child by several components
    MultipleOwners { name: String, owners: Vec<String> },

    /// A component without `class` whose chain of single owners never
    /// reaches a component with a class. `chain` lists the owners walked.
    NoClassedOwner { name: String, chain: Vec<String> },

    MissingInitParam {
        component: String,
        class: String,
        param: String,
    },

    WrongParamKind {
        component: String,
        class: String,
        section: ParamSection,
        param: String,
        expected: ParamKind,
        found: &'static str,
    },

    /// `init` parameter not listed by a strict class schema
    UnexpectedInitParam {
        component: String,
        class: String,
        param: String,
    },

    UnknownClass { component: String, class: String },

    UnknownField {
        component: String,
        field: String,
        suggestion: Option<String>,
    },
}

impl Violation {
    /// Stable identifier, also used as the JSON `code` tag.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::DuplicateName { .. } => "duplicate_name",
            Violation::UnresolvedReference { .. } => "unresolved_reference",
            Violation::UnownedComponent { .. } => "unowned_component",
            Violation::MultipleOwners { .. } => "multiple_owners",
            Violation::NoClassedOwner { .. } => "no_classed_owner",
            Violation::MissingInitParam { .. } => "missing_init_param",
            Violation::WrongParamKind { .. } => "wrong_param_kind",
            Violation::UnexpectedInitParam { .. } => "unexpected_init_param",
            Violation::UnknownClass { .. } => "unknown_class",
            Violation::UnknownField { .. } => "unknown_field",
        }
    }

    /// Component the finding is attached to.
    pub fn component(&self) -> &str {
        match self {
            Violation::DuplicateName { name }
            | Violation::UnownedComponent { name }
            | Violation::MultipleOwners { name, .. }
            | Violation::NoClassedOwner { name, .. } => name,
            Violation::UnresolvedReference { referrer, .. } => referrer,
            Violation::MissingInitParam { component, .. }
            | Violation::WrongParamKind { component, .. }
            | Violation::UnexpectedInitParam { component, .. }
            | Violation::UnknownClass { component, .. }
            | Violation::UnknownField { component, .. } => component,
        }
    }

    /// Follow-up advice for the document author, when there is an obvious one.
    pub fn recommendation(&self) -> Option<String> {
        match self {
            Violation::UnresolvedReference { target, .. } => Some(format!(
                "Define a component named '{}' or declare it in [validation] builtins",
                target
            )),
            Violation::UnownedComponent { .. } => {
                Some("Add a 'class' or list it under the 'children' of its parent".to_string())
            }
            Violation::MultipleOwners { .. } => {
                Some("A component without 'class' must have exactly one parent".to_string())
            }
            Violation::NoClassedOwner { .. } => {
                Some("Give one component of the ownership chain a 'class'".to_string())
            }
            Violation::UnknownField {
                suggestion: Some(s),
                ..
            } => Some(format!("Did you mean '{}'?", s)),
            _ => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateName { name } => {
                write!(f, "component name '{}' is defined more than once", name)
            }
            Violation::UnresolvedReference {
                referrer,
                relation,
                target,
            } => write!(
                f,
                "'{}' references unknown component '{}' in {}",
                referrer, target, relation
            ),
            Violation::UnownedComponent { name } => write!(
                f,
                "unowned component '{}': it has no class and no parent lists it as a child",
                name
            ),
            Violation::MultipleOwners { name, owners } => write!(
                f,
                "component '{}' has no class but is a child of several components: {}",
                name,
                owners.join(", ")
            ),
            Violation::NoClassedOwner { name, chain } => write!(
                f,
                "component '{}' has no class and no owner with a class: owned via {}",
                name,
                chain.join(" -> ")
            ),
            Violation::MissingInitParam {
                component,
                class,
                param,
            } => write!(
                f,
                "'{}' is missing required init parameter '{}' of class {}",
                component, param, class
            ),
            Violation::WrongParamKind {
                component,
                section,
                param,
                expected,
                found,
                ..
            } => write!(
                f,
                "'{}' {}.{} should be {}, found {}",
                component,
                section,
                param,
                expected.as_str(),
                found
            ),
            Violation::UnexpectedInitParam {
                component,
                class,
                param,
            } => write!(
                f,
                "'{}' passes init parameter '{}' not accepted by class {}",
                component, param, class
            ),
            Violation::UnknownClass { component, class } => {
                write!(f, "'{}' uses class {} which has no registered schema", component, class)
            }
            Violation::UnknownField {
                component, field, ..
            } => write!(f, "unknown field '{}' in component '{}'", field, component),
        }
    }
}
