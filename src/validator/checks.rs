//! Individual validation checks
//!
//! Each check walks the whole topology and reports every finding to the
//! sink; none of them stops at the first problem.

use std::collections::{BTreeMap, HashSet};

use crate::config::{AffectsPolicy, UnknownClassPolicy};
use crate::models::{ParamValue, Relation, Topology};
use crate::registry::{ClassSchema, ParamSpec};

use super::report::ReportSink;
use super::types::{ParamSection, Violation};
use super::ValidationOptions;

pub(crate) fn check_unique_names(topology: &Topology, sink: &mut impl ReportSink) {
    for name in topology.duplicate_names() {
        sink.add_error(Violation::DuplicateName { name });
    }
}

pub(crate) fn check_references(
    topology: &Topology,
    options: &ValidationOptions,
    sink: &mut impl ReportSink,
) {
    for component in topology {
        for (relation, target) in component.references() {
            if topology.contains(target) || options.is_builtin(target) {
                continue;
            }
            let violation = Violation::UnresolvedReference {
                referrer: component.name.clone(),
                relation,
                target: target.to_string(),
            };
            if relation == Relation::Affects && options.unresolved_affects == AffectsPolicy::Warn {
                sink.add_warning(violation);
            } else {
                sink.add_error(violation);
            }
        }
    }
}

/// A component without `class` has no lifecycle of its own: exactly one
/// parent must create it.
pub(crate) fn check_ownership(topology: &Topology, sink: &mut impl ReportSink) {
    for component in topology.iter().filter(|c| !c.is_classed()) {
        let mut owners: Vec<String> = Vec::new();
        for owner in topology.owners_of(&component.name) {
            if !owners.contains(&owner.name) {
                owners.push(owner.name.clone());
            }
        }

        match owners.len() {
            0 => sink.add_error(Violation::UnownedComponent {
                name: component.name.clone(),
            }),
            1 => {
                let chain = unclassed_owner_chain(topology, &component.name, &owners[0]);
                if let Some(chain) = chain {
                    sink.add_error(Violation::NoClassedOwner {
                        name: component.name.clone(),
                        chain,
                    });
                }
            }
            _ => sink.add_error(Violation::MultipleOwners {
                name: component.name.clone(),
                owners,
            }),
        }
    }
}

/// Walk up from `owner` while every step has exactly one owner.
///
/// Returns the walked owners when the walk stops at a component without
/// class: one that loops back, has no owner, or has several. `None` means a
/// classed owner was reached.
fn unclassed_owner_chain(topology: &Topology, name: &str, owner: &str) -> Option<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::from([name]);
    let mut chain = Vec::new();
    let mut current = owner;

    loop {
        chain.push(current.to_string());
        let component = topology.component(current)?;
        if component.is_classed() {
            return None;
        }
        if !visited.insert(current) {
            return Some(chain);
        }

        let mut owners = topology.owners_of(current).map(|c| c.name.as_str());
        let next = owners.next();
        match next {
            Some(next) if owners.all(|other| other == next) => current = next,
            _ => return Some(chain),
        }
    }
}

pub(crate) fn check_class_schemas(
    topology: &Topology,
    options: &ValidationOptions,
    sink: &mut impl ReportSink,
) {
    for component in topology {
        let Some(class) = component.class.as_deref() else {
            continue;
        };
        let Some(schema) = options.registry.get(class) else {
            if options.unknown_class == UnknownClassPolicy::Warn {
                sink.add_warning(Violation::UnknownClass {
                    component: component.name.clone(),
                    class: class.to_string(),
                });
            }
            continue;
        };

        for param in schema.missing_init(&component.init) {
            sink.add_error(Violation::MissingInitParam {
                component: component.name.clone(),
                class: class.to_string(),
                param: param.to_string(),
            });
        }

        check_kinds(
            &component.name,
            class,
            ParamSection::Init,
            &schema.init,
            &component.init,
            sink,
        );
        check_kinds(
            &component.name,
            class,
            ParamSection::Properties,
            &schema.properties,
            &component.properties,
            sink,
        );

        if schema.strict {
            check_unexpected_init(&component.name, class, schema, &component.init, sink);
        }
    }
}

fn check_kinds(
    component: &str,
    class: &str,
    section: ParamSection,
    specs: &BTreeMap<String, ParamSpec>,
    values: &BTreeMap<String, ParamValue>,
    sink: &mut impl ReportSink,
) {
    for (param, value) in values {
        let Some(spec) = specs.get(param) else {
            continue;
        };
        if !spec.kind.accepts(value) {
            sink.add_error(Violation::WrongParamKind {
                component: component.to_string(),
                class: class.to_string(),
                section,
                param: param.clone(),
                expected: spec.kind,
                found: value.kind_name(),
            });
        }
    }
}

fn check_unexpected_init(
    component: &str,
    class: &str,
    schema: &ClassSchema,
    init: &BTreeMap<String, ParamValue>,
    sink: &mut impl ReportSink,
) {
    for param in init.keys().filter(|k| !schema.init.contains_key(*k)) {
        sink.add_error(Violation::UnexpectedInitParam {
            component: component.to_string(),
            class: class.to_string(),
            param: param.clone(),
        });
    }
}
