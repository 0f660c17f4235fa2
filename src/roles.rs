//! Role index
//!
//! Consumers bind semantic meaning to components by role ("stage",
//! "lens", "ccd") rather than by name.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Topology;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleIndex {
    /// Role -> component names, in document order
    pub roles: BTreeMap<String, Vec<String>>,
    /// Components without a role
    pub unassigned: Vec<String>,
}

impl RoleIndex {
    pub fn build(topology: &Topology) -> Self {
        let mut index = Self::default();
        for component in topology {
            match &component.role {
                Some(role) => index
                    .roles
                    .entry(role.clone())
                    .or_default()
                    .push(component.name.clone()),
                None => index.unassigned.push(component.name.clone()),
            }
        }
        index
    }

    pub fn get(&self, role: &str) -> &[String] {
        self.roles.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The single component holding `role`, if exactly one does.
    pub fn unique(&self, role: &str) -> Option<&str> {
        match self.get(role) {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    /// Roles held by more than one component.
    pub fn shared(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.roles
            .iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(role, names)| (role.as_str(), names.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Component;

    #[test]
    fn test_role_index() {
        let topo = Topology::from_components(vec![
            Component::new("SECOM").with_class("Microscope").with_role("secom"),
            Component::new("Stage").with_class("S").with_role("stage"),
            Component::new("Focus").with_class("S").with_role("focus"),
            Component::new("Aligner").with_class("S").with_role("stage"),
            Component::new("Controller").with_class("C"),
        ]);
        let index = RoleIndex::build(&topo);

        assert_eq!(
            index.get("stage").to_vec(),
            vec!["Stage".to_string(), "Aligner".to_string()]
        );
        assert_eq!(index.unique("focus"), Some("Focus"));
        assert_eq!(index.unique("stage"), None);
        assert!(index.get("ccd").is_empty());
        assert_eq!(index.unassigned, vec!["Controller".to_string()]);
        assert_eq!(index.shared().map(|(r, _)| r).collect::<Vec<_>>(), vec!["stage"]);
    }
}
