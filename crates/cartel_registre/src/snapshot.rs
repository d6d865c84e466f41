//! JSON registry snapshots.
//!
//! A snapshot is the serialized form of the component index produced by an
//! external indexer. Components and containers reference each other by string
//! ids which are resolved when the snapshot is turned into a [`Registry`].
//!
//! ```json
//! {
//!   "components": [
//!     { "id": "user-card", "source": { "path": "src/UserCard.vue" },
//!       "props": [{ "name": "isActive", "type": "BOOLEAN" }] }
//!   ],
//!   "containers": [
//!     { "id": "app-local", "kind": "localScope", "parents": ["global"],
//!       "registrations": [{ "name": "UserCard", "component": "user-card" }] },
//!     { "id": "global", "kind": "globalRegistry" }
//!   ],
//!   "files": { "src/App.vue": "app-local" }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use cartel_carton::{CompactString, FxHashMap};
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};
use crate::model::{
    Component, ComponentId, ContainerId, ContainerKind, EmitCall, InputProperty, SourceHandle,
};
use crate::registry::Registry;

/// Serialized component index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
    #[serde(default)]
    pub containers: Vec<ContainerEntry>,
    /// Template path to enclosing container id.
    #[serde(default)]
    pub files: BTreeMap<CompactString, CompactString>,
    /// Components declared in the project but not registered anywhere.
    #[serde(default)]
    pub unregistered: Vec<RegistrationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    pub id: CompactString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceHandle>,
    #[serde(default)]
    pub props: Vec<InputProperty>,
    #[serde(default)]
    pub emits: Vec<EmitCall>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerEntry {
    pub id: CompactString,
    #[serde(flatten)]
    pub kind: ContainerKind,
    #[serde(default)]
    pub registrations: Vec<RegistrationEntry>,
    #[serde(default)]
    pub parents: Vec<CompactString>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationEntry {
    pub name: CompactString,
    pub component: CompactString,
}

impl Registry {
    /// Build a registry from a snapshot, resolving every string id.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> RegistryResult<Self> {
        let mut builder = Registry::builder();

        let mut component_ids: FxHashMap<CompactString, ComponentId> = FxHashMap::default();
        for entry in snapshot.components {
            if component_ids.contains_key(&entry.id) {
                return Err(RegistryError::DuplicateComponent(entry.id));
            }
            let id = builder.add_component(Component {
                source: entry.source,
                props: entry.props,
                emits: entry.emits,
                parents: Default::default(),
            });
            component_ids.insert(entry.id, id);
        }

        let mut container_ids: FxHashMap<CompactString, ContainerId> = FxHashMap::default();
        for entry in &snapshot.containers {
            if container_ids.contains_key(&entry.id) {
                return Err(RegistryError::DuplicateContainer(entry.id.clone()));
            }
            let id = builder.add_container(entry.kind.clone());
            container_ids.insert(entry.id.clone(), id);
        }

        let resolve_component = |registration: &RegistrationEntry| {
            component_ids
                .get(&registration.component)
                .copied()
                .ok_or_else(|| RegistryError::UnknownComponent {
                    id: registration.component.clone(),
                    name: registration.name.clone(),
                })
        };

        for entry in &snapshot.containers {
            let container = container_ids[&entry.id];
            for registration in &entry.registrations {
                let component = resolve_component(registration)?;
                builder.register(container, registration.name.clone(), component);
            }
            for parent in &entry.parents {
                let parent_id = container_ids.get(parent).copied().ok_or_else(|| {
                    RegistryError::UnknownContainer {
                        id: parent.clone(),
                        referrer: format!("container `{}`", entry.id).into(),
                    }
                })?;
                builder.add_parent(container, parent_id);
            }
        }

        for (path, container) in &snapshot.files {
            let container_id = container_ids.get(container).copied().ok_or_else(|| {
                RegistryError::UnknownContainer {
                    id: container.clone(),
                    referrer: format!("file `{}`", path).into(),
                }
            })?;
            builder.bind_file(path, container_id);
        }

        for registration in &snapshot.unregistered {
            let component = resolve_component(registration)?;
            builder.add_unregistered(registration.name.clone(), component);
        }

        Ok(builder.build())
    }

    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let snapshot: RegistrySnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Read and parse a JSON snapshot file.
    pub fn load(path: &Path) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("loading registry snapshot {}", path.display());
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropType;
    use crate::registry::ComponentIndex;

    const SNAPSHOT: &str = r#"{
        "components": [
            { "id": "user-card", "source": { "path": "src/UserCard.vue", "offset": 12 },
              "props": [
                { "name": "isActive", "type": "BOOLEAN" },
                { "name": "userName", "type": "STRING" }
              ],
              "emits": [{ "name": "select", "signature": "(id: number) => void" }] },
            { "id": "btn", "source": { "path": "node_modules/ui/Btn.js" } }
        ],
        "containers": [
            { "id": "app-local", "kind": "localScope", "parents": ["ui"],
              "registrations": [{ "name": "UserCard", "component": "user-card" }] },
            { "id": "ui", "kind": "plugin", "module": "ui-kit",
              "registrations": [{ "name": "UiBtn", "component": "btn" }] }
        ],
        "files": { "src/App.vue": "app-local" },
        "unregistered": [{ "name": "UserCard", "component": "user-card" }]
    }"#;

    #[test]
    fn test_from_json() {
        let registry = Registry::from_json(SNAPSHOT).unwrap();
        let local = registry.enclosing_container("src/App.vue").unwrap();
        let container = registry.container(local).unwrap();
        assert_eq!(container.kind, ContainerKind::LocalScope);
        assert_eq!(container.registrations.len(), 1);
        assert_eq!(container.parents.len(), 1);

        let plugin = registry.container(container.parents[0]).unwrap();
        assert_eq!(plugin.kind.module_name(), Some("ui-kit"));

        let card = registry.component(container.registrations[0].component).unwrap();
        assert_eq!(card.props.len(), 2);
        assert_eq!(card.props[0].prop_type, Some(PropType::BOOLEAN));
        assert_eq!(card.emits[0].signature.as_deref(), Some("(id: number) => void"));
        assert_eq!(card.source.as_ref().map(|s| s.offset), Some(12));
        assert_eq!(registry.unregistered().len(), 1);
    }

    #[test]
    fn test_unknown_component() {
        let json = r#"{
            "containers": [{ "id": "g", "kind": "globalRegistry",
              "registrations": [{ "name": "Missing", "component": "nope" }] }]
        }"#;
        let err = Registry::from_json(json).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownComponent { .. }));
    }

    #[test]
    fn test_unknown_parent_container() {
        let json = r#"{
            "containers": [{ "id": "l", "kind": "localScope", "parents": ["app"] }]
        }"#;
        let err = Registry::from_json(json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown container `app` referenced by container `l`"
        );
    }

    #[test]
    fn test_duplicate_ids() {
        let json = r#"{ "components": [{ "id": "a" }, { "id": "a" }] }"#;
        assert!(matches!(
            Registry::from_json(json).unwrap_err(),
            RegistryError::DuplicateComponent(_)
        ));

        let json = r#"{ "containers": [
            { "id": "g", "kind": "globalRegistry" },
            { "id": "g", "kind": "application" }
        ] }"#;
        assert!(matches!(
            Registry::from_json(json).unwrap_err(),
            RegistryError::DuplicateContainer(_)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Registry::from_json("{ not json").unwrap_err(),
            RegistryError::JsonParse(_)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let registry = Registry::load(&path).unwrap();
        assert_eq!(registry.components().len(), 2);
        assert!(matches!(
            Registry::load(&dir.path().join("missing.json")).unwrap_err(),
            RegistryError::Io(_)
        ));
    }
}
