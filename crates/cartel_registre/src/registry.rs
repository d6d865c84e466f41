//! Component index seam and the in-memory registry.
//!
//! The resolution engine only talks to [`ComponentIndex`]. [`Registry`] is an
//! immutable snapshot implementing it, assembled with [`RegistryBuilder`] or
//! loaded from JSON (see [`crate::snapshot`]).

use cartel_carton::{smallvec, CompactString, FxHashMap};

use crate::model::{
    Component, ComponentId, Container, ContainerId, ContainerKind, Registration,
};

/// Read access to the project-wide component index.
pub trait ComponentIndex {
    /// Nearest container for a template file, if the file is a component context.
    fn enclosing_container(&self, path: &str) -> Option<ContainerId>;

    fn container(&self, id: ContainerId) -> Option<&Container>;

    fn component(&self, id: ComponentId) -> Option<&Component>;

    /// Components declared in the project but registered nowhere in reach.
    fn unregistered(&self) -> &[Registration];
}

/// Immutable registry snapshot.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    containers: Vec<Container>,
    components: Vec<Component>,
    files: FxHashMap<CompactString, ContainerId>,
    unregistered: Vec<Registration>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    #[inline]
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl ComponentIndex for Registry {
    fn enclosing_container(&self, path: &str) -> Option<ContainerId> {
        self.files.get(normalize_path(path).as_str()).copied()
    }

    #[inline]
    fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(id.as_u32() as usize)
    }

    #[inline]
    fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.as_u32() as usize)
    }

    #[inline]
    fn unregistered(&self) -> &[Registration] {
        &self.unregistered
    }
}

/// Normalize a file path used as a lookup key.
///
/// Backslashes become forward slashes and a leading `./` is dropped.
pub fn normalize_path(path: &str) -> CompactString {
    let path = path.strip_prefix("./").unwrap_or(path);
    if path.contains('\\') {
        CompactString::from(path.replace('\\', "/"))
    } else {
        CompactString::from(path)
    }
}

/// Incremental construction of a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Add an empty container.
    pub fn add_container(&mut self, kind: ContainerKind) -> ContainerId {
        let id = ContainerId::new(self.registry.containers.len() as u32);
        self.registry.containers.push(Container {
            id,
            kind,
            registrations: Vec::new(),
            parents: smallvec![],
        });
        id
    }

    /// Add a component. Its `parents` are recomputed on [`build`](Self::build).
    pub fn add_component(&mut self, component: Component) -> ComponentId {
        let id = ComponentId::new(self.registry.components.len() as u32);
        self.registry.components.push(component);
        id
    }

    /// Make `component` visible under `name` in `container`.
    pub fn register(
        &mut self,
        container: ContainerId,
        name: impl Into<CompactString>,
        component: ComponentId,
    ) -> &mut Self {
        let name = name.into();
        match self.registry.containers.get_mut(container.as_u32() as usize) {
            Some(target) => target.registrations.push(Registration { name, component }),
            None => tracing::warn!("register `{}`: unknown container {:?}", name, container),
        }
        self
    }

    /// Search `parent` after `child`.
    pub fn add_parent(&mut self, child: ContainerId, parent: ContainerId) -> &mut Self {
        match self.registry.containers.get_mut(child.as_u32() as usize) {
            Some(target) => {
                if !target.parents.contains(&parent) {
                    target.parents.push(parent);
                }
            }
            None => tracing::warn!("add_parent: unknown container {:?}", child),
        }
        self
    }

    /// Use `container` as the enclosing container of the template at `path`.
    pub fn bind_file(&mut self, path: &str, container: ContainerId) -> &mut Self {
        self.registry.files.insert(normalize_path(path), container);
        self
    }

    /// Declare a component that is not registered in any container.
    pub fn add_unregistered(
        &mut self,
        name: impl Into<CompactString>,
        component: ComponentId,
    ) -> &mut Self {
        self.registry.unregistered.push(Registration {
            name: name.into(),
            component,
        });
        self
    }

    /// Finish the registry, deriving each component's parent containers.
    pub fn build(mut self) -> Registry {
        for component in &mut self.registry.components {
            component.parents.clear();
        }

        for container in &self.registry.containers {
            for registration in &container.registrations {
                if let Some(component) = self
                    .registry
                    .components
                    .get_mut(registration.component.as_u32() as usize)
                {
                    if !component.parents.contains(&container.id) {
                        component.parents.push(container.id);
                    }
                }
            }
        }

        tracing::debug!(
            "built registry: {} containers, {} components, {} files",
            self.registry.containers.len(),
            self.registry.components.len(),
            self.registry.files.len()
        );

        self.registry
    }
}
