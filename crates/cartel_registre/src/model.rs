//! Component model consumed by the resolution engine.
//!
//! These structures are owned by the registry. Queries only borrow them for
//! their own duration and never mutate them.

use bitflags::bitflags;
use cartel_carton::{CompactString, SmallVec};
use serde::{Deserialize, Serialize};

use crate::proximity::Proximity;

/// Identifier of a container inside a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerId(u32);

impl ContainerId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Identifier of a component inside a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u32);

impl ComponentId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Location of a declaration in the project.
///
/// Implicit declarations (global registrations without a file, synthetic
/// components) carry no handle at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceHandle {
    /// Project-relative path of the declaring file.
    pub path: CompactString,
    /// Byte offset of the declaration inside the file.
    #[serde(default)]
    pub offset: u32,
}

impl SourceHandle {
    pub fn new(path: impl Into<CompactString>, offset: u32) -> Self {
        Self {
            path: path.into(),
            offset,
        }
    }

    /// Whether the declaring file is a TypeScript module.
    pub fn is_typescript(&self) -> bool {
        [".ts", ".tsx", ".mts", ".cts"]
            .iter()
            .any(|ext| self.path.ends_with(ext))
    }

    /// Whether the declaring file belongs to an installed package.
    pub fn is_library(&self) -> bool {
        self.path
            .split(['/', '\\'])
            .any(|segment| segment == "node_modules")
    }
}

bitflags! {
    /// Declared runtime type of an input property.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PropType: u8 {
        const STRING = 1 << 0;
        const NUMBER = 1 << 1;
        const BOOLEAN = 1 << 2;
        const OBJECT = 1 << 3;
        const ARRAY = 1 << 4;
        const FUNCTION = 1 << 5;
        /// `any` / `unknown`, assignable from everything.
        const ANY = 1 << 6;
    }
}

impl PropType {
    /// Whether a boolean value may be assigned to this type.
    #[inline]
    pub fn accepts_boolean(self) -> bool {
        self.intersects(Self::BOOLEAN | Self::ANY)
    }
}

/// An input property (prop) declared by a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputProperty {
    /// Identifier-style name as declared in script (`isActive`).
    pub name: CompactString,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<PropType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceHandle>,
}

impl InputProperty {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            prop_type: None,
            source: None,
        }
    }

    pub fn with_type(mut self, prop_type: PropType) -> Self {
        self.prop_type = Some(prop_type);
        self
    }

    pub fn with_source(mut self, source: SourceHandle) -> Self {
        self.source = Some(source);
        self
    }

    /// A property without a declared type is never boolean-compatible.
    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.prop_type.is_some_and(PropType::accepts_boolean)
    }
}

/// An event a component declares it may emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitCall {
    pub name: CompactString,
    /// Payload signature text, if declared (`(id: number) => void`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<CompactString>,
}

impl EmitCall {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            signature: None,
        }
    }

    pub fn with_signature(mut self, signature: impl Into<CompactString>) -> Self {
        self.signature = Some(signature.into());
        self
    }
}

/// A declared component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    pub source: Option<SourceHandle>,
    pub props: Vec<InputProperty>,
    pub emits: Vec<EmitCall>,
    /// Containers registering this component. Filled in by the registry.
    pub parents: SmallVec<[ContainerId; 2]>,
}

impl Component {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: SourceHandle) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_prop(mut self, prop: InputProperty) -> Self {
        self.props.push(prop);
        self
    }

    pub fn with_emit(mut self, emit: EmitCall) -> Self {
        self.emits.push(emit);
        self
    }
}

/// Kind of a container in the layered registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ContainerKind {
    /// Components imported or registered by a single file.
    LocalScope,
    /// Components registered on the application instance.
    Application,
    /// Components installed by a plugin package.
    Plugin {
        #[serde(default, rename = "module", skip_serializing_if = "Option::is_none")]
        module_name: Option<CompactString>,
    },
    /// Components registered globally.
    GlobalRegistry,
}

impl ContainerKind {
    /// Proximity tier of every registration held by a container of this kind.
    #[inline]
    pub fn proximity(&self) -> Proximity {
        match self {
            Self::LocalScope => Proximity::Local,
            Self::Application => Proximity::App,
            Self::Plugin { .. } => Proximity::Plugin,
            Self::GlobalRegistry => Proximity::Global,
        }
    }

    /// Package name for plugin containers.
    #[inline]
    pub fn module_name(&self) -> Option<&str> {
        match self {
            Self::Plugin { module_name } => module_name.as_deref(),
            _ => None,
        }
    }
}

/// A component made visible under a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: CompactString,
    pub component: ComponentId,
}

/// A layer of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: ContainerId,
    pub kind: ContainerKind,
    pub registrations: Vec<Registration>,
    /// Containers searched after this one.
    pub parents: SmallVec<[ContainerId; 2]>,
}

impl Container {
    #[inline]
    pub fn proximity(&self) -> Proximity {
        self.kind.proximity()
    }
}
