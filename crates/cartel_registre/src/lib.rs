//! # cartel_registre
//!
//! Registre - The component registry and resolution engine for Cartel.
//!
//! ## Name Origin
//!
//! A **registre** is the ledger in which a notary records every deed and to
//! whom it belongs. `cartel_registre` plays that part for templates: it knows
//! which component every tag in a template belongs to, and under which names.
//!
//! ## Purpose
//!
//! - **Naming**: Convert between dash-case markup names and script identifiers
//! - **Attribute Syntax**: Decode directive shorthands into kind, argument and modifiers
//! - **Proximity Traversal**: Walk the layered registry nearest tier first
//! - **Tag Resolution**: Map a tag to every component it may refer to
//! - **Completion**: Rank tag-name candidates by proximity
//! - **Descriptors**: Resolve attributes back to declared input properties
//!
//! ## Architecture
//!
//! ```text
//!     naming      attribute
//!        ↓            ↓
//!   visitor → tags → descriptor
//!        ↓
//!   completion
//! ```
//!
//! Every query is a pure read over an immutable [`Registry`]. Queries never
//! fail; only loading a registry snapshot returns errors.

// Core modules
mod error;
mod proximity;

// Model and index
pub mod model;
pub mod registry;
pub mod snapshot;

// Resolution modules
pub mod attribute;
pub mod completion;
pub mod descriptor;
pub mod naming;
pub mod tags;
pub mod visitor;

// Re-export core types
pub use error::*;
pub use proximity::*;

pub use attribute::{parse_attribute, AttributeInfo, AttributeKind, DirectiveKind};
pub use completion::{
    accept_candidate, suggest_tags, AutoImportPolicy, CandidateKind, CompletionRequest,
    ImportHook, ScriptLanguage, TagCandidate, TagNameConvention,
};
pub use descriptor::{
    AttributeDescriptor, AttributeOrigin, AttributePriority, ComponentRef, TagDescriptor,
};
pub use model::{
    Component, ComponentId, Container, ContainerId, ContainerKind, EmitCall, InputProperty,
    PropType, Registration, SourceHandle,
};
pub use registry::{ComponentIndex, Registry, RegistryBuilder};
pub use snapshot::RegistrySnapshot;
pub use tags::{get_descriptor, resolve_tag};
pub use visitor::{visit, VisitFlow, VisitOutcome, Visited};
