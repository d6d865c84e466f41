//! Tag and attribute descriptors.
//!
//! A [`TagDescriptor`] is the merged view of every component a tag resolved
//! to. It answers which attributes the tag accepts and how a given attribute
//! name maps back to a declared input property.
//!
//! Attributes are never rejected. Undeclared names are legal pass-through
//! attributes in templates, so lookups that match nothing still produce a
//! low-priority descriptor.

use cartel_carton::{global_attributes, is_boolean_attribute, is_global_attribute, CompactString};
use serde::Serialize;

use crate::attribute::{parse_attribute, AttributeInfo, DirectiveKind};
use crate::model::{Component, ComponentId, EmitCall, InputProperty, SourceHandle};
use crate::naming::{names_match, to_dash};

/// Ranking of an attribute descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributePriority {
    Low,
    High,
}

/// Rule that produced an attribute descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeOrigin {
    /// A declared input property.
    Property,
    /// An attribute every HTML element accepts.
    Common,
    /// An undeclared attribute passed through to the root element.
    PassThrough,
}

/// Description of a single attribute on a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDescriptor {
    pub name: CompactString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceHandle>,
    /// The attribute may be written without a value.
    pub accepts_no_value: bool,
    pub priority: AttributePriority,
    pub origin: AttributeOrigin,
}

impl AttributeDescriptor {
    /// Descriptor for a declared property, named as written in the template.
    pub fn property(name: impl Into<CompactString>, prop: &InputProperty) -> Self {
        Self {
            name: name.into(),
            source: prop.source.clone(),
            accepts_no_value: prop.is_boolean(),
            priority: AttributePriority::High,
            origin: AttributeOrigin::Property,
        }
    }

    pub fn common(name: impl Into<CompactString>) -> Self {
        let name = name.into();
        Self {
            accepts_no_value: is_boolean_attribute(&name),
            name,
            source: None,
            priority: AttributePriority::Low,
            origin: AttributeOrigin::Common,
        }
    }

    pub fn pass_through(name: impl Into<CompactString>, accepts_no_value: bool) -> Self {
        Self {
            name: name.into(),
            source: None,
            accepts_no_value,
            priority: AttributePriority::Low,
            origin: AttributeOrigin::PassThrough,
        }
    }
}

/// A component matched by tag resolution.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRef<'a> {
    pub id: ComponentId,
    pub component: &'a Component,
}

/// Merged description of a component tag.
#[derive(Debug, Clone)]
pub struct TagDescriptor<'a> {
    name: CompactString,
    components: Vec<ComponentRef<'a>>,
}

impl<'a> TagDescriptor<'a> {
    pub fn new(name: impl Into<CompactString>, components: Vec<ComponentRef<'a>>) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }

    /// Descriptor for a framework tag with no backing component.
    pub fn builtin(name: impl Into<CompactString>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Tag name as written in the template.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Matched components in resolution order.
    #[inline]
    pub fn components(&self) -> &[ComponentRef<'a>] {
        &self.components
    }

    #[inline]
    pub fn is_builtin(&self) -> bool {
        self.components.is_empty()
    }

    /// Source of the first matched component that has one.
    pub fn declaration_source(&self) -> Option<&'a SourceHandle> {
        self.components
            .iter()
            .find_map(|c| c.component.source.as_ref())
    }

    /// Every event the matched components declare.
    pub fn emit_calls(&self) -> Vec<&'a EmitCall> {
        self.components
            .iter()
            .flat_map(|c| c.component.emits.iter())
            .collect()
    }

    /// Input properties of every matched component as high-priority
    /// descriptors named in dash form.
    pub fn props(&self) -> Vec<AttributeDescriptor> {
        self.components
            .iter()
            .flat_map(|c| c.component.props.iter())
            .map(|prop| AttributeDescriptor::property(to_dash(&prop.name), prop))
            .collect()
    }

    /// Full attribute surface: common HTML attributes followed by props.
    pub fn list_attributes(&self) -> Vec<AttributeDescriptor> {
        let mut common: Vec<&'static str> = global_attributes().collect();
        common.sort_unstable();

        let mut result: Vec<AttributeDescriptor> =
            common.into_iter().map(AttributeDescriptor::common).collect();
        result.extend(self.props());
        result
    }

    /// Describe an attribute written on this tag.
    pub fn resolve_attribute(&self, attribute_name: &str) -> AttributeDescriptor {
        let info = parse_attribute(attribute_name, Some(self.name.as_str()));
        let descriptor = self.resolve_with(attribute_name, &info);
        tracing::trace!(
            "resolve_attribute <{} {}>: {:?} {:?}",
            self.name,
            attribute_name,
            descriptor.origin,
            descriptor.priority
        );
        descriptor
    }

    fn resolve_with(&self, attribute_name: &str, info: &AttributeInfo) -> AttributeDescriptor {
        if info.directive_kind() == Some(DirectiveKind::Bind) && info.argument.is_some() {
            return info
                .static_argument()
                .and_then(|arg| self.resolve_prop(arg, attribute_name))
                .unwrap_or_else(|| AttributeDescriptor::pass_through(attribute_name, false));
        }

        if info.is_plain() {
            if let Some(descriptor) = self.resolve_prop(&info.name, attribute_name) {
                return descriptor;
            }
        }

        if is_global_attribute(attribute_name) {
            return AttributeDescriptor::common(attribute_name);
        }

        let accepts_no_value = !info.requires_value
            || info.is_plain()
            || info.directive_kind() == Some(DirectiveKind::Custom);
        AttributeDescriptor::pass_through(attribute_name, accepts_no_value)
    }

    /// First property, in resolution order, whose dash form matches `prop_name`.
    fn resolve_prop(&self, prop_name: &str, attribute_name: &str) -> Option<AttributeDescriptor> {
        self.components
            .iter()
            .flat_map(|c| c.component.props.iter())
            .find(|prop| names_match(&prop.name, prop_name))
            .map(|prop| AttributeDescriptor::property(attribute_name, prop))
    }
}
