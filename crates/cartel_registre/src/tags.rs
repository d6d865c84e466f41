//! Tag resolution.
//!
//! Maps a tag written in a template to the components it may refer to. The
//! nearest tier with a match wins, and every match in that tier is kept.

use cartel_carton::FxHashSet;

use crate::descriptor::{ComponentRef, TagDescriptor};
use crate::naming::{names_match, to_dash};
use crate::proximity::Proximity;
use crate::registry::ComponentIndex;
use crate::visitor::{visit, VisitFlow};

/// Framework tags that are valid without a component behind them.
pub const FRAMEWORK_COMPONENTS: [&str; 2] = ["component", "slot"];

/// Check if a dash-form tag name is a framework tag.
#[inline]
pub fn is_framework_component(name: &str) -> bool {
    FRAMEWORK_COMPONENTS.contains(&name)
}

/// Find every component a tag refers to from the template at `path`.
///
/// Returns an empty list when `path` is not a component context or nothing
/// matches.
pub fn resolve_tag<'a, I>(index: &'a I, path: &str, tag_name: &str) -> Vec<ComponentRef<'a>>
where
    I: ComponentIndex + ?Sized,
{
    // Outside a component context even framework tags are not resolved.
    let Some(start) = index.enclosing_container(path) else {
        tracing::debug!("resolve_tag <{}>: {} is not a component context", tag_name, path);
        return Vec::new();
    };

    let mut seen = FxHashSet::default();
    let mut components = Vec::new();

    let outcome = visit(index, Some(start), Proximity::Global, |visited| {
        if !names_match(visited.name, tag_name) {
            return VisitFlow::Continue;
        }
        if seen.insert(visited.component_id) {
            components.push(ComponentRef {
                id: visited.component_id,
                component: visited.component,
            });
        }
        VisitFlow::Accept
    });

    tracing::debug!(
        "resolve_tag <{}>: {} match(es) at {:?}",
        tag_name,
        components.len(),
        outcome.accepted_at
    );

    components
}

/// Describe a tag written in the template at `path`.
///
/// Falls back to a builtin descriptor for framework tags. Returns `None` for
/// tags that are not components, and for every tag outside a component
/// context.
pub fn get_descriptor<'a, I>(index: &'a I, path: &str, tag_name: &str) -> Option<TagDescriptor<'a>>
where
    I: ComponentIndex + ?Sized,
{
    // No builtin fallback outside a component context.
    index.enclosing_container(path)?;

    let components = resolve_tag(index, path, tag_name);
    if !components.is_empty() {
        return Some(TagDescriptor::new(tag_name, components));
    }

    if is_framework_component(&to_dash(tag_name)) {
        return Some(TagDescriptor::builtin(tag_name));
    }

    None
}
