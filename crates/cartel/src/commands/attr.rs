//! Attr command - Describe attributes written on a tag

use cartel_registre::{get_descriptor, AttributeDescriptor, ComponentIndex};
use clap::Args;

use super::ProjectArgs;

#[derive(Args)]
pub struct AttrArgs {
    /// Template file the tag is written in
    pub file: String,

    /// Tag carrying the attributes
    pub tag: String,

    /// Attribute names as written (`:is-active`, `@click.stop`, `data-id`)
    pub attributes: Vec<String>,

    /// List every attribute the tag accepts instead
    #[arg(short, long)]
    pub list: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Resolve `attributes` on `tag`, or list the tag's attributes when `attributes` is empty.
///
/// Returns `None` when the tag is not a component tag in `file`.
pub fn describe<I>(
    index: &I,
    file: &str,
    tag: &str,
    attributes: &[String],
) -> Option<Vec<AttributeDescriptor>>
where
    I: ComponentIndex + ?Sized,
{
    let descriptor = get_descriptor(index, file, tag)?;
    if attributes.is_empty() {
        return Some(descriptor.list_attributes());
    }
    Some(
        attributes
            .iter()
            .map(|name| descriptor.resolve_attribute(name))
            .collect(),
    )
}

pub fn run(args: AttrArgs) {
    if !args.list && args.attributes.is_empty() {
        eprintln!("No attributes given (use --list to list every attribute)");
        std::process::exit(1);
    }

    let project = args.project.open();
    let attributes: &[String] = if args.list { &[] } else { &args.attributes };

    match describe(&project.registry, &args.file, &args.tag, attributes) {
        Some(descriptors) => args.project.print(&descriptors),
        None => {
            eprintln!(
                "\x1b[31mError:\x1b[0m <{}> is not a component tag in {}",
                args.tag, args.file
            );
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartel_registre::{
        AttributeOrigin, AttributePriority, Component, ContainerKind, InputProperty, PropType,
        Registry,
    };

    fn registry() -> Registry {
        let mut builder = Registry::builder();
        let local = builder.add_container(ContainerKind::LocalScope);
        let card = builder.add_component(
            Component::new().with_prop(InputProperty::new("isActive").with_type(PropType::BOOLEAN)),
        );
        builder
            .register(local, "UserCard", card)
            .bind_file("src/App.vue", local);
        builder.build()
    }

    #[test]
    fn test_resolve_given_attributes() {
        let registry = registry();
        let names = vec![":is-active".to_string(), "data-foo".to_string()];
        let descriptors = describe(&registry, "src/App.vue", "UserCard", &names).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].priority, AttributePriority::High);
        assert_eq!(descriptors[1].origin, AttributeOrigin::PassThrough);
    }

    #[test]
    fn test_list_attributes() {
        let registry = registry();
        let descriptors = describe(&registry, "src/App.vue", "UserCard", &[]).unwrap();
        let last = descriptors.last().unwrap();
        assert_eq!(last.name, "is-active");
        assert!(last.accepts_no_value);
    }

    #[test]
    fn test_unknown_tag() {
        let registry = registry();
        assert!(describe(&registry, "src/App.vue", "widget", &[]).is_none());
    }
}
