//! Tag command - Resolve a tag to the components it refers to

use cartel_registre::{
    get_descriptor, ComponentIndex, EmitCall, InputProperty, SourceHandle,
};
use clap::Args;
use serde::Serialize;

use super::ProjectArgs;

#[derive(Args)]
pub struct TagArgs {
    /// Template file the tag is written in
    pub file: String,

    /// Tag name as written (`UserCard`, `user-card`)
    pub tag: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// JSON output structure
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagOutput<'a> {
    tag: &'a str,
    builtin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    declaration: Option<&'a SourceHandle>,
    components: Vec<ComponentOutput<'a>>,
}

#[derive(Serialize)]
struct ComponentOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a SourceHandle>,
    props: &'a [InputProperty],
    emits: &'a [EmitCall],
}

/// Describe `tag` in `file`, or `None` when it is not a component tag there.
pub fn describe<'a, I>(index: &'a I, file: &str, tag: &'a str) -> Option<TagOutput<'a>>
where
    I: ComponentIndex + ?Sized,
{
    let descriptor = get_descriptor(index, file, tag)?;
    Some(TagOutput {
        tag,
        builtin: descriptor.is_builtin(),
        declaration: descriptor.declaration_source(),
        components: descriptor
            .components()
            .iter()
            .map(|c| ComponentOutput {
                source: c.component.source.as_ref(),
                props: &c.component.props,
                emits: &c.component.emits,
            })
            .collect(),
    })
}

pub fn run(args: TagArgs) {
    let project = args.project.open();
    let output = describe(&project.registry, &args.file, &args.tag);
    if output.is_none() {
        tracing::info!("<{}> is not a component tag in {}", args.tag, args.file);
    }
    args.project.print(&output);
}
