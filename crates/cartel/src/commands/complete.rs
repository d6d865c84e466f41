//! Complete command - List tag-name completions for a template

use cartel_registre::{suggest_tags, CompletionRequest, ScriptLanguage, TagNameConvention};
use clap::Args;

use super::ProjectArgs;

#[derive(Args)]
pub struct CompleteArgs {
    /// Template file being edited
    pub file: String,

    /// Script block language of the template (`ts`, `js`)
    #[arg(long)]
    pub lang: Option<String>,

    /// Only offer dash-case tag names, even in .vue files
    #[arg(long)]
    pub kebab_only: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

fn convention(args: &CompleteArgs) -> TagNameConvention {
    if args.kebab_only {
        TagNameConvention::KebabOnly
    } else {
        TagNameConvention::for_path(&args.file)
    }
}

pub fn run(args: CompleteArgs) {
    let project = args.project.open();

    let script_language = args.lang.as_deref().and_then(|lang| {
        let language = ScriptLanguage::from_lang(lang);
        if language.is_none() {
            tracing::warn!("unknown script language `{}`", lang);
        }
        language
    });
    let request = CompletionRequest {
        script_language,
        policy: project.config.auto_import,
    };

    let candidates = suggest_tags(&project.registry, &args.file, convention(&args), &request);
    args.project.print(&candidates);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: CompleteArgs,
    }

    fn parse(argv: &[&str]) -> CompleteArgs {
        Harness::parse_from(std::iter::once("cartel").chain(argv.iter().copied())).args
    }

    #[test]
    fn test_convention_follows_file() {
        assert_eq!(
            convention(&parse(&["src/App.vue"])),
            TagNameConvention::KebabAndPascal
        );
        assert_eq!(
            convention(&parse(&["src/page.html"])),
            TagNameConvention::KebabOnly
        );
        assert_eq!(
            convention(&parse(&["src/App.vue", "--kebab-only"])),
            TagNameConvention::KebabOnly
        );
    }

    #[test]
    fn test_project_options() {
        let args = parse(&["src/App.vue", "--registry", "index.json", "--pretty"]);
        assert_eq!(args.project.registry.as_deref(), Some(std::path::Path::new("index.json")));
        assert!(args.project.pretty);
        assert!(args.lang.is_none());
    }
}
