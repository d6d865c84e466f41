//! Tag-name completion.
//!
//! Every component reachable from the template, including unregistered
//! ones, is offered under the names the template convention allows. Nearer
//! registrations rank higher and win when two candidates share a text.

use cartel_carton::{smallvec, CompactString, FxHashMap, SmallVec};
use serde::{Deserialize, Serialize};

use crate::model::{Component, SourceHandle};
use crate::naming::{to_dash, to_pascal_identifier};
use crate::proximity::Proximity;
use crate::registry::ComponentIndex;
use crate::tags::FRAMEWORK_COMPONENTS;
use crate::visitor::{visit, VisitFlow};

pub const LOCAL_PRIORITY: f64 = 100.0;
pub const APP_PRIORITY: f64 = 90.0;
pub const PLUGIN_PRIORITY: f64 = 90.0;
pub const GLOBAL_PRIORITY: f64 = 80.0;
pub const UNREGISTERED_PRIORITY: f64 = 50.0;
/// Marker priority of framework builtins.
pub const BUILTIN_PRIORITY: f64 = 0.0;

/// Label shown next to framework builtins.
pub const BUILTIN_LABEL: &str = "vue";

/// Completion priority of a proximity tier.
#[inline]
pub fn priority_of(proximity: Proximity) -> f64 {
    match proximity {
        Proximity::Local => LOCAL_PRIORITY,
        Proximity::App => APP_PRIORITY,
        Proximity::Plugin => PLUGIN_PRIORITY,
        Proximity::Global => GLOBAL_PRIORITY,
        Proximity::OutOfScope => UNREGISTERED_PRIORITY,
    }
}

/// Tag spellings offered for a registered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagNameConvention {
    /// Dash form only.
    KebabOnly,
    /// PascalCase form followed by the dash form.
    KebabAndPascal,
}

impl TagNameConvention {
    /// Convention for a template file. Single-file components accept both forms.
    pub fn for_path(path: &str) -> Self {
        if path.ends_with(".vue") {
            Self::KebabAndPascal
        } else {
            Self::KebabOnly
        }
    }

    fn spellings(self, name: &str) -> SmallVec<[CompactString; 2]> {
        match self {
            Self::KebabOnly => smallvec![to_dash(name)],
            Self::KebabAndPascal => smallvec![to_pascal_identifier(name), to_dash(name)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScriptLanguage {
    TypeScript,
    JavaScript,
}

impl ScriptLanguage {
    /// Parse the `lang` attribute of a script block.
    pub fn from_lang(lang: &str) -> Option<Self> {
        match lang {
            "ts" | "tsx" => Some(Self::TypeScript),
            "js" | "jsx" => Some(Self::JavaScript),
            _ => None,
        }
    }

    /// Language an import of a component declared at `source` is written in.
    pub fn effective(template: Option<ScriptLanguage>, source: Option<&SourceHandle>) -> Self {
        let typescript_source = source.is_some_and(|s| s.is_typescript() && !s.is_library());
        if template == Some(Self::TypeScript) || typescript_source {
            Self::TypeScript
        } else {
            Self::JavaScript
        }
    }
}

/// Host preference for offering automatic imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoImportPolicy {
    pub typescript: bool,
    pub javascript: bool,
}

impl Default for AutoImportPolicy {
    fn default() -> Self {
        Self {
            typescript: true,
            javascript: true,
        }
    }
}

impl AutoImportPolicy {
    #[inline]
    pub fn allows(&self, language: ScriptLanguage) -> bool {
        match language {
            ScriptLanguage::TypeScript => self.typescript,
            ScriptLanguage::JavaScript => self.javascript,
        }
    }
}

/// Context of a completion query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Language of the template's script block, when known.
    pub script_language: Option<ScriptLanguage>,
    pub policy: AutoImportPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateKind {
    Component,
    Builtin,
}

/// A single tag-name completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCandidate {
    pub text: CompactString,
    pub priority: f64,
    pub bold: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceHandle>,
    /// Plugin package the component comes from, or `vue` for builtins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_label: Option<CompactString>,
    /// Using the tag requires an import the template does not have yet.
    pub importable: bool,
    /// The host should insert that import on acceptance.
    pub insert_import: bool,
    pub kind: CandidateKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity: Option<Proximity>,
}

impl TagCandidate {
    fn builtin(name: &str) -> Self {
        Self {
            text: name.into(),
            priority: BUILTIN_PRIORITY,
            bold: false,
            source: None,
            module_label: Some(BUILTIN_LABEL.into()),
            importable: false,
            insert_import: false,
            kind: CandidateKind::Builtin,
            proximity: None,
        }
    }
}

/// Plugin package of a component registered by exactly one plugin.
fn module_label<I>(index: &I, component: &Component) -> Option<CompactString>
where
    I: ComponentIndex + ?Sized,
{
    match component.parents.as_slice() {
        [only] => index
            .container(*only)
            .and_then(|container| container.kind.module_name())
            .map(CompactString::from),
        _ => None,
    }
}

/// Build tag-name completions for the template at `path`.
///
/// Returns nothing when `path` is not a component context.
pub fn suggest_tags<I>(
    index: &I,
    path: &str,
    convention: TagNameConvention,
    request: &CompletionRequest,
) -> Vec<TagCandidate>
where
    I: ComponentIndex + ?Sized,
{
    // Outside a component context builtins are not offered either.
    let Some(start) = index.enclosing_container(path) else {
        tracing::debug!("suggest_tags: {} is not a component context", path);
        return Vec::new();
    };

    let mut candidates: Vec<TagCandidate> = Vec::new();
    let mut by_text: FxHashMap<CompactString, usize> = FxHashMap::default();

    visit(index, Some(start), Proximity::OutOfScope, |visited| {
        let priority = priority_of(visited.proximity);
        let source = visited.component.source.clone();
        let importable = visited.proximity == Proximity::OutOfScope && source.is_some();
        let insert_import = importable
            && request.policy.allows(ScriptLanguage::effective(
                request.script_language,
                source.as_ref(),
            ));
        let label = module_label(index, visited.component);

        for text in convention.spellings(visited.name) {
            let candidate = TagCandidate {
                text: text.clone(),
                priority,
                bold: visited.proximity == Proximity::Local,
                source: source.clone(),
                module_label: label.clone(),
                importable,
                insert_import,
                kind: CandidateKind::Component,
                proximity: Some(visited.proximity),
            };
            match by_text.get(&text) {
                // Traversal is nearest first, so only a strictly higher
                // priority may replace an earlier candidate.
                Some(&existing) if candidates[existing].priority < priority => {
                    candidates[existing] = candidate;
                }
                Some(_) => {}
                None => {
                    by_text.insert(text, candidates.len());
                    candidates.push(candidate);
                }
            }
        }
        VisitFlow::Continue
    });

    candidates.extend(FRAMEWORK_COMPONENTS.iter().map(|name| TagCandidate::builtin(name)));

    tracing::debug!("suggest_tags: {} candidate(s) for {}", candidates.len(), path);
    candidates
}

/// Receives import insertions for accepted completions.
pub trait ImportHook {
    fn insert_import(&mut self, candidate: &TagCandidate, language: ScriptLanguage);
}

/// Run `hook` for an accepted candidate if an import should be inserted.
///
/// Returns whether the hook ran.
pub fn accept_candidate<H>(
    candidate: &TagCandidate,
    script_language: Option<ScriptLanguage>,
    policy: &AutoImportPolicy,
    hook: &mut H,
) -> bool
where
    H: ImportHook + ?Sized,
{
    if !candidate.importable {
        return false;
    }
    let language = ScriptLanguage::effective(script_language, candidate.source.as_ref());
    if !policy.allows(language) {
        tracing::debug!("accept_candidate: auto import disabled for {:?}", language);
        return false;
    }
    hook.insert_import(candidate, language);
    true
}
