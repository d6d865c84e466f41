//! Attribute name classification.
//!
//! Splits a raw template attribute name into its directive kind, argument and
//! modifiers without looking at the value:
//!
//! ```text
//! :is-active          -> Bind, argument "is-active"
//! v-on:click.stop     -> On, argument "click", modifiers ["stop"]
//! v-bind:[key].camel  -> Bind, dynamic argument "key", modifiers ["camel"]
//! #header             -> Slot, argument "header"
//! data-id             -> Plain
//! ```
//!
//! Parsing is total: malformed names still produce a classification.

use cartel_carton::{is_boolean_attribute, is_native_tag, CompactString, SmallVec};

/// Kind of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Bind,
    On,
    Model,
    Slot,
    If,
    ElseIf,
    Else,
    For,
    Show,
    Text,
    Html,
    Once,
    Pre,
    Cloak,
    Memo,
    /// A user-defined directive (`v-focus`, `v-tooltip:top`).
    Custom,
}

impl DirectiveKind {
    /// Look up a built-in directive by the name following `v-`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bind" => Self::Bind,
            "on" => Self::On,
            "model" => Self::Model,
            "slot" => Self::Slot,
            "if" => Self::If,
            "else-if" => Self::ElseIf,
            "else" => Self::Else,
            "for" => Self::For,
            "show" => Self::Show,
            "text" => Self::Text,
            "html" => Self::Html,
            "once" => Self::Once,
            "pre" => Self::Pre,
            "cloak" => Self::Cloak,
            "memo" => Self::Memo,
            _ => Self::Custom,
        }
    }

    /// Whether the directive is meaningless without an expression.
    #[inline]
    pub fn requires_value(self) -> bool {
        matches!(
            self,
            Self::Bind
                | Self::On
                | Self::Model
                | Self::If
                | Self::ElseIf
                | Self::For
                | Self::Show
                | Self::Text
                | Self::Html
                | Self::Memo
        )
    }
}

/// Whether an attribute is plain markup or a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Plain,
    Directive(DirectiveKind),
}

/// Parsed form of an attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInfo {
    /// Attribute name for plain attributes, directive name for directives
    /// (`bind`, `on`, `focus`).
    pub name: CompactString,
    pub kind: AttributeKind,
    /// Directive argument. `None` when absent, `Some("")` when the syntax
    /// opens an argument without naming one (`:`, `v-bind:`).
    pub argument: Option<CompactString>,
    /// The argument is an expression (`:[key]`).
    pub dynamic_argument: bool,
    /// The argument was supplied by the directive rather than spelled out.
    pub implied_argument: bool,
    pub modifiers: SmallVec<[CompactString; 2]>,
    pub requires_value: bool,
}

impl AttributeInfo {
    fn plain(name: &str) -> Self {
        Self {
            name: CompactString::from(name),
            kind: AttributeKind::Plain,
            argument: None,
            dynamic_argument: false,
            implied_argument: false,
            modifiers: SmallVec::new(),
            requires_value: !is_boolean_attribute(name),
        }
    }

    #[inline]
    pub fn directive_kind(&self) -> Option<DirectiveKind> {
        match self.kind {
            AttributeKind::Directive(kind) => Some(kind),
            AttributeKind::Plain => None,
        }
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.kind == AttributeKind::Plain
    }

    /// A static, non-empty argument usable for name lookups.
    pub fn static_argument(&self) -> Option<&str> {
        match &self.argument {
            Some(arg) if !self.dynamic_argument && !arg.is_empty() => Some(arg.as_str()),
            _ => None,
        }
    }
}

/// Classify an attribute name.
///
/// `tag` is the name of the element carrying the attribute, used to decide
/// whether `v-model` targets a component.
pub fn parse_attribute(raw: &str, tag: Option<&str>) -> AttributeInfo {
    let (kind_name, rest, prop_shorthand) = match raw.chars().next() {
        Some(':') => ("bind", &raw[1..], false),
        Some('@') => ("on", &raw[1..], false),
        Some('#') => ("slot", &raw[1..], false),
        Some('.') if raw.len() > 1 => ("bind", &raw[1..], true),
        _ => match raw.strip_prefix("v-") {
            Some(directive) => {
                let end = directive.find([':', '.']).unwrap_or(directive.len());
                let (name, tail) = directive.split_at(end);
                match tail.strip_prefix(':') {
                    Some(arg) => (name, arg, false),
                    // No argument: whatever follows is a modifier chain.
                    None => return finish_directive(name, None, tail, tag),
                }
            }
            None => return AttributeInfo::plain(raw),
        },
    };

    let (argument, dynamic, tail) = split_argument(rest);
    let mut info = finish_directive(kind_name, Some((argument, dynamic)), tail, tag);
    if prop_shorthand {
        info.modifiers.insert(0, CompactString::const_new("prop"));
    }
    info
}

/// Split `arg.mod1.mod2` (or `[expr].mod`) into argument and modifier tail.
fn split_argument(rest: &str) -> (&str, bool, &str) {
    if let Some(inner) = rest.strip_prefix('[') {
        if let Some(close) = inner.find(']') {
            return (&inner[..close], true, &inner[close + 1..]);
        }
        // Unterminated dynamic argument: take everything.
        return (inner, true, "");
    }
    let end = rest.find('.').unwrap_or(rest.len());
    (&rest[..end], false, &rest[end..])
}

fn finish_directive(
    name: &str,
    argument: Option<(&str, bool)>,
    modifier_tail: &str,
    tag: Option<&str>,
) -> AttributeInfo {
    let kind = DirectiveKind::from_name(name);
    let modifiers: SmallVec<[CompactString; 2]> = modifier_tail
        .split('.')
        .filter(|m| !m.is_empty())
        .map(CompactString::from)
        .collect();

    let (mut argument, dynamic_argument) = match argument {
        Some((arg, dynamic)) => (Some(CompactString::from(arg)), dynamic),
        None => (None, false),
    };

    let mut implied_argument = false;
    if argument.is_none() {
        let implied = match kind {
            DirectiveKind::Slot => Some("default"),
            DirectiveKind::Model if tag.is_some_and(is_component_tag) => Some("modelValue"),
            _ => None,
        };
        if let Some(implied) = implied {
            argument = Some(CompactString::const_new(implied));
            implied_argument = true;
        }
    }

    let requires_value = match kind {
        // `@click.prevent` needs no handler.
        DirectiveKind::On => modifiers.is_empty(),
        _ => kind.requires_value(),
    };

    AttributeInfo {
        name: CompactString::from(name),
        kind: AttributeKind::Directive(kind),
        argument,
        dynamic_argument,
        implied_argument,
        modifiers,
        requires_value,
    }
}

/// Whether a tag refers to a component rather than a platform element.
#[inline]
pub fn is_component_tag(tag: &str) -> bool {
    !is_native_tag(tag)
}
