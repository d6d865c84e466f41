//! Static HTML element and attribute tables.
//!
//! Uses compile-time perfect hash functions (phf) for O(1) lookup
//! with zero runtime initialization cost.

use phf::phf_set;

/// Native HTML elements.
static HTML_TAGS: phf::Set<&'static str> = phf_set! {
    "html", "body", "base", "head", "link", "meta", "style", "title",
    "address", "article", "aside", "footer", "header", "hgroup",
    "h1", "h2", "h3", "h4", "h5", "h6", "nav", "section",
    "div", "dd", "dl", "dt", "figcaption", "figure", "picture", "hr",
    "img", "li", "main", "ol", "p", "pre", "ul",
    "a", "b", "abbr", "bdi", "bdo", "br", "cite", "code", "data", "dfn",
    "em", "i", "kbd", "mark", "q", "rp", "rt", "ruby", "s", "samp",
    "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr",
    "area", "audio", "map", "track", "video",
    "embed", "object", "param", "source", "canvas", "script", "noscript",
    "del", "ins",
    "caption", "col", "colgroup", "table", "thead", "tbody", "td", "th", "tr",
    "button", "datalist", "fieldset", "form", "input", "label", "legend",
    "meter", "optgroup", "option", "output", "progress", "select", "textarea",
    "details", "dialog", "menu", "summary", "template", "blockquote",
    "iframe", "tfoot", "search",
};

/// SVG elements that may appear inline in templates.
static SVG_TAGS: phf::Set<&'static str> = phf_set! {
    "svg", "animate", "animateMotion", "animateTransform", "circle", "clipPath",
    "defs", "desc", "ellipse", "filter", "foreignObject", "g", "image", "line",
    "linearGradient", "marker", "mask", "metadata", "path", "pattern",
    "polygon", "polyline", "radialGradient", "rect", "stop", "switch",
    "symbol", "text", "textPath", "tspan", "use", "view",
};

/// Attributes accepted by every HTML element.
static GLOBAL_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "accesskey",
    "autocapitalize",
    "autofocus",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "id",
    "inert",
    "inputmode",
    "is",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    "lang",
    "nonce",
    "part",
    "popover",
    "slot",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
};

/// Attributes whose presence alone carries meaning.
static BOOLEAN_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "allowfullscreen", "async", "autofocus", "autoplay", "checked", "controls",
    "default", "defer", "disabled", "formnovalidate", "hidden", "inert",
    "ismap", "itemscope", "loop", "multiple", "muted", "nomodule",
    "novalidate", "open", "playsinline", "readonly", "required", "reversed",
    "selected",
};

/// Check if a tag is a native HTML element.
#[inline]
pub fn is_html_tag(tag: &str) -> bool {
    HTML_TAGS.contains(tag)
}

/// Check if a tag is an SVG element.
#[inline]
pub fn is_svg_tag(tag: &str) -> bool {
    SVG_TAGS.contains(tag)
}

/// Check if a tag is a platform element rather than a component.
#[inline]
pub fn is_native_tag(tag: &str) -> bool {
    is_html_tag(tag) || is_svg_tag(tag)
}

/// Check if an attribute is accepted by every HTML element.
#[inline]
pub fn is_global_attribute(name: &str) -> bool {
    GLOBAL_ATTRIBUTES.contains(name)
}

/// Iterate the attributes accepted by every HTML element.
pub fn global_attributes() -> impl Iterator<Item = &'static str> {
    GLOBAL_ATTRIBUTES.iter().copied()
}

/// Check if an attribute is a boolean attribute.
#[inline]
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(name)
}
