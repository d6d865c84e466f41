//! End-to-end resolution tests over a JSON registry snapshot.
//!
//! The fixture layers a local scope, an application, two plugins and the
//! global registry:
//!
//! ```text
//! app-local ─→ app ─┬─→ plugin-a (ui-a) ─→ global
//!                   └─→ plugin-b (ui-b) ─→ global
//! ```

use cartel_registre::{
    get_descriptor, resolve_tag, suggest_tags, AttributeOrigin, AttributePriority,
    CompletionRequest, ComponentRef, Registry, TagCandidate, TagNameConvention,
};

const FIXTURE: &str = r#"{
    "components": [
        { "id": "user-card", "source": { "path": "src/components/UserCard.vue" },
          "props": [
            { "name": "isActive", "type": "BOOLEAN", "source": { "path": "src/components/UserCard.vue", "offset": 120 } },
            { "name": "userName", "type": "STRING" }
          ],
          "emits": [{ "name": "select" }] },
        { "id": "card-a", "source": { "path": "src/plugins/a/Card.vue" },
          "props": [{ "name": "title", "type": "STRING" }] },
        { "id": "card-b", "source": { "path": "node_modules/ui-b/Card.vue" },
          "props": [
            { "name": "title", "type": "STRING | NUMBER" },
            { "name": "flat", "type": "BOOLEAN" }
          ] },
        { "id": "global-card", "source": { "path": "src/GlobalCard.vue" } },
        { "id": "app-layout", "source": { "path": "src/AppLayout.vue" } },
        { "id": "base-chart", "source": { "path": "src/charts/BaseChart.ts" } }
    ],
    "containers": [
        { "id": "app-local", "kind": "localScope", "parents": ["app"],
          "registrations": [{ "name": "UserCard", "component": "user-card" }] },
        { "id": "app", "kind": "application", "parents": ["plugin-a", "plugin-b"],
          "registrations": [
            { "name": "AppLayout", "component": "app-layout" },
            { "name": "UserCard", "component": "global-card" }
          ] },
        { "id": "plugin-a", "kind": "plugin", "module": "ui-a", "parents": ["global"],
          "registrations": [{ "name": "Card", "component": "card-a" }] },
        { "id": "plugin-b", "kind": "plugin", "module": "ui-b", "parents": ["global"],
          "registrations": [{ "name": "card", "component": "card-b" }] },
        { "id": "global", "kind": "globalRegistry",
          "registrations": [{ "name": "Card", "component": "global-card" }] }
    ],
    "files": { "src/App.vue": "app-local", "src/page.html": "app-local" },
    "unregistered": [{ "name": "BaseChart", "component": "base-chart" }]
}"#;

const APP: &str = "src/App.vue";

fn registry() -> Registry {
    Registry::from_json(FIXTURE).expect("fixture must load")
}

fn source_paths<'a>(components: &[ComponentRef<'a>]) -> Vec<&'a str> {
    components
        .iter()
        .filter_map(|c| c.component.source.as_ref())
        .map(|s| s.path.as_str())
        .collect()
}

/// One line per candidate: text, priority, tier, then optional markers.
fn render(candidates: &[TagCandidate]) -> String {
    candidates
        .iter()
        .map(|c| {
            let mut line = format!("{} {}", c.text, c.priority);
            match c.proximity {
                Some(proximity) => {
                    line.push(' ');
                    line.push_str(proximity.as_str());
                }
                None => line.push_str(" builtin"),
            }
            if let Some(label) = &c.module_label {
                line.push(' ');
                line.push_str(label);
            }
            if c.bold {
                line.push_str(" *");
            }
            if c.insert_import {
                line.push_str(" +import");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Tag resolution
// =============================================================================

mod tags {
    use super::*;

    #[test]
    fn user_card_resolves_locally() {
        let registry = registry();
        let found = resolve_tag(&registry, APP, "user-card");
        assert_eq!(source_paths(&found), vec!["src/components/UserCard.vue"]);
    }

    #[test]
    fn nearer_tier_shadows_farther() {
        let registry = registry();
        // `UserCard` is also registered on the application, pointing elsewhere.
        for tag in ["UserCard", "user-card"] {
            let found = resolve_tag(&registry, APP, tag);
            assert!(!source_paths(&found).contains(&"src/GlobalCard.vue"));
        }
    }

    #[test]
    fn same_tier_matches_are_merged() {
        let registry = registry();
        let found = resolve_tag(&registry, APP, "card");
        assert_eq!(
            source_paths(&found),
            vec!["src/plugins/a/Card.vue", "node_modules/ui-b/Card.vue"]
        );
    }

    #[test]
    fn widget_is_absent() {
        let registry = registry();
        assert!(resolve_tag(&registry, APP, "widget").is_empty());
        assert!(get_descriptor(&registry, APP, "widget").is_none());
    }

    #[test]
    fn slot_is_builtin() {
        let registry = registry();
        assert!(resolve_tag(&registry, APP, "slot").is_empty());
        let slot = get_descriptor(&registry, APP, "slot").unwrap();
        assert!(slot.is_builtin());
        assert!(slot.declaration_source().is_none());
    }

    #[test]
    fn path_is_normalized() {
        let registry = registry();
        assert_eq!(resolve_tag(&registry, "./src/App.vue", "UserCard").len(), 1);
        assert_eq!(resolve_tag(&registry, "src\\App.vue", "UserCard").len(), 1);
    }
}

// =============================================================================
// Attribute descriptors
// =============================================================================

mod attributes {
    use super::*;

    #[test]
    fn user_card_attributes() {
        let registry = registry();
        let tag = get_descriptor(&registry, APP, "user-card").unwrap();

        let attributes = tag.list_attributes();
        let is_active = attributes.iter().find(|a| a.name == "is-active").unwrap();
        assert_eq!(is_active.priority, AttributePriority::High);
        assert!(is_active.accepts_no_value);
        let user_name = attributes.iter().find(|a| a.name == "user-name").unwrap();
        assert_eq!(user_name.priority, AttributePriority::High);
        assert!(!user_name.accepts_no_value);

        let bound = tag.resolve_attribute(":is-active");
        assert_eq!(bound.priority, AttributePriority::High);
        assert_eq!(bound.source.as_ref().map(|s| s.offset), Some(120));

        let data = tag.resolve_attribute("data-foo");
        assert_eq!(data.priority, AttributePriority::Low);
        assert!(data.accepts_no_value);

        assert_eq!(
            tag.emit_calls().iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["select"]
        );
    }

    #[test]
    fn merged_descriptor_takes_first_property() {
        let registry = registry();
        let tag = get_descriptor(&registry, APP, "Card").unwrap();
        assert_eq!(tag.components().len(), 2);

        let title = tag.resolve_attribute("v-bind:title");
        assert_eq!(title.origin, AttributeOrigin::Property);
        assert!(!title.accepts_no_value);

        let flat = tag.resolve_attribute("flat");
        assert_eq!(flat.priority, AttributePriority::High);
        assert!(flat.accepts_no_value);

        let props: Vec<String> = tag.props().iter().map(|p| p.name.to_string()).collect();
        insta::assert_snapshot!(props.join(","), @"title,title,flat");
    }

    #[test]
    fn every_attribute_name_gets_a_descriptor() {
        let registry = registry();
        let tag = get_descriptor(&registry, APP, "user-card").unwrap();
        let names = [
            "", ":", "@", "#", ".", "v-", "v-bind", "v-bind:", "v-bind:.prop", ":[", ":[]",
            "v-on:[a.b].stop", "::", "...", "v-:x", "#[slot", "@.", "v-model", "v-slot:item",
            "is-active.", "ñ", ":ñ-x",
        ];
        for name in names {
            let descriptor = tag.resolve_attribute(name);
            assert_eq!(descriptor.name, name);
        }
    }

    #[test]
    fn boolean_props_accept_no_value() {
        let registry = registry();
        for tag_name in ["user-card", "card"] {
            let tag = get_descriptor(&registry, APP, tag_name).unwrap();
            for component in tag.components() {
                for prop in component.component.props.iter().filter(|p| p.is_boolean()) {
                    let descriptor = tag
                        .props()
                        .into_iter()
                        .find(|d| d.source == prop.source && d.accepts_no_value)
                        .map(|d| d.priority);
                    assert_eq!(descriptor, Some(AttributePriority::High), "{}", prop.name);
                }
            }
        }
    }
}

// =============================================================================
// Completion
// =============================================================================

mod completion {
    use super::*;

    #[test]
    fn vue_file_candidates() {
        let registry = registry();
        let candidates = suggest_tags(
            &registry,
            APP,
            TagNameConvention::for_path(APP),
            &CompletionRequest::default(),
        );
        insta::assert_snapshot!(render(&candidates), @r"
        UserCard 100 local *
        user-card 100 local *
        AppLayout 90 app
        app-layout 90 app
        Card 90 plugin ui-a
        card 90 plugin ui-a
        BaseChart 50 out-of-scope +import
        base-chart 50 out-of-scope +import
        component 0 builtin vue
        slot 0 builtin vue
        ");
    }

    #[test]
    fn html_file_candidates() {
        let registry = registry();
        let path = "src/page.html";
        let candidates = suggest_tags(
            &registry,
            path,
            TagNameConvention::for_path(path),
            &CompletionRequest::default(),
        );
        let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        insta::assert_snapshot!(
            texts.join(" "),
            @"user-card app-layout card base-chart component slot"
        );
    }

    #[test]
    fn duplicate_text_keeps_nearest_tier() {
        let registry = registry();
        let candidates = suggest_tags(
            &registry,
            APP,
            TagNameConvention::KebabAndPascal,
            &CompletionRequest::default(),
        );
        let user_cards: Vec<&TagCandidate> =
            candidates.iter().filter(|c| c.text == "UserCard").collect();
        assert_eq!(user_cards.len(), 1);
        assert_eq!(user_cards[0].priority, 100.0);
    }

    #[test]
    fn candidates_serialize_as_camel_case() {
        let registry = registry();
        let candidates = suggest_tags(
            &registry,
            "src/page.html",
            TagNameConvention::KebabOnly,
            &CompletionRequest::default(),
        );
        let json = serde_json::to_value(&candidates[0]).unwrap();
        assert_eq!(json["text"], "user-card");
        assert_eq!(json["insertImport"], false);
        assert_eq!(json["proximity"], "local");
        assert!(json.get("moduleLabel").is_none());
    }
}
