use dioxus::prelude::*;

use super::*;

#[test]
fn table_has_sections_and_entries() {
    assert!(!SHORTCUT_SECTIONS.is_empty());
    for section in SHORTCUT_SECTIONS {
        assert!(!section.title.is_empty());
        assert!(
            !section.entries.is_empty(),
            "section {} has no entries",
            section.title
        );
    }
}

#[test]
fn every_entry_has_keys_and_a_description() {
    for entry in SHORTCUT_SECTIONS.iter().flat_map(|s| s.entries) {
        assert!(!entry.keys.is_empty(), "{} has no keys", entry.description);
        assert!(entry.keys.iter().all(|k| !k.is_empty()));
        assert!(!entry.description.is_empty());
    }
}

#[test]
fn descriptions_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for entry in SHORTCUT_SECTIONS.iter().flat_map(|s| s.entries) {
        assert!(
            seen.insert(entry.description),
            "duplicate shortcut description: {}",
            entry.description
        );
    }
}

#[test]
fn dialog_content_lists_every_binding() {
    fn app() -> Element {
        rsx! {
            ShortcutsTable {}
        }
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    for section in SHORTCUT_SECTIONS {
        assert!(html.contains(section.title));
        for entry in section.entries {
            assert!(html.contains(entry.description));
            for key in entry.keys {
                assert!(html.contains(key));
            }
        }
    }
}
