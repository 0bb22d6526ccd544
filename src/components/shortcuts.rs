//! Keyboard shortcuts reference dialog.
//!
//! The bindings themselves are handled by the main layout; this module only
//! holds the static table describing them and the dialog that displays it.

use dioxus::prelude::*;

use crate::components::modal::InfoModal;

/// A single binding: the ordered key labels composing the combination, and
/// what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutEntry {
    pub keys: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutSection {
    pub title: &'static str,
    pub entries: &'static [ShortcutEntry],
}

/// Every binding the application reacts to, defined at load time and never
/// mutated. Keep this in sync with the key handler in the main layout.
pub static SHORTCUT_SECTIONS: &[ShortcutSection] = &[
    ShortcutSection {
        title: "General",
        entries: &[
            ShortcutEntry {
                keys: &["?"],
                description: "Show keyboard shortcuts",
            },
            ShortcutEntry {
                keys: &["Esc"],
                description: "Close the open dialog",
            },
        ],
    },
    ShortcutSection {
        title: "Navigation",
        entries: &[
            ShortcutEntry {
                keys: &["G", "H"],
                description: "Go to the overview",
            },
            ShortcutEntry {
                keys: &["G", "D"],
                description: "Go to deferred regions",
            },
            ShortcutEntry {
                keys: &["G", "O"],
                description: "Go to the loading overlay",
            },
            ShortcutEntry {
                keys: &["G", "K"],
                description: "Go to skeletons",
            },
        ],
    },
];

/// The dialog content, one table per section.
#[component]
pub fn ShortcutsTable() -> Element {
    rsx! {
        div { class: "flex flex-col gap-6 min-w-xs",
            for group in SHORTCUT_SECTIONS {
                div {
                    h3 { class: "text-sm font-bold uppercase text-base-content/60 mb-2",
                        {group.title}
                    }
                    table { class: "table table-sm",
                        tbody {
                            for entry in group.entries {
                                tr {
                                    td { class: "w-40",
                                        span { class: "flex flex-row items-center gap-1",
                                            for (i , key) in entry.keys.iter().enumerate() {
                                                if i > 0 {
                                                    span { class: "text-xs text-base-content/40", "then" }
                                                }
                                                kbd { class: "kbd kbd-sm", {*key} }
                                            }
                                        }
                                    }
                                    td { {entry.description} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ShortcutsModal(is_open: Signal<bool>) -> Element {
    rsx! {
        InfoModal { is_open, title: "Keyboard shortcuts",
            ShortcutsTable {}
        }
    }
}

#[cfg(test)]
#[path = "shortcuts_tests.rs"]
mod tests;
