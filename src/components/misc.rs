use crate::prelude::*;

use crate::utils::CCStr;

#[component]
pub fn TextTooltip(tooltip_text: CCStr, children: Element) -> Element {
    rsx! {
        div { class: "contents", title: "{tooltip_text}", {children} }
    }
}

/// Moves its children to the app root so they escape any stacking context of
/// the parent. Used by [`Modal`](super::modal::Modal).
#[component]
pub fn Teleport(children: Element) -> Element {
    let id = use_hook(|| uuid::Uuid::new_v4());

    log::debug!("Teleport {id} Rendered");

    use_effect(move || {
        document::eval(&format!(
            r#"
            const div_to_tp = document.getElementById("{id}");
            const div_app = document.getElementById("app");
            div_app.append(div_to_tp);
        "#
        ));
    });

    use_drop(move || {
        log::debug!("Teleport {id} Dropped");
        document::eval(&format!(
            r#"
            const div_to_tp = document.getElementById("{id}");
            const div_orig_parent = document.getElementById("parent_{id}");
            div_orig_parent.append(div_to_tp);
        "#
        ));
    });

    rsx! {
        div { id: "parent_{id}", class: "fixed",
            div { id: "{id}", {children} }
        }
    }
}
