use crate::prelude::*;

use crate::{
    components::svg::{ArrowRight, DrawSvg, SvgSize::Size8},
    utils::CCStr,
    Route,
};

pub mod deferred_gallery;
pub mod home;
pub mod main_layout;
pub mod overlay_gallery;
pub mod skeleton_gallery;

#[component]
fn TitledView(title: CCStr, subtitle: CCStr, children: Element) -> Element {
    rsx! {
        div { class: "shrink-0",
            h1 { class: "text-6xl font-black text-center", {title} }
            h2 { class: "text-base font-light text-center", {subtitle} }
        }
        div { class: "mb-4 h-px border-t border-solid border-gray-500" }
        {children}
    }
}

/// Reusable card component for navigating to a gallery view
#[component]
pub fn GalleryLinkButton(route: Route, label: CCStr, description: CCStr) -> Element {
    let click_gallery = move |_| {
        navigator().push(route.clone());
    };

    rsx! {
        div {
            class: "card card-lg border-2 border-dashed border-base-300 shadow-xl cursor-pointer \
            transition-transform hover:scale-105 hover:border-primary",
            onclick: click_gallery,
            div { class: "card-body items-center justify-center text-center",
                div { class: "btn btn-circle btn-primary btn-lg",
                    DrawSvg::<ArrowRight> { size: Size8 }
                }
                div { class: "text-lg font-bold mt-4", {label} }
                p { class: "text-sm text-base-content/70", {description} }
            }
        }
    }
}
