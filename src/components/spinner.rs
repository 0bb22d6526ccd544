use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(unused)]
pub enum SpinnerSize {
    Custom(&'static str),
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}
impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            Self::Custom(s) => s,
            Self::Xs => "loading-xs",
            Self::Sm => "loading-sm",
            Self::Md => "loading-md",
            Self::Lg => "loading-lg",
            Self::Xl => "loading-xl",
        }
    }
}

/// Animated activity indicator, [SpinnerSize::Md] unless told otherwise.
#[component]
pub fn Spinner(size: Option<SpinnerSize>) -> Element {
    let size_class = size.unwrap_or_default().class();
    rsx! {
        span { class: "loading loading-spinner {size_class}" }
    }
}
