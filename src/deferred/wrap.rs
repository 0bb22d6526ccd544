use dioxus::prelude::*;

use super::region::DeferredRegion;

/// Builds a deferred-loading variant of an existing component.
///
/// The returned closure is a drop-in replacement for rendering `inner`
/// directly: it takes the exact same props and forwards them untouched, only
/// the pending-state visual changes. While `inner` is suspended the region
/// shows the output of `fallback` (rebuilt on every render, like the
/// boundary's own fallback), or the region default when `None`.
///
/// ```rust
/// let changelog = with_deferred_load(ChangelogPanel, Some(|| rsx! {
///     SkeletonText { lines: 5 }
/// }));
///
/// rsx! {
///     {changelog(ChangelogPanelProps { entry_count: 5 })}
/// }
/// ```
pub fn with_deferred_load<P>(
    inner: Component<P>,
    fallback: Option<fn() -> Element>,
) -> impl Fn(P) -> Element + Clone
where
    P: Properties + Clone + PartialEq,
{
    move |props: P| {
        rsx! {
            DeferredRegion { fallback: fallback.map(|f| f()),
                DeferredMount::<P> { inner, props }
            }
        }
    }
}

/// Gives the wrapped component a scope of its own, so its hooks and its
/// suspension stay separate from the call site.
#[component]
fn DeferredMount<P: Properties + Clone + PartialEq>(inner: Component<P>, props: P) -> Element {
    inner(props)
}
