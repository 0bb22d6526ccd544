//! # Deferred Module
//!
//! Components for rendering content whose data is not available yet.
//!
//! The building block is [`DeferredRegion`](region::DeferredRegion): it wraps
//! arbitrary children behind the framework suspense gate and shows a fallback
//! view until every suspended descendant has resolved.
//! [`DeferredPage`](region::DeferredPage) and
//! [`DeferredCard`](region::DeferredCard) are presets of it with fixed
//! fallback visuals, and [`with_deferred_load`](wrap::with_deferred_load)
//! turns an existing component into a deferred-loading variant without
//! touching its props.
//!
//! [`LoadingOverlay`](overlay::LoadingOverlay) is the synchronous sibling: it
//! never suspends anything, it just layers a spinner over its children while
//! a caller-owned busy flag is set.
//!
//! ## Example Usage
//!
//! ```rust
//! use crate::deferred::prelude::*;
//!
//! #[component]
//! fn Article(id: usize) -> Element {
//!     rsx! {
//!         DeferredCard {
//!             ArticleBody { id }
//!         }
//!     }
//! }
//! ```

pub mod overlay;
pub mod region;
pub mod wrap;

/// Prelude module that re-exports the public surface of the deferred
/// framework.
pub mod prelude {
    pub use super::overlay::LoadingOverlay;
    pub use super::region::{DeferredCard, DeferredPage, DeferredRegion};
    pub use super::wrap::with_deferred_load;
}

#[cfg(test)]
mod tests;
