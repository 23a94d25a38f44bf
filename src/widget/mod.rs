//! Widget layer for vault-widget.
//!
//! The tree model and the builder that lays a bookmarked note out in it.

pub mod build;
pub mod model;

pub use build::{
    CONTENT_COLOR, DEFAULT_BOOKMARK, MISSING_BOOKMARK_MESSAGE, REFRESH_INTERVAL, create_widget,
    resolve_parameter,
};
pub use model::{Color, Element, Font, FontWeight, Stack, Widget, WidgetText};
