//! View composition

pub mod composer;
pub mod host;

pub use composer::ViewComposer;
pub use host::{ChartKind, ChartPoint, RenderHost, TextHost};
