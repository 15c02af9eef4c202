//! YDS design-system widgets.
//!
//! Every widget owns its attributes as [`yds_core::Observed`] values, takes
//! an [`yds_core::Invalidator`] and a shared [`Theme`] at construction, and
//! implements [`yds_core::Component`]. Layout and display passes write into
//! plain render primitives that a host (or the [`HeadlessRenderer`]) reads.

pub mod primitives;
pub mod renderer;
pub mod style;
pub mod theme;
pub mod widgets;

pub use primitives::{
    ContentLayout, Icon, ImagePrimitive, LabelPrimitive, LayerPrimitive, TextDirection,
    TrianglePrimitive,
};
pub use renderer::{HeadlessRenderer, Paint, PaintLayer, RecordedRenderScene, RenderOp};
pub use style::{BorderWidth, ResolvedStyle};
pub use theme::{ColorToken, DimensionToken, Theme, ThemeError};
pub use widgets::*;

pub mod prelude {
    pub use crate::theme::{ColorToken, Theme};
    pub use crate::widgets::*;
    pub use crate::Icon;
    pub use yds_core::{Component, Interaction, Invalidator, Runtime};
}
