//! Attribute-driven invalidation and style resolution for design-system widgets.
//!
//! Components own [`Observed`] attributes. A write that changes a value
//! requests the attribute's declared [`Aspect`]s through the component's
//! [`Invalidator`]; the [`Runtime`] coalesces those requests and, on the
//! host's next frame, runs at most one layout and one display pass per
//! component. Display passes resolve styles through ordered [`RuleTable`]s.

mod aspect;
mod attribute;
pub mod collections;
mod component;
mod invalidator;
mod platform;
mod resolve;
mod runtime;

pub use aspect::{aspects, Aspect, InvalidationFlags, InvalidationState};
pub use attribute::Observed;
pub use component::Component;
pub use invalidator::{Invalidator, PassStats};
pub use platform::{Clock, DetachedScheduler, FrameRequester, RenderScheduler};
pub use resolve::{Interaction, Pressable, Rule, RuleTable};
pub use runtime::{FrameReport, Runtime, RuntimeHandle};

pub type ComponentId = usize;
