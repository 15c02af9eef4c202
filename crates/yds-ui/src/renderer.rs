use yds_core::ComponentId;

use crate::primitives::{ImagePrimitive, LabelPrimitive, LayerPrimitive, TrianglePrimitive};

/// Layer that a paint operation targets within the rendering pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintLayer {
    Behind,
    Content,
    Overlay,
}

/// A rendered operation emitted by the headless renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Layer {
        component: ComponentId,
        layer: PaintLayer,
        primitive: LayerPrimitive,
    },
    Label {
        component: ComponentId,
        primitive: LabelPrimitive,
    },
    Image {
        component: ComponentId,
        primitive: ImagePrimitive,
    },
    Triangle {
        component: ComponentId,
        layer: PaintLayer,
        primitive: TrianglePrimitive,
    },
}

impl RenderOp {
    pub fn component(&self) -> ComponentId {
        match self {
            RenderOp::Layer { component, .. }
            | RenderOp::Label { component, .. }
            | RenderOp::Image { component, .. }
            | RenderOp::Triangle { component, .. } => *component,
        }
    }
}

/// A collection of render operations for a set of widgets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedRenderScene {
    operations: Vec<RenderOp>,
}

impl RecordedRenderScene {
    pub fn new(operations: Vec<RenderOp>) -> Self {
        Self { operations }
    }

    /// Returns a slice of recorded render operations in submission order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    /// Consumes the scene and yields the owned operations.
    pub fn into_operations(self) -> Vec<RenderOp> {
        self.operations
    }

    /// Text of every visible label, in submission order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().filter_map(|op| match op {
            RenderOp::Label { primitive, .. } => primitive.text.as_deref(),
            _ => None,
        })
    }

    pub fn layers_for(&self, layer: PaintLayer) -> impl Iterator<Item = &LayerPrimitive> {
        self.operations.iter().filter_map(move |op| match op {
            RenderOp::Layer {
                layer: op_layer,
                primitive,
                ..
            } if *op_layer == layer => Some(primitive),
            _ => None,
        })
    }

    pub fn for_component(&self, component: ComponentId) -> impl Iterator<Item = &RenderOp> {
        self.operations
            .iter()
            .filter(move |op| op.component() == component)
    }
}

/// Implemented by widgets that expose applied render state.
pub trait Paint {
    fn paint(&self, scene: &mut SceneBuilder);
}

/// Collects operations for one widget at a time. Hidden primitives are
/// skipped.
#[derive(Default)]
pub struct SceneBuilder {
    component: ComponentId,
    operations: Vec<RenderOp>,
}

impl SceneBuilder {
    pub fn layer(&mut self, layer: PaintLayer, primitive: &LayerPrimitive) {
        if primitive.alpha <= 0.0 {
            return;
        }
        self.operations.push(RenderOp::Layer {
            component: self.component,
            layer,
            primitive: primitive.clone(),
        });
    }

    pub fn label(&mut self, primitive: &LabelPrimitive) {
        if !primitive.is_visible() {
            return;
        }
        self.operations.push(RenderOp::Label {
            component: self.component,
            primitive: primitive.clone(),
        });
    }

    pub fn image(&mut self, primitive: &ImagePrimitive) {
        if !primitive.is_visible() {
            return;
        }
        self.operations.push(RenderOp::Image {
            component: self.component,
            primitive: primitive.clone(),
        });
    }

    pub fn triangle(&mut self, layer: PaintLayer, primitive: TrianglePrimitive) {
        self.operations.push(RenderOp::Triangle {
            component: self.component,
            layer,
            primitive,
        });
    }
}

/// A lightweight renderer that records what widgets would draw.
#[derive(Default)]
pub struct HeadlessRenderer {
    builder: SceneBuilder,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `widget` under `component`. Call once per widget, in paint
    /// order, then [`HeadlessRenderer::finish`].
    pub fn paint(&mut self, component: ComponentId, widget: &dyn Paint) -> &mut Self {
        self.builder.component = component;
        widget.paint(&mut self.builder);
        self
    }

    pub fn finish(self) -> RecordedRenderScene {
        RecordedRenderScene::new(self.builder.operations)
    }
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
