use crate::foundation::error::{VatformError, VatformResult};
use crate::stack::layer::Layer;

/// Ordered collection of layers sharing one print resolution.
///
/// Index 0 is the first layer printed (closest to the build plate).
/// Every layer's buffer matches the stack dimensions; constructors and
/// mutators reject anything else, so readers never re-check.
#[derive(Clone, Debug)]
pub struct LayerStack {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Empty stack for the given print resolution.
    pub fn new(width: u32, height: u32) -> VatformResult<Self> {
        if width == 0 || height == 0 {
            return Err(VatformError::precondition(format!(
                "stack resolution must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            layers: Vec::new(),
        })
    }

    pub fn from_layers(width: u32, height: u32, layers: Vec<Layer>) -> VatformResult<Self> {
        let mut stack = Self::new(width, height)?;
        stack.replace_layers(layers)?;
        Ok(stack)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Append one layer; its buffer must match the stack resolution.
    pub fn push(&mut self, layer: Layer) -> VatformResult<()> {
        self.check_layer(self.layers.len(), &layer)?;
        self.layers.push(layer);
        Ok(())
    }

    /// Independent copy of every layer, for concurrent read-only use.
    pub fn clone_layers(&self) -> Vec<Layer> {
        self.layers.clone()
    }

    /// Swap in a whole new layer collection.
    ///
    /// The incoming layers are validated in full before anything is
    /// touched: on error the stack keeps its previous contents.
    pub fn replace_layers(&mut self, layers: Vec<Layer>) -> VatformResult<()> {
        for (index, layer) in layers.iter().enumerate() {
            self.check_layer(index, layer)?;
        }
        self.layers = layers;
        Ok(())
    }

    fn check_layer(&self, index: usize, layer: &Layer) -> VatformResult<()> {
        if layer.width() != self.width || layer.height() != self.height {
            return Err(VatformError::dimension_mismatch(format!(
                "layer {index} is {}x{}, stack is {}x{}",
                layer.width(),
                layer.height(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }
}
