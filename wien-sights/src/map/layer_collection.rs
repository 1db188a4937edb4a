use std::ops::Index;

use crate::layer::Layer;

/// Role of a layer in the layer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Background layer. Only one base layer is visible at a time.
    Base,
    /// Layer shown on top of the base layer, toggled independently of others.
    Overlay,
}

/// Collection of labeled layers, backing the layer control of the map.
///
/// Any layer can be hidden, keeping its place in the collection. Base layers are mutually
/// exclusive: selecting one hides the others.
///
/// Since a map should be able to show anything implementing the [`Layer`] trait, this collection
/// stores layers as trait objects. You can use downcasting through `Any` trait to obtain a
/// concrete layer type you work with.
#[derive(Default)]
pub struct LayerCollection(Vec<LayerEntry>);

struct LayerEntry {
    label: String,
    kind: LayerKind,
    layer: Box<dyn Layer>,
    is_hidden: bool,
}

impl LayerCollection {
    /// Adds a hidden base layer to the end of the collection. Use
    /// [`LayerCollection::select_base`] to show it.
    pub fn push_base(&mut self, label: impl Into<String>, layer: impl Layer + 'static) {
        self.push_entry(label.into(), LayerKind::Base, Box::new(layer), true);
    }

    /// Adds an overlay to the end of the collection.
    pub fn push_overlay(
        &mut self,
        label: impl Into<String>,
        layer: impl Layer + 'static,
        is_visible: bool,
    ) {
        self.push_entry(label.into(), LayerKind::Overlay, Box::new(layer), !is_visible);
    }

    fn push_entry(&mut self, label: String, kind: LayerKind, layer: Box<dyn Layer>, is_hidden: bool) {
        if self.find(&label).is_some() {
            log::warn!("Layer collection already has a layer labeled {label:?}");
        }

        self.0.push(LayerEntry {
            label,
            kind,
            layer,
            is_hidden,
        });
    }

    /// Shows the base layer with the given label and hides all other base layers. Returns false
    /// and changes nothing if there is no base layer with this label.
    pub fn select_base(&mut self, label: &str) -> bool {
        let Some(index) = self.find(label) else {
            return false;
        };
        if self.0[index].kind != LayerKind::Base {
            return false;
        }

        for (i, entry) in self.0.iter_mut().enumerate() {
            if entry.kind == LayerKind::Base {
                entry.is_hidden = i != index;
            }
        }

        true
    }

    /// Label of the visible base layer.
    pub fn active_base(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.kind == LayerKind::Base && !entry.is_hidden)
            .map(|entry| entry.label.as_str())
    }

    /// Index of the layer with the given label.
    pub fn find(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|entry| entry.label == label)
    }

    /// Shows or hides the overlay with the given label. Returns the new visibility, or `None` if
    /// there is no overlay with this label.
    pub fn toggle(&mut self, label: &str) -> Option<bool> {
        let entry = self
            .0
            .iter_mut()
            .find(|entry| entry.label == label && entry.kind == LayerKind::Overlay)?;
        entry.is_hidden = !entry.is_hidden;

        Some(!entry.is_hidden)
    }

    /// Hides the layer at the `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn hide(&mut self, index: usize) {
        self.0[index].is_hidden = true;
    }

    /// Shows the layer at the `index`. For a base layer this hides the other base layers.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn show(&mut self, index: usize) {
        if self.0[index].kind == LayerKind::Base {
            for entry in self.0.iter_mut().filter(|e| e.kind == LayerKind::Base) {
                entry.is_hidden = true;
            }
        }

        self.0[index].is_hidden = false;
    }

    /// Returns true if the layer at `index` exists and is not hidden.
    pub fn is_visible(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|entry| !entry.is_hidden)
    }

    /// Number of layers in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection has no layers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the layer at `index`.
    pub fn get(&self, index: usize) -> Option<&dyn Layer> {
        self.0.get(index).map(|entry| &*entry.layer)
    }

    /// Label of the layer at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|entry| entry.label.as_str())
    }

    /// Kind of the layer at `index`.
    pub fn kind(&self, index: usize) -> Option<LayerKind> {
        self.0.get(index).map(|entry| entry.kind)
    }

    /// Iterates over labels of the layers of the given kind, in the collection order.
    pub fn labels(&self, kind: LayerKind) -> impl Iterator<Item = &str> + '_ {
        self.0
            .iter()
            .filter(move |entry| entry.kind == kind)
            .map(|entry| entry.label.as_str())
    }

    /// Iterates over all layers.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Layer> + '_ {
        self.0.iter().map(|entry| &*entry.layer)
    }

    /// Iterates over the layers that are not hidden.
    pub fn iter_visible(&self) -> impl Iterator<Item = &dyn Layer> + '_ {
        self.0
            .iter()
            .filter(|entry| !entry.is_hidden)
            .map(|entry| &*entry.layer)
    }
}

impl Index<usize> for LayerCollection {
    type Output = dyn Layer;

    fn index(&self, index: usize) -> &Self::Output {
        &*self.0[index].layer
    }
}
