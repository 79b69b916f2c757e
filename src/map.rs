//! The map component: dataset, options, and hover state in one place.

use crate::config::MapOptions;
use crate::data::{self, Region};
use crate::error::MapResult;
use crate::interaction::{HoverTracker, PointerEvent};
use crate::scene::{Cursor, RegionGroup, Scene, ShapeNode};
use crate::style::resolve_shape_style;

/// Interactive choropleth map of Turkey's provinces.
///
/// Owns the region dataset, the configuration, and the single hover slot.
/// Hosts feed pointer events in with [`handle_event`](Self::handle_event)
/// (or the per-kind methods) and recompose the scene whenever an event
/// reports a state change. Handlers run synchronously; a panic in a caller
/// callback propagates to the host unmodified.
pub struct TurkeyMap {
    regions: Vec<Region>,
    options: MapOptions,
    hover: HoverTracker,
}

impl TurkeyMap {
    /// Create a map over the built-in 81-province dataset.
    pub fn new(options: MapOptions) -> Self {
        Self {
            regions: data::provinces().to_vec(),
            options,
            hover: HoverTracker::new(),
        }
    }

    /// Create a map over a caller-supplied dataset.
    ///
    /// The dataset is validated up front; see [`data::validate`].
    pub fn with_regions(regions: Vec<Region>, options: MapOptions) -> MapResult<Self> {
        data::validate(&regions)?;
        Ok(Self {
            regions,
            options,
            hover: HoverTracker::new(),
        })
    }

    /// The region dataset, in render order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The active configuration.
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Id of the currently hovered province, if any.
    pub fn hovered_id(&self) -> Option<&str> {
        self.hover.hovered()
    }

    /// Apply one pointer event.
    ///
    /// Returns true when hover state changed and the scene needs
    /// recomposing. Clicks never change state.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Enter { id } => self.pointer_enter(id),
            PointerEvent::Leave { id } => self.pointer_leave(id),
            PointerEvent::Click { id } => {
                self.click(id);
                false
            }
        }
    }

    /// Pointer moved onto the province `id`.
    ///
    /// Sets the hover slot and invokes the hover callback with the
    /// province's payload. Returns true if the hover state changed.
    pub fn pointer_enter(&mut self, id: &str) -> bool {
        let info = match self.regions.iter().find(|r| r.id == id) {
            Some(region) => region.info(),
            None => {
                tracing::debug!(id, "pointer enter for unknown region");
                return false;
            }
        };

        let changed = self.hover.enter(id);
        tracing::debug!(id, "hover enter");
        if let Some(on_hover) = &self.options.on_hover {
            on_hover(Some(&info));
        }
        changed
    }

    /// Pointer left the province `id`.
    ///
    /// Clears the hover slot unconditionally (see [`HoverTracker::leave`])
    /// and invokes the hover callback with `None`. Returns true if a
    /// province was hovered.
    pub fn pointer_leave(&mut self, id: &str) -> bool {
        let changed = self.hover.leave();
        tracing::debug!(id, "hover leave");
        if let Some(on_hover) = &self.options.on_hover {
            on_hover(None);
        }
        changed
    }

    /// Primary click on the province `id`.
    ///
    /// Invokes the click callback with the province's payload, independent
    /// of hover state; a never-hovered province is still clickable.
    pub fn click(&self, id: &str) {
        let Some(region) = self.regions.iter().find(|r| r.id == id) else {
            tracing::debug!(id, "click on unknown region");
            return;
        };
        if let Some(on_click) = &self.options.on_click {
            let info = region.info();
            tracing::debug!(id, "click");
            on_click(&info);
        }
    }

    /// Compose the scene for the current state.
    ///
    /// One group per region in dataset order, one styled shape per outline
    /// in outline order. The payload is built once per region and shared by
    /// every shape's style resolution.
    pub fn compose(&self) -> Scene {
        let cursor = if self.options.is_interactive() {
            Cursor::Pointer
        } else {
            Cursor::Default
        };

        let groups = self
            .regions
            .iter()
            .map(|region| {
                let info = region.info();
                let hovered = self.hover.is_hovered(&region.id);
                let shapes = region
                    .outlines
                    .iter()
                    .enumerate()
                    .map(|(index, outline)| ShapeNode {
                        outline: outline.clone(),
                        style: resolve_shape_style(&info, index, hovered, &self.options),
                    })
                    .collect();
                RegionGroup {
                    id: region.id.clone(),
                    name: region.name.clone(),
                    shapes,
                }
            })
            .collect();

        Scene {
            class_name: self.options.class_name.clone(),
            cursor,
            drop_shadow: self.options.show_drop_shadow,
            groups,
        }
    }

    /// Compose and serialize the scene to SVG markup.
    pub fn to_svg(&self) -> String {
        self.compose().to_svg()
    }
}
