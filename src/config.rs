//! Map configuration: colors, stroke widths, and caller callbacks.
//!
//! All options are optional; [`MapOptions::default`] matches the documented
//! defaults. Callback slots are boxed closures so a configured map can live
//! behind the preview server's shared state.

use std::fmt;

use crate::data::CityInfo;

/// Click callback: receives the clicked province's payload.
pub type ClickHandler = Box<dyn Fn(&CityInfo) + Send + Sync>;

/// Hover callback: `Some` on hover-enter, `None` on hover-leave.
pub type HoverHandler = Box<dyn Fn(Option<&CityInfo>) + Send + Sync>;

/// Per-province fill resolver for the non-hovered state.
///
/// Returning `None` (or an empty string) falls back to the configured
/// default color.
pub type ColorResolver = Box<dyn Fn(&CityInfo) -> Option<String> + Send + Sync>;

/// Default fill while hovered.
pub const DEFAULT_HOVER_COLOR: &str = "#dc3522";
/// Default fill when no resolver is configured or the resolver yields nothing.
pub const DEFAULT_FILL_COLOR: &str = "#2d3748";
/// Default border color, also the fill of decorative outlines.
pub const DEFAULT_STROKE_COLOR: &str = "#fff";
/// Default border width.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;
/// Default border width while hovered.
pub const DEFAULT_HOVER_STROKE_WIDTH: f32 = 2.0;

/// Configuration for a [`TurkeyMap`](crate::TurkeyMap) instance.
///
/// Immutable per render pass; build one with the `with_*`/`on_*` methods:
///
/// ```
/// use turkiye_map::MapOptions;
///
/// let options = MapOptions::default()
///     .with_hover_color("#e11")
///     .with_class_name("dashboard-map")
///     .on_hover(|city| {
///         if let Some(city) = city {
///             println!("over {}", city.name);
///         }
///     });
/// assert!(options.is_interactive());
/// ```
pub struct MapOptions {
    /// Invoked on a primary click of a province.
    pub on_click: Option<ClickHandler>,
    /// Invoked on hover-enter (payload) and hover-leave (`None`).
    pub on_hover: Option<HoverHandler>,
    /// Resolves the non-hovered fill color per province.
    pub city_color: Option<ColorResolver>,
    /// Extra CSS class appended to the wrapper element.
    pub class_name: String,
    /// Fill override while hovered; an empty string disables the override.
    pub hover_color: String,
    /// Fallback fill when no resolver is set or the resolver yields nothing.
    pub default_color: String,
    /// Border color, also the fill of decorative outlines.
    pub stroke_color: String,
    /// Base border width.
    pub stroke_width: f32,
    /// Border width while hovered.
    pub hover_stroke_width: f32,
    /// Enables the shared drop-shadow filter.
    pub show_drop_shadow: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            on_click: None,
            on_hover: None,
            city_color: None,
            class_name: String::new(),
            hover_color: DEFAULT_HOVER_COLOR.to_string(),
            default_color: DEFAULT_FILL_COLOR.to_string(),
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            hover_stroke_width: DEFAULT_HOVER_STROKE_WIDTH,
            show_drop_shadow: true,
        }
    }
}

impl MapOptions {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the click callback.
    pub fn on_click(mut self, handler: impl Fn(&CityInfo) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Set the hover callback.
    pub fn on_hover(mut self, handler: impl Fn(Option<&CityInfo>) + Send + Sync + 'static) -> Self {
        self.on_hover = Some(Box::new(handler));
        self
    }

    /// Set the per-province fill resolver.
    pub fn city_color(
        mut self,
        resolver: impl Fn(&CityInfo) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.city_color = Some(Box::new(resolver));
        self
    }

    /// Set the extra wrapper CSS class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the hovered fill color. An empty string disables the override.
    pub fn with_hover_color(mut self, color: impl Into<String>) -> Self {
        self.hover_color = color.into();
        self
    }

    /// Set the fallback fill color.
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    /// Set the border color.
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Set the base border width.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the border width used while hovered.
    pub fn with_hover_stroke_width(mut self, width: f32) -> Self {
        self.hover_stroke_width = width;
        self
    }

    /// Enable or disable the shared drop-shadow filter.
    pub fn with_drop_shadow(mut self, show: bool) -> Self {
        self.show_drop_shadow = show;
        self
    }

    /// Whether any interaction callback is configured.
    ///
    /// Drives the cursor affordance: pointer when interactive, default
    /// otherwise.
    pub fn is_interactive(&self) -> bool {
        self.on_click.is_some() || self.on_hover.is_some()
    }
}

impl fmt::Debug for MapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapOptions")
            .field("on_click", &self.on_click.as_ref().map(|_| "<handler>"))
            .field("on_hover", &self.on_hover.as_ref().map(|_| "<handler>"))
            .field("city_color", &self.city_color.as_ref().map(|_| "<resolver>"))
            .field("class_name", &self.class_name)
            .field("hover_color", &self.hover_color)
            .field("default_color", &self.default_color)
            .field("stroke_color", &self.stroke_color)
            .field("stroke_width", &self.stroke_width)
            .field("hover_stroke_width", &self.hover_stroke_width)
            .field("show_drop_shadow", &self.show_drop_shadow)
            .finish()
    }
}
