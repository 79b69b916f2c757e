//! Per-shape style resolution.
//!
//! A pure function from (province payload, outline index, hover state,
//! configuration) to the rendered style. Invoked once per outline per
//! render pass; never errors and never validates color syntax.

use crate::config::MapOptions;
use crate::data::CityInfo;

/// Resolved presentation for one rendered shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    /// Fill color.
    pub fill: String,
    /// Stroke color, `"none"` for decorative outlines.
    pub stroke: String,
    /// Stroke width, `0` for decorative outlines.
    pub stroke_width: f32,
}

/// Resolve the style for one outline of a province.
///
/// Decorative outlines (index > 0) always render in the border color with no
/// stroke of their own; that is a visual layering choice, independent of
/// hover state and color configuration. The primary outline picks the hover
/// color, the caller's resolver, or the default fill, in that order:
///
/// 1. hovered and `hover_color` non-empty: `hover_color`;
/// 2. resolver configured and yields a non-empty color: that color;
/// 3. otherwise: `default_color`.
///
/// The primary stroke is always `stroke_color`; its width is
/// `hover_stroke_width` while hovered (even when an empty `hover_color`
/// left the fill on the non-hovered branch), else `stroke_width`.
pub fn resolve_shape_style(
    city: &CityInfo,
    outline_index: usize,
    hovered: bool,
    options: &MapOptions,
) -> ShapeStyle {
    if outline_index != 0 {
        return ShapeStyle {
            fill: options.stroke_color.clone(),
            stroke: "none".to_string(),
            stroke_width: 0.0,
        };
    }

    let fill = if hovered && !options.hover_color.is_empty() {
        options.hover_color.clone()
    } else {
        options
            .city_color
            .as_ref()
            .and_then(|resolve| resolve(city))
            .filter(|color| !color.is_empty())
            .unwrap_or_else(|| options.default_color.clone())
    };

    ShapeStyle {
        fill,
        stroke: options.stroke_color.clone(),
        stroke_width: if hovered {
            options.hover_stroke_width
        } else {
            options.stroke_width
        },
    }
}
