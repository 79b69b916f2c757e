//! The composed scene graph and its SVG serialization.
//!
//! A [`Scene`] is a plain value: one group per province in dataset order,
//! one shape per outline in outline order, every shape already styled. The
//! drop-shadow filter is declared once per scene and referenced by the
//! single outer group, so the expensive resource exists exactly once no
//! matter how many shapes use it.

use std::fmt::Write;

use crate::style::ShapeStyle;

/// ViewBox of the composed scene; the map scales to fill its container.
pub const VIEW_BOX: &str = "0 0 1000 500";

/// Id of the shared drop-shadow filter definition.
pub const DROP_SHADOW_FILTER_ID: &str = "mapDropshadow";

/// Base CSS class of the wrapper element.
pub const CONTAINER_CLASS: &str = "turkey-map-container";

/// Transition hint attached to every shape.
const SHAPE_TRANSITION: &str = "fill 0.3s ease-in-out, stroke-width 0.3s ease-in-out";

/// Transition hint attached to every province group.
const GROUP_TRANSITION: &str = "all 0.3s ease-in-out";

/// Cursor affordance for the whole map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Shown when a click or hover callback is configured.
    Pointer,
    /// Shown for a purely presentational map.
    Default,
}

impl Cursor {
    /// CSS value for this cursor.
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::Default => "default",
        }
    }
}

/// One styled shape: an opaque path outline plus its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    /// SVG path data, passed through unmodified.
    pub outline: String,
    /// Resolved presentation for this shape.
    pub style: ShapeStyle,
}

/// One province group: id and display name exposed as inspectable
/// attributes, plus its shapes in outline order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGroup {
    /// Province id, rendered as the group's `id` attribute.
    pub id: String,
    /// Display name, rendered as the group's `data-name` attribute.
    pub name: String,
    /// Styled shapes, primary outline first.
    pub shapes: Vec<ShapeNode>,
}

/// The composed scene for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Extra CSS class appended to the wrapper element.
    pub class_name: String,
    /// Cursor affordance applied to every province group.
    pub cursor: Cursor,
    /// Whether the shared drop-shadow filter is declared and referenced.
    pub drop_shadow: bool,
    /// Province groups in dataset order.
    pub groups: Vec<RegionGroup>,
}

impl Scene {
    /// Serialize the scene to SVG markup inside its wrapper element.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(1024 + self.groups.len() * 512);

        let class = if self.class_name.is_empty() {
            CONTAINER_CLASS.to_string()
        } else {
            format!("{CONTAINER_CLASS} {}", self.class_name)
        };
        let _ = writeln!(out, r#"<div class="{}">"#, xml_escape(&class));
        let _ = writeln!(
            out,
            r#"<svg viewBox="{VIEW_BOX}" xmlns="http://www.w3.org/2000/svg" style="width: 100%; height: 100%;">"#
        );

        if self.drop_shadow {
            let _ = writeln!(out, r#"<filter id="{DROP_SHADOW_FILTER_ID}" height="130%">"#);
            out.push_str(concat!(
                r#"<feGaussianBlur in="SourceAlpha" stdDeviation="3"/>"#,
                "\n",
                r#"<feOffset dx="2" dy="2" result="offsetblur"/>"#,
                "\n",
                r#"<feComponentTransfer><feFuncA type="linear" slope="0.3"/></feComponentTransfer>"#,
                "\n",
                r#"<feMerge><feMergeNode/><feMergeNode in="SourceGraphic"/></feMerge>"#,
                "\n</filter>\n",
            ));
        }

        if self.drop_shadow {
            let _ = writeln!(out, r#"<g style="filter: url(#{DROP_SHADOW_FILTER_ID})">"#);
        } else {
            out.push_str("<g>\n");
        }

        for group in &self.groups {
            let _ = writeln!(
                out,
                r#"<g id="{}" data-name="{}" style="cursor: {}; transition: {GROUP_TRANSITION}">"#,
                xml_escape(&group.id),
                xml_escape(&group.name),
                self.cursor.as_css(),
            );
            for shape in &group.shapes {
                let _ = writeln!(
                    out,
                    r#"<path d="{}" fill="{}" shape-rendering="geometricPrecision" style="stroke: {}; stroke-width: {}; transition: {SHAPE_TRANSITION}"/>"#,
                    xml_escape(&shape.outline),
                    xml_escape(&shape.style.fill),
                    xml_escape(&shape.style.stroke),
                    shape.style.stroke_width,
                );
            }
            out.push_str("</g>\n");
        }

        out.push_str("</g>\n</svg>\n</div>\n");
        out
    }
}

/// Minimal XML attribute escaping.
fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
