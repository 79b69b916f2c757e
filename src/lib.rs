//! Turkiye Map - an interactive choropleth map of Turkey's provinces.
//!
//! The crate centers on [`TurkeyMap`]: a stateful component that turns a
//! fixed dataset of province outlines into an SVG scene, tracks which
//! province the pointer is currently over, and notifies the caller on hover
//! and click. Fill colors are resolved per shape at render time, either from
//! a caller-supplied resolver or from the configured defaults.
//!
//! ```
//! use turkiye_map::{MapOptions, TurkeyMap};
//!
//! let options = MapOptions::default()
//!     .on_click(|city| println!("{} (plate {})", city.name, city.plate_number));
//! let mut map = TurkeyMap::new(options);
//!
//! map.pointer_enter("ankara");
//! let svg = map.to_svg();
//! assert!(svg.contains("ankara"));
//! ```
//!
//! The `turkiye-map-preview` binary hosts the component behind a local HTTP
//! server so the interaction contract can be exercised from a browser.

pub mod config;
pub mod data;
pub mod error;
pub mod interaction;
pub mod map;
pub mod preview;
pub mod scene;
pub mod style;

pub use config::MapOptions;
pub use data::{CityInfo, Region};
pub use error::{MapError, MapResult};
pub use interaction::{HoverTracker, PointerEvent};
pub use map::TurkeyMap;
pub use scene::{Cursor, RegionGroup, Scene, ShapeNode};
pub use style::{resolve_shape_style, ShapeStyle};
