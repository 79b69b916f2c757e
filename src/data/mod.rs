//! Province dataset: region records, callback payloads, and the built-in
//! 81-province data.
//!
//! The dataset is an ordered, read-only collection supplied wholesale at
//! construction time. Geometry is opaque to the rest of the crate: each
//! outline is an SVG path string that is passed through to the scene
//! unmodified.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{MapError, MapResult};

/// Raw JSON for the built-in dataset.
const PROVINCES_JSON: &str = include_str!("provinces.json");

/// One province of the map: a stable id, the administrative plate number, a
/// display name, and one or more SVG path outlines.
///
/// Outline 0 is the primary shape and carries the fill, hover, and click
/// semantics. Any further outlines are decorative overlays that render in
/// the border color and belong to the same interactive group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Unique, stable identifier (e.g. `"ankara"`).
    pub id: String,
    /// Administrative plate number (1..=81 for the built-in dataset).
    pub plate_number: u16,
    /// Display name, with Turkish characters.
    pub name: String,
    /// SVG path outlines in render order; never empty.
    pub outlines: Vec<String>,
}

impl Region {
    /// Build the geometry-free payload handed to caller callbacks.
    pub fn info(&self) -> CityInfo {
        CityInfo {
            id: self.id.clone(),
            plate_number: self.plate_number,
            name: self.name.clone(),
        }
    }
}

/// The projection of a [`Region`] passed to caller callbacks: identity only,
/// no geometry. Built fresh per event; carries no identity beyond structural
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfo {
    /// Region id, matching [`Region::id`].
    pub id: String,
    /// Administrative plate number.
    pub plate_number: u16,
    /// Display name.
    pub name: String,
}

static PROVINCES: Lazy<Vec<Region>> = Lazy::new(|| {
    serde_json::from_str(PROVINCES_JSON).expect("embedded province dataset is valid JSON")
});

/// The built-in dataset: all 81 provinces in plate-number order.
pub fn provinces() -> &'static [Region] {
    &PROVINCES
}

/// Parse a caller-supplied dataset from JSON and validate it.
///
/// The expected shape is the same as the built-in asset: an array of
/// region objects with `id`, `plateNumber`, `name`, and `outlines`.
pub fn from_json(json: &str) -> MapResult<Vec<Region>> {
    let regions: Vec<Region> = serde_json::from_str(json)?;
    validate(&regions)?;
    Ok(regions)
}

/// Validate a caller-supplied dataset.
///
/// Ids must be non-empty and unique across the dataset, and every region
/// needs at least one outline. Bad records are rejected, never coerced.
pub fn validate(regions: &[Region]) -> MapResult<()> {
    let mut seen = HashSet::new();
    for region in regions {
        if region.id.is_empty() {
            return Err(MapError::EmptyRegionId {
                name: region.name.clone(),
                plate_number: region.plate_number,
            });
        }
        if !seen.insert(region.id.as_str()) {
            return Err(MapError::DuplicateRegion(region.id.clone()));
        }
        if region.outlines.is_empty() {
            return Err(MapError::EmptyOutlines(region.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: &str, plate: u16) -> Region {
        Region {
            id: id.to_string(),
            plate_number: plate,
            name: format!("Region {plate}"),
            outlines: vec!["M0 0 L1 1 Z".to_string()],
        }
    }

    #[test]
    fn builtin_dataset_has_81_provinces() {
        assert_eq!(provinces().len(), 81);
    }

    #[test]
    fn builtin_dataset_plate_numbers_cover_1_to_81() {
        let plates: HashSet<u16> = provinces().iter().map(|r| r.plate_number).collect();
        assert_eq!(plates.len(), 81);
        assert_eq!(plates.iter().min(), Some(&1));
        assert_eq!(plates.iter().max(), Some(&81));
    }

    #[test]
    fn builtin_dataset_passes_validation() {
        validate(provinces()).expect("built-in dataset is valid");
    }

    #[test]
    fn builtin_dataset_has_multi_outline_regions() {
        // Coastal provinces carry decorative overlay outlines.
        let istanbul = provinces().iter().find(|r| r.id == "istanbul").unwrap();
        assert!(istanbul.outlines.len() > 1);
        assert_eq!(istanbul.plate_number, 34);
    }

    #[test]
    fn info_projects_identity_without_geometry() {
        let region = region("adana", 1);
        let info = region.info();
        assert_eq!(info.id, "adana");
        assert_eq!(info.plate_number, 1);
        assert_eq!(info.name, region.name);
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let dataset = vec![region("a", 1), region("a", 2)];
        assert!(matches!(
            validate(&dataset),
            Err(MapError::DuplicateRegion(id)) if id == "a"
        ));
    }

    #[test]
    fn validate_rejects_empty_outlines() {
        let mut bad = region("b", 3);
        bad.outlines.clear();
        assert!(matches!(
            validate(&[bad]),
            Err(MapError::EmptyOutlines(id)) if id == "b"
        ));
    }

    #[test]
    fn validate_rejects_empty_id() {
        let bad = region("", 4);
        assert!(matches!(
            validate(&[bad]),
            Err(MapError::EmptyRegionId { plate_number: 4, .. })
        ));
    }

    #[test]
    fn from_json_parses_and_validates() {
        let json = r#"[{"id":"34","plateNumber":34,"name":"İstanbul","outlines":["M0 0 L1 1 Z"]}]"#;
        let regions = from_json(json).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].plate_number, 34);

        assert!(matches!(from_json("not json"), Err(MapError::InvalidDataset(_))));

        let duplicated = r#"[
            {"id":"x","plateNumber":1,"name":"A","outlines":["M0 0 Z"]},
            {"id":"x","plateNumber":2,"name":"B","outlines":["M1 1 Z"]}
        ]"#;
        assert!(matches!(from_json(duplicated), Err(MapError::DuplicateRegion(_))));
    }

    #[test]
    fn region_round_trips_through_json() {
        let original = region("izmir", 35);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("plateNumber"));
        let parsed: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
