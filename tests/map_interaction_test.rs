//! End-to-end interaction scenarios for the map component.

use std::sync::{Arc, Mutex};

use turkiye_map::{CityInfo, MapOptions, Region, TurkeyMap};

fn istanbul_only() -> Vec<Region> {
    vec![Region {
        id: "34".to_string(),
        plate_number: 34,
        name: "İstanbul".to_string(),
        outlines: vec!["M0 0 L1 1 Z".to_string()],
    }]
}

#[test]
fn hover_enter_then_leave_calls_on_hover_in_order() {
    let calls: Arc<Mutex<Vec<Option<CityInfo>>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&calls);

    let options = MapOptions::default()
        .on_hover(move |city| seen.lock().unwrap().push(city.cloned()));
    let mut map = TurkeyMap::with_regions(istanbul_only(), options).unwrap();

    map.pointer_enter("34");
    map.pointer_leave("34");

    assert_eq!(map.hovered_id(), None);
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    let first = calls[0].as_ref().expect("enter carries a payload");
    assert_eq!(first.id, "34");
    assert_eq!(first.plate_number, 34);
    assert_eq!(first.name, "İstanbul");
    assert!(calls[1].is_none(), "leave passes None");
}

#[test]
fn hovering_with_default_options_renders_the_hover_fill() {
    let mut map = TurkeyMap::with_regions(istanbul_only(), MapOptions::default()).unwrap();
    map.pointer_enter("34");

    let scene = map.compose();
    assert_eq!(scene.groups.len(), 1);
    assert_eq!(scene.groups[0].shapes[0].style.fill, "#dc3522");

    // Clicking with no click handler configured is a silent no-op.
    map.click("34");
}

#[test]
fn click_without_prior_hover_invokes_handler_exactly_once() {
    let clicks: Arc<Mutex<Vec<CityInfo>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&clicks);

    let options = MapOptions::default().on_click(move |city| seen.lock().unwrap().push(city.clone()));
    let map = TurkeyMap::with_regions(istanbul_only(), options).unwrap();

    assert_eq!(map.hovered_id(), None);
    map.click("34");

    let clicks = clicks.lock().unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].id, "34");
    assert_eq!(clicks[0].plate_number, 34);
    assert_eq!(clicks[0].name, "İstanbul");
}

#[test]
fn resolver_yielding_empty_falls_back_to_default_color() {
    let options = MapOptions::default().city_color(|city| {
        (city.plate_number > 50).then(|| "#111".to_string())
    });
    let map = TurkeyMap::with_regions(istanbul_only(), options).unwrap();

    // Plate 34 is at or below the threshold, so the resolver yields nothing.
    let scene = map.compose();
    assert_eq!(scene.groups[0].shapes[0].style.fill, "#2d3748");
}

#[test]
fn hover_moves_between_regions_without_overlap() {
    let mut regions = istanbul_only();
    regions.push(Region {
        id: "06".to_string(),
        plate_number: 6,
        name: "Ankara".to_string(),
        outlines: vec!["M2 2 L3 3 Z".to_string()],
    });
    let mut map = TurkeyMap::with_regions(regions, MapOptions::default()).unwrap();

    map.pointer_enter("34");
    map.pointer_leave("34");
    map.pointer_enter("06");

    assert_eq!(map.hovered_id(), Some("06"));
    let scene = map.compose();
    let hovered: Vec<&str> = scene
        .groups
        .iter()
        .filter(|g| g.shapes[0].style.fill == "#dc3522")
        .map(|g| g.id.as_str())
        .collect();
    assert_eq!(hovered, vec!["06"]);
}

#[test]
fn dataset_violations_are_rejected_at_construction() {
    let mut duplicated = istanbul_only();
    duplicated.extend(istanbul_only());
    assert!(TurkeyMap::with_regions(duplicated, MapOptions::default()).is_err());

    let mut no_outlines = istanbul_only();
    no_outlines[0].outlines.clear();
    assert!(TurkeyMap::with_regions(no_outlines, MapOptions::default()).is_err());
}

#[test]
fn builtin_dataset_renders_every_province_group() {
    let map = TurkeyMap::new(MapOptions::default());
    let svg = map.to_svg();
    for region in map.regions() {
        assert!(
            svg.contains(&format!(r#"<g id="{}""#, region.id)),
            "missing group for {}",
            region.id
        );
    }
}
