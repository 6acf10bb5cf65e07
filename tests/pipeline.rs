// End-to-end checks over the public API: GeoJSON in, regions, JSON document
// and both rasters out.

use regionmap::{
    build_regions, pick_region, render_id_map, Artifacts, BuildOptions, Canvas, FeatureCollection, MapError,
    PrettyStyle, RegionMap, ID_MAP_FILE, PRETTY_MAP_FILE,
};
use serde_json::{json, Value};

fn collection(value: Value) -> FeatureCollection {
    FeatureCollection::from_geojson_bytes(value.to_string().as_bytes()).unwrap()
}

fn polygon(ring: Value, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Polygon", "coordinates": [ring] },
        "properties": properties,
    })
}

fn testland() -> FeatureCollection {
    collection(json!({
        "type": "FeatureCollection",
        "features": [polygon(json!([[0, 0], [1, 0], [1, 1], [0, 1]]), json!({ "name": "Testland" }))],
    }))
}

#[test]
fn single_polygon_end_to_end() {
    let map = RegionMap::from_features(&testland(), &BuildOptions { width: 100, margin: 10 }).unwrap();
    let doc = map.to_json();

    assert_eq!(doc["projection"], "image_space");
    assert_eq!(doc["image_width"], 100);
    assert_eq!(doc["image_height"], 100);

    let provinces = doc["provinces"].as_array().unwrap();
    assert_eq!(provinces.len(), 1);
    assert_eq!(provinces[0]["id"], 0);
    assert_eq!(provinces[0]["name"], "Testland");
    assert_eq!(provinces[0]["id_color_html"], "000000");

    let ring = provinces[0]["polygons"][0].as_array().unwrap();
    assert_eq!(ring.len(), 4);
    for point in ring {
        for axis in point.as_array().unwrap() {
            let v = axis.as_f64().unwrap();
            assert!((10.0..=90.0).contains(&v), "{v} outside [10, 90]");
        }
    }

    // Region 0 is black, same as the background: the whole raster is one color.
    let id_map = render_id_map(map.regions(), &map.canvas()).unwrap();
    assert!(id_map.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn unsupported_feature_is_skipped_without_consuming_an_id() {
    let doc = collection(json!({ "features": [
        polygon(json!([[0, 0], [1, 0], [1, 1], [0, 1]]), json!({ "name": "First" })),
        { "geometry": { "type": "LineString", "coordinates": [[0, 0], [2, 2]] }, "properties": { "name": "Road" } },
        polygon(json!([[1, 0], [2, 0], [2, 1], [1, 1]]), json!({ "name": "Third" })),
    ]}));
    let map = RegionMap::from_features(&doc, &BuildOptions::default()).unwrap();

    let got: Vec<(u32, &str)> = map.regions().iter().map(|r| (r.id(), r.name())).collect();
    assert_eq!(got, vec![(0, "First"), (1, "Third")]);
}

#[test]
fn only_points_is_fatal() {
    let doc = collection(json!({ "features": [
        { "geometry": { "type": "Point", "coordinates": [0, 0] }, "properties": {} },
        { "geometry": { "type": "Point", "coordinates": [3, 4] }, "properties": {} },
    ]}));
    let err = RegionMap::from_features(&doc, &BuildOptions::default()).unwrap_err();
    assert_eq!(err.downcast_ref::<MapError>(), Some(&MapError::NoCoordinates));
}

#[test]
fn multipolygon_members_share_a_region() {
    let doc = collection(json!({ "features": [
        {
            "geometry": { "type": "MultiPolygon", "coordinates": [
                [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]],
                [[[3, 0], [4, 0], [4, 1], [3, 1], [3, 0]]],
            ]},
            "properties": { "NAME_1": "Islands" },
        },
        polygon(json!([[1.5, 0], [2.5, 0], [2.5, 1], [1.5, 1]]), json!({ "other": "Middle" })),
    ]}));
    let options = BuildOptions { width: 400, margin: 10 };
    let map = RegionMap::from_features(&doc, &options).unwrap();
    assert_eq!(map.regions()[0].polygons().len(), 2);
    assert_eq!(map.regions()[1].name(), "Middle");

    // Sample the centroid of every polygon in the id map.
    let id_map = render_id_map(map.regions(), &map.canvas()).unwrap();
    for region in map.regions() {
        for ring in region.polygons() {
            let n = ring.0.len() as f64;
            let cx = ring.0.iter().map(|c| c.x).sum::<f64>() / n;
            let cy = ring.0.iter().map(|c| c.y).sum::<f64>() / n;
            assert_eq!(pick_region(&id_map, cx as u32, cy as u32), Some(region.id()));
        }
    }
}

#[test]
fn north_renders_up() {
    let doc = collection(json!({ "features": [
        polygon(json!([[0, 10], [1, 10], [1, 11], [0, 11]]), json!({ "name": "North" })),
        polygon(json!([[0, 0], [1, 0], [1, 1], [0, 1]]), json!({ "name": "South" })),
    ]}));
    let map = RegionMap::from_features(&doc, &BuildOptions { width: 200, margin: 10 }).unwrap();
    let max_y = |i: usize| map.regions()[i].polygons()[0].0.iter().map(|c| c.y).fold(f64::MIN, f64::max);
    assert!(max_y(0) < max_y(1));
    assert!(map.canvas().height > map.canvas().width);
}

#[test]
fn artifacts_are_written_together() {
    let map = RegionMap::from_features(&testland(), &BuildOptions { width: 64, margin: 4 }).unwrap();
    let artifacts = Artifacts::render(&map, &PrettyStyle::default()).unwrap();
    assert_eq!(artifacts.id_map.dimensions(), (64, 64));
    assert_eq!(artifacts.pretty_map.dimensions(), (64, 64));

    let temp = tempfile::tempdir().unwrap();
    let out_json = temp.path().join("data/out.json");
    let (id_path, pretty_path) = artifacts.write(&out_json, &temp.path().join("maps")).unwrap();

    assert_eq!(id_path.file_name().unwrap(), ID_MAP_FILE);
    assert_eq!(pretty_path.file_name().unwrap(), PRETTY_MAP_FILE);
    assert!(id_path.is_file() && pretty_path.is_file());

    let written: Value = serde_json::from_slice(&std::fs::read(&out_json).unwrap()).unwrap();
    assert_eq!(written, artifacts.document);
}

#[test]
fn zero_width_canvas_is_rejected() {
    let err = render_id_map(&[], &Canvas { width: 0, height: 0 }).unwrap_err();
    assert!(matches!(err.downcast_ref::<MapError>(), Some(MapError::Canvas { .. })));
}

#[test]
fn build_regions_matches_region_map() {
    let options = BuildOptions { width: 300, margin: 5 };
    let (regions, canvas) = build_regions(&testland(), &options).unwrap();
    let map = RegionMap::from_features(&testland(), &options).unwrap();
    assert_eq!(regions, map.regions());
    assert_eq!(canvas, map.canvas());
}
