use super::*;

fn sample() -> RenderMeta {
    let grid = ActivityGrid::from_counts(vec![vec![0, 5], vec![12, 0], vec![0, 0]]).unwrap();
    RenderMeta::new(
        GridSource::Synthetic { seed: 42 },
        &ForestConfig::default(),
        &grid,
        NormalizationBounds::compute(&grid),
        vec!["A01".to_string()],
    )
}

#[test]
fn meta_summarizes_grid() {
    let meta = sample();
    assert_eq!((meta.columns, meta.rows), (3, 2));
    assert_eq!(meta.active_cells, 2);
    assert_eq!(meta.bounds.max, 12.0);
}

#[test]
fn meta_json_is_tagged_and_complete() {
    let v: serde_json::Value = serde_json::from_str(&sample().to_json_pretty().unwrap()).unwrap();
    assert_eq!(v["source"]["kind"], "synthetic");
    assert_eq!(v["source"]["seed"], 42);
    assert_eq!(v["config"]["background"], "misty");
    assert_eq!(v["config"]["frames"], 16);
    assert_eq!(v["bounds"]["low"], 5.0);
    assert_eq!(v["sprites"][0], "A01");
}

#[test]
fn file_source_serializes_path() {
    let src = GridSource::File {
        path: "grid.json".to_string(),
    };
    let v = serde_json::to_value(&src).unwrap();
    assert_eq!(v, serde_json::json!({ "kind": "file", "path": "grid.json" }));
}

#[test]
fn write_creates_parent_dirs() {
    let path = std::path::PathBuf::from("target/meta_tests/nested/meta.json");
    let _ = std::fs::remove_dir_all("target/meta_tests");
    sample().write(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"active_cells\": 2"));
}
