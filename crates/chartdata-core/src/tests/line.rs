use super::to_json;
use crate::*;
use serde_json::json;

#[test]
fn grouped_line_input_yields_one_series_per_label() {
    let doc = transform(
        &json!({
            "properties": { "title": "Visits", "xDataType": "ordinal" },
            "label": ["Series A", "Series B"],
            "values": [
                { "label": "Jan", "values": [1, 2] },
                { "label": "Feb", "values": [3] }
            ]
        }),
        ChartType::Line,
        None,
    );
    assert_eq!(
        to_json(&doc),
        json!({
            "properties": {
                "title": "Visits",
                "xDataType": "ordinal",
                "groups": [
                    { "group": 1, "label": "Jan" },
                    { "group": 2, "label": "Feb" }
                ],
                "colorLength": 2
            },
            "data": [
                { "key": "Series A", "values": [{ "x": 1.0, "y": 1.0 }, { "x": 2.0, "y": 3.0 }] },
                { "key": "Series B", "values": [{ "x": 1.0, "y": 2.0 }, { "x": 2.0, "y": 0.0 }] }
            ]
        })
    );
}

#[test]
fn discrete_area_input_yields_one_series_per_value_group() {
    let doc = transform(
        &json!({
            "label": ["Jan", "Feb"],
            "values": [
                { "label": "Jan", "values": [4] },
                { "values": ["5.5"] }
            ]
        }),
        ChartType::Area,
        None,
    );
    assert_eq!(
        to_json(&doc)["data"],
        json!([
            { "key": "Jan", "values": [{ "x": 1.0, "y": 4.0 }] },
            { "key": "Feb", "values": [{ "x": 2.0, "y": 5.5 }] }
        ])
    );
    assert_eq!(
        doc.properties.groups,
        Some(vec![
            ChartGroup { group: 1, label: "Jan".to_string() },
            ChartGroup { group: 2, label: "Feb".to_string() },
        ])
    );
    assert_eq!(doc.properties.stacked, None);
}

#[test]
fn line_series_without_top_level_labels_follow_widest_group() {
    let doc = transform(
        &json!({ "values": [[1, 2, 3], [4, 5, 6]] }),
        ChartType::Line,
        None,
    );
    let Some(ChartData::Line(series)) = &doc.data else {
        panic!("expected line data");
    };
    assert_eq!(series.len(), 3);
    assert!(series.iter().all(|s| s.key == "undefined"));
    assert_eq!(series[2].values[1], LinePoint { x: 2.0, y: 6.0 });
}

#[test]
fn repeated_category_labels_appear_once_in_groups() {
    let doc = transform(
        &json!({
            "label": ["Visits"],
            "values": [
                { "label": "Jan", "values": [1] },
                { "label": "Jan", "values": [2] },
                { "label": "Feb", "values": [3] }
            ]
        }),
        ChartType::Line,
        None,
    );
    assert_eq!(
        to_json(&doc)["properties"]["groups"],
        json!([
            { "group": 1, "label": "Jan" },
            { "group": 2, "label": "Feb" }
        ])
    );
    // Every value-group still plots at its own position.
    let Some(ChartData::Line(series)) = &doc.data else {
        panic!("expected line data");
    };
    let xs: Vec<f64> = series[0].values.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
}
