use super::to_json;
use crate::*;
use serde_json::json;

#[test]
fn pie_sums_each_value_group_into_a_slice() {
    let doc = transform(
        &json!({
            "label": ["A", "B"],
            "values": [
                { "label": "A", "values": [10, 20, 30] },
                { "label": "B", "values": ["25", "35"] }
            ]
        }),
        ChartType::Pie,
        None,
    );
    assert_eq!(
        to_json(&doc),
        json!({
            "properties": {
                "groups": [
                    { "group": 1, "label": "A" },
                    { "group": 2, "label": "B" }
                ],
                "colorLength": 2
            },
            "data": [
                { "key": "A", "disabled": false, "value": 60.0 },
                { "key": "B", "disabled": false, "value": 60.0 }
            ]
        })
    );
}

#[test]
fn pie_keeps_styling_hints_and_disabled_flag() {
    let doc = transform(
        &json!({
            "values": [
                { "label": "A", "values": [1], "color": "#f00", "classes": "hot", "disabled": true },
                { "label": "B", "values": [2] }
            ]
        }),
        ChartType::Pie,
        None,
    );
    assert_eq!(
        to_json(&doc)["data"],
        json!([
            { "key": "A", "disabled": true, "value": 1.0, "color": "#f00", "classes": "hot" },
            { "key": "B", "disabled": false, "value": 2.0 }
        ])
    );
}

#[test]
fn pie_keeps_value_groups_without_magnitudes() {
    let doc = transform(
        &json!({
            "values": [
                { "label": "A", "values": [4] },
                { "label": "B", "values": [] }
            ]
        }),
        ChartType::Pie,
        None,
    );
    let Some(ChartData::Pie(slices)) = &doc.data else {
        panic!("expected pie data, got {:?}", doc.data);
    };
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[1].value, 0.0);
    assert_eq!(doc.properties.color_length, Some(2));
}

#[test]
fn pie_total_becomes_nan_when_a_magnitude_does_not_parse() {
    let doc = transform(
        &json!({ "values": [{ "label": "A", "values": ["10", "abc"] }] }),
        ChartType::Pie,
        None,
    );
    let Some(ChartData::Pie(slices)) = &doc.data else {
        panic!("expected pie data");
    };
    assert!(slices[0].value.is_nan());
    assert_eq!(to_json(&doc)["data"][0]["value"], json!(null));
}

#[test]
fn missing_or_empty_labels_render_as_placeholder() {
    let doc = transform(
        &json!({
            "values": [
                { "label": "", "values": [1] },
                { "label": [], "values": [2] },
                { "values": [3] },
                { "label": { "label": "X" }, "values": [4] },
                { "label": ["Y"], "values": [5] }
            ]
        }),
        ChartType::Pie,
        None,
    );
    let Some(ChartData::Pie(slices)) = &doc.data else {
        panic!("expected pie data");
    };
    let keys: Vec<&str> = slices.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["undefined", "undefined", "undefined", "X", "Y"]);
}

#[test]
fn funnel_reverses_stages() {
    let doc = transform(
        &json!({
            "values": [
                { "label": "A", "values": [1] },
                { "label": "B", "values": [2] },
                { "label": "C", "values": [3] }
            ]
        }),
        ChartType::Funnel,
        None,
    );
    let Some(ChartData::Funnel(stages)) = &doc.data else {
        panic!("expected funnel data");
    };
    let keys: Vec<&str> = stages.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["C", "B", "A"]);
    assert_eq!(
        to_json(&doc)["data"][0],
        json!({
            "key": "C",
            "disabled": false,
            "values": [{ "series": 2, "label": 3, "x": 0, "y": 3.0 }]
        })
    );
    assert_eq!(
        to_json(&doc)["properties"]["groups"],
        json!([
            { "group": 1, "label": "A" },
            { "group": 2, "label": "B" },
            { "group": 3, "label": "C" }
        ])
    );
}

#[test]
fn funnel_stage_label_is_total_for_multi_value_groups() {
    let doc = transform(
        &json!({ "values": [{ "label": "Lead", "values": [2, 3], "valuelabels": ["two", "three"] }] }),
        ChartType::Funnel,
        None,
    );
    assert_eq!(
        to_json(&doc)["data"][0]["values"][0],
        json!({ "series": 0, "label": 5.0, "x": 0, "y": 5.0 })
    );
}

#[test]
fn gauge_consumes_first_value_group_as_pointer() {
    let doc = transform(
        &json!({ "values": [{ "gvalue": 42 }, { "values": [3] }, { "values": [5] }] }),
        ChartType::Gauge,
        None,
    );
    assert_eq!(
        to_json(&doc),
        json!({
            "properties": {
                "groups": [
                    { "group": 1, "label": "undefined" },
                    { "group": 2, "label": "undefined" }
                ],
                "value": 42.0,
                "colorLength": 2
            },
            "data": [
                { "key": "undefined", "y": 3.0 },
                { "key": "undefined", "y": 8.0 }
            ]
        })
    );
}

#[test]
fn gauge_bands_keep_labels_and_colors() {
    let doc = transform(
        &json!({
            "label": ["pointer", "Low", "High"],
            "values": [
                { "gvalue": "7.5" },
                { "values": ["2", "2"], "color": "green" },
                { "label": "Top", "values": [6] }
            ]
        }),
        ChartType::Gauge,
        None,
    );
    assert_eq!(doc.properties.value, Some(7.5));
    assert_eq!(
        to_json(&doc)["data"],
        json!([
            { "key": "Low", "y": 4.0, "color": "green" },
            { "key": "Top", "y": 10.0 }
        ])
    );
}
