mod line;
mod number;
mod pie;

fn to_json(doc: &crate::ChartDocument) -> serde_json::Value {
    serde_json::to_value(doc).expect("chart document serializes")
}
