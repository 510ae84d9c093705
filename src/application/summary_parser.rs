// Summary parser - Lenient decoding of the summary payload
use crate::application::errors::DashboardError;
use crate::domain::summary::{ChartSeries, SummaryRecord};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const CARDS_KEY: &str = "cards";

#[derive(Debug, Deserialize)]
struct RawSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

/// Decode a summary body.
///
/// Only the envelope is strict: the body must be a JSON object. Missing
/// sections decode to empty maps so partial data renders partially. A chart
/// section that is present must be well-typed with paired labels/values.
pub fn parse_summary(body: &str) -> Result<SummaryRecord, DashboardError> {
    let root: Value = serde_json::from_str(body)?;
    let object = match root {
        Value::Object(object) => object,
        other => {
            return Err(DashboardError::Decode(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    let cards = parse_cards(object.get(CARDS_KEY));
    let chart_datasets = parse_chart_datasets(&object)?;

    tracing::debug!(
        "Decoded summary with {} cards and {} chart datasets",
        cards.len(),
        chart_datasets.len()
    );

    Ok(SummaryRecord::new(cards, chart_datasets))
}

fn parse_cards(section: Option<&Value>) -> BTreeMap<String, f64> {
    let mut cards = BTreeMap::new();

    let entries = match section {
        Some(Value::Object(entries)) => entries,
        Some(other) => {
            tracing::debug!("Ignoring cards section of type {}", json_kind(other));
            return cards;
        }
        None => return cards,
    };

    for (metric, value) in entries {
        match value.as_f64() {
            Some(number) => {
                cards.insert(metric.clone(), number);
            }
            None => {
                tracing::debug!("Ignoring non-numeric card {}: {}", metric, value);
            }
        }
    }

    cards
}

fn parse_chart_datasets(
    object: &Map<String, Value>,
) -> Result<BTreeMap<String, ChartSeries>, DashboardError> {
    let mut datasets = BTreeMap::new();

    for (key, value) in object {
        if key == CARDS_KEY || !is_chart_section(value) {
            continue;
        }

        let raw: RawSeries = serde_json::from_value(value.clone())
            .map_err(|e| DashboardError::Decode(format!("chart dataset {}: {}", key, e)))?;

        let (labels_len, values_len) = (raw.labels.len(), raw.values.len());
        let series = ChartSeries::new(raw.labels, raw.values).ok_or_else(|| {
            DashboardError::Decode(format!(
                "chart dataset {} has {} labels but {} values",
                key, labels_len, values_len
            ))
        })?;

        datasets.insert(key.clone(), series);
    }

    Ok(datasets)
}

fn is_chart_section(value: &Value) -> bool {
    value
        .as_object()
        .map(|section| section.contains_key("labels") && section.contains_key("values"))
        .unwrap_or(false)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_summary() {
        let body = r#"{
            "cards": {"custo_mensal": 1234.5, "perda_mensal": 67.8},
            "grafico_custo_loja": {"labels": ["Loja A", "Loja B"], "values": [100, 250.5]},
            "grafico_top_perdas": {"labels": ["Loja C"], "values": [12.0]}
        }"#;

        let record = parse_summary(body).expect("valid summary");
        assert_eq!(record.card("custo_mensal"), Some(1234.5));
        assert_eq!(record.card("perda_mensal"), Some(67.8));

        let custo = record.chart("grafico_custo_loja").expect("store cost chart");
        assert_eq!(custo.labels(), ["Loja A", "Loja B"]);
        assert_eq!(custo.values(), [100.0, 250.5]);
        assert_eq!(record.chart("grafico_top_perdas").map(|s| s.labels().len()), Some(1));
    }

    #[test]
    fn test_missing_sections_are_not_errors() {
        let record = parse_summary("{}").expect("empty object decodes");
        assert!(record.cards.is_empty());
        assert!(record.chart_datasets.is_empty());

        let record = parse_summary(r#"{"cards": {"custo_mensal": 1.0}}"#).expect("cards only");
        assert_eq!(record.cards.len(), 1);
        assert!(record.chart("grafico_top_perdas").is_none());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        assert!(matches!(
            parse_summary("<html>oops</html>"),
            Err(DashboardError::Decode(_))
        ));
        assert!(matches!(parse_summary("[1, 2]"), Err(DashboardError::Decode(_))));
        assert!(matches!(parse_summary(""), Err(DashboardError::Decode(_))));
    }

    #[test]
    fn test_unequal_series_is_decode_error() {
        let body = r#"{"grafico_top_perdas": {"labels": ["a", "b"], "values": [1]}}"#;
        match parse_summary(body) {
            Err(DashboardError::Decode(msg)) => {
                assert!(msg.contains("grafico_top_perdas"));
                assert!(msg.contains("2 labels but 1 values"));
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_mistyped_series_is_decode_error() {
        let body = r#"{"grafico_custo_loja": {"labels": ["a"], "values": ["x"]}}"#;
        assert!(matches!(parse_summary(body), Err(DashboardError::Decode(_))));
    }

    #[test]
    fn test_lenient_cards_and_unrelated_keys() {
        let body = r#"{
            "cards": {"custo_mensal": "n/a", "perda_mensal": 5},
            "gerado_em": "2024-01-01",
            "meta": {"labels": ["only labels"]}
        }"#;
        let record = parse_summary(body).expect("lenient decode");
        assert_eq!(record.card("custo_mensal"), None);
        assert_eq!(record.card("perda_mensal"), Some(5.0));
        assert!(record.chart_datasets.is_empty());

        let record = parse_summary(r#"{"cards": [1, 2]}"#).expect("cards of wrong type ignored");
        assert!(record.cards.is_empty());
    }
}
