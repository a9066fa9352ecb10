//! Sparse Notion page property payloads

use serde_json::{json, Map, Value};

// Database column names
pub const TRADE_TYPE: &str = "Trade Type";
pub const OPEN_TIME: &str = "Open Time";
pub const CLOSE_TIME: &str = "Close Time";
pub const ACTION: &str = "Action";
pub const BALANCE: &str = "Balance";
pub const SYMBOL: &str = "Symbol";
pub const OPEN_PRICE: &str = "Open Price";
pub const CLOSE_PRICE: &str = "Close Price";
pub const PROFIT: &str = "Profit";
pub const SIZING_TYPE: &str = "Sizing Type";
pub const SIZING_VALUE: &str = "Sizing Value";
pub const TAKE_PROFIT: &str = "TP";
pub const STOP_LOSS: &str = "SL";
pub const PIPS: &str = "Pips";
pub const INTEREST: &str = "Interest";
pub const COMMISSION: &str = "Commission";
pub const COMMENT: &str = "Myfxbook Comment";

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    RichText(String),
    Number(f64),
    Select(String),
    /// Date with an optional start; `None` renders as `"start": null`.
    Date(Option<String>),
}

impl PropertyValue {
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::RichText(content) => {
                json!({ "rich_text": [{ "text": { "content": content } }] })
            }
            PropertyValue::Number(n) => json!({ "number": n }),
            PropertyValue::Select(name) => json!({ "select": { "name": name } }),
            PropertyValue::Date(start) => json!({ "date": { "start": start } }),
        }
    }
}

/// Accumulates `(name, value)` pairs in insertion order and renders only
/// the present ones.
#[derive(Debug, Clone, Default)]
pub struct PropertyBuilder {
    fields: Vec<(&'static str, Option<PropertyValue>)>,
}

impl PropertyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, value: Option<PropertyValue>) -> Self {
        self.fields.push((name, value));
        self
    }

    /// Omitted when absent or empty.
    pub fn text(self, name: &'static str, value: Option<&str>) -> Self {
        let value = value
            .filter(|s| !s.is_empty())
            .map(|s| PropertyValue::RichText(s.to_string()));
        self.field(name, value)
    }

    /// Omitted when absent or zero. Zero is treated as "no value".
    pub fn number(self, name: &'static str, value: Option<f64>) -> Self {
        let value = value.filter(|n| *n != 0.0).map(PropertyValue::Number);
        self.field(name, value)
    }

    /// Omitted when absent.
    pub fn date(self, name: &'static str, start: Option<String>) -> Self {
        let value = start.map(|s| PropertyValue::Date(Some(s)));
        self.field(name, value)
    }

    pub fn build(self) -> Map<String, Value> {
        self.fields
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.to_json())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_notion_shapes() {
        let props = PropertyBuilder::new()
            .field(ACTION, Some(PropertyValue::Select("Buy".to_string())))
            .field(OPEN_TIME, Some(PropertyValue::Date(None)))
            .text(SYMBOL, Some("EURUSD"))
            .number(PROFIT, Some(-12.5))
            .build();

        assert_eq!(props[ACTION], json!({ "select": { "name": "Buy" } }));
        assert_eq!(props[OPEN_TIME], json!({ "date": { "start": null } }));
        assert_eq!(
            props[SYMBOL],
            json!({ "rich_text": [{ "text": { "content": "EURUSD" } }] })
        );
        assert_eq!(props[PROFIT], json!({ "number": -12.5 }));
    }

    #[test]
    fn zero_empty_and_missing_values_are_omitted() {
        let props = PropertyBuilder::new()
            .number(PROFIT, Some(0.0))
            .number(PIPS, None)
            .text(COMMENT, Some(""))
            .date(CLOSE_TIME, None)
            .number(TAKE_PROFIT, Some(1.2345))
            .build();

        assert_eq!(props.len(), 1);
        assert_eq!(props[TAKE_PROFIT], json!({ "number": 1.2345 }));
    }
}
