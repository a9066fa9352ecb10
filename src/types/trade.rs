//! Myfxbook trade records and classification

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A trade as reported by `get-open-trades.json` or `get-history.json`.
///
/// Numeric fields arrive as numbers or numeric strings depending on the
/// endpoint, so all of them are parsed leniently into `Option<f64>`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTrade {
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub open_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub close_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub profit: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub tp: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub sl: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub pips: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub interest: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub commission: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub sizing: Option<Sizing>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sizing {
    #[serde(rename = "type", default)]
    pub sizing_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_f64_opt")]
    pub value: Option<f64>,
}

impl SourceTrade {
    pub fn trade_action(&self) -> Option<TradeAction> {
        self.action.as_deref().and_then(|a| a.parse().ok())
    }

    pub fn symbol_or_unknown(&self) -> &str {
        self.symbol
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "Buy",
            TradeAction::Sell => "Sell",
        }
    }
}

impl FromStr for TradeAction {
    type Err = String;

    // Exact match only; Myfxbook also reports deposits and withdrawals in history.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Buy" => Ok(TradeAction::Buy),
            "Sell" => Ok(TradeAction::Sell),
            other => Err(format!("unrecognized trade action: {}", other)),
        }
    }
}

/// Which Myfxbook listing a trade came from; written to the "Trade Type" field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    Open,
    History,
}

impl TradeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeKind::Open => "open",
            TradeKind::History => "history",
        }
    }
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn deserialize_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct F64OptVisitor;

    impl<'de> Visitor<'de> for F64OptVisitor {
        type Value = Option<f64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or numeric string")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value as f64))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.trim().parse::<f64>().ok())
        }
    }

    deserializer.deserialize_any(F64OptVisitor)
}
