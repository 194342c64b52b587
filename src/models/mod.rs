use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw price as it arrives from the listings API.
///
/// Agents type prices by hand, so the same field shows up as a number,
/// as a string with currency symbols and separators, or as garbage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl PriceValue {
    /// Numeric price, if one can be recovered.
    ///
    /// Text is stripped down to digits, `.` and `-` and the longest leading
    /// float is taken, so `"₮1,250,000"` gives `1250000` and `"12.5.3"` gives `12.5`.
    pub fn amount(&self) -> Option<f64> {
        let value = match self {
            PriceValue::Number(n) => Some(*n),
            PriceValue::Text(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                leading_float(&cleaned)
            }
            PriceValue::Other(_) => None,
        };
        value.filter(|v| v.is_finite())
    }

    /// Price usable for deriving budget ranges: finite and strictly positive.
    pub fn bucket_amount(&self) -> Option<f64> {
        self.amount().filter(|v| *v > 0.0)
    }
}

impl From<f64> for PriceValue {
    fn from(value: f64) -> Self {
        PriceValue::Number(value)
    }
}

impl From<&str> for PriceValue {
    fn from(value: &str) -> Self {
        PriceValue::Text(value.to_string())
    }
}

/// Longest prefix of `s` that parses as a float.
fn leading_float(s: &str) -> Option<f64> {
    (1..=s.len())
        .rev()
        .filter(|end| s.is_char_boundary(*end))
        .find_map(|end| s[..end].parse::<f64>().ok())
}

/// Property record as served by the CMS.
///
/// Only the fields the listing logic reads are typed; everything else is
/// kept in `extra` so the record can be rendered untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub under_development: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Property {
    pub fn amount(&self) -> Option<f64> {
        self.price.as_ref().and_then(PriceValue::amount)
    }

    pub fn bucket_amount(&self) -> Option<f64> {
        self.price.as_ref().and_then(PriceValue::bucket_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(PriceValue::Number(98_000.0).amount(), Some(98_000.0));
        assert_eq!(PriceValue::Number(f64::NAN).amount(), None);
    }

    #[test]
    fn text_is_stripped_before_parsing() {
        assert_eq!(PriceValue::from("₮1,250,000").amount(), Some(1_250_000.0));
        assert_eq!(PriceValue::from("$ 45 000.50").amount(), Some(45_000.5));
        assert_eq!(PriceValue::from("12.5.3").amount(), Some(12.5));
        assert_eq!(PriceValue::from("Call for price").amount(), None);
        assert_eq!(PriceValue::from("").amount(), None);
    }

    #[test]
    fn bucketing_rejects_zero_and_negative() {
        assert_eq!(PriceValue::Number(0.0).bucket_amount(), None);
        assert_eq!(PriceValue::from("-5000").bucket_amount(), None);
        assert_eq!(PriceValue::from("-5000").amount(), Some(-5000.0));
    }

    #[test]
    fn deserializes_mixed_price_shapes() {
        let raw = json!([
            { "id": 1, "price": 120000, "type": "Modern Villa", "slug": "villa-1" },
            { "id": 2, "price": "₮95,000" },
            { "id": 3, "price": true },
            { "id": 4, "price": null },
            { "id": 5 }
        ]);
        let props: Vec<Property> = serde_json::from_value(raw).unwrap();

        assert_eq!(props[0].price, Some(PriceValue::Number(120_000.0)));
        assert_eq!(props[0].property_type.as_deref(), Some("Modern Villa"));
        assert_eq!(props[0].extra.get("slug"), Some(&json!("villa-1")));
        assert_eq!(props[1].amount(), Some(95_000.0));
        assert_eq!(props[2].amount(), None);
        assert!(props[3].price.is_none());
        assert!(props[4].price.is_none());
    }
}
