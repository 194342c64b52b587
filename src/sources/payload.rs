use crate::models::Property;
use serde::Deserialize;

/// Shapes the CMS is known to answer with: a bare array or an envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PropertyPayload {
    List(Vec<Property>),
    Data { data: Vec<Property> },
    Results { results: Vec<Property> },
    Properties { properties: Vec<Property> },
    Items { items: Vec<Property> },
}

impl PropertyPayload {
    pub fn into_properties(self) -> Vec<Property> {
        match self {
            PropertyPayload::List(list)
            | PropertyPayload::Data { data: list }
            | PropertyPayload::Results { results: list }
            | PropertyPayload::Properties { properties: list }
            | PropertyPayload::Items { items: list } => list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_wrapped_lists() {
        let bare: PropertyPayload = serde_json::from_str(r#"[{ "price": 1 }]"#).unwrap();
        assert_eq!(bare.into_properties().len(), 1);

        let wrapped: PropertyPayload =
            serde_json::from_str(r#"{ "data": [{ "price": "2" }, { "status": "Sold" }], "total": 2 }"#)
                .unwrap();
        assert_eq!(wrapped.into_properties().len(), 2);

        let results: PropertyPayload =
            serde_json::from_str(r#"{ "results": [] }"#).unwrap();
        assert!(results.into_properties().is_empty());
    }

    #[test]
    fn rejects_unknown_envelope() {
        assert!(serde_json::from_str::<PropertyPayload>(r#"{ "listings": [] }"#).is_err());
    }
}
