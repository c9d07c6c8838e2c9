#![forbid(unsafe_code)]

//! Catalog document decoding.
//!
//! The page fetches the catalog once as a JSON array of
//! `{ "name", "type", "docs"?, "uri" }` records. A record without a name
//! decodes with an empty one and simply never matches. Unknown `type`
//! strings are kept as [`ItemType::Other`](docsearch_core::ItemType::Other)
//! so one new server-side type cannot break the whole search box.

use crate::error::CatalogError;
use docsearch_core::Catalog;

/// Decode a catalog document.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(json)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(items = catalog.len(), "catalog decoded");

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsearch_core::ItemType;

    #[test]
    fn decodes_server_records() {
        let catalog = parse_catalog(
            r#"[
                {"name": "Orders", "type": "application", "uri": "/applications/1"},
                {"name": "PlaceOrder", "type": "command", "docs": "Places an order.", "uri": "/messages/2"},
                {"name": "OrderSaga", "type": "saga", "uri": "/handlers/3"},
                {"type": "event", "uri": "/messages/4"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 4);
        let kinds: Vec<ItemType> = catalog.iter().map(|i| i.kind.clone()).collect();
        assert_eq!(
            kinds,
            [
                ItemType::Application,
                ItemType::Command,
                ItemType::Other("saga".into()),
                ItemType::Event
            ]
        );
        assert_eq!(catalog.get(1).and_then(|i| i.docs()), Some("Places an order."));
        assert_eq!(catalog.get(3).map(|i| i.name.as_str()), Some(""));
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn wrong_shapes_are_errors() {
        assert!(parse_catalog(r#"{"items": []}"#).is_err());
        assert!(parse_catalog(r#"[{"name": "NoUri", "type": "event"}]"#).is_err());
        let err = parse_catalog("[").unwrap_err();
        assert!(err.to_string().starts_with("invalid search catalog: "));
    }
}
