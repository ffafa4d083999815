//! Resource envelope shared by all API responses.
//!
//! Singular resources serialize as `{"data": {"id", "type", "attributes"}}`
//! and collections as `{"data": [...], "meta"?: {...}}`. Identity fields
//! are strings on the wire even though the store assigns integers.

use serde::Serialize;

/// A single resource: string id, type discriminator, attributes.
#[derive(Debug, Serialize)]
pub struct Resource<A> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: A,
}

impl<A> Resource<A> {
    /// Build a resource from a store-assigned integer id.
    pub fn new(id: i64, kind: &'static str, attributes: A) -> Self {
        Self {
            id: id.to_string(),
            kind,
            attributes,
        }
    }
}

/// Envelope for a single resource.
#[derive(Debug, Serialize)]
pub struct Document<A> {
    pub data: Resource<A>,
}

/// Envelope for a resource collection.
#[derive(Debug, Serialize)]
pub struct Collection<A> {
    pub data: Vec<Resource<A>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

/// Collection metadata.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub pagination: Pagination,
}

/// Pagination metadata. The API serves a single fixed page.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub pages: u32,
}

impl Pagination {
    /// The static single-page metadata used by every collection.
    pub fn single_page(total: usize) -> Self {
        Self {
            page: 1,
            limit: 20,
            total,
            pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    struct Probe {
        value: u32,
    }

    #[test]
    fn resource_serializes_id_as_string() {
        let resource = Resource::new(42, "project", Probe { value: 7 });
        let json = serde_json::to_string(&resource).unwrap();
        assert!(json.contains("\"id\":\"42\""));
        assert!(json.contains("\"type\":\"project\""));
        assert!(json.contains("\"attributes\":{\"value\":7}"));
    }

    #[test]
    fn document_wraps_resource_under_data() {
        let document = Document {
            data: Resource::new(1, "chapter", Probe { value: 0 }),
        };
        let json = serde_json::to_string(&document).unwrap();
        assert!(json.starts_with("{\"data\":{"));
    }

    #[test]
    fn collection_omits_missing_meta() {
        let collection = Collection::<Probe> {
            data: vec![],
            meta: None,
        };
        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(json, "{\"data\":[]}");
    }

    #[test]
    fn collection_meta_carries_static_pagination() {
        let collection = Collection {
            data: vec![Resource::new(1, "project", Probe { value: 1 })],
            meta: Some(Meta {
                pagination: Pagination::single_page(1),
            }),
        };
        let json = serde_json::to_string(&collection).unwrap();
        assert!(json.contains("\"pagination\":{\"page\":1,\"limit\":20,\"total\":1,\"pages\":1}"));
    }
}
