//! Hypermedia link assembly, kept apart from the business logic.
//!
//! Every response body is either a single `Resource` (payload plus `_links`)
//! or a `Collection` (`_embedded` array plus a collection self link).

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub collection: Link,
}

/// A single entity or DTO augmented with its self and collection links.
#[derive(Debug, Serialize)]
pub struct Resource<T: Serialize> {
    #[serde(flatten)]
    pub data: T,
    #[serde(rename = "_links")]
    pub links: ResourceLinks,
}

impl<T: Serialize> Resource<T> {
    pub fn new(data: T, self_href: impl Into<String>, collection_href: impl Into<String>) -> Self {
        Self {
            data,
            links: ResourceLinks {
                self_link: Link::new(self_href),
                collection: Link::new(collection_href),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// A collection of linked resources. An empty collection is a valid body.
#[derive(Debug, Serialize)]
pub struct Collection<T: Serialize> {
    #[serde(rename = "_embedded")]
    pub embedded: Vec<Resource<T>>,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
}

impl<T: Serialize> Collection<T> {
    pub fn new(embedded: Vec<Resource<T>>, self_href: impl Into<String>) -> Self {
        Self {
            embedded,
            links: CollectionLinks {
                self_link: Link::new(self_href),
            },
        }
    }
}

pub fn job_self_href(id: i64) -> String {
    format!("/jobs/{id}/info")
}

pub const JOBS_COLLECTION_HREF: &str = "/jobs/info";

pub fn recruiter_self_href(id: i64) -> String {
    format!("/recruiters/{id}/info")
}

pub const RECRUITERS_COLLECTION_HREF: &str = "/recruiters/info";

/// Wraps a job payload (raw row or DTO) with its links.
pub fn job_resource<T: Serialize>(id: i64, data: T) -> Resource<T> {
    Resource::new(data, job_self_href(id), JOBS_COLLECTION_HREF)
}

pub fn job_collection<T: Serialize>(items: Vec<(i64, T)>) -> Collection<T> {
    Collection::new(
        items
            .into_iter()
            .map(|(id, data)| job_resource(id, data))
            .collect(),
        JOBS_COLLECTION_HREF,
    )
}

/// Wraps a recruiter payload (raw row or DTO) with its links.
pub fn recruiter_resource<T: Serialize>(id: i64, data: T) -> Resource<T> {
    Resource::new(data, recruiter_self_href(id), RECRUITERS_COLLECTION_HREF)
}

pub fn recruiter_collection<T: Serialize>(items: Vec<(i64, T)>) -> Collection<T> {
    Collection::new(
        items
            .into_iter()
            .map(|(id, data)| recruiter_resource(id, data))
            .collect(),
        RECRUITERS_COLLECTION_HREF,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        title: String,
    }

    #[test]
    fn resource_flattens_payload_and_adds_links() {
        let resource = job_resource(
            5,
            Payload {
                title: "Java Developer".to_string(),
            },
        );
        let body = serde_json::to_value(&resource).unwrap();
        assert_eq!(body["title"], "Java Developer");
        assert_eq!(body["_links"]["self"]["href"], "/jobs/5/info");
        assert_eq!(body["_links"]["collection"]["href"], "/jobs/info");
    }

    #[test]
    fn empty_collection_serializes_with_links() {
        let collection = job_collection::<Payload>(vec![]);
        let body = serde_json::to_value(&collection).unwrap();
        assert_eq!(body["_embedded"], json!([]));
        assert_eq!(body["_links"]["self"]["href"], "/jobs/info");
    }

    #[test]
    fn recruiter_links_point_at_info_routes() {
        let resource = recruiter_resource(
            2,
            Payload {
                title: "unused".to_string(),
            },
        );
        assert_eq!(resource.links.self_link.href, "/recruiters/2/info");
        assert_eq!(resource.links.collection.href, "/recruiters/info");
    }
}
