use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub type ResourceId = i64;

/// Author recorded on every resource submitted through the API.
pub const STUDENT_AUTHOR: &str = "You (Student)";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub likes: i64,
    pub author: String,
    pub url: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateResourceRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResourceResponse {
    pub likes: i64,
}

impl CreateResourceRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("title", &self.title)?;
        validate_required("type", &self.kind)?;
        validate_required("url", &self.url)?;
        Ok(())
    }

    pub fn into_resource(self, id: ResourceId) -> Resource {
        Resource {
            id,
            title: self.title,
            kind: self.kind,
            likes: 0,
            author: STUDENT_AUTHOR.to_string(),
            url: self.url,
            tags: self.tags,
        }
    }
}

fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

/// Orders resources for display, most liked first.
pub fn sort_by_likes(resources: &mut [Resource]) {
    resources.sort_by(|a, b| b.likes.cmp(&a.likes));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, kind: &str, url: &str) -> CreateResourceRequest {
        CreateResourceRequest {
            title: title.to_string(),
            kind: kind.to_string(),
            url: url.to_string(),
            tags: vec!["a".to_string()],
        }
    }

    #[test]
    fn validate_accepts_filled_request() {
        request("Test", "article", "http://x").validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let err = request("", "article", "http://x").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "title" });
        let err = request("Test", "", "http://x").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "type" });
        let err = request("Test", "article", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "url" });
    }

    #[test]
    fn into_resource_starts_with_zero_likes_and_student_author() {
        let resource = request("Test", "article", "http://x").into_resource(7);
        assert_eq!(resource.id, 7);
        assert_eq!(resource.likes, 0);
        assert_eq!(resource.author, STUDENT_AUTHOR);
        assert_eq!(resource.tags, vec!["a".to_string()]);
    }

    #[test]
    fn type_field_is_renamed_on_the_wire() {
        let resource = request("Test", "video", "http://x").into_resource(1);
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["type"], "video");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn sort_by_likes_is_non_increasing() {
        let mut resources: Vec<Resource> = [3, 10, 0, 10, 7]
            .iter()
            .enumerate()
            .map(|(i, likes)| Resource {
                likes: *likes,
                ..request("t", "video", "u").into_resource(i as ResourceId)
            })
            .collect();
        sort_by_likes(&mut resources);
        let likes: Vec<i64> = resources.iter().map(|r| r.likes).collect();
        assert_eq!(likes, vec![10, 10, 7, 3, 0]);
    }
}
