//! Endpoint requests
//!
//! Each request type knows its path segments and query parameters; the
//! transport turns an [`ApiRequest`] into an actual HTTP call.

use tracing::debug;

/// Transport-level description of a GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Path segments appended to the base URL, unencoded
    pub segments: Vec<String>,
    /// Query parameters, only those that are set
    pub query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Segments joined with `/`, used for logging and mock lookups
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// Selects a prompt by slug, optionally pinned to a version or tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPromptRequest {
    pub slug: String,
    pub version: Option<String>,
    pub tag: Option<String>,
}

impl GetPromptRequest {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            version: None,
            tag: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn to_api_request(&self) -> ApiRequest {
        debug!(slug = %self.slug, ?self.version, ?self.tag, "GetPromptRequest::to_api_request: called");
        ApiRequest {
            segments: vec!["prompts".to_string(), self.slug.clone()],
            query: selector_query(&self.version, &self.tag),
        }
    }
}

/// Same selector as [`GetPromptRequest`], hitting the describe endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribePromptRequest(pub GetPromptRequest);

impl DescribePromptRequest {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(GetPromptRequest::new(slug))
    }

    pub fn to_api_request(&self) -> ApiRequest {
        let mut request = self.0.to_api_request();
        request.segments.push("describe".to_string());
        request
    }
}

impl From<GetPromptRequest> for DescribePromptRequest {
    fn from(request: GetPromptRequest) -> Self {
        Self(request)
    }
}

/// Lists prompts, optionally restricted to one feature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPromptsRequest {
    pub feature_slug: Option<String>,
}

impl ListPromptsRequest {
    pub fn for_feature(feature_slug: impl Into<String>) -> Self {
        Self {
            feature_slug: Some(feature_slug.into()),
        }
    }

    pub fn to_api_request(&self) -> ApiRequest {
        ApiRequest {
            segments: vec!["prompts".to_string()],
            query: self
                .feature_slug
                .iter()
                .map(|f| ("featureSlug", f.clone()))
                .collect(),
        }
    }
}

fn selector_query(version: &Option<String>, tag: &Option<String>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(version) = version {
        query.push(("version", version.clone()));
    }
    if let Some(tag) = tag {
        query.push(("tag", tag.clone()));
    }
    query
}
