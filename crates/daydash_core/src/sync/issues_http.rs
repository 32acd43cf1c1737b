//! Issue-tracker adapter over a GitHub-compatible REST API.
//!
//! # Responsibility
//! - Fetch open items assigned to the user plus pull requests awaiting their
//!   review, merged and deduplicated by id.
//!
//! # Invariants
//! - No token configured means an empty result, not an error.
//! - Result order: assigned items first, then review requests, minus
//!   duplicates.

use std::collections::HashSet;

use async_trait::async_trait;
use log::warn;
use serde_json::Value;

use crate::model::snapshot::{Issue, IssueKind, IssueStatus};

use super::{AdapterError, AdapterResult, IssueAdapter};

const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Issue adapter backed by the tracker's REST API.
pub struct HttpIssueAdapter {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpIssueAdapter {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Points the adapter at a self-hosted instance.
    pub fn with_base_url(token: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    async fn get_json(&self, token: &str, url: &str) -> AdapterResult<Value> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "daydash")
            .send()
            .await
            .map_err(|err| AdapterError::Http(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::Provider(format!(
                "tracker answered {status} for {url}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| AdapterError::Http(err.to_string()))
    }
}

#[async_trait]
impl IssueAdapter for HttpIssueAdapter {
    async fn fetch_assigned(&self) -> AdapterResult<Vec<Issue>> {
        let Some(token) = self.token.as_deref() else {
            // Feature degrades silently when the tracker is not connected.
            return Ok(Vec::new());
        };

        let assigned = self
            .get_json(
                token,
                &format!("{}/issues?filter=assigned&state=open", self.base_url),
            )
            .await?;
        let reviews = self
            .get_json(
                token,
                &format!(
                    "{}/search/issues?q=type:pr+state:open+review-requested:@me",
                    self.base_url
                ),
            )
            .await?;

        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        let assigned_items = assigned.as_array().cloned().unwrap_or_default();
        let review_items = reviews["items"].as_array().cloned().unwrap_or_default();

        for item in assigned_items.iter().chain(review_items.iter()) {
            let Some(issue) = parse_issue(item) else {
                warn!("event=issue_parse module=sync status=skipped reason=malformed_item");
                continue;
            };
            if seen.insert(issue.id) {
                issues.push(issue);
            }
        }

        Ok(issues)
    }
}

fn parse_issue(item: &Value) -> Option<Issue> {
    let id = item["id"].as_i64()?;
    let number = item["number"].as_i64()?;
    let title = item["title"].as_str()?.to_string();
    let url = item["html_url"].as_str()?.to_string();

    let repository = item["repository"]["full_name"]
        .as_str()
        .or_else(|| {
            // Search results carry repository_url instead of a nested object.
            item["repository_url"]
                .as_str()
                .and_then(|value| value.split("/repos/").nth(1))
        })
        .unwrap_or("unknown")
        .to_string();

    let is_pr = !item["pull_request"].is_null();
    let status = match item["state"].as_str() {
        Some("open") => IssueStatus::Open,
        Some("closed") if is_pr && !item["pull_request"]["merged_at"].is_null() => {
            IssueStatus::Merged
        }
        Some("closed") => IssueStatus::Closed,
        _ => return None,
    };

    Some(Issue {
        id,
        number,
        title,
        url,
        repository,
        status,
        kind: if is_pr { IssueKind::Pr } else { IssueKind::Issue },
    })
}

#[cfg(test)]
mod tests {
    use super::parse_issue;
    use crate::model::snapshot::{IssueKind, IssueStatus};
    use serde_json::json;

    #[test]
    fn parses_assigned_issue_with_nested_repository() {
        let item = json!({
            "id": 11,
            "number": 42,
            "title": "fix login",
            "html_url": "https://example.com/o/r/issues/42",
            "state": "open",
            "repository": { "full_name": "o/r" }
        });

        let issue = parse_issue(&item).unwrap();
        assert_eq!(issue.repository, "o/r");
        assert_eq!(issue.status, IssueStatus::Open);
        assert_eq!(issue.kind, IssueKind::Issue);
    }

    #[test]
    fn parses_search_result_pull_request() {
        let item = json!({
            "id": 12,
            "number": 7,
            "title": "review me",
            "html_url": "https://example.com/o/r/pull/7",
            "state": "open",
            "repository_url": "https://api.example.com/repos/o/r",
            "pull_request": {}
        });

        let issue = parse_issue(&item).unwrap();
        assert_eq!(issue.repository, "o/r");
        assert_eq!(issue.kind, IssueKind::Pr);
    }

    #[test]
    fn merged_pull_request_maps_to_merged() {
        let item = json!({
            "id": 13,
            "number": 8,
            "title": "done",
            "html_url": "https://example.com/o/r/pull/8",
            "state": "closed",
            "repository_url": "https://api.example.com/repos/o/r",
            "pull_request": { "merged_at": "2025-03-14T10:00:00Z" }
        });

        assert_eq!(parse_issue(&item).unwrap().status, IssueStatus::Merged);
    }

    #[test]
    fn malformed_item_is_skipped() {
        assert!(parse_issue(&json!({ "id": "not-a-number" })).is_none());
    }
}
