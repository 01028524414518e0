//! Response shapes for the endpoints the exporter polls.
//!
//! Only the fields the exporter reads are modelled. Every field is defaulted
//! and accepts `null`, so a payload with missing or null keys still decodes
//! instead of failing the whole resource.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::Resource;

/// A decodable payload bound to the endpoint that serves it.
pub trait Endpoint: DeserializeOwned {
    const RESOURCE: Resource;
}

/// `GET /system/status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub app_data: String,
    #[serde(deserialize_with = "null_as_default")]
    pub branch: String,
}

impl SystemStatus {
    /// True when no field was populated, which is how an unreachable
    /// upstream shows up.
    pub fn is_empty(&self) -> bool {
        self.version.is_empty() && self.app_data.is_empty() && self.branch.is_empty()
    }
}

impl Endpoint for SystemStatus {
    const RESOURCE: Resource = Resource::SystemStatus;
}

/// `GET /history` (paged; only the total is used)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct History {
    #[serde(deserialize_with = "null_as_default")]
    pub total_records: i64,
}

impl Endpoint for History {
    const RESOURCE: Resource = Resource::History;
}

/// `GET /wanted/missing` (paged; only the total is used)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WantedMissing {
    #[serde(deserialize_with = "null_as_default")]
    pub total_records: i64,
}

impl Endpoint for WantedMissing {
    const RESOURCE: Resource = Resource::WantedMissing;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Size in bytes. Sonarr reports this as a float.
    #[serde(deserialize_with = "null_as_default")]
    pub size: f64,
}

/// `GET /queue`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue(pub Vec<QueueRecord>);

impl Queue {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Endpoint for Queue {
    const RESOURCE: Resource = Resource::Queue;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RootFolder {
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    /// `null` when Sonarr cannot reach the folder.
    #[serde(deserialize_with = "null_as_default")]
    pub free_space: i64,
}

/// `GET /rootfolder`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootFolders(pub Vec<RootFolder>);

impl Endpoint for RootFolders {
    const RESOURCE: Resource = Resource::RootFolder;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthIssue {
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub issue_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wiki_url: String,
}

/// `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthIssues(pub Vec<HealthIssue>);

impl Endpoint for HealthIssues {
    const RESOURCE: Resource = Resource::Health;
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_status_decodes_camel_case() {
        let status: SystemStatus = serde_json::from_str(
            r#"{"version":"2.0.0.5344","appData":"/config","branch":"main","isLinux":true}"#,
        )
        .unwrap();

        assert_eq!(status.version, "2.0.0.5344");
        assert_eq!(status.app_data, "/config");
        assert_eq!(status.branch, "main");
        assert!(!status.is_empty());
    }

    #[test]
    fn test_system_status_empty_object() {
        let status: SystemStatus = serde_json::from_str("{}").unwrap();
        assert!(status.is_empty());
        assert_eq!(status, SystemStatus::default());
    }

    #[test]
    fn test_paged_resources_ignore_records() {
        let history: History = serde_json::from_str(
            r#"{"page":1,"pageSize":10,"totalRecords":4321,"records":[{"id":1}]}"#,
        )
        .unwrap();
        assert_eq!(history.total_records, 4321);

        let wanted: WantedMissing = serde_json::from_str(r#"{"totalRecords":-2}"#).unwrap();
        assert_eq!(wanted.total_records, -2);
    }

    #[test]
    fn test_queue_is_a_bare_array() {
        let queue: Queue = serde_json::from_str(
            r#"[{"title":"Show.S01E01","size":1073741824.0,"status":"Downloading"},{"title":"Show.S01E02"}]"#,
        )
        .unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.0[0].size, 1073741824.0);
        assert_eq!(queue.0[1].size, 0.0);
    }

    #[test]
    fn test_root_folders() {
        let folders: RootFolders = serde_json::from_str(
            r#"[{"path":"/tv","freeSpace":5000000000000,"id":1},{"path":"/anime","freeSpace":12}]"#,
        )
        .unwrap();

        assert_eq!(folders.0.len(), 2);
        assert_eq!(folders.0[0].path, "/tv");
        assert_eq!(folders.0[0].free_space, 5_000_000_000_000);
    }

    #[test]
    fn test_root_folders_null_free_space() {
        let folders: RootFolders = serde_json::from_str(
            r#"[{"path":"/tv","freeSpace":1000},{"path":"/offline","freeSpace":null}]"#,
        )
        .unwrap();

        assert_eq!(folders.0.len(), 2);
        assert_eq!(folders.0[0].free_space, 1000);
        assert_eq!(folders.0[1].path, "/offline");
        assert_eq!(folders.0[1].free_space, 0);
    }

    #[test]
    fn test_system_status_null_branch() {
        let status: SystemStatus =
            serde_json::from_str(r#"{"version":"3.0.10","appData":"/config","branch":null}"#)
                .unwrap();

        assert!(!status.is_empty());
        assert_eq!(status.version, "3.0.10");
        assert_eq!(status.branch, "");
    }

    #[test]
    fn test_null_totals_and_queue_fields() {
        let history: History = serde_json::from_str(r#"{"totalRecords":null}"#).unwrap();
        assert_eq!(history.total_records, 0);

        let wanted: WantedMissing = serde_json::from_str(r#"{"totalRecords":null}"#).unwrap();
        assert_eq!(wanted.total_records, 0);

        let queue: Queue =
            serde_json::from_str(r#"[{"title":null,"size":null},{"title":"b","size":2.0}]"#)
                .unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.0[0].title, "");
        assert_eq!(queue.0[0].size, 0.0);
    }

    #[test]
    fn test_health_issue_tolerates_missing_fields() {
        let issues: HealthIssues = serde_json::from_str(
            r#"[{"source":"IndexerCheck","type":"warning","message":"No indexers","wikiUrl":"https://wiki"},{"type":"error"},{}]"#,
        )
        .unwrap();

        assert_eq!(issues.0.len(), 3);
        assert_eq!(issues.0[0].issue_type, "warning");
        assert_eq!(issues.0[0].wiki_url, "https://wiki");
        assert_eq!(issues.0[1].issue_type, "error");
        assert_eq!(issues.0[1].message, "");
        assert_eq!(issues.0[2].issue_type, "");
    }

    #[test]
    fn test_health_issue_null_fields() {
        let issues: HealthIssues =
            serde_json::from_str(r#"[{"type":"notice","message":null,"wikiUrl":null}]"#).unwrap();

        assert_eq!(issues.0[0].issue_type, "notice");
        assert_eq!(issues.0[0].wiki_url, "");
    }
}
