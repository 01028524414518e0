//! Pure mappings from decoded upstream payloads to observations.
//!
//! A failed fetch is represented by the payload's `Default`, so each
//! translation also defines what a scrape reports when that resource is
//! unavailable.

use sonarr_api::Endpoint;
use sonarr_api::models::{HealthIssues, History, Queue, RootFolders, SystemStatus, WantedMissing};

use super::descriptor::{
    HEALTH_ISSUES, HISTORY_TOTAL_RECORDS, MISSING_EPISODES, Observation, QUEUE_TOTAL_RECORDS,
    ROOT_FOLDER_SPACE, STATUS,
};

/// An upstream payload that can be turned into observations.
pub trait Translate: Endpoint + Default + Send + 'static {
    fn translate(self) -> Vec<Observation>;
}

impl Translate for SystemStatus {
    fn translate(self) -> Vec<Observation> {
        let up = if self.is_empty() { 0.0 } else { 1.0 };
        vec![Observation::new(
            &STATUS,
            [self.version, self.app_data, self.branch],
            up,
        )]
    }
}

impl Translate for History {
    fn translate(self) -> Vec<Observation> {
        vec![Observation::unlabeled(
            &HISTORY_TOTAL_RECORDS,
            self.total_records as f64,
        )]
    }
}

impl Translate for WantedMissing {
    fn translate(self) -> Vec<Observation> {
        vec![Observation::unlabeled(
            &MISSING_EPISODES,
            self.total_records as f64,
        )]
    }
}

impl Translate for Queue {
    /// Queue depth only; per-item sizes are not exported.
    fn translate(self) -> Vec<Observation> {
        vec![Observation::unlabeled(
            &QUEUE_TOTAL_RECORDS,
            self.len() as f64,
        )]
    }
}

impl Translate for RootFolders {
    fn translate(self) -> Vec<Observation> {
        self.0
            .into_iter()
            .map(|folder| {
                Observation::new(&ROOT_FOLDER_SPACE, [folder.path], folder.free_space as f64)
            })
            .collect()
    }
}

impl Translate for HealthIssues {
    /// One observation per distinct issue type, in first-seen order.
    fn translate(self) -> Vec<Observation> {
        let mut counts: Vec<(String, u64)> = Vec::new();
        for issue in self.0 {
            match counts.iter_mut().find(|(t, _)| *t == issue.issue_type) {
                Some((_, count)) => *count += 1,
                None => counts.push((issue.issue_type, 1)),
            }
        }

        counts
            .into_iter()
            .map(|(issue_type, count)| Observation::new(&HEALTH_ISSUES, [issue_type], count as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use sonarr_api::models::{HealthIssue, QueueRecord, RootFolder};

    fn issue(issue_type: &str) -> HealthIssue {
        HealthIssue {
            issue_type: issue_type.to_string(),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("", "", "", 0.0)]
    #[case("3.0.10", "", "", 1.0)]
    #[case("", "/config", "", 1.0)]
    #[case("", "", "develop", 1.0)]
    #[case("3.0.10", "/config", "main", 1.0)]
    fn test_status_value(
        #[case] version: &str,
        #[case] app_data: &str,
        #[case] branch: &str,
        #[case] expected: f64,
    ) {
        let status = SystemStatus {
            version: version.to_string(),
            app_data: app_data.to_string(),
            branch: branch.to_string(),
        };

        let obs = status.translate();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].value(), expected);
        assert_eq!(obs[0].label("version"), Some(version));
        assert_eq!(obs[0].label("appData"), Some(app_data));
        assert_eq!(obs[0].label("branch"), Some(branch));
    }

    #[test]
    fn test_defaults_report_zero() {
        let status = SystemStatus::default().translate();
        assert_eq!(status[0].value(), 0.0);
        assert!(status[0].labels().all(|(_, v)| v.is_empty()));

        assert_eq!(History::default().translate()[0].value(), 0.0);
        assert_eq!(WantedMissing::default().translate()[0].value(), 0.0);
        assert_eq!(Queue::default().translate()[0].value(), 0.0);
        assert!(RootFolders::default().translate().is_empty());
        assert!(HealthIssues::default().translate().is_empty());
    }

    #[test]
    fn test_totals() {
        let history = History { total_records: 1234 }.translate();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].name(), "sonarr_history_total_records");
        assert_eq!(history[0].value(), 1234.0);

        let wanted = WantedMissing { total_records: 17 }.translate();
        assert_eq!(wanted[0].name(), "sonarr_missing_episodes");
        assert_eq!(wanted[0].value(), 17.0);
    }

    #[test]
    fn test_negative_totals_pass_through() {
        let wanted = WantedMissing { total_records: -5 }.translate();
        assert_eq!(wanted[0].value(), -5.0);

        let folders = RootFolders(vec![RootFolder {
            path: "/tv".to_string(),
            free_space: -1,
        }])
        .translate();
        assert_eq!(folders[0].value(), -1.0);
    }

    #[test]
    fn test_queue_counts_entries() {
        let queue = Queue(vec![
            QueueRecord {
                title: "a".to_string(),
                size: 10.0,
            },
            QueueRecord {
                title: "b".to_string(),
                size: 20.0,
            },
            QueueRecord {
                title: "c".to_string(),
                size: 30.0,
            },
        ]);

        let obs = queue.translate();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].value(), 3.0);
        assert_eq!(obs[0].labels().count(), 0);
    }

    #[test]
    fn test_root_folders_preserve_order() {
        let folders = RootFolders(vec![
            RootFolder {
                path: "/tv".to_string(),
                free_space: 5_000_000_000_000,
            },
            RootFolder {
                path: "/anime".to_string(),
                free_space: 42,
            },
        ]);

        let obs = folders.translate();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].label("path"), Some("/tv"));
        assert_eq!(obs[0].value(), 5_000_000_000_000.0);
        assert_eq!(obs[1].label("path"), Some("/anime"));
        assert_eq!(obs[1].value(), 42.0);
    }

    #[test]
    fn test_health_groups_by_type() {
        let issues = HealthIssues(vec![issue("A"), issue("B"), issue("A")]);

        let obs = issues.translate();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].label("type"), Some("A"));
        assert_eq!(obs[0].value(), 2.0);
        assert_eq!(obs[1].label("type"), Some("B"));
        assert_eq!(obs[1].value(), 1.0);
    }

    #[test]
    fn test_health_untyped_issues_are_counted() {
        let issues = HealthIssues(vec![issue(""), issue("warning"), issue("")]);

        let obs = issues.translate();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].label("type"), Some(""));
        assert_eq!(obs[0].value(), 2.0);
    }
}
