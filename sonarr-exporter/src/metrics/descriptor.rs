//! Static metric descriptors and the observations built from them.

use std::fmt;

/// Prometheus metric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name, help text, type and label keys of one metric family.
///
/// Label keys are fixed here and nowhere else.
#[derive(Debug, PartialEq, Eq)]
pub struct MetricDesc {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    pub labels: &'static [&'static str],
}

pub static STATUS: MetricDesc = MetricDesc {
    name: "sonarr_status",
    help: "System Status",
    kind: MetricKind::Gauge,
    labels: &["version", "appData", "branch"],
};

pub static HISTORY_TOTAL_RECORDS: MetricDesc = MetricDesc {
    name: "sonarr_history_total_records",
    help: "Total records in Sonarr history",
    kind: MetricKind::Counter,
    labels: &[],
};

pub static MISSING_EPISODES: MetricDesc = MetricDesc {
    name: "sonarr_missing_episodes",
    help: "Total missing episodes in Sonarr",
    kind: MetricKind::Counter,
    labels: &[],
};

pub static QUEUE_TOTAL_RECORDS: MetricDesc = MetricDesc {
    name: "sonarr_queue_total_records",
    help: "Total records in Sonarr queue",
    kind: MetricKind::Counter,
    labels: &[],
};

pub static ROOT_FOLDER_SPACE: MetricDesc = MetricDesc {
    name: "sonarr_root_folder_space",
    help: "Root folder space in Sonarr",
    kind: MetricKind::Counter,
    labels: &["path"],
};

pub static HEALTH_ISSUES: MetricDesc = MetricDesc {
    name: "sonarr_health_issues",
    help: "Health issues in Sonarr by type",
    kind: MetricKind::Counter,
    labels: &["type"],
};

/// Every family the exporter can emit, in emission order.
pub static ALL: [&MetricDesc; 6] = [
    &STATUS,
    &HISTORY_TOTAL_RECORDS,
    &MISSING_EPISODES,
    &QUEUE_TOTAL_RECORDS,
    &ROOT_FOLDER_SPACE,
    &HEALTH_ISSUES,
];

/// A single sample: a family, its label values and a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    desc: &'static MetricDesc,
    label_values: Vec<String>,
    value: f64,
}

impl Observation {
    /// Build an observation. `label_values` pair positionally with
    /// `desc.labels`.
    ///
    /// The number of values must match the descriptor; debug builds panic
    /// on a mismatch. Every call site passes a fixed-size array.
    pub fn new<const N: usize>(
        desc: &'static MetricDesc,
        label_values: [String; N],
        value: f64,
    ) -> Self {
        debug_assert_eq!(
            desc.labels.len(),
            N,
            "label arity mismatch for {}",
            desc.name
        );
        Self {
            desc,
            label_values: label_values.into(),
            value,
        }
    }

    /// An observation for a family without labels.
    pub fn unlabeled(desc: &'static MetricDesc, value: f64) -> Self {
        Self::new(desc, [], value)
    }

    pub fn desc(&self) -> &'static MetricDesc {
        self.desc
    }

    pub fn name(&self) -> &'static str {
        self.desc.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Label key/value pairs in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.desc
            .labels
            .iter()
            .copied()
            .zip(self.label_values.iter().map(String::as_str))
    }

    /// Value of a single label, if the family declares it.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}
