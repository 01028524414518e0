use std::fmt;

/// An upstream endpoint polled on every scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    SystemStatus,
    History,
    WantedMissing,
    Queue,
    RootFolder,
    Health,
}

impl Resource {
    /// All resources in emission order.
    pub const ALL: [Resource; 6] = [
        Resource::SystemStatus,
        Resource::History,
        Resource::WantedMissing,
        Resource::Queue,
        Resource::RootFolder,
        Resource::Health,
    ];

    /// Path relative to the configured base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Resource::SystemStatus => "/system/status",
            Resource::History => "/history",
            Resource::WantedMissing => "/wanted/missing",
            Resource::Queue => "/queue",
            Resource::RootFolder => "/rootfolder",
            Resource::Health => "/health",
        }
    }

    /// Short identifier used in log fields.
    pub const fn name(self) -> &'static str {
        match self {
            Resource::SystemStatus => "system_status",
            Resource::History => "history",
            Resource::WantedMissing => "wanted_missing",
            Resource::Queue => "queue",
            Resource::RootFolder => "root_folder",
            Resource::Health => "health",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
