use syncwatch_sync_status::DEFAULT_SYNC_THRESHOLD;

#[derive(Debug, Clone, Copy)]
pub struct HealthCheckConfig {
    /// Largest tolerated block and slot distance before `/status` reports unhealthy.
    pub sync_threshold: u64,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            sync_threshold: DEFAULT_SYNC_THRESHOLD,
        }
    }
}
