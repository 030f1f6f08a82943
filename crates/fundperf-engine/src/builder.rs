//! Builder pattern for the report engine.

use std::sync::Arc;

use fundperf_analytics::AnalyticsConfig;
use fundperf_traits::ReturnSeriesProvider;

use crate::error::EngineError;
use crate::ReportEngine;

/// Builder for constructing a [`ReportEngine`].
pub struct ReportEngineBuilder {
    config: Option<AnalyticsConfig>,
    provider: Option<Arc<dyn ReturnSeriesProvider>>,
}

impl ReportEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            provider: None,
        }
    }

    /// Set the analytics configuration.
    pub fn with_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the return series provider.
    pub fn with_provider(mut self, provider: Arc<dyn ReturnSeriesProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the report engine.
    pub fn build(self) -> Result<ReportEngine, EngineError> {
        let config = self.config.unwrap_or_default();
        config
            .validate()
            .map_err(|e| EngineError::ConfigError(e.to_string()))?;

        let provider = self
            .provider
            .ok_or_else(|| EngineError::ConfigError("provider not configured".into()))?;

        Ok(ReportEngine::new(config, provider))
    }
}

impl Default for ReportEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
