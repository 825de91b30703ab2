//! InferenceEngine: owns the current network, replaces it atomically on
//! load, and answers queries against immutable snapshots.

use std::sync::{Arc, RwLock};

use bayes_core::errors::{BayesError, BayesResult, QueryError};
use bayes_core::traits::{FileSource, NetworkSource, StrSource};
use bayes_core::{BayesConfig, Distribution, Evidence};
use bayes_observability::{events, load_span, marginals_span, query_span};

use crate::loader::{self, LoadReport, LoadedNetwork};
use crate::query;

/// The main inference engine.
pub struct InferenceEngine {
    config: BayesConfig,
    /// Currently active network. `None` until the first successful load.
    current: RwLock<Option<Arc<LoadedNetwork>>>,
}

impl InferenceEngine {
    /// Create an engine with default settings and no network.
    pub fn new() -> Self {
        Self::with_config(BayesConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: BayesConfig) -> Self {
        Self {
            config,
            current: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &BayesConfig {
        &self.config
    }

    // --- Loading ---

    /// Load a network and make it current.
    ///
    /// The new network is fully built and validated before the swap. On any
    /// failure the previously loaded network (if any) stays current.
    pub fn load(&self, source: &dyn NetworkSource) -> BayesResult<LoadReport> {
        let origin = source.describe();
        let span = load_span!(origin);
        let _guard = span.enter();

        let loaded = match loader::load(source, &self.config.validation) {
            Ok(loaded) => loaded,
            Err(e) => {
                events::network_rejected(&origin, &e.to_string());
                return Err(e);
            }
        };

        let report = loaded.report.clone();
        {
            let mut current = self
                .current
                .write()
                .map_err(|e| BayesError::ConcurrencyError(e.to_string()))?;
            *current = Some(Arc::new(loaded));
        }

        events::network_loaded(
            &report.name,
            report.node_count,
            report.layer_count,
            &report.fingerprint,
        );
        Ok(report)
    }

    /// Load a network from a file.
    pub fn load_path(&self, path: impl AsRef<std::path::Path>) -> BayesResult<LoadReport> {
        self.load(&FileSource::new(path))
    }

    /// Load a network from an in-memory document.
    pub fn load_str(&self, document: &str) -> BayesResult<LoadReport> {
        self.load(&StrSource::new("<inline>", document))
    }

    /// The current network, shared. Later loads do not affect it.
    pub fn snapshot(&self) -> BayesResult<Arc<LoadedNetwork>> {
        let current = self
            .current
            .read()
            .map_err(|e| BayesError::ConcurrencyError(e.to_string()))?;
        current
            .clone()
            .ok_or_else(|| QueryError::NoNetworkLoaded.into())
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_ok()
    }

    /// Report of the current network, if one is loaded.
    pub fn report(&self) -> Option<LoadReport> {
        self.snapshot().ok().map(|loaded| loaded.report.clone())
    }

    // --- Queries ---

    /// Posterior distribution of `query` given `evidence`.
    pub fn infer(&self, query: &str, evidence: &Evidence) -> BayesResult<Distribution> {
        let loaded = self.snapshot()?;
        let span = query_span!(query, evidence.len());
        let _guard = span.enter();
        Ok(query::infer(&loaded.network, query, evidence)?)
    }

    /// Posterior of every unobserved node given `evidence`.
    pub fn marginals(&self, evidence: &Evidence) -> BayesResult<Vec<Distribution>> {
        let loaded = self.snapshot()?;
        let parallel = self.config.inference.parallel_marginals;
        let span = marginals_span!(loaded.network.len(), parallel);
        let _guard = span.enter();
        Ok(query::marginals(&loaded.network, evidence, parallel)?)
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}
