//! Application state and dependency injection.

use studia_inference::Capabilities;

use crate::service::{ArtifactStore, Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). The capability
/// registry is constructed once at startup and never mutated afterwards;
/// cloning the state only clones cheap handles.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    capabilities: Capabilities,
    artifacts: ArtifactStore,
    config: ServiceConfig,
}

impl ServiceState {
    /// Initializes application state from configuration and the capability
    /// registry.
    ///
    /// Failure here (e.g. the artifact spool cannot be created) is fatal:
    /// the server must not start in a partial-availability mode.
    pub async fn from_config(config: ServiceConfig, capabilities: Capabilities) -> Result<Self> {
        let artifacts = ArtifactStore::open(config.artifact_dir.clone()).await?;

        Ok(Self {
            capabilities,
            artifacts,
            config,
        })
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(capabilities: Capabilities);
impl_di!(artifacts: ArtifactStore);
impl_di!(config: ServiceConfig);
