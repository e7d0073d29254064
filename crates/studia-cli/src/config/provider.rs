//! Capability provider configuration.

use studia_inference::Capabilities;

use super::Cli;

/// Creates the capability registry from CLI configuration.
///
/// Registration happens exactly once here; a provider that cannot be
/// constructed aborts startup rather than serving a partial capability set.
///
/// # Errors
///
/// Returns an error if the Hugging Face client cannot be initialized.
#[cfg(not(feature = "mock"))]
pub fn create_capabilities(cli: &Cli) -> anyhow::Result<Capabilities> {
    use anyhow::Context;

    let client = studia_hf::HfClient::new(cli.hf.clone())
        .context("failed to create Hugging Face client")?;
    Ok(Capabilities::from_provider(client))
}

/// Creates a mock-backed capability registry.
///
/// Compiled in with the `mock` feature for local frontend development
/// without model access.
#[cfg(feature = "mock")]
pub fn create_capabilities(_cli: &Cli) -> anyhow::Result<Capabilities> {
    use studia_inference::mock::MockProvider;

    Ok(MockProvider::default().into_capabilities())
}
