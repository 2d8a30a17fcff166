use std::error::Error;

use crate::error::BoxError;
use crate::plugins::plugin_trait::PipelinePlugin;

/// Handed to a plugin when it is initialized from a configuration document
/// (see `PipelineBuilder::register_plugin`). Plugins constructed
/// programmatically never see this payload.
pub struct OnPluginInitPayload<'a, TPlugin: PipelinePlugin> {
    config: &'a serde_json::Value,
    phantom: std::marker::PhantomData<TPlugin>,
}

pub type OnPluginInitResult<TPlugin> = Result<Option<TPlugin>, BoxError>;

impl<'a, TPlugin> OnPluginInitPayload<'a, TPlugin>
where
    TPlugin: PipelinePlugin,
{
    pub fn new(config: &'a serde_json::Value) -> Self {
        Self {
            config,
            phantom: std::marker::PhantomData,
        }
    }

    /// Parse the plugin's configuration value into its expected config
    /// struct. The plugin chooses when and if to call this.
    pub fn config(&self) -> Result<TPlugin::Config, BoxError> {
        let sonic_value = sonic_rs::to_value(self.config)?;
        let config = sonic_rs::from_value(&sonic_value)?;
        Ok(config)
    }

    /// Returning this disables the plugin; it won't participate in any
    /// execution.
    pub fn disable_plugin(&self) -> OnPluginInitResult<TPlugin> {
        Ok(None)
    }

    pub fn initialize_plugin(&self, plugin: TPlugin) -> OnPluginInitResult<TPlugin> {
        Ok(Some(plugin))
    }

    pub fn initialize_plugin_with_defaults(&self) -> OnPluginInitResult<TPlugin>
    where
        TPlugin: Default,
    {
        Ok(Some(TPlugin::default()))
    }

    /// Returning an error fails the pipeline build; the plugin's
    /// misconfiguration is surfaced before any execution starts.
    pub fn error<TError>(err: TError) -> OnPluginInitResult<TPlugin>
    where
        TError: Error + Into<BoxError>,
    {
        Err(err.into())
    }
}
