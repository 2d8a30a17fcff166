use serde_json::Value;
use tracing::info;

use crate::error::{BoxError, PipelineError};
use crate::plugins::hooks::on_plugin_init::OnPluginInitPayload;
use crate::plugins::plugin_trait::{PipelinePlugin, PluginBoxed};

type PluginFactory = Box<dyn FnOnce(&Value) -> Result<Option<PluginBoxed>, BoxError> + Send>;

enum PluginEntry {
    Instance(PluginBoxed),
    Configured {
        name: &'static str,
        config: Value,
        factory: PluginFactory,
    },
}

/// Ordered collection of plugins for one pipeline: pre-constructed instances
/// and config-driven registrations, initialized together at build time.
#[derive(Default)]
pub struct PluginRegistry {
    entries: Vec<PluginEntry>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_instance<P: PipelinePlugin>(&mut self, plugin: P) {
        self.entries.push(PluginEntry::Instance(Box::new(plugin)));
    }

    /// Registers a plugin type to be initialized from a configuration value
    /// through its `on_plugin_init` hook.
    pub fn register<P: PipelinePlugin>(&mut self, config: Value) {
        self.entries.push(PluginEntry::Configured {
            name: P::plugin_name(),
            config,
            factory: Box::new(|config| {
                P::on_plugin_init(OnPluginInitPayload::new(config))
                    .map(|maybe_plugin| maybe_plugin.map(|plugin| Box::new(plugin) as PluginBoxed))
            }),
        });
    }

    /// Initializes plugins in registration order. A failing factory fails the
    /// whole build: a misconfigured plugin must surface before any execution
    /// starts, not run degraded.
    pub fn initialize_plugins(self) -> Result<Vec<PluginBoxed>, PipelineError> {
        let mut plugins = Vec::with_capacity(self.entries.len());

        for entry in self.entries {
            match entry {
                PluginEntry::Instance(plugin) => plugins.push(plugin),
                PluginEntry::Configured {
                    name,
                    config,
                    factory,
                } => match factory(&config) {
                    Ok(Some(plugin)) => {
                        info!("Loaded plugin: {}", name);
                        plugins.push(plugin);
                    }
                    Ok(None) => {
                        info!("Plugin '{}' disabled itself, skipping", name);
                    }
                    Err(source) => {
                        return Err(PipelineError::PluginInitFailed { name, source });
                    }
                },
            }
        }

        Ok(plugins)
    }
}
