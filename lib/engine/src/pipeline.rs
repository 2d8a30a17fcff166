use std::sync::Arc;

use graphql_tools::static_graphql::schema::Document as SchemaDocument;
use graphql_tools::validation::rules::default_rules_validation_plan;
use graphql_tools::validation::validate::{validate, ValidationPlan};
use sonic_rs::Value;
use tokio_util::sync::CancellationToken;
use tracing::{error, trace};

use crate::error::PipelineError;
use crate::executor::SharedExecutor;
use crate::plugins::hooks::on_execute::{OnExecuteEndHookPayload, OnExecuteStartHookPayload};
use crate::plugins::hooks::on_graphql_parse::{
    OnGraphQLParseEndHookPayload, OnGraphQLParseStartHookPayload,
};
use crate::plugins::hooks::on_graphql_validation::{
    OnGraphQLValidationEndHookPayload, OnGraphQLValidationStartHookPayload,
};
use crate::plugins::plugin_context::PluginContext;
use crate::plugins::plugin_trait::{
    EndControlFlow, PipelinePlugin, PluginBoxed, StartControlFlow,
};
use crate::plugins::registry::PluginRegistry;
use crate::request::{ExecutionRequest, GraphQLParams};
use crate::response::graphql_error::GraphQLError;
use crate::response::result::ExecutionResult;

pub struct PipelineBuilder {
    schema_sdl: Option<String>,
    executor: Option<SharedExecutor>,
    root_value: Option<Value>,
    registry: PluginRegistry,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            schema_sdl: None,
            executor: None,
            root_value: None,
            registry: PluginRegistry::new(),
        }
    }

    /// The schema the pipeline validates operations against.
    pub fn with_schema(mut self, sdl: impl Into<String>) -> Self {
        self.schema_sdl = Some(sdl.into());
        self
    }

    /// The executor the pipeline runs when no plugin overrides the selection.
    pub fn with_executor(mut self, executor: SharedExecutor) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn with_root_value(mut self, root_value: Value) -> Self {
        self.root_value = Some(root_value);
        self
    }

    /// Adds a pre-constructed plugin. Plugins run in registration order.
    pub fn with_plugin<P: PipelinePlugin>(mut self, plugin: P) -> Self {
        self.registry.add_instance(plugin);
        self
    }

    /// Registers a plugin type to be initialized from a configuration value
    /// (through its `on_plugin_init` hook) when the pipeline is built.
    pub fn register_plugin<P: PipelinePlugin>(mut self, config: serde_json::Value) -> Self {
        self.registry.register::<P>(config);
        self
    }

    pub fn build(self) -> Result<Pipeline, PipelineError> {
        let schema_sdl = self.schema_sdl.ok_or(PipelineError::MissingSchema)?;
        let executor = self.executor.ok_or(PipelineError::MissingExecutor)?;

        let schema = graphql_tools::parser::parse_schema(&schema_sdl)
            .map_err(|err| PipelineError::InvalidSchema(err.to_string()))?
            .into_static();

        let plugins = self.registry.initialize_plugins()?;

        Ok(Pipeline {
            schema: Arc::new(schema),
            validation_plan: default_rules_validation_plan(),
            plugins: Arc::new(plugins),
            executor,
            root_value: self.root_value,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The execution lifecycle: parse, validate, execute, end. Each phase runs
/// the corresponding plugin hooks around it; the execute phase invokes
/// whichever executor is selected in the slot when the hooks are done.
pub struct Pipeline {
    schema: Arc<SchemaDocument>,
    validation_plan: ValidationPlan,
    plugins: Arc<Vec<PluginBoxed>>,
    executor: SharedExecutor,
    root_value: Option<Value>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// The executor the pipeline runs when no plugin overrides the selection.
    pub fn default_executor(&self) -> &SharedExecutor {
        &self.executor
    }

    /// Runs one execution cycle. Request-level failures come back as an
    /// `ExecutionResult` carrying structured errors; this method never
    /// panics past the pipeline boundary.
    pub async fn execute(&self, params: GraphQLParams) -> ExecutionResult {
        self.execute_with_cancellation(params, None).await
    }

    /// Like [`Pipeline::execute`], with a cancellation token that is handed
    /// to the executor. The pipeline itself implements no timeout; honoring
    /// the token is the executor's responsibility.
    pub async fn execute_with_cancellation(
        &self,
        params: GraphQLParams,
        cancellation: Option<&CancellationToken>,
    ) -> ExecutionResult {
        match self.run(params, cancellation).await {
            Ok(result) => result,
            Err(err) => err.into(),
        }
    }

    async fn run(
        &self,
        params: GraphQLParams,
        cancellation: Option<&CancellationToken>,
    ) -> Result<ExecutionResult, PipelineError> {
        let context = PluginContext::default();

        /* Parse phase */

        let mut parse_end_callbacks = vec![];
        let mut parse_payload = OnGraphQLParseStartHookPayload {
            context: &context,
            params: &params,
        };
        for plugin in self.plugins.iter() {
            let result = plugin.on_graphql_parse(parse_payload).await;
            parse_payload = result.payload;
            match result.control_flow {
                StartControlFlow::Proceed => { /* continue to next plugin */ }
                StartControlFlow::EndWithResponse(response) => return Ok(response),
                StartControlFlow::OnEnd(callback) => parse_end_callbacks.push(callback),
            }
        }

        let query = params.query.as_deref().ok_or(PipelineError::MissingQuery)?;
        let document = graphql_tools::parser::parse_query(query)
            .map(|document| Arc::new(document.into_static()))
            .map_err(|err| {
                error!("Failed to parse GraphQL operation: {}", err);
                PipelineError::FailedToParseOperation(err)
            })?;
        trace!("successfully parsed GraphQL operation");

        let mut parse_end_payload = OnGraphQLParseEndHookPayload { document };
        for callback in parse_end_callbacks.into_iter().rev() {
            let result = callback(parse_end_payload);
            parse_end_payload = result.payload;
            match result.control_flow {
                EndControlFlow::Proceed => { /* continue to next callback */ }
                EndControlFlow::EndWithResponse(response) => return Ok(response),
            }
        }
        let document = parse_end_payload.document;

        /* Validation phase */

        let mut validation_end_callbacks = vec![];
        let mut validation_payload = OnGraphQLValidationStartHookPayload {
            context: &context,
            document: &document,
        };
        for plugin in self.plugins.iter() {
            let result = plugin.on_graphql_validation(validation_payload).await;
            validation_payload = result.payload;
            match result.control_flow {
                StartControlFlow::Proceed => {}
                StartControlFlow::EndWithResponse(response) => return Ok(response),
                StartControlFlow::OnEnd(callback) => validation_end_callbacks.push(callback),
            }
        }

        let validation_errors = validate(&self.schema, &document, &self.validation_plan);
        if !validation_errors.is_empty() {
            error!(
                "GraphQL validation failed with total of {} errors",
                validation_errors.len()
            );
            trace!("Validation errors: {:?}", validation_errors);
        }

        let mut validation_end_payload = OnGraphQLValidationEndHookPayload {
            context: &context,
            errors: validation_errors.iter().map(GraphQLError::from).collect(),
        };
        for callback in validation_end_callbacks.into_iter().rev() {
            let result = callback(validation_end_payload);
            validation_end_payload = result.payload;
            match result.control_flow {
                EndControlFlow::Proceed => {}
                EndControlFlow::EndWithResponse(response) => return Ok(response),
            }
        }
        if !validation_end_payload.errors.is_empty() {
            return Ok(ExecutionResult::from_errors(validation_end_payload.errors));
        }

        /* Execute phase */

        let mut execute_end_callbacks = vec![];
        let mut execute_payload = OnExecuteStartHookPayload {
            context: &context,
            document: &document,
            operation_name: params.operation_name.as_deref(),
            variable_values: &params.variables,
            root_value: self.root_value.as_ref(),
            errors: vec![],
            extensions: Default::default(),
            executor: self.executor.clone(),
        };
        for plugin in self.plugins.iter() {
            let result = plugin.on_execute(execute_payload).await;
            execute_payload = result.payload;
            match result.control_flow {
                StartControlFlow::Proceed => {}
                StartControlFlow::EndWithResponse(response) => return Ok(response),
                StartControlFlow::OnEnd(callback) => execute_end_callbacks.push(callback),
            }
        }

        let executor = execute_payload.executor.clone();
        let initial_errors = execute_payload.errors;
        let initial_extensions = execute_payload.extensions;

        let request = ExecutionRequest {
            document: &document,
            operation_name: params.operation_name.as_deref(),
            variable_values: &params.variables,
            context: &context,
            root_value: self.root_value.as_ref(),
            cancellation,
            default_executor: &self.executor,
        };

        let result = executor.execute(&request).await.map_err(|source| {
            error!("Executor '{}' failed: {}", executor.tag(), source);
            PipelineError::ExecutorFailure {
                tag: executor.tag(),
                source,
            }
        })?;

        let mut errors = initial_errors;
        errors.extend(result.errors);
        let mut extensions = initial_extensions;
        if let Some(result_extensions) = result.extensions {
            extensions.extend(result_extensions);
        }

        let mut end_payload = OnExecuteEndHookPayload {
            context: &context,
            data: result.data,
            errors,
            extensions,
        };
        for callback in execute_end_callbacks.into_iter().rev() {
            let result = callback(end_payload);
            end_payload = result.payload;
            match result.control_flow {
                EndControlFlow::Proceed => {}
                EndControlFlow::EndWithResponse(response) => return Ok(response),
            }
        }

        Ok(ExecutionResult {
            data: end_payload.data,
            errors: end_payload.errors,
            extensions: if end_payload.extensions.is_empty() {
                None
            } else {
                Some(end_payload.extensions)
            },
        })
    }
}
