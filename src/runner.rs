//! The single configuration-to-outcome translation a run performs.

use crate::action::Action;
use crate::client::CounterClient;
use crate::error::RunError;
use crate::inputs::{self, Inputs};
use crate::workflow;

/// What a successful run reports back to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Echo of the raw `action` input.
    pub action: String,
    /// Counter value the service reports after the operation.
    pub value: i64,
}

/// Execute one run: trace the inputs, decode the directive, make the
/// one HTTP call, interpret the answer.
///
/// Invalid directives fail before any network activity. All failures
/// are terminal; surfacing them is the caller's job.
pub async fn run(client: &CounterClient, inputs: &Inputs) -> Result<RunOutcome, RunError> {
    // Inputs are traced verbatim, the API key included; the lines only
    // render when the runner has step debugging enabled.
    workflow::debug(&format!("API Key: {}", inputs.apikey));
    workflow::debug(&format!("Workspace: {}", inputs.workspace));
    workflow::debug(&format!("Counter: {}", inputs.counter));
    workflow::debug(&format!("Action: {}", inputs.action));
    workflow::debug(&format!(
        "Value: {}",
        inputs.value.as_deref().unwrap_or_default()
    ));

    let send_value = match inputs::send_value(inputs.value.as_deref()) {
        Some(v) => v,
        None => {
            workflow::debug(
                "No valid value was provided; the default value for this operation will be 1.",
            );
            1
        }
    };

    let directive = Action::parse(&inputs.action);
    let Some((method, path_suffix)) = directive.route() else {
        return Err(RunError::InvalidAction(inputs.action.clone()));
    };

    let value = client
        .perform(inputs, method, path_suffix, send_value)
        .await?;
    workflow::debug(&format!("Counter Value: {value}"));

    Ok(RunOutcome {
        action: inputs.action.clone(),
        value,
    })
}
