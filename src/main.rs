use std::process::ExitCode;

use clap::Parser;

use mycounter_action::client::CounterClient;
use mycounter_action::error::RunError;
use mycounter_action::inputs::Inputs;
use mycounter_action::{runner, workflow};

/// Read and update mycounter.io counters from CI.
///
/// A workflow runner passes every input through `INPUT_*` environment
/// variables; the flags exist for running the action by hand.
#[derive(Parser)]
#[command(name = "mycounter-action", version, about)]
struct Cli {
    /// API key for the mycounter.io workspace
    #[arg(long, env = "INPUT_APIKEY", hide_env_values = true)]
    apikey: Option<String>,

    /// Workspace that owns the counter
    #[arg(long, env = "INPUT_WORKSPACE")]
    workspace: Option<String>,

    /// Counter to operate on
    #[arg(long, env = "INPUT_COUNTER")]
    counter: Option<String>,

    /// One of: get, increment, decrement, set
    #[arg(long, env = "INPUT_ACTION")]
    action: Option<String>,

    /// Integer payload for mutating actions (defaults to 1)
    #[arg(long, env = "INPUT_VALUE")]
    value: Option<String>,

    /// Override the service endpoint (local stubs, tests)
    #[arg(long, env = "MYCOUNTER_BASE_URL", hide = true)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let inputs = match Inputs::resolve(|name| match name {
        "apikey" => cli.apikey.clone(),
        "workspace" => cli.workspace.clone(),
        "counter" => cli.counter.clone(),
        "action" => cli.action.clone(),
        "value" => cli.value.clone(),
        _ => None,
    }) {
        Ok(inputs) => inputs,
        Err(err) => return fail(&err),
    };

    let client = CounterClient::new(cli.base_url);

    match runner::run(&client, &inputs).await {
        Ok(outcome) => {
            workflow::set_output("action", &outcome.action)?;
            workflow::set_output("value", outcome.value)?;
            workflow::set_output("status", true)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => fail(&err),
    }
}

/// Surface a terminal run failure: error annotation, `status=false`,
/// nonzero exit.
fn fail(err: &RunError) -> anyhow::Result<ExitCode> {
    workflow::set_failed(&err.to_string());
    workflow::set_output("status", false)?;
    Ok(ExitCode::FAILURE)
}
