use super::{json_pretty, EXIT_SUCCESS};
use stackctl_core::{CreateOutcome, StackController};
use stackctl_remote::StackService;
use stackctl_schema::{StackIdentity, Template};
use std::path::Path;

pub fn run<S: StackService>(
    controller: &StackController<S>,
    stack_name: &str,
    template_path: &Path,
    json: bool,
) -> Result<u8, String> {
    let identity =
        StackIdentity::parse(stack_name).map_err(|e| format!("invalid stack name: {e}"))?;
    let template = Template::from_path(template_path).map_err(|e| e.to_string())?;

    let outcome = controller
        .create(&identity, &template)
        .map_err(|e| e.to_string())?;

    if json {
        let payload = match &outcome {
            CreateOutcome::Created(handle) => serde_json::json!({
                "stack_name": identity.stack_name(),
                "created": true,
                "handle": handle,
            }),
            CreateOutcome::AlreadyExists => serde_json::json!({
                "stack_name": identity.stack_name(),
                "created": false,
            }),
        };
        println!("{}", json_pretty(&payload)?);
    } else {
        match &outcome {
            CreateOutcome::Created(handle) => {
                println!("created {} ({handle})", identity.stack_name());
            }
            CreateOutcome::AlreadyExists => {
                println!("{} already exists, nothing to do", identity.stack_name());
            }
        }
    }
    Ok(EXIT_SUCCESS)
}
