use super::{json_pretty, EXIT_SUCCESS};
use stackctl_core::StackController;
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

    let handle = controller
        .update(&identity, &template)
        .map_err(|e| e.to_string())?;

    if json {
        let payload = serde_json::json!({
            "stack_name": identity.stack_name(),
            "handle": handle,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        println!("updated {} ({handle})", identity.stack_name());
    }
    Ok(EXIT_SUCCESS)
}
