use super::{json_pretty, EXIT_SUCCESS};
use stackctl_core::{DestroyOutcome, StackController};
use stackctl_remote::StackService;
use stackctl_schema::StackIdentity;

pub fn run<S: StackService>(
    controller: &StackController<S>,
    stack_name: &str,
    json: bool,
) -> Result<u8, String> {
    let identity =
        StackIdentity::parse(stack_name).map_err(|e| format!("invalid stack name: {e}"))?;

    let outcome = controller.destroy(&identity).map_err(|e| e.to_string())?;

    if json {
        let payload = serde_json::json!({
            "stack_name": identity.stack_name(),
            "deleted": outcome == DestroyOutcome::Deleted,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        match outcome {
            DestroyOutcome::Deleted => println!("destroyed {}", identity.stack_name()),
            DestroyOutcome::AlreadyAbsent => {
                println!("{} does not exist, nothing to do", identity.stack_name());
            }
        }
    }
    Ok(EXIT_SUCCESS)
}
