use super::{json_pretty, EXIT_SUCCESS};
use serde::Serialize;
use stackctl_core::StackController;
use stackctl_remote::StackService;

#[derive(Serialize)]
struct ListEntry {
    product: String,
    envname: String,
    stack_name: String,
}

pub fn run<S: StackService>(controller: &StackController<S>, json: bool) -> Result<u8, String> {
    let mut entries = Vec::new();
    for identity in controller.list_all().map_err(|e| e.to_string())? {
        let identity = identity.map_err(|e| format!("invalid stack name: {e}"))?;
        entries.push(ListEntry {
            product: identity.product().to_owned(),
            envname: identity.envname().to_owned(),
            stack_name: identity.stack_name().into_inner(),
        });
    }

    if json {
        println!("{}", json_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}", entry.stack_name);
        }
    }
    Ok(EXIT_SUCCESS)
}
