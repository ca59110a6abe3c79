pub mod completions;
pub mod create;
pub mod destroy;
pub mod list;
pub mod update;

use stackctl_core::StackController;
use stackctl_remote::{HttpService, ServiceConfig};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NAME_ERROR: u8 = 2;
pub const EXIT_NOT_FOUND: u8 = 3;
pub const EXIT_REMOTE_ERROR: u8 = 4;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn make_controller(
    remote_url: Option<&str>,
) -> Result<StackController<HttpService>, String> {
    let config = if let Some(url) = remote_url {
        ServiceConfig::new(url)
    } else {
        ServiceConfig::load_default().map_err(|e| format!("remote config error: {e}"))?
    };
    Ok(StackController::new(HttpService::new(config)))
}
