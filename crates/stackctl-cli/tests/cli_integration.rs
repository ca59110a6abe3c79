//! CLI subprocess integration tests.
//!
//! These tests invoke the `stackctl` binary as a subprocess against a local
//! mock orchestration service and verify exit codes, stdout content, and
//! JSON output stability.

use std::io::Read;
use std::process::Command;
use std::sync::{Arc, Mutex};

fn stackctl_bin(remote: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stackctl"));
    cmd.arg("--remote").arg(remote);
    cmd
}

struct MockService {
    url: String,
    requests: Arc<Mutex<Vec<(String, String)>>>,
    _handle: std::thread::JoinHandle<()>,
}

impl MockService {
    /// Serve a fixed listing for `GET /stacks`; acknowledge mutations with
    /// canned operation handles and record their method and path.
    fn start(stacks: &[(&str, &str)]) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let url = format!("http://{}", server.server_addr().to_ip().unwrap());
        let listing = serde_json::to_string(
            &stacks
                .iter()
                .map(|(name, status)| serde_json::json!({"name": name, "status": status}))
                .collect::<Vec<_>>(),
        )
        .unwrap();
        let requests: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));

        let captured = Arc::clone(&requests);
        let handle = std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                captured
                    .lock()
                    .unwrap()
                    .push((request.method().to_string(), request.url().to_owned()));

                let response = match request.method().to_string().as_str() {
                    "GET" => tiny_http::Response::from_string(listing.clone()),
                    "POST" => tiny_http::Response::from_string(r#"{"handle":"op-1"}"#),
                    "PUT" => tiny_http::Response::from_string(r#"{"handle":"op-2"}"#),
                    _ => tiny_http::Response::from_string("{}"),
                };
                let _ = request.respond(response);
            }
        });

        MockService {
            url,
            requests,
            _handle: handle,
        }
    }

    fn mutation_requests(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(method, _)| method != "GET")
            .cloned()
            .collect()
    }
}

fn write_template(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("stack.json");
    std::fs::write(&path, r#"{"Resources":{"Db":{"Type":"DBInstance"}}}"#).unwrap();
    path
}

#[test]
fn cli_version_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_stackctl"))
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success(), "stackctl --version must exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stackctl"));
}

#[test]
fn cli_help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_stackctl"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cmd in ["list", "create", "update", "destroy"] {
        assert!(stdout.contains(cmd), "help must list '{cmd}'");
    }
}

#[test]
fn list_prints_live_canonical_names_one_per_line() {
    let service = MockService::start(&[
        ("myapp-prod", "CREATE_COMPLETE"),
        ("myapp-stage", "DELETE_COMPLETE"),
        ("foo-bar-dev", "UPDATE_COMPLETE"),
    ]);
    let output = stackctl_bin(&service.url).arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "myapp-prod\nfoo-bar-dev\n");
}

#[test]
fn list_json_reconstructs_product_and_envname() {
    let service = MockService::start(&[("foo-bar-prod", "CREATE_COMPLETE")]);
    let output = stackctl_bin(&service.url)
        .args(["--json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["product"], "foo-bar");
    assert_eq!(entries[0]["envname"], "prod");
    assert_eq!(entries[0]["stack_name"], "foo-bar-prod");
}

#[test]
fn create_submits_new_stack() {
    let service = MockService::start(&[]);
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path());

    let output = stackctl_bin(&service.url)
        .args(["create", "myapp-stage"])
        .arg(&template)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("created myapp-stage"));

    let mutations = service.mutation_requests();
    assert_eq!(mutations, vec![("POST".to_owned(), "/stacks".to_owned())]);
}

#[test]
fn create_on_existing_stack_is_a_noop() {
    let service = MockService::start(&[("myapp-prod", "CREATE_COMPLETE")]);
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path());

    let output = stackctl_bin(&service.url)
        .args(["create", "myapp-prod"])
        .arg(&template)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("already exists"));
    assert!(service.mutation_requests().is_empty());
}

#[test]
fn update_existing_stack_reports_handle() {
    let service = MockService::start(&[("myapp-prod", "CREATE_COMPLETE")]);
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path());

    let output = stackctl_bin(&service.url)
        .args(["update", "myapp-prod"])
        .arg(&template)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("updated myapp-prod"));
    assert!(stdout.contains("op-2"));
}

#[test]
fn update_missing_stack_exits_not_found() {
    let service = MockService::start(&[]);
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(dir.path());

    let output = stackctl_bin(&service.url)
        .args(["update", "myapp-prod"])
        .arg(&template)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stack does not exist"));
    assert!(service.mutation_requests().is_empty());
}

#[test]
fn destroy_existing_stack_deletes() {
    let service = MockService::start(&[("myapp-prod", "CREATE_COMPLETE")]);
    let output = stackctl_bin(&service.url)
        .args(["destroy", "myapp-prod"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("destroyed myapp-prod"));
    assert_eq!(
        service.mutation_requests(),
        vec![("DELETE".to_owned(), "/stacks/myapp-prod".to_owned())]
    );
}

#[test]
fn destroy_missing_stack_is_a_noop() {
    let service = MockService::start(&[]);
    let output = stackctl_bin(&service.url)
        .args(["destroy", "myapp-prod"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nothing to do"));
    assert!(service.mutation_requests().is_empty());
}

#[test]
fn name_without_separator_exits_name_error() {
    let service = MockService::start(&[]);
    let output = stackctl_bin(&service.url)
        .args(["destroy", "myapp"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid stack name"));
}

#[test]
fn unreachable_service_exits_remote_error() {
    let output = stackctl_bin("http://127.0.0.1:1")
        .arg("list")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn missing_template_file_fails() {
    let service = MockService::start(&[]);
    let output = stackctl_bin(&service.url)
        .args(["create", "myapp-stage", "/nonexistent/stack.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
