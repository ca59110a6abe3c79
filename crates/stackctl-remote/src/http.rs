use crate::{RemoteError, ServiceConfig, StackService};
use serde::{Deserialize, Serialize};
use stackctl_schema::{OperationId, StackName, StackSummary};
use std::collections::BTreeMap;
use std::io::Read;

/// HTTP-based orchestration service client.
///
/// Expects a simple REST API:
/// - `GET    /stacks`         — full stack listing (JSON array of `{name, status}`)
/// - `POST   /stacks`         — create a stack (`{name, template, tags}` → `{handle}`)
/// - `PUT    /stacks/<name>`  — update a stack (`{template, tags}` → `{handle}`)
/// - `DELETE /stacks/<name>`  — delete a stack
pub struct HttpService {
    config: ServiceConfig,
    agent: ureq::Agent,
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    name: &'a str,
    template: &'a str,
    tags: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
struct UpdateRequest<'a> {
    template: &'a str,
    tags: &'a BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct OperationResponse {
    handle: String,
}

impl HttpService {
    pub fn new(config: ServiceConfig) -> Self {
        let agent = ureq::Agent::new_with_defaults();
        Self { config, agent }
    }

    fn stacks_url(&self) -> String {
        format!("{}/stacks", self.config.url)
    }

    fn stack_url(&self, name: &StackName) -> String {
        format!("{}/stacks/{name}", self.config.url)
    }

    fn send_body(
        &self,
        req: ureq::RequestBuilder<ureq::typestate::WithBody>,
        url: &str,
        body: &impl Serialize,
    ) -> Result<Vec<u8>, RemoteError> {
        let mut req = req
            .header("Content-Type", "application/json")
            .header("X-Stackctl-Protocol", &crate::PROTOCOL_VERSION.to_string());
        if let Some(ref token) = self.config.auth_token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let data =
            serde_json::to_vec(body).map_err(|e| RemoteError::Serialization(e.to_string()))?;
        let resp = match req.send(data.as_slice()) {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(404)) => {
                return Err(RemoteError::NotFound(url.to_owned()));
            }
            Err(ureq::Error::StatusCode(code)) => {
                return Err(RemoteError::Http(format!("HTTP {code} for {url}")));
            }
            Err(e) => {
                return Err(RemoteError::Http(e.to_string()));
            }
        };
        read_body(resp)
    }

    fn do_get(&self, url: &str) -> Result<Vec<u8>, RemoteError> {
        let mut req = self
            .agent
            .get(url)
            .header("X-Stackctl-Protocol", &crate::PROTOCOL_VERSION.to_string());
        if let Some(ref token) = self.config.auth_token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = match req.call() {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(404)) => {
                return Err(RemoteError::NotFound(url.to_owned()));
            }
            Err(ureq::Error::StatusCode(code)) => {
                return Err(RemoteError::Http(format!("HTTP {code} for {url}")));
            }
            Err(e) => {
                return Err(RemoteError::Http(e.to_string()));
            }
        };
        read_body(resp)
    }

    fn parse_handle(&self, body: &[u8]) -> Result<OperationId, RemoteError> {
        let resp: OperationResponse = serde_json::from_slice(body)
            .map_err(|e| RemoteError::Serialization(e.to_string()))?;
        Ok(OperationId::new(resp.handle))
    }
}

fn read_body(resp: ureq::http::Response<ureq::Body>) -> Result<Vec<u8>, RemoteError> {
    let mut reader = resp.into_body().into_reader();
    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .map_err(|e| RemoteError::Http(e.to_string()))?;
    Ok(body)
}

impl StackService for HttpService {
    fn list_stacks(&self) -> Result<Vec<StackSummary>, RemoteError> {
        let url = self.stacks_url();
        tracing::debug!("GET {url}");
        let body = self.do_get(&url)?;
        serde_json::from_slice(&body).map_err(|e| RemoteError::Serialization(e.to_string()))
    }

    fn create_stack(
        &self,
        name: &StackName,
        template_body: &str,
        tags: &BTreeMap<String, String>,
    ) -> Result<OperationId, RemoteError> {
        let url = self.stacks_url();
        tracing::debug!("POST {url} ({name})");
        let body = self.send_body(
            self.agent.post(&url),
            &url,
            &CreateRequest {
                name: name.as_str(),
                template: template_body,
                tags,
            },
        )?;
        self.parse_handle(&body)
    }

    fn update_stack(
        &self,
        name: &StackName,
        template_body: &str,
        tags: &BTreeMap<String, String>,
    ) -> Result<OperationId, RemoteError> {
        let url = self.stack_url(name);
        tracing::debug!("PUT {url}");
        let body = self.send_body(
            self.agent.put(&url),
            &url,
            &UpdateRequest {
                template: template_body,
                tags,
            },
        )?;
        self.parse_handle(&body)
    }

    fn delete_stack(&self, name: &StackName) -> Result<(), RemoteError> {
        let url = self.stack_url(name);
        tracing::debug!("DELETE {url}");
        let mut req = self
            .agent
            .delete(&url)
            .header("X-Stackctl-Protocol", &crate::PROTOCOL_VERSION.to_string());
        if let Some(ref token) = self.config.auth_token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        match req.call() {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(404)) => Err(RemoteError::NotFound(url)),
            Err(ureq::Error::StatusCode(code)) => {
                Err(RemoteError::Http(format!("HTTP {code} for {url}")))
            }
            Err(e) => Err(RemoteError::Http(e.to_string())),
        }
    }
}
