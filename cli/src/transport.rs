//! ureq-backed `Transport`.

use student_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Blocking HTTP transport. Status codes are left for the core to interpret.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, body) => {
                let mut request = self.agent.post(&req.path);
                for (name, value) in &req.headers {
                    request = request.header(name.as_str(), value.as_str());
                }
                request.send(body.unwrap_or_default().as_bytes())
            }
            (HttpMethod::Put, body) => {
                let mut request = self.agent.put(&req.path);
                for (name, value) in &req.headers {
                    request = request.header(name.as_str(), value.as_str());
                }
                request.send(body.unwrap_or_default().as_bytes())
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
