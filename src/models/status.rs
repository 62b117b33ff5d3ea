use serde::Serialize;

const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub mcp: McpHealth,
}

#[derive(Debug, Serialize)]
pub struct McpHealth {
    pub enabled: bool,
    pub version: &'static str,
    pub endpoints: McpEndpoints,
}

#[derive(Debug, Serialize)]
pub struct McpEndpoints {
    pub chat: &'static str,
    pub models: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusInfo {
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: [&'static str; 2],
}

pub fn greeting() -> Greeting {
    Greeting {
        message: "Hello, MCP Deploy!",
    }
}

pub fn health() -> HealthStatus {
    HealthStatus {
        status: "healthy",
        version: SERVICE_VERSION,
        mcp: McpHealth {
            enabled: true,
            version: SERVICE_VERSION,
            endpoints: McpEndpoints {
                chat: "/v1/chat/completions",
                models: "/v1/models",
            },
        },
    }
}

pub fn mcp_status() -> StatusInfo {
    StatusInfo {
        status: "running",
        version: SERVICE_VERSION,
        endpoints: ["/mcp/chat", "/mcp/status"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_payload() {
        let value = serde_json::to_value(health()).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "healthy",
                "version": "1.0.0",
                "mcp": {
                    "enabled": true,
                    "version": "1.0.0",
                    "endpoints": {
                        "chat": "/v1/chat/completions",
                        "models": "/v1/models"
                    }
                }
            })
        );
    }

    #[test]
    fn test_mcp_status_payload() {
        let value = serde_json::to_value(mcp_status()).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "running",
                "version": "1.0.0",
                "endpoints": ["/mcp/chat", "/mcp/status"]
            })
        );
    }

    #[test]
    fn test_repeated_calls_are_byte_identical() {
        let a = serde_json::to_vec(&health()).unwrap();
        let b = serde_json::to_vec(&health()).unwrap();
        assert_eq!(a, b);

        let a = serde_json::to_vec(&mcp_status()).unwrap();
        let b = serde_json::to_vec(&mcp_status()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_greeting() {
        let json = serde_json::to_string(&greeting()).unwrap();
        assert_eq!(json, r#"{"message":"Hello, MCP Deploy!"}"#);
    }
}
