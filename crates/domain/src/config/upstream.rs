use serde::Deserialize;

/// Primary upstream queried by the forward stage
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_server")]
    pub server: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
        }
    }
}

fn default_server() -> String {
    "127.0.0.1:53".to_string()
}
