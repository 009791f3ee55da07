//! Server Configuration

/// Environment-driven settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub seed_demo_content: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("ATRIUM_BIND").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            seed_demo_content: std::env::var("ATRIUM_SEED")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }
}
