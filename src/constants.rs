/// Prefix for every log line emitted by the service.
pub const API_NAME: &str = "[carzone]";

pub const DEFAULT_SERVER_PORT: u16 = 8081;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_CONNECT_RETRIES: u32 = 10;
