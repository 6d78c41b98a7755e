use crate::{env_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to Ipv4Addr::UNSPECIFIED (0.0.0.0 - all interfaces)
    /// - PORT: defaults to 8080
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "8080")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}

/// Bind configuration for gRPC servers
#[derive(Clone, Debug)]
pub struct GrpcConfig {
    pub host: String,
    pub port: u16,
}

impl GrpcConfig {
    /// Get the bind address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for GrpcConfig {
    /// Reads from environment variables with sensible defaults:
    /// - GRPC_HOST: defaults to "[::1]"
    /// - GRPC_PORT: defaults to 50051
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("GRPC_HOST", "[::1]");
        let port = env_or_default("GRPC_PORT", "50051")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "GRPC_PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self { host, port })
    }
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            host: "[::1]".to_string(),
            port: 50051,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars([("HOST", None::<&str>), ("PORT", None::<&str>)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_server_config_from_env_with_custom_values() {
        temp_env::with_vars([("HOST", Some("127.0.0.1")), ("PORT", Some("3000"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 3000);
            assert_eq!(config.address(), "127.0.0.1:3000");
        });
    }

    #[test]
    fn test_server_config_from_env_invalid_port() {
        temp_env::with_var("PORT", Some("not_a_number"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn test_grpc_config_from_env_with_defaults() {
        temp_env::with_vars([("GRPC_HOST", None::<&str>), ("GRPC_PORT", None::<&str>)], || {
            let config = GrpcConfig::from_env().unwrap();
            assert_eq!(config.address(), "[::1]:50051");
        });
    }

    #[test]
    fn test_grpc_config_from_env_with_custom_values() {
        temp_env::with_vars(
            [("GRPC_HOST", Some("0.0.0.0")), ("GRPC_PORT", Some("9090"))],
            || {
                let config = GrpcConfig::from_env().unwrap();
                assert_eq!(config.address(), "0.0.0.0:9090");
            },
        );
    }

    #[test]
    fn test_grpc_config_from_env_port_out_of_range() {
        temp_env::with_var("GRPC_PORT", Some("99999"), || {
            let err = GrpcConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }
}
