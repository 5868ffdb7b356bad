use clap::Parser;
use nutrisense_core::domain::common::{NutrisenseConfig, RandomnessConfig, SessionConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrisense-api", version, about = "NutriSense personalization API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub randomness: RandomnessArgs,

    #[command(flatten)]
    pub sessions: SessionArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Fallback filter when `RUST_LOG` is unset.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RandomnessArgs {
    /// Seeds the mock scanner and chat assistant for reproducible runs.
    #[arg(long = "rng-seed", env = "RNG_SEED")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SessionArgs {
    /// Sessions kept in memory; the least recently written is evicted beyond this.
    #[arg(long = "max-sessions", env = "MAX_SESSIONS", default_value_t = 10_000)]
    pub max_sessions: usize,

    #[arg(long = "max-chat-messages", env = "MAX_CHAT_MESSAGES", default_value_t = 200)]
    pub max_chat_messages: usize,
}

impl From<Args> for NutrisenseConfig {
    fn from(args: Args) -> Self {
        NutrisenseConfig {
            randomness: RandomnessConfig {
                seed: args.randomness.seed,
            },
            sessions: SessionConfig {
                max_sessions: args.sessions.max_sessions,
                max_chat_messages: args.sessions.max_chat_messages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "nutrisense-api",
            "--server-port",
            "8080",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--rng-seed",
            "42",
            "--max-sessions",
            "50",
        ])
        .unwrap();

        assert_eq!(args.server.port, 8080);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = NutrisenseConfig::from(args);
        assert_eq!(config.randomness.seed, Some(42));
        assert_eq!(config.sessions.max_sessions, 50);
        assert_eq!(config.sessions.max_chat_messages, 200);
    }
}
