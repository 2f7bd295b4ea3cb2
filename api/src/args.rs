use clap::Parser;
use larder_core::domain::common::{DatabaseConfig, LarderConfig, LlmConfig, PushConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "larder-api", about = "Larder HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub push: PushArgs,

    #[command(flatten)]
    pub notifier: NotifierArgs,

    /// Emit logs as JSON.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "APP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "APP_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api/v1".
    #[arg(long = "root-path", env = "APP_ROOT_PATH", default_value = "")]
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
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "larder")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-2.0-flash"
    )]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PushArgs {
    #[arg(
        long = "push-gateway-url",
        env = "PUSH_GATEWAY_URL",
        default_value = "http://localhost:8030/push"
    )]
    pub gateway_url: String,

    #[arg(long = "push-api-token", env = "PUSH_API_TOKEN", default_value = "")]
    pub api_token: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct NotifierArgs {
    /// Disable the periodic expiry scan entirely.
    #[arg(long = "notifier-disabled", env = "NOTIFIER_DISABLED", default_value_t = false)]
    pub disabled: bool,

    #[arg(
        long = "notifier-interval-hours",
        env = "NOTIFIER_INTERVAL_HOURS",
        default_value_t = 24
    )]
    pub interval_hours: u64,
}

impl From<Args> for LarderConfig {
    fn from(args: Args) -> Self {
        LarderConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            push: PushConfig {
                gateway_url: args.push.gateway_url,
                api_token: args.push.api_token,
            },
        }
    }
}
