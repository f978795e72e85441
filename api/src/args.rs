use clap::Parser;
use umami_core::domain::common::{DatabaseConfig, LlmConfig, UmamiConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "umami-api", about = "AI recipe assistant with cuisine stats")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api".
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(
        id = "db_host",
        long = "db-host",
        env = "DATABASE_HOST",
        default_value = "127.0.0.1"
    )]
    pub host: String,

    #[arg(
        id = "db_port",
        long = "db-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(
        id = "db_name",
        long = "db-name",
        env = "DATABASE_NAME",
        default_value = "recipes"
    )]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Startup fails fast when the key is absent.
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY")]
    pub openai_api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub openai_model: String,
}

impl From<Args> for UmamiConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            llm: LlmConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_model: args.llm.openai_model,
            },
        }
    }
}
