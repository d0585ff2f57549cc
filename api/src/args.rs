use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser, ValueEnum};
use nutriwise_core::domain::common::{LLMConfig, LLMProvider, NutriwiseConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriwise-api", version, about = "Supplement recommendation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long, env = "TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    None,
    Gemini,
    Openai,
}

impl From<LlmProviderArg> for Option<LLMProvider> {
    fn from(value: LlmProviderArg) -> Self {
        match value {
            LlmProviderArg::None => None,
            LlmProviderArg::Gemini => Some(LLMProvider::Gemini),
            LlmProviderArg::Openai => Some(LLMProvider::OpenAI),
        }
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value_t = LlmProviderArg::None)]
    pub provider: LlmProviderArg,

    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "llm-model", env = "LLM_MODEL")]
    pub model: Option<String>,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long = "llm-timeout-ms", env = "LLM_TIMEOUT_MS", default_value_t = 15_000)]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutriwiseConfig {
    fn from(args: Args) -> Self {
        NutriwiseConfig {
            llm: LLMConfig {
                provider: args.llm.provider.into(),
                api_key: args.llm.api_key,
                model: args.llm.model,
                base_url: args.llm.base_url,
                timeout: Duration::from_millis(args.llm.timeout_ms),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["nutriwise-api"]).unwrap();
        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "/api");
        assert_eq!(args.llm.provider, LlmProviderArg::None);

        let config = NutriwiseConfig::from(args);
        assert!(config.llm.provider.is_none());
        assert_eq!(config.llm.timeout, Duration::from_millis(15_000));
    }

    #[test]
    fn test_llm_flags() {
        let args = Args::try_parse_from([
            "nutriwise-api",
            "--llm-provider",
            "openai",
            "--llm-api-key",
            "sk-test",
            "--llm-timeout-ms",
            "2500",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = NutriwiseConfig::from(args);
        assert_eq!(config.llm.provider, Some(LLMProvider::OpenAI));
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_tls_flags_come_in_pairs() {
        assert!(Args::try_parse_from(["nutriwise-api", "--tls-cert", "cert.pem"]).is_err());
    }
}
