//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量访问，命令行参数会覆盖这里读到的值

use std::env;
use std::fmt;

use crate::core::StarImageOptions;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 日志级别
pub struct LogLevel;
impl EnvVar<String> for LogLevel {
    const NAME: &'static str = "STARIMAGE_LOG_LEVEL";
    const DEFAULT: Option<String> = None;
    const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

    fn get() -> EnvResult<String> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok("warn".to_string()),
        }
    }

    fn parse(value: &str) -> EnvResult<String> {
        match value.trim().to_lowercase().as_str() {
            level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(level.to_string()),
            _ => Err(EnvError {
                variable: Self::NAME.to_string(),
                message: format!(
                    "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                    value
                ),
            }),
        }
    }
}

/// 禁用颜色输出
pub struct NoColor;
impl EnvVar<bool> for NoColor {
    const NAME: &'static str = "NO_COLOR";
    const DEFAULT: Option<bool> = Some(false);
    const DESCRIPTION: &'static str = "Disable colored output when set to any value";

    fn parse(value: &str) -> EnvResult<bool> {
        // NO_COLOR 遵循标准：任何值都表示禁用颜色
        Ok(!value.is_empty())
    }
}

/// 请求超时
pub struct Timeout;
impl EnvVar<u64> for Timeout {
    const NAME: &'static str = "STARIMAGE_TIMEOUT";
    const DEFAULT: Option<u64> = Some(0);
    const DESCRIPTION: &'static str =
        "Per-request timeout in seconds (0 keeps the HTTP client default)";

    fn parse(value: &str) -> EnvResult<u64> {
        let seconds: u64 = value.trim().parse().map_err(|_| EnvError {
            variable: Self::NAME.to_string(),
            message: "Must be a valid number of seconds".to_string(),
        })?;

        if seconds > 300 {
            return Err(EnvError {
                variable: Self::NAME.to_string(),
                message: "Timeout too long (max 300 seconds)".to_string(),
            });
        }

        Ok(seconds)
    }
}

/// User-Agent
pub struct UserAgent;
impl EnvVar<String> for UserAgent {
    const NAME: &'static str = "STARIMAGE_USER_AGENT";
    const DEFAULT: Option<String> = None;
    const DESCRIPTION: &'static str = "User-Agent header sent with every request";

    fn parse(value: &str) -> EnvResult<String> {
        let user_agent = value.trim();
        if user_agent.is_empty() {
            return Err(EnvError {
                variable: Self::NAME.to_string(),
                message: "User agent cannot be empty".to_string(),
            });
        }
        Ok(user_agent.to_string())
    }
}

/// 接受无效的 TLS 证书
pub struct Insecure;
impl EnvVar<bool> for Insecure {
    const NAME: &'static str = "STARIMAGE_INSECURE";
    const DEFAULT: Option<bool> = Some(false);
    const DESCRIPTION: &'static str = "Accept invalid TLS certificates";

    fn parse(value: &str) -> EnvResult<bool> {
        parse_bool(value, Self::NAME)
    }
}

/// 辅助函数
fn parse_bool(value: &str, var_name: &str) -> EnvResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(EnvError {
            variable: var_name.to_string(),
            message: format!(
                "Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off",
                value
            ),
        }),
    }
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,
    pub no_color: bool,
    pub timeout: u64,
    pub user_agent: Option<String>,
    pub insecure: bool,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: LogLevel::get()?,
            no_color: NoColor::get()?,
            timeout: Timeout::get()?,
            user_agent: match env::var(UserAgent::NAME) {
                Ok(value) => Some(UserAgent::parse(&value)?),
                Err(_) => None,
            },
            insecure: Insecure::get()?,
        })
    }

    /// 转换为处理选项
    pub fn to_options(&self) -> StarImageOptions {
        StarImageOptions {
            insecure: self.insecure,
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            ..Default::default()
        }
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");

    for (name, description) in [
        (LogLevel::NAME, LogLevel::DESCRIPTION),
        (NoColor::NAME, NoColor::DESCRIPTION),
        (Timeout::NAME, Timeout::DESCRIPTION),
        (UserAgent::NAME, UserAgent::DESCRIPTION),
        (Insecure::NAME, Insecure::DESCRIPTION),
    ] {
        docs.push_str(&format!("- `{}`: {}\n", name, description));
    }

    docs
}
