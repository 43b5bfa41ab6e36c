//! 统一的环境变量管理系统
//!
//! Typed access to the `MHTPACK_*` variables. Command-line flags always take
//! precedence over the values read here.

use std::env;
use std::fmt;

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

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "MHTPACK_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
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

    /// Case-insensitive file name matching
    pub struct CaseInsensitive;
    impl EnvVar<bool> for CaseInsensitive {
        const NAME: &'static str = "MHTPACK_CASE_INSENSITIVE";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str =
            "Match script and link references against file names ignoring case";

        fn parse(value: &str) -> EnvResult<bool> {
            parse_bool(value, Self::NAME)
        }
    }

    /// Encoding used to decode documents before parsing
    pub struct DocumentEncoding;
    impl EnvVar<String> for DocumentEncoding {
        const NAME: &'static str = "MHTPACK_ENCODING";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str =
            "Encoding label used when parsing the source document (default: utf-8)";

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("utf-8".to_string()),
            }
        }

        fn parse(value: &str) -> EnvResult<String> {
            let label = value.trim();
            if encoding_rs::Encoding::for_label_no_replacement(label.as_bytes()).is_some() {
                Ok(label.to_string())
            } else {
                Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Unknown encoding '{}'", value),
                })
            }
        }
    }
}

fn parse_bool(value: &str, var_name: &str) -> EnvResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
        "false" | "0" | "no" | "off" | "disabled" => Ok(false),
        _ => Err(EnvError {
            variable: var_name.to_string(),
            message: format!(
                "Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off, enabled/disabled",
                value
            ),
        }),
    }
}

/// Snapshot of every variable the tool reads
///
/// Values that are set but cannot be parsed fall back to their defaults and
/// are kept in `invalid` so they can be reported once logging is up.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,
    pub no_color: bool,
    pub case_insensitive: bool,
    pub encoding: String,
    pub invalid: Vec<EnvError>,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let mut invalid = Vec::new();

        Self {
            log_level: or_default(core::LogLevel::get(), "warn".to_string(), &mut invalid),
            no_color: or_default(core::NoColor::get(), false, &mut invalid),
            case_insensitive: or_default(core::CaseInsensitive::get(), false, &mut invalid),
            encoding: or_default(core::DocumentEncoding::get(), "utf-8".to_string(), &mut invalid),
            invalid,
        }
    }

    /// Emits a warning for every variable that was ignored
    pub fn report_invalid(&self) {
        for error in &self.invalid {
            tracing::warn!(variable = %error.variable, "{error}; using the default");
        }
    }
}

fn or_default<T>(result: EnvResult<T>, default: T, invalid: &mut Vec<EnvError>) -> T {
    result.unwrap_or_else(|error| {
        invalid.push(error);
        default
    })
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("Environment variables:\n\n");

    for (name, description) in [
        (core::LogLevel::NAME, core::LogLevel::DESCRIPTION),
        (core::NoColor::NAME, core::NoColor::DESCRIPTION),
        (core::CaseInsensitive::NAME, core::CaseInsensitive::DESCRIPTION),
        (core::DocumentEncoding::NAME, core::DocumentEncoding::DESCRIPTION),
    ] {
        docs.push_str(&format!("  {name:<26} {description}\n"));
    }

    docs
}
