//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_lmsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum LMSystemError {
            $($variant(String),)*
        }

        impl LMSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(LMSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(LMSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(LMSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl LMSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        LMSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_lmsystem_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Conflict("E008", "Resource Conflict"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
}

impl LMSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为唯一约束冲突
    pub fn is_conflict(&self) -> bool {
        matches!(self, LMSystemError::Conflict(_))
    }
}

impl fmt::Display for LMSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LMSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LMSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        // 唯一索引冲突需要单独上报，服务层据此返回 409
        if let Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
            return LMSystemError::Conflict(msg);
        }
        LMSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LMSystemError {
    fn from(err: serde_json::Error) -> Self {
        LMSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LMSystemError {
    fn from(err: chrono::ParseError) -> Self {
        LMSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LMSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LMSystemError::cache_connection("test").code(), "E001");
        assert_eq!(LMSystemError::database_config("test").code(), "E003");
        assert_eq!(LMSystemError::validation("test").code(), "E006");
        assert_eq!(LMSystemError::conflict("test").code(), "E008");
        assert_eq!(LMSystemError::authentication("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            LMSystemError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            LMSystemError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            LMSystemError::conflict("test").error_type(),
            "Resource Conflict"
        );
    }

    #[test]
    fn test_error_message() {
        let err = LMSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_is_conflict() {
        assert!(LMSystemError::conflict("duplicate enrollment").is_conflict());
        assert!(!LMSystemError::not_found("no such course").is_conflict());
    }

    #[test]
    fn test_format_simple() {
        let err = LMSystemError::not_found("Course 42 not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Course 42 not found"));
    }
}
