// ==========================================
// 防火隔离带规划系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，区分请求形状错误（客户端）与内部错误
// 说明: 单个装备的配置错误不在此列，它们内嵌在分析结果中
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求形状错误（客户端）
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("缺少必填字段: {0}")]
    MissingField(String),

    #[error("装备目录导入失败: {0}")]
    ImportError(String),

    // ==========================================
    // 服务端错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// 是否为调用方请求错误
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidInput(_) | ApiError::MissingField(_) | ApiError::ImportError(_)
        )
    }

    /// 对应的 HTTP 状态码
    pub fn http_status(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert_eq!(ApiError::InvalidInput("distance".into()).http_status(), 400);
        assert_eq!(ApiError::MissingField("trackProfile".into()).http_status(), 400);
        assert_eq!(ApiError::ConfigError("boom".into()).http_status(), 500);
    }

    #[test]
    fn test_import_error_conversion() {
        let api_err: ApiError = ImportError::FileNotFound("equipment.csv".to_string()).into();
        match &api_err {
            ApiError::ImportError(msg) => assert!(msg.contains("equipment.csv")),
            other => panic!("Expected ImportError, got {:?}", other),
        }
        assert!(api_err.is_client_error());
    }

    #[test]
    fn test_config_error_conversion() {
        let api_err: ApiError = ConfigError::InvalidValue {
            key: "partial_threshold".to_string(),
            value: "2".to_string(),
            message: "must be within [0, 1]".to_string(),
        }
        .into();
        assert!(matches!(api_err, ApiError::ConfigError(_)));
        assert_eq!(api_err.http_status(), 500);
    }
}
