// ==========================================
// 防火隔离带规划系统 - 导入层错误类型
// ==========================================
// 职责: 装备目录文件的读取 / 解析 / 字段映射错误
// 说明: 行号从 1 开始，按数据行计（不含表头）
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 目录文件 =====
    #[error("装备目录文件不存在: {0}")]
    FileNotFound(String),

    #[error("装备目录格式不支持: {0}（仅支持 .csv/.xlsx/.xls/.json）")]
    UnsupportedFormat(String),

    #[error("装备目录读取失败: {0}")]
    FileReadError(String),

    // ===== 解析 =====
    #[error("Excel 目录解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 目录解析失败: {0}")]
    CsvParseError(String),

    #[error("JSON 目录解析失败: {0}")]
    JsonParseError(String),

    // ===== 行级映射 =====
    #[error("第 {row} 行装备无法映射: {message}")]
    FieldMappingError { row: usize, message: String },

    #[error("第 {row} 行字段 {field} 取值非法: {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },
}

impl ImportError {
    /// 出错的数据行（文件级错误返回 None）
    pub fn row(&self) -> Option<usize> {
        match self {
            ImportError::FieldMappingError { row, .. }
            | ImportError::TypeConversionError { row, .. } => Some(*row),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(err.to_string()),
            _ => ImportError::FileReadError(err.to_string()),
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;
