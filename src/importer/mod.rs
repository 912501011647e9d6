// ==========================================
// 防火隔离带规划系统 - 导入层
// ==========================================
// 职责: 外部装备目录导入,生成 EquipmentSpec
// 支持: CSV, Excel, JSON
// ==========================================

// 模块声明
pub mod catalogue_importer;
pub mod error;
pub mod file_parser;

// 重导出核心类型
pub use catalogue_importer::EquipmentCatalogueImporter;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRecord, UniversalFileParser};
