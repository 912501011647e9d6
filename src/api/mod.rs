// ==========================================
// 防火隔离带规划系统 - API 层
// ==========================================
// 职责: 对外业务接口（请求形状校验 + 引擎调用）
// 说明: HTTP / CLI 等外层只需要包装 AnalysisApi
// ==========================================

pub mod analysis_api;
pub mod error;

pub use analysis_api::AnalysisApi;
pub use error::{ApiError, ApiResult};
