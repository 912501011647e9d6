// ==========================================
// 防火隔离带规划系统 - 分析 API
// ==========================================
// 职责: 请求形状校验 → 调用分析引擎 → 返回分析结果
// 红线: 请求形状错误在调用引擎之前拒绝；引擎内的装备错误内嵌在结果中
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::analysis::{AnalysisParameters, AnalysisRequest, AnalysisResult, RouteInput};
use crate::domain::equipment::EquipmentSpec;
use crate::engine::AnalysisEngine;
use crate::importer::EquipmentCatalogueImporter;
use std::path::Path;
use std::sync::Arc;
use tracing::{instrument, warn};

// ==========================================
// AnalysisApi - 分析接口
// ==========================================
pub struct AnalysisApi {
    engine: Arc<AnalysisEngine>,
}

impl AnalysisApi {
    pub fn new(engine: Arc<AnalysisEngine>) -> Self {
        Self { engine }
    }

    /// 按配置文件构建分析接口
    ///
    /// # 返回
    /// - Err(ApiError::ConfigError): 配置读取 / 解析 / 取值非法（500 类）
    pub fn from_config(manager: &ConfigManager) -> ApiResult<Self> {
        let config = manager.load()?;
        Ok(Self::new(Arc::new(AnalysisEngine::new(config))))
    }

    pub fn engine(&self) -> &AnalysisEngine {
        &self.engine
    }

    /// 导入装备目录，导入失败按调用方错误（400 类）返回
    pub fn load_catalogue(path: &Path) -> ApiResult<Vec<EquipmentSpec>> {
        Ok(EquipmentCatalogueImporter::import_file(path)?)
    }

    /// 执行分析
    ///
    /// # 参数
    /// - request: 外部请求
    /// - equipment: 装备目录（由调用方从目录存储中取得）
    ///
    /// # 返回
    /// - Ok(AnalysisResult): 分析结果
    /// - Err(ApiError): 请求形状错误（400 类）
    #[instrument(skip_all, fields(equipment_count = equipment.len()))]
    pub fn run_analysis(
        &self,
        request: AnalysisRequest,
        equipment: &[EquipmentSpec],
    ) -> ApiResult<AnalysisResult> {
        let (route, parameters) = Self::validate_request(request).map_err(|e| {
            warn!(error = %e, "分析请求被拒绝");
            e
        })?;

        Ok(self.engine.analyze(&route, equipment, parameters.as_ref()))
    }

    /// 请求形状校验
    ///
    /// # 规则
    /// - distance 存在、有限且 > 0
    /// - trackProfile / vegetationProfile 存在
    /// - trackProfile.totalDistance 有限且 ≥ 0，maxSlope 有限
    /// - 系数覆写均为有限正数
    pub fn validate_request(
        request: AnalysisRequest,
    ) -> ApiResult<(RouteInput, Option<AnalysisParameters>)> {
        let distance = request
            .distance
            .ok_or_else(|| ApiError::MissingField("distance".to_string()))?;
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "distance must be greater than 0, got {}",
                distance
            )));
        }

        let track_profile = request
            .track_profile
            .ok_or_else(|| ApiError::MissingField("trackProfile".to_string()))?;
        let vegetation_profile = request
            .vegetation_profile
            .ok_or_else(|| ApiError::MissingField("vegetationProfile".to_string()))?;

        if !track_profile.total_distance.is_finite() || track_profile.total_distance < 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "trackProfile.totalDistance must be >= 0, got {}",
                track_profile.total_distance
            )));
        }
        if !track_profile.max_slope.is_finite() {
            return Err(ApiError::InvalidInput(
                "trackProfile.maxSlope must be a finite number".to_string(),
            ));
        }

        if let Some(params) = &request.parameters {
            Self::validate_parameters(params)?;
        }

        Ok((
            RouteInput {
                distance,
                track_profile,
                vegetation_profile,
            },
            request.parameters,
        ))
    }

    fn validate_parameters(params: &AnalysisParameters) -> ApiResult<()> {
        let terrain = params
            .terrain_factors
            .iter()
            .map(|(k, v)| (format!("terrainFactors.{}", k), *v));
        let vegetation = params
            .vegetation_factors
            .iter()
            .map(|(k, v)| (format!("vegetationFactors.{}", k), *v));

        for (key, value) in terrain.chain(vegetation) {
            if !value.is_finite() || value <= 0.0 {
                return Err(ApiError::InvalidInput(format!(
                    "{} must be a finite number > 0, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }
}
