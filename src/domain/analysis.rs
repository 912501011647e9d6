// ==========================================
// 防火隔离带规划系统 - 分析请求与结果
// ==========================================
// 职责: 分析请求（线路 + 剖面 + 参数覆写）、单装备计算结果、整体分析结果
// 红线: 所有结果都必须带可解释的 note / validation_errors
// ==========================================

use crate::domain::equipment::EquipmentSpec;
use crate::domain::profile::{TrackProfile, VegetationProfile};
use crate::domain::types::{CompatibilityLevel, EquipmentType, TerrainLevel, VegetationClass};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// 时间单位（固定为小时）
pub const TIME_UNIT_HOURS: &str = "hours";

// ==========================================
// AnalysisParameters - 系数覆写
// ==========================================
/// 调用方提供的地形/植被系数覆写，按键合并到默认系数表上
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisParameters {
    #[serde(default)]
    pub terrain_factors: BTreeMap<TerrainLevel, f64>,

    #[serde(default)]
    pub vegetation_factors: BTreeMap<VegetationClass, f64>,
}

impl AnalysisParameters {
    pub fn is_empty(&self) -> bool {
        self.terrain_factors.is_empty() && self.vegetation_factors.is_empty()
    }
}

// ==========================================
// AnalysisRequest - 外部请求（未校验）
// ==========================================
// 各字段保持 Option，由 API 层负责请求形状校验
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// 施工距离（米），必须 > 0
    #[serde(default)]
    pub distance: Option<f64>,

    #[serde(default)]
    pub track_profile: Option<TrackProfile>,

    #[serde(default)]
    pub vegetation_profile: Option<VegetationProfile>,

    #[serde(default)]
    pub parameters: Option<AnalysisParameters>,
}

// ==========================================
// RouteInput - 已通过形状校验的线路输入
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInput {
    pub distance: f64,
    pub track_profile: TrackProfile,
    pub vegetation_profile: VegetationProfile,
}

// ==========================================
// EffectiveEnvironment - 本次分析统一使用的环境
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveEnvironment {
    pub terrain: TerrainLevel,
    pub vegetation: VegetationClass,
    pub terrain_factor: f64,
    pub vegetation_factor: f64,
}

impl EffectiveEnvironment {
    /// 地形系数 × 植被系数
    pub fn combined_factor(&self) -> f64 {
        self.terrain_factor * self.vegetation_factor
    }
}

// ==========================================
// CalculationResult - 单装备计算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub id: String,
    pub name: String,

    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,

    /// 预计工时（小时）
    pub time: f64,
    pub cost: f64,
    pub compatible: bool,
    pub compatibility_level: CompatibilityLevel,
    pub unit: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_compatible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_slope_exceeded: Option<f64>,

    /// 投放次数（仅航空器）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drops: Option<u64>,

    /// 超限路段占比（0~1）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_limit_percent: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_errors: Vec<String>,
}

impl CalculationResult {
    /// 创建空白结果（不适配、零工时、零成本），由引擎逐项填充
    pub fn for_spec(spec: &EquipmentSpec) -> Self {
        Self {
            id: spec.id.clone(),
            name: spec.name.clone(),
            equipment_type: spec.equipment_type(),
            time: 0.0,
            cost: 0.0,
            compatible: false,
            compatibility_level: CompatibilityLevel::Incompatible,
            unit: TIME_UNIT_HOURS.to_string(),
            slope_compatible: None,
            max_slope_exceeded: None,
            drops: None,
            over_limit_percent: None,
            note: None,
            validation_errors: Vec::new(),
        }
    }

    /// 配置非法的装备: 零工时、零成本、不适配，并携带校验错误
    pub fn invalid_configuration(spec: &EquipmentSpec, errors: Vec<String>) -> Self {
        Self {
            note: Some("Configuration invalid".to_string()),
            validation_errors: errors,
            ..Self::for_spec(spec)
        }
    }
}

// ==========================================
// AnalysisResult - 整体分析结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub analysis_id: Uuid,
    pub timestamp: DateTime<Utc>,

    /// 已排序的计算结果
    pub results: Vec<CalculationResult>,

    pub equipment_count: usize,
    pub compatible_count: usize,

    /// 排序后第一个可用装备
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_id: Option<String>,

    /// 汇总的配置错误（"<名称>: <错误1>; <错误2>"）
    pub validation_errors: Vec<String>,

    pub effective: EffectiveEnvironment,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetation_distribution: Option<BTreeMap<VegetationClass, f64>>,
}
