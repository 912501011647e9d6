// ==========================================
// 防火隔离带规划系统 - 路线剖面
// ==========================================
// 职责: 外部采样工具的聚合输出（坡度分布 / 主导植被）
// 红线: 引擎只消费聚合结果，不关心采样过程
// ==========================================

use crate::domain::types::VegetationClass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 路线坡度剖面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackProfile {
    /// 路线总长（米）
    #[serde(default)]
    pub total_distance: f64,

    /// 最大坡度（度），必填: 地形等级由它推导
    pub max_slope: f64,

    /// 坡度分档名 → 该分档内的路线长度（米）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_distribution: Option<BTreeMap<String, f64>>,
}

impl TrackProfile {
    /// 是否带有可用的坡度分布明细
    pub fn has_slope_detail(&self) -> bool {
        self.slope_distribution
            .as_ref()
            .is_some_and(|d| !d.is_empty())
    }
}

/// 路线植被剖面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VegetationProfile {
    pub predominant_vegetation: VegetationClass,

    /// 各植被类别长度（米），当前仅透传
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<BTreeMap<VegetationClass, f64>>,
}

impl VegetationProfile {
    pub fn new(predominant_vegetation: VegetationClass) -> Self {
        Self {
            predominant_vegetation,
            distribution: None,
        }
    }
}
