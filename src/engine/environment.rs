// ==========================================
// 防火隔离带规划系统 - 环境分级
// ==========================================
// 职责: 由最大坡度推导地形等级，并与主导植被组成本次分析的统一环境
// 红线: 同一次分析中所有装备使用同一对 (地形, 植被) 及其系数
// ==========================================

use crate::config::FactorTable;
use crate::domain::analysis::EffectiveEnvironment;
use crate::domain::profile::{TrackProfile, VegetationProfile};
use crate::domain::types::TerrainLevel;

pub struct EnvironmentClassifier;

impl EnvironmentClassifier {
    /// 由最大坡度（度）推导地形等级
    ///
    /// 上界均为开区间: <10 easy, <20 moderate, <30 difficult, 其余 extreme
    pub fn derive_terrain_from_slope(max_slope: f64) -> TerrainLevel {
        if max_slope < 10.0 {
            TerrainLevel::Easy
        } else if max_slope < 20.0 {
            TerrainLevel::Moderate
        } else if max_slope < 30.0 {
            TerrainLevel::Difficult
        } else {
            TerrainLevel::Extreme
        }
    }

    /// 解析本次分析的统一环境
    pub fn resolve(
        track: &TrackProfile,
        vegetation: &VegetationProfile,
        factors: &FactorTable,
    ) -> EffectiveEnvironment {
        let terrain = Self::derive_terrain_from_slope(track.max_slope);
        let vegetation = vegetation.predominant_vegetation;

        EffectiveEnvironment {
            terrain,
            vegetation,
            terrain_factor: factors.terrain_factor(terrain),
            vegetation_factor: factors.vegetation_factor(vegetation),
        }
    }
}
