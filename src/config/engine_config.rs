// ==========================================
// 防火隔离带规划系统 - 引擎配置
// ==========================================
// 职责: 默认系数表 + 可调策略常量
// 说明: 默认值显式注入引擎入口,测试可直接构造,不依赖全局状态
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::analysis::AnalysisParameters;
use crate::domain::types::{TerrainLevel, VegetationClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// 默认值
// ==========================================
pub mod defaults {
    /// 部分适配阈值（超限占比上限）
    pub const PARTIAL_THRESHOLD: f64 = 0.15;
    /// 部分适配工时惩罚倍率: time × (1 + over × 倍率)
    pub const PARTIAL_PENALTY_MULTIPLIER: f64 = 2.0;
    /// 排序工时容差（小时）
    pub const RANK_TIME_TOLERANCE_HOURS: f64 = 0.1;
    /// 航空器缺省投放长度（米）
    pub const AIRCRAFT_DROP_LENGTH_M: f64 = 100.0;
    /// 航空器缺省周转时间（分钟）
    pub const AIRCRAFT_TURNAROUND_MINUTES: f64 = 15.0;
}

// ==========================================
// FactorTable - 地形/植被系数表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorTable {
    #[serde(default)]
    pub terrain: BTreeMap<TerrainLevel, f64>,

    #[serde(default)]
    pub vegetation: BTreeMap<VegetationClass, f64>,
}

impl Default for FactorTable {
    fn default() -> Self {
        let terrain = BTreeMap::from([
            (TerrainLevel::Easy, 1.0),
            (TerrainLevel::Moderate, 1.3),
            (TerrainLevel::Difficult, 1.7),
            (TerrainLevel::Extreme, 2.2),
        ]);
        let vegetation = BTreeMap::from([
            (VegetationClass::Grassland, 1.0),
            (VegetationClass::LightShrub, 1.1),
            (VegetationClass::MediumScrub, 1.5),
            (VegetationClass::HeavyForest, 2.0),
        ]);
        Self {
            terrain,
            vegetation,
        }
    }
}

impl FactorTable {
    /// 以内置默认表为底,按键覆盖当前表中出现的值
    ///
    /// 配置文件可能只写部分键,加载后需要补齐
    pub fn with_builtin_fallback(self) -> Self {
        let mut table = FactorTable::default();
        table.terrain.extend(self.terrain);
        table.vegetation.extend(self.vegetation);
        table
    }

    /// 合并调用方的系数覆写（按键）
    pub fn merged(&self, overrides: Option<&AnalysisParameters>) -> FactorTable {
        let mut table = self.clone();
        if let Some(params) = overrides {
            table
                .terrain
                .extend(params.terrain_factors.iter().map(|(k, v)| (*k, *v)));
            table
                .vegetation
                .extend(params.vegetation_factors.iter().map(|(k, v)| (*k, *v)));
        }
        table
    }

    pub fn terrain_factor(&self, terrain: TerrainLevel) -> f64 {
        self.terrain.get(&terrain).copied().unwrap_or(1.0)
    }

    pub fn vegetation_factor(&self, vegetation: VegetationClass) -> f64 {
        self.vegetation.get(&vegetation).copied().unwrap_or(1.0)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (level, value) in &self.terrain {
            check_positive(&format!("factors.terrain.{}", level), *value)?;
        }
        for (class, value) in &self.vegetation {
            check_positive(&format!("factors.vegetation.{}", class), *value)?;
        }
        Ok(())
    }
}

// ==========================================
// EngineConfig - 引擎配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub factors: FactorTable,

    /// 超限占比 ≤ 此值时判为部分适配
    pub partial_threshold: f64,

    pub partial_penalty_multiplier: f64,

    pub rank_time_tolerance_hours: f64,

    pub aircraft_default_drop_length_m: f64,

    pub aircraft_default_turnaround_minutes: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            factors: FactorTable::default(),
            partial_threshold: defaults::PARTIAL_THRESHOLD,
            partial_penalty_multiplier: defaults::PARTIAL_PENALTY_MULTIPLIER,
            rank_time_tolerance_hours: defaults::RANK_TIME_TOLERANCE_HOURS,
            aircraft_default_drop_length_m: defaults::AIRCRAFT_DROP_LENGTH_M,
            aircraft_default_turnaround_minutes: defaults::AIRCRAFT_TURNAROUND_MINUTES,
        }
    }
}

impl EngineConfig {
    /// 校验配置取值
    ///
    /// # 规则
    /// - 所有系数为有限正数
    /// - partial_threshold ∈ [0, 1]
    /// - 惩罚倍率、排序容差为有限非负数
    /// - 航空器缺省值为有限正数
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.factors.validate()?;

        if !self.partial_threshold.is_finite() || !(0.0..=1.0).contains(&self.partial_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "partial_threshold".to_string(),
                value: self.partial_threshold.to_string(),
                message: "must be within [0, 1]".to_string(),
            });
        }
        check_non_negative("partial_penalty_multiplier", self.partial_penalty_multiplier)?;
        check_non_negative("rank_time_tolerance_hours", self.rank_time_tolerance_hours)?;
        check_positive(
            "aircraft_default_drop_length_m",
            self.aircraft_default_drop_length_m,
        )?;
        check_positive(
            "aircraft_default_turnaround_minutes",
            self.aircraft_default_turnaround_minutes,
        )?;
        Ok(())
    }
}

fn check_positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: "must be a finite number > 0".to_string(),
        })
    }
}

fn check_non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: "must be a finite number >= 0".to_string(),
        })
    }
}
