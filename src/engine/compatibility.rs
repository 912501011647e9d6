// ==========================================
// 防火隔离带规划系统 - 装备适配判定
// ==========================================
// 职责: 环境粗判（地形等级 + 植被）、机械超限路段细判、机械坡度上限判定
// 红线: 无状态、无副作用；每个判定都必须带可解释的 note
// ==========================================

use crate::domain::analysis::EffectiveEnvironment;
use crate::domain::equipment::EquipmentSpec;
use crate::domain::profile::TrackProfile;
use crate::domain::types::{
    terrain_for_slope_bucket, CompatibilityLevel, TerrainLevel, VegetationClass,
};
use tracing::warn;

pub const NOTE_ENVIRONMENT_NOT_PERMITTED: &str = "Terrain/vegetation not permitted";
pub const NOTE_TOO_MUCH_DIFFICULT_TERRAIN: &str = "Too much difficult terrain";

// ==========================================
// 判定结果
// ==========================================

/// 机械地形细判结果
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainAssessment {
    pub level: CompatibilityLevel,
    /// 超限路段占比（0~1），仅在存在超限路段时给出
    pub over_limit_percent: Option<f64>,
    pub note: Option<String>,
}

/// 机械坡度上限判定结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeCheck {
    pub compatible: bool,
    pub max_slope_exceeded: Option<f64>,
    pub limit: Option<f64>,
}

impl SlopeCheck {
    pub fn note(&self) -> Option<String> {
        match (self.max_slope_exceeded, self.limit) {
            (Some(actual), Some(limit)) if !self.compatible => Some(format!(
                "Max slope {:.1}° exceeds equipment limit of {:.1}°",
                actual, limit
            )),
            _ => None,
        }
    }
}

/// 机械综合判定（地形细判 + 坡度上限）
#[derive(Debug, Clone, PartialEq)]
pub struct MachineryAssessment {
    pub terrain: TerrainAssessment,
    pub slope: SlopeCheck,
    pub compatible: bool,
    pub level: CompatibilityLevel,
    /// 坡度超限说明优先于地形说明
    pub note: Option<String>,
}

// ==========================================
// CompatibilityEvaluator - 适配判定器
// ==========================================
pub struct CompatibilityEvaluator {
    partial_threshold: f64,
}

impl CompatibilityEvaluator {
    /// # 参数
    /// - partial_threshold: 超限占比 ≤ 此值判为部分适配
    pub fn new(partial_threshold: f64) -> Self {
        Self { partial_threshold }
    }

    /// 环境粗判: 地形等级不高于允许的最高等级，且植被在允许集合内
    pub fn is_environment_compatible(
        spec: &EquipmentSpec,
        terrain: TerrainLevel,
        vegetation: VegetationClass,
    ) -> bool {
        let terrain_ok = spec
            .highest_allowed_rank()
            .is_some_and(|highest| terrain.rank() <= highest);
        terrain_ok && spec.allowed_vegetation.contains(&vegetation)
    }

    /// 航空器 / 人工队伍: 仅粗判，无部分适配
    pub fn evaluate_gate(
        spec: &EquipmentSpec,
        env: &EffectiveEnvironment,
    ) -> (CompatibilityLevel, Option<String>) {
        if Self::is_environment_compatible(spec, env.terrain, env.vegetation) {
            (CompatibilityLevel::Full, None)
        } else {
            (
                CompatibilityLevel::Incompatible,
                Some(NOTE_ENVIRONMENT_NOT_PERMITTED.to_string()),
            )
        }
    }

    /// 机械地形细判
    ///
    /// # 规则
    /// 1. 粗判失败 → Incompatible
    /// 2. 无坡度分布明细 → Full
    /// 3. 统计映射等级高于允许最高等级的路段长度，除以总长得到超限占比
    /// 4. 占比 = 0 → Full；0 < 占比 ≤ 阈值 → Partial；占比 > 阈值 → Incompatible
    pub fn evaluate_machinery_terrain(
        &self,
        spec: &EquipmentSpec,
        env: &EffectiveEnvironment,
        track: &TrackProfile,
    ) -> TerrainAssessment {
        if !Self::is_environment_compatible(spec, env.terrain, env.vegetation) {
            return TerrainAssessment {
                level: CompatibilityLevel::Incompatible,
                over_limit_percent: None,
                note: Some(NOTE_ENVIRONMENT_NOT_PERMITTED.to_string()),
            };
        }

        let distribution = match &track.slope_distribution {
            Some(d) if !d.is_empty() => d,
            _ => {
                return TerrainAssessment {
                    level: CompatibilityLevel::Full,
                    over_limit_percent: None,
                    note: None,
                }
            }
        };

        // 粗判已通过，允许集合必然非空
        let highest_allowed = spec.highest_allowed_rank().unwrap_or(0);

        let mut over_distance = 0.0_f64;
        for (bucket, meters) in distribution {
            match terrain_for_slope_bucket(bucket) {
                Some(level) if level.rank() > highest_allowed => over_distance += *meters,
                Some(_) => {}
                None => warn!(bucket = %bucket, equipment_id = %spec.id, "未知坡度分档，已忽略"),
            }
        }

        let over_percent = if track.total_distance > 0.0 {
            over_distance / track.total_distance
        } else {
            0.0
        };

        if over_percent <= 0.0 {
            TerrainAssessment {
                level: CompatibilityLevel::Full,
                over_limit_percent: None,
                note: None,
            }
        } else if over_percent <= self.partial_threshold {
            TerrainAssessment {
                level: CompatibilityLevel::Partial,
                over_limit_percent: Some(over_percent),
                note: Some(format!(
                    "{}% of route exceeds rated terrain; time penalty applied",
                    (over_percent * 100.0).round()
                )),
            }
        } else {
            TerrainAssessment {
                level: CompatibilityLevel::Incompatible,
                over_limit_percent: Some(over_percent),
                note: Some(NOTE_TOO_MUCH_DIFFICULT_TERRAIN.to_string()),
            }
        }
    }

    /// 机械坡度上限判定: 未设置 maxSlope 时恒为适配
    pub fn is_slope_compatible(max_slope: Option<f64>, track_max_slope: f64) -> SlopeCheck {
        match max_slope {
            None => SlopeCheck {
                compatible: true,
                max_slope_exceeded: None,
                limit: None,
            },
            Some(limit) if track_max_slope <= limit => SlopeCheck {
                compatible: true,
                max_slope_exceeded: None,
                limit: Some(limit),
            },
            Some(limit) => SlopeCheck {
                compatible: false,
                max_slope_exceeded: Some(track_max_slope),
                limit: Some(limit),
            },
        }
    }

    /// 机械综合判定
    pub fn evaluate_machinery(
        &self,
        spec: &EquipmentSpec,
        max_slope: Option<f64>,
        env: &EffectiveEnvironment,
        track: &TrackProfile,
    ) -> MachineryAssessment {
        let terrain = self.evaluate_machinery_terrain(spec, env, track);
        let slope = Self::is_slope_compatible(max_slope, track.max_slope);

        let compatible = terrain.level.is_usable() && slope.compatible;
        let level = if compatible {
            terrain.level
        } else {
            CompatibilityLevel::Incompatible
        };
        let note = slope.note().or_else(|| terrain.note.clone());

        MachineryAssessment {
            terrain,
            slope,
            compatible,
            level,
            note,
        }
    }
}
