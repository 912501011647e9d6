// ==========================================
// 防火隔离带规划系统 - 领域类型定义
// ==========================================
// 职责: 地形等级、植被类别、装备类型、适配等级、坡度分档
// 序列化格式: 与前端/外部采样工具一致 (小写 / 原样类型名)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 地形难度等级 (Terrain Level)
// ==========================================
// 顺序: Easy < Moderate < Difficult < Extreme
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainLevel {
    Easy,      // 平缓
    Moderate,  // 中等
    Difficult, // 困难
    Extreme,   // 极端
}

impl TerrainLevel {
    /// 全部等级（按难度升序）
    pub const ALL: [TerrainLevel; 4] = [
        TerrainLevel::Easy,
        TerrainLevel::Moderate,
        TerrainLevel::Difficult,
        TerrainLevel::Extreme,
    ];

    /// 地形等级序号: easy=0, moderate=1, difficult=2, extreme=3
    pub fn rank(self) -> u8 {
        match self {
            TerrainLevel::Easy => 0,
            TerrainLevel::Moderate => 1,
            TerrainLevel::Difficult => 2,
            TerrainLevel::Extreme => 3,
        }
    }

    /// 从字符串解析（大小写不敏感）
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "easy" => Some(TerrainLevel::Easy),
            "moderate" => Some(TerrainLevel::Moderate),
            "difficult" => Some(TerrainLevel::Difficult),
            "extreme" => Some(TerrainLevel::Extreme),
            _ => None,
        }
    }
}

impl fmt::Display for TerrainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainLevel::Easy => write!(f, "easy"),
            TerrainLevel::Moderate => write!(f, "moderate"),
            TerrainLevel::Difficult => write!(f, "difficult"),
            TerrainLevel::Extreme => write!(f, "extreme"),
        }
    }
}

// ==========================================
// 植被类别 (Vegetation Class)
// ==========================================
// 按燃料密度由低到高
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VegetationClass {
    Grassland,   // 草地
    LightShrub,  // 轻度灌木
    MediumScrub, // 中度灌丛
    HeavyForest, // 茂密森林
}

impl VegetationClass {
    pub const ALL: [VegetationClass; 4] = [
        VegetationClass::Grassland,
        VegetationClass::LightShrub,
        VegetationClass::MediumScrub,
        VegetationClass::HeavyForest,
    ];

    /// 从字符串解析（大小写不敏感）
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "grassland" => Some(VegetationClass::Grassland),
            "lightshrub" => Some(VegetationClass::LightShrub),
            "mediumscrub" => Some(VegetationClass::MediumScrub),
            "heavyforest" => Some(VegetationClass::HeavyForest),
            _ => None,
        }
    }
}

impl fmt::Display for VegetationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VegetationClass::Grassland => write!(f, "grassland"),
            VegetationClass::LightShrub => write!(f, "lightshrub"),
            VegetationClass::MediumScrub => write!(f, "mediumscrub"),
            VegetationClass::HeavyForest => write!(f, "heavyforest"),
        }
    }
}

// ==========================================
// 装备类型 (Equipment Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentType {
    Machinery, // 地面机械（连续清理）
    Aircraft,  // 航空器（离散投放）
    HandCrew,  // 人工队伍（按人计）
}

impl EquipmentType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "machinery" => Some(EquipmentType::Machinery),
            "aircraft" => Some(EquipmentType::Aircraft),
            "handcrew" => Some(EquipmentType::HandCrew),
            _ => None,
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipmentType::Machinery => write!(f, "Machinery"),
            EquipmentType::Aircraft => write!(f, "Aircraft"),
            EquipmentType::HandCrew => write!(f, "HandCrew"),
        }
    }
}

// ==========================================
// 适配等级 (Compatibility Level)
// ==========================================
// Partial 仅适用于地面机械
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Full,         // 完全适配
    Partial,      // 部分适配（工时惩罚）
    Incompatible, // 不适配
}

impl CompatibilityLevel {
    pub fn is_usable(self) -> bool {
        !matches!(self, CompatibilityLevel::Incompatible)
    }
}

impl fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatibilityLevel::Full => write!(f, "full"),
            CompatibilityLevel::Partial => write!(f, "partial"),
            CompatibilityLevel::Incompatible => write!(f, "incompatible"),
        }
    }
}

// ==========================================
// 坡度分档 → 地形等级 映射表
// ==========================================
// 与外部坡度采样工具的分档名保持同步
pub const SLOPE_BUCKET_TERRAIN: [(&str, TerrainLevel); 4] = [
    ("flat", TerrainLevel::Easy),
    ("medium", TerrainLevel::Moderate),
    ("steep", TerrainLevel::Difficult),
    ("very_steep", TerrainLevel::Extreme),
];

/// 查找坡度分档对应的地形等级
pub fn terrain_for_slope_bucket(bucket: &str) -> Option<TerrainLevel> {
    SLOPE_BUCKET_TERRAIN
        .iter()
        .find(|(name, _)| *name == bucket)
        .map(|(_, level)| *level)
}
