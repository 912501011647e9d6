// ==========================================
// 防火隔离带规划系统 - 装备规格
// ==========================================
// 职责: 装备目录条目（机械 / 航空器 / 人工队伍）
// 说明: 类型专属字段由 EquipmentKind 承载，避免单一结构体堆积可选字段
// ==========================================

use crate::domain::types::{EquipmentType, TerrainLevel, VegetationClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// EquipmentSpec - 装备规格（输入）
// ==========================================
// 类型专属数值保持 Option: 缺失与非法值均由校验器给出原因，而不是在反序列化阶段整体失败
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSpec {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// 允许作业的地形等级集合
    #[serde(default)]
    pub allowed_terrain: BTreeSet<TerrainLevel>,

    /// 允许作业的植被类别集合
    #[serde(default)]
    pub allowed_vegetation: BTreeSet<VegetationClass>,

    /// 每小时成本（货币单位）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_per_hour: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub kind: EquipmentKind,
}

// ==========================================
// EquipmentKind - 类型专属参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EquipmentKind {
    #[serde(rename_all = "camelCase")]
    Machinery {
        /// 清理速率（米/小时）
        #[serde(default, skip_serializing_if = "Option::is_none")]
        clearing_rate: Option<f64>,
        /// 最大作业坡度（度），缺省表示不限
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_slope: Option<f64>,
    },

    #[serde(rename_all = "camelCase")]
    Aircraft {
        /// 单次投放覆盖长度（米）
        #[serde(default, skip_serializing_if = "Option::is_none")]
        drop_length: Option<f64>,
        /// 往返周转时间（分钟）
        #[serde(default, skip_serializing_if = "Option::is_none")]
        turnaround_minutes: Option<f64>,
    },

    #[serde(rename_all = "camelCase")]
    HandCrew {
        /// 队伍人数，按数值读取，是否为正整数由校验器判定
        #[serde(default, skip_serializing_if = "Option::is_none")]
        crew_size: Option<f64>,
        /// 人均清理速率（米/小时/人）
        #[serde(default, skip_serializing_if = "Option::is_none")]
        clearing_rate_per_person: Option<f64>,
    },
}

impl EquipmentSpec {
    pub fn equipment_type(&self) -> EquipmentType {
        self.kind.equipment_type()
    }

    /// 允许地形中的最高等级序号（集合为空时返回 None）
    pub fn highest_allowed_rank(&self) -> Option<u8> {
        self.allowed_terrain.iter().map(|t| t.rank()).max()
    }
}

impl EquipmentKind {
    pub fn equipment_type(&self) -> EquipmentType {
        match self {
            EquipmentKind::Machinery { .. } => EquipmentType::Machinery,
            EquipmentKind::Aircraft { .. } => EquipmentType::Aircraft,
            EquipmentKind::HandCrew { .. } => EquipmentType::HandCrew,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_machinery() {
        let raw = r#"{
            "id": "dozer-1",
            "name": "D6 Dozer",
            "type": "Machinery",
            "allowedTerrain": ["easy", "moderate"],
            "allowedVegetation": ["grassland", "lightshrub"],
            "clearingRate": 400,
            "costPerHour": 180.5,
            "maxSlope": 25
        }"#;

        let spec: EquipmentSpec = serde_json::from_str(raw).unwrap();
        assert_eq!(spec.equipment_type(), EquipmentType::Machinery);
        assert_eq!(spec.highest_allowed_rank(), Some(1));
        assert_eq!(spec.cost_per_hour, Some(180.5));
        match spec.kind {
            EquipmentKind::Machinery {
                clearing_rate,
                max_slope,
            } => {
                assert_eq!(clearing_rate, Some(400.0));
                assert_eq!(max_slope, Some(25.0));
            }
            _ => panic!("Expected Machinery"),
        }
    }

    #[test]
    fn test_deserialize_missing_type_fields_as_none() {
        let raw = r#"{"id": "crew-1", "name": "Crew", "type": "HandCrew",
                      "allowedTerrain": ["easy"], "allowedVegetation": ["grassland"]}"#;

        let spec: EquipmentSpec = serde_json::from_str(raw).unwrap();
        assert_eq!(
            spec.kind,
            EquipmentKind::HandCrew {
                crew_size: None,
                clearing_rate_per_person: None,
            }
        );
    }

    #[test]
    fn test_highest_allowed_rank_empty() {
        let raw = r#"{"id": "a", "name": "Air", "type": "Aircraft"}"#;
        let spec: EquipmentSpec = serde_json::from_str(raw).unwrap();
        assert_eq!(spec.highest_allowed_rank(), None);
    }
}
