// ==========================================
// 防火隔离带规划系统 - 装备规格校验器
// ==========================================
// 职责: 按装备类型检查必填字段与正数约束
// 红线: 无状态、无副作用；校验失败不得中断整批分析
// ==========================================

use crate::domain::equipment::{EquipmentKind, EquipmentSpec};

// ==========================================
// EquipmentValidator - 纯函数工具类
// ==========================================
pub struct EquipmentValidator;

impl EquipmentValidator {
    /// 校验单个装备规格
    ///
    /// # 规则
    /// - id / name 去空白后非空
    /// - allowedTerrain / allowedVegetation 非空
    /// - Machinery: clearingRate 存在且 > 0
    /// - Aircraft: dropLength、turnaroundMinutes 存在且 > 0
    /// - HandCrew: crewSize 为正整数，clearingRatePerPerson 存在且 > 0
    /// - costPerHour 若存在须为有限非负数
    ///
    /// # 返回
    /// 错误描述列表（为空表示合法）
    pub fn validate(spec: &EquipmentSpec) -> Vec<String> {
        let mut errors = Vec::new();

        if spec.id.trim().is_empty() {
            errors.push("id is required".to_string());
        }
        if spec.name.trim().is_empty() {
            errors.push("name is required".to_string());
        }
        if spec.allowed_terrain.is_empty() {
            errors.push("allowedTerrain must not be empty".to_string());
        }
        if spec.allowed_vegetation.is_empty() {
            errors.push("allowedVegetation must not be empty".to_string());
        }

        if let Some(cost) = spec.cost_per_hour {
            if !cost.is_finite() || cost < 0.0 {
                errors.push("costPerHour must not be negative".to_string());
            }
        }

        match &spec.kind {
            EquipmentKind::Machinery { clearing_rate, .. } => {
                Self::require_positive(&mut errors, "clearingRate", *clearing_rate);
            }
            EquipmentKind::Aircraft {
                drop_length,
                turnaround_minutes,
            } => {
                Self::require_positive(&mut errors, "dropLength", *drop_length);
                Self::require_positive(&mut errors, "turnaroundMinutes", *turnaround_minutes);
            }
            EquipmentKind::HandCrew {
                crew_size,
                clearing_rate_per_person,
            } => {
                match crew_size {
                    Some(n) if n.is_nan() || *n <= 0.0 => {
                        errors.push("crewSize must be greater than 0".to_string())
                    }
                    Some(n) if n.fract() != 0.0 => {
                        errors.push("crewSize must be a whole number".to_string())
                    }
                    Some(_) => {}
                    None => errors.push("crewSize is required".to_string()),
                }
                Self::require_positive(
                    &mut errors,
                    "clearingRatePerPerson",
                    *clearing_rate_per_person,
                );
            }
        }

        errors
    }

    fn require_positive(errors: &mut Vec<String>, field: &str, value: Option<f64>) {
        match value {
            // NaN 同样视为非法
            Some(v) if v > 0.0 => {}
            Some(_) => errors.push(format!("{} must be greater than 0", field)),
            None => errors.push(format!("{} is required", field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{TerrainLevel, VegetationClass};
    use std::collections::BTreeSet;

    fn spec(kind: EquipmentKind) -> EquipmentSpec {
        EquipmentSpec {
            id: "E1".to_string(),
            name: "Test".to_string(),
            allowed_terrain: BTreeSet::from([TerrainLevel::Easy]),
            allowed_vegetation: BTreeSet::from([VegetationClass::Grassland]),
            cost_per_hour: None,
            description: None,
            kind,
        }
    }

    #[test]
    fn test_valid_machinery() {
        let s = spec(EquipmentKind::Machinery {
            clearing_rate: Some(100.0),
            max_slope: None,
        });
        assert!(EquipmentValidator::validate(&s).is_empty());
    }

    #[test]
    fn test_machinery_zero_rate() {
        let s = spec(EquipmentKind::Machinery {
            clearing_rate: Some(0.0),
            max_slope: None,
        });
        assert_eq!(
            EquipmentValidator::validate(&s),
            vec!["clearingRate must be greater than 0".to_string()]
        );
    }

    #[test]
    fn test_aircraft_missing_fields() {
        let s = spec(EquipmentKind::Aircraft {
            drop_length: None,
            turnaround_minutes: Some(-5.0),
        });
        let errors = EquipmentValidator::validate(&s);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("dropLength is required"));
        assert!(errors[1].contains("turnaroundMinutes must be greater than 0"));
    }

    #[test]
    fn test_hand_crew_rules() {
        let s = spec(EquipmentKind::HandCrew {
            crew_size: Some(0.0),
            clearing_rate_per_person: None,
        });
        let errors = EquipmentValidator::validate(&s);
        assert_eq!(
            errors,
            vec![
                "crewSize must be greater than 0".to_string(),
                "clearingRatePerPerson is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_fractional_crew_size() {
        let s = spec(EquipmentKind::HandCrew {
            crew_size: Some(4.5),
            clearing_rate_per_person: Some(10.0),
        });
        assert_eq!(
            EquipmentValidator::validate(&s),
            vec!["crewSize must be a whole number".to_string()]
        );

        let whole = spec(EquipmentKind::HandCrew {
            crew_size: Some(4.0),
            clearing_rate_per_person: Some(10.0),
        });
        assert!(EquipmentValidator::validate(&whole).is_empty());
    }

    #[test]
    fn test_cost_per_hour_rules() {
        let mut s = spec(EquipmentKind::Machinery {
            clearing_rate: Some(100.0),
            max_slope: None,
        });
        s.cost_per_hour = Some(-50.0);
        assert_eq!(
            EquipmentValidator::validate(&s),
            vec!["costPerHour must not be negative".to_string()]
        );

        s.cost_per_hour = Some(f64::NAN);
        assert_eq!(EquipmentValidator::validate(&s).len(), 1);

        s.cost_per_hour = Some(0.0);
        assert!(EquipmentValidator::validate(&s).is_empty());
    }

    #[test]
    fn test_common_fields() {
        let mut s = spec(EquipmentKind::Machinery {
            clearing_rate: Some(50.0),
            max_slope: None,
        });
        s.id = "  ".to_string();
        s.name = String::new();
        s.allowed_terrain.clear();
        s.allowed_vegetation.clear();

        let errors = EquipmentValidator::validate(&s);
        assert_eq!(errors.len(), 4);
    }
}
