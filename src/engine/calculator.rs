// ==========================================
// 防火隔离带规划系统 - 工时/成本计算
// ==========================================
// 职责: 按装备类型把距离、速率、环境系数换算为工时（小时）与成本
// 模型: 机械连续清理 / 航空器离散投放 / 人工按人计速
// ==========================================

use crate::config::EngineConfig;
use crate::domain::analysis::EffectiveEnvironment;

/// 航空器投放估算
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropEstimate {
    pub drops: u64,
    pub time: f64,
}

// ==========================================
// TimeCostCalculator - 工时/成本计算器
// ==========================================
pub struct TimeCostCalculator {
    partial_penalty_multiplier: f64,
    default_drop_length_m: f64,
    default_turnaround_minutes: f64,
}

impl TimeCostCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            partial_penalty_multiplier: config.partial_penalty_multiplier,
            default_drop_length_m: config.aircraft_default_drop_length_m,
            default_turnaround_minutes: config.aircraft_default_turnaround_minutes,
        }
    }

    /// 机械工时
    ///
    /// adjusted_rate = clearing_rate / (地形系数 × 植被系数)
    /// time = distance / adjusted_rate
    ///
    /// 部分适配时 time × (1 + over_limit_percent × 惩罚倍率)
    pub fn machinery_time(
        &self,
        distance: f64,
        clearing_rate: f64,
        env: &EffectiveEnvironment,
        partial_over_limit: Option<f64>,
    ) -> f64 {
        if clearing_rate <= 0.0 {
            return 0.0;
        }

        let adjusted_rate = clearing_rate / env.combined_factor();
        let time = distance / adjusted_rate;

        match partial_over_limit {
            Some(over) => time * (1.0 + over * self.partial_penalty_multiplier),
            None => time,
        }
    }

    /// 航空器投放次数与工时
    ///
    /// drops = ceil(distance / drop_length)
    /// time = drops × turnaround_minutes / 60
    ///
    /// 缺失的投放长度 / 周转时间使用配置缺省值
    pub fn aircraft_drops(
        &self,
        distance: f64,
        drop_length: Option<f64>,
        turnaround_minutes: Option<f64>,
    ) -> DropEstimate {
        let drop_length = drop_length
            .filter(|v| *v > 0.0)
            .unwrap_or(self.default_drop_length_m);
        let turnaround = turnaround_minutes
            .filter(|v| *v > 0.0)
            .unwrap_or(self.default_turnaround_minutes);

        let drops = if distance > 0.0 {
            (distance / drop_length).ceil() as u64
        } else {
            0
        };

        DropEstimate {
            drops,
            time: drops as f64 * turnaround / 60.0,
        }
    }

    /// 人工队伍工时
    ///
    /// total_rate = crew_size × rate_per_person
    /// time = distance / (total_rate / (地形系数 × 植被系数))
    pub fn hand_crew_time(
        &self,
        distance: f64,
        crew_size: f64,
        clearing_rate_per_person: f64,
        env: &EffectiveEnvironment,
    ) -> f64 {
        let total_rate = crew_size * clearing_rate_per_person;
        if total_rate <= 0.0 {
            return 0.0;
        }

        let adjusted_rate = total_rate / env.combined_factor();
        distance / adjusted_rate
    }

    /// 成本: 仅在适配且设置了每小时成本时计费
    pub fn cost(time: f64, cost_per_hour: Option<f64>, compatible: bool) -> f64 {
        match cost_per_hour {
            Some(rate) if compatible => time * rate,
            _ => 0.0,
        }
    }
}

impl Default for TimeCostCalculator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{TerrainLevel, VegetationClass};

    fn env(terrain_factor: f64, vegetation_factor: f64) -> EffectiveEnvironment {
        EffectiveEnvironment {
            terrain: TerrainLevel::Moderate,
            vegetation: VegetationClass::Grassland,
            terrain_factor,
            vegetation_factor,
        }
    }

    #[test]
    fn test_machinery_time_moderate_grassland() {
        let calc = TimeCostCalculator::default();
        let time = calc.machinery_time(1000.0, 100.0, &env(1.3, 1.0), None);
        assert!((time - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_machinery_partial_penalty() {
        let calc = TimeCostCalculator::default();
        let base = calc.machinery_time(1000.0, 100.0, &env(1.7, 1.0), None);
        let penalised = calc.machinery_time(1000.0, 100.0, &env(1.7, 1.0), Some(0.15));
        assert!((penalised / base - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_machinery_zero_rate() {
        let calc = TimeCostCalculator::default();
        assert_eq!(calc.machinery_time(1000.0, 0.0, &env(1.0, 1.0), None), 0.0);
    }

    #[test]
    fn test_aircraft_drops() {
        let calc = TimeCostCalculator::default();
        let estimate = calc.aircraft_drops(950.0, Some(300.0), Some(12.0));
        assert_eq!(estimate.drops, 4);
        assert!((estimate.time - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_aircraft_defaults() {
        let calc = TimeCostCalculator::default();
        // 100m / 15min 缺省
        let estimate = calc.aircraft_drops(250.0, None, None);
        assert_eq!(estimate.drops, 3);
        assert!((estimate.time - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_aircraft_exact_multiple() {
        let calc = TimeCostCalculator::default();
        let estimate = calc.aircraft_drops(900.0, Some(300.0), Some(20.0));
        assert_eq!(estimate.drops, 3);
        assert!((estimate.time - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_hand_crew_time() {
        let calc = TimeCostCalculator::default();
        // 10 人 × 20 m/h = 200 m/h，系数 1.1 × 1.5 = 1.65
        let time = calc.hand_crew_time(1000.0, 10.0, 20.0, &env(1.1, 1.5));
        assert!((time - 8.25).abs() < 1e-9);
    }

    #[test]
    fn test_cost_rules() {
        assert_eq!(TimeCostCalculator::cost(13.0, Some(50.0), true), 650.0);
        assert_eq!(TimeCostCalculator::cost(13.0, Some(50.0), false), 0.0);
        assert_eq!(TimeCostCalculator::cost(13.0, None, true), 0.0);
    }
}
