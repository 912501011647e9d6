// ==========================================
// 防火隔离带规划系统 - 分析编排器
// ==========================================
// 职责: 单次分析的完整流程
// 流程: 系数合并 → 环境分级 → 逐装备(校验 → 适配判定 → 工时/成本) → 排序 → 汇总
// 红线: 单个装备配置非法不得中断整批分析；引擎本身没有失败路径
// ==========================================

use crate::config::EngineConfig;
use crate::domain::analysis::{
    AnalysisParameters, AnalysisResult, CalculationResult, EffectiveEnvironment, RouteInput,
};
use crate::domain::equipment::{EquipmentKind, EquipmentSpec};
use crate::domain::types::CompatibilityLevel;
use crate::engine::calculator::TimeCostCalculator;
use crate::engine::compatibility::CompatibilityEvaluator;
use crate::engine::environment::EnvironmentClassifier;
use crate::engine::ranker::ResultRanker;
use crate::engine::validator::EquipmentValidator;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// AnalysisEngine - 装备适配与工时/成本分析引擎
// ==========================================
// 构造后不可变，可在并发调用间共享
pub struct AnalysisEngine {
    config: EngineConfig,
    evaluator: CompatibilityEvaluator,
    calculator: TimeCostCalculator,
    ranker: ResultRanker,
}

impl AnalysisEngine {
    /// 创建分析引擎
    ///
    /// # 参数
    /// - config: 引擎配置（默认系数表 + 策略常量）
    pub fn new(config: EngineConfig) -> Self {
        let evaluator = CompatibilityEvaluator::new(config.partial_threshold);
        let calculator = TimeCostCalculator::new(&config);
        let ranker = ResultRanker::new(config.rank_time_tolerance_hours);
        Self {
            config,
            evaluator,
            calculator,
            ranker,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 执行一次分析
    ///
    /// # 参数
    /// - route: 已通过形状校验的线路输入
    /// - equipment: 装备目录
    /// - parameters: 调用方系数覆写（可选）
    ///
    /// # 返回
    /// 排序后的结果与元数据；结果条数与输入装备条数一致
    #[instrument(skip_all, fields(distance = route.distance, equipment_count = equipment.len()))]
    pub fn analyze(
        &self,
        route: &RouteInput,
        equipment: &[EquipmentSpec],
        parameters: Option<&AnalysisParameters>,
    ) -> AnalysisResult {
        // === 步骤 1: 合并系数表 ===
        let factors = self.config.factors.merged(parameters);

        // === 步骤 2: 统一环境 ===
        let env = EnvironmentClassifier::resolve(
            &route.track_profile,
            &route.vegetation_profile,
            &factors,
        );
        debug!(
            terrain = %env.terrain,
            vegetation = %env.vegetation,
            terrain_factor = env.terrain_factor,
            vegetation_factor = env.vegetation_factor,
            "环境分级完成"
        );

        // === 步骤 3: 逐装备计算 ===
        let mut results = Vec::with_capacity(equipment.len());
        let mut validation_errors = Vec::new();

        for spec in equipment {
            let errors = EquipmentValidator::validate(spec);
            if !errors.is_empty() {
                warn!(equipment_id = %spec.id, errors = ?errors, "装备配置非法，跳过计算");
                validation_errors.push(format!("{}: {}", display_name(spec), errors.join("; ")));
                results.push(CalculationResult::invalid_configuration(spec, errors));
                continue;
            }

            let result = self.evaluate_one(spec, route, &env);
            debug!(
                equipment_id = %result.id,
                level = %result.compatibility_level,
                time = result.time,
                cost = result.cost,
                "装备计算完成"
            );
            results.push(result);
        }

        // === 步骤 4: 排序 ===
        let results = self.ranker.rank(results);

        // === 步骤 5: 汇总 ===
        let compatible_count = results.iter().filter(|r| r.compatible).count();
        let recommended_id = results
            .iter()
            .find(|r| r.compatible)
            .map(|r| r.id.clone());

        info!(
            compatible_count,
            invalid_count = validation_errors.len(),
            recommended = ?recommended_id,
            "分析完成"
        );

        AnalysisResult {
            analysis_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            equipment_count: results.len(),
            compatible_count,
            recommended_id,
            validation_errors,
            effective: env,
            vegetation_distribution: route.vegetation_profile.distribution.clone(),
            results,
        }
    }

    /// 计算单个（已通过校验的）装备
    fn evaluate_one(
        &self,
        spec: &EquipmentSpec,
        route: &RouteInput,
        env: &EffectiveEnvironment,
    ) -> CalculationResult {
        let mut result = CalculationResult::for_spec(spec);

        match &spec.kind {
            EquipmentKind::Machinery {
                clearing_rate,
                max_slope,
            } => {
                let assessment =
                    self.evaluator
                        .evaluate_machinery(spec, *max_slope, env, &route.track_profile);

                let partial_over_limit = match assessment.level {
                    CompatibilityLevel::Partial => assessment.terrain.over_limit_percent,
                    _ => None,
                };
                let time = if assessment.compatible {
                    self.calculator.machinery_time(
                        route.distance,
                        clearing_rate.unwrap_or(0.0),
                        env,
                        partial_over_limit,
                    )
                } else {
                    0.0
                };

                result.time = time;
                result.cost = TimeCostCalculator::cost(time, spec.cost_per_hour, assessment.compatible);
                result.compatible = assessment.compatible;
                result.compatibility_level = assessment.level;
                result.slope_compatible = Some(assessment.slope.compatible);
                result.max_slope_exceeded = assessment.slope.max_slope_exceeded;
                result.over_limit_percent = assessment.terrain.over_limit_percent;
                result.note = assessment.note;
            }
            EquipmentKind::Aircraft {
                drop_length,
                turnaround_minutes,
            } => {
                let (level, note) = CompatibilityEvaluator::evaluate_gate(spec, env);
                let compatible = level.is_usable();
                let estimate =
                    self.calculator
                        .aircraft_drops(route.distance, *drop_length, *turnaround_minutes);

                result.time = estimate.time;
                result.cost = TimeCostCalculator::cost(estimate.time, spec.cost_per_hour, compatible);
                result.compatible = compatible;
                result.compatibility_level = level;
                result.drops = Some(estimate.drops);
                result.note = note;
            }
            EquipmentKind::HandCrew {
                crew_size,
                clearing_rate_per_person,
            } => {
                let (level, note) = CompatibilityEvaluator::evaluate_gate(spec, env);
                let compatible = level.is_usable();
                let time = self.calculator.hand_crew_time(
                    route.distance,
                    crew_size.unwrap_or(0.0),
                    clearing_rate_per_person.unwrap_or(0.0),
                    env,
                );

                result.time = time;
                result.cost = TimeCostCalculator::cost(time, spec.cost_per_hour, compatible);
                result.compatible = compatible;
                result.compatibility_level = level;
                result.note = note;
            }
        }

        result
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// 汇总错误时使用的装备名称（名称为空时回落到 id）
fn display_name(spec: &EquipmentSpec) -> &str {
    let name = spec.name.trim();
    if !name.is_empty() {
        name
    } else if !spec.id.trim().is_empty() {
        spec.id.trim()
    } else {
        "<unnamed>"
    }
}
