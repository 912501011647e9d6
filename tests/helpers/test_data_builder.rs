// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use firebreak_planner::domain::analysis::{AnalysisRequest, RouteInput};
use firebreak_planner::domain::equipment::{EquipmentKind, EquipmentSpec};
use firebreak_planner::domain::profile::{TrackProfile, VegetationProfile};
use firebreak_planner::domain::types::{TerrainLevel, VegetationClass};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// EquipmentSpec 构建器
// ==========================================

pub struct EquipmentBuilder {
    id: String,
    name: String,
    allowed_terrain: BTreeSet<TerrainLevel>,
    allowed_vegetation: BTreeSet<VegetationClass>,
    cost_per_hour: Option<f64>,
    kind: EquipmentKind,
}

impl EquipmentBuilder {
    fn new(id: &str, kind: EquipmentKind) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Equipment {}", id),
            allowed_terrain: TerrainLevel::ALL.into_iter().collect(),
            allowed_vegetation: VegetationClass::ALL.into_iter().collect(),
            cost_per_hour: None,
            kind,
        }
    }

    pub fn machinery(id: &str, clearing_rate: f64) -> Self {
        Self::new(
            id,
            EquipmentKind::Machinery {
                clearing_rate: Some(clearing_rate),
                max_slope: None,
            },
        )
    }

    pub fn aircraft(id: &str, drop_length: f64, turnaround_minutes: f64) -> Self {
        Self::new(
            id,
            EquipmentKind::Aircraft {
                drop_length: Some(drop_length),
                turnaround_minutes: Some(turnaround_minutes),
            },
        )
    }

    pub fn hand_crew(id: &str, crew_size: f64, rate_per_person: f64) -> Self {
        Self::new(
            id,
            EquipmentKind::HandCrew {
                crew_size: Some(crew_size),
                clearing_rate_per_person: Some(rate_per_person),
            },
        )
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn terrain(mut self, levels: &[TerrainLevel]) -> Self {
        self.allowed_terrain = levels.iter().copied().collect();
        self
    }

    pub fn vegetation(mut self, classes: &[VegetationClass]) -> Self {
        self.allowed_vegetation = classes.iter().copied().collect();
        self
    }

    pub fn cost_per_hour(mut self, cost: f64) -> Self {
        self.cost_per_hour = Some(cost);
        self
    }

    /// 仅对 Machinery 生效
    pub fn max_slope(mut self, limit: f64) -> Self {
        if let EquipmentKind::Machinery { max_slope, .. } = &mut self.kind {
            *max_slope = Some(limit);
        }
        self
    }

    pub fn build(self) -> EquipmentSpec {
        EquipmentSpec {
            id: self.id,
            name: self.name,
            allowed_terrain: self.allowed_terrain,
            allowed_vegetation: self.allowed_vegetation,
            cost_per_hour: self.cost_per_hour,
            description: None,
            kind: self.kind,
        }
    }
}

// ==========================================
// 线路输入构建器
// ==========================================

pub struct RouteBuilder {
    distance: f64,
    max_slope: f64,
    slope_distribution: Option<BTreeMap<String, f64>>,
    vegetation: VegetationClass,
}

impl RouteBuilder {
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            max_slope: 5.0,
            slope_distribution: None,
            vegetation: VegetationClass::Grassland,
        }
    }

    pub fn max_slope(mut self, slope: f64) -> Self {
        self.max_slope = slope;
        self
    }

    pub fn slope_bucket(mut self, bucket: &str, meters: f64) -> Self {
        self.slope_distribution
            .get_or_insert_with(BTreeMap::new)
            .insert(bucket.to_string(), meters);
        self
    }

    pub fn vegetation(mut self, vegetation: VegetationClass) -> Self {
        self.vegetation = vegetation;
        self
    }

    pub fn build(self) -> RouteInput {
        RouteInput {
            distance: self.distance,
            track_profile: TrackProfile {
                total_distance: self.distance,
                max_slope: self.max_slope,
                slope_distribution: self.slope_distribution,
            },
            vegetation_profile: VegetationProfile::new(self.vegetation),
        }
    }

    pub fn build_request(self) -> AnalysisRequest {
        let route = self.build();
        AnalysisRequest {
            distance: Some(route.distance),
            track_profile: Some(route.track_profile),
            vegetation_profile: Some(route.vegetation_profile),
            parameters: None,
        }
    }
}

/// 浮点近似断言
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
