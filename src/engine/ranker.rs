// ==========================================
// 防火隔离带规划系统 - 结果排序
// ==========================================
// 职责: 对全部计算结果做确定性排序
// 排序键:
// 1) 适配优先于不适配
// 2) 适配项内: time 升序；|Δtime| < 容差视为并列，按 cost 升序
// 3) 不适配项: 保持输入顺序
// ==========================================

use crate::domain::analysis::CalculationResult;
use std::cmp::Ordering;

// ==========================================
// ResultRanker - 结果排序器
// ==========================================
pub struct ResultRanker {
    time_tolerance_hours: f64,
}

impl ResultRanker {
    pub fn new(time_tolerance_hours: f64) -> Self {
        Self {
            time_tolerance_hours,
        }
    }

    /// 排序计算结果
    ///
    /// 容差并列规则不满足传递性，不能交给要求全序的 sort_by；
    /// 这里用稳定插入排序，相同输入恒得相同输出
    pub fn rank(&self, results: Vec<CalculationResult>) -> Vec<CalculationResult> {
        let mut ranked: Vec<CalculationResult> = Vec::with_capacity(results.len());

        for item in results {
            let mut pos = ranked.len();
            while pos > 0 && self.compare(&item, &ranked[pos - 1]) == Ordering::Less {
                pos -= 1;
            }
            ranked.insert(pos, item);
        }

        ranked
    }

    /// 比较两个结果
    ///
    /// # 返回
    /// Ordering::Less 表示 a 排在 b 之前
    pub fn compare(&self, a: &CalculationResult, b: &CalculationResult) -> Ordering {
        match (a.compatible, b.compatible) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // 不适配项之间不比较
            (false, false) => Ordering::Equal,
            (true, true) => {
                if (a.time - b.time).abs() < self.time_tolerance_hours {
                    a.cost.total_cmp(&b.cost)
                } else {
                    a.time.total_cmp(&b.time)
                }
            }
        }
    }
}

impl Default for ResultRanker {
    fn default() -> Self {
        Self::new(crate::config::defaults::RANK_TIME_TOLERANCE_HOURS)
    }
}

#[cfg(test)]
mod tests;
