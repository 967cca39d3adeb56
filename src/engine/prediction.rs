// ==========================================
// 设备维护日志系统 - 占位预测
// ==========================================
// 注意: 这里没有任何训练数据或模型
// 输出仅为均匀随机抽样，界面必须标注为占位结果
// ==========================================

use crate::domain::Issue;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 占位预测说明文字
pub const PLACEHOLDER_NOTICE: &str = "占位预测: 随机抽样结果，非模型输出";

/// 占位预测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderPrediction {
    pub issue: Issue,                 // 随机抽取的下一故障（不含 "None"）
    pub expected_runtime_hours: f64,  // 随机运行时间估计（2 位小数）
    pub notice: String,
}

// ==========================================
// PlaceholderPredictor - 占位预测器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderPredictor {
    runtime_min: f64,
    runtime_max: f64,
}

impl PlaceholderPredictor {
    /// # 参数
    /// - runtime_min / runtime_max: 运行时间估计区间（小时），调用方保证 min <= max
    pub fn new(runtime_min: f64, runtime_max: f64) -> Self {
        Self {
            runtime_min,
            runtime_max,
        }
    }

    /// 从已知故障中均匀抽取一个，并在区间内均匀抽取运行时间
    pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> PlaceholderPrediction {
        let issue = Issue::KNOWN[rng.gen_range(0..Issue::KNOWN.len())];
        let runtime = rng.gen_range(self.runtime_min..=self.runtime_max);

        PlaceholderPrediction {
            issue,
            expected_runtime_hours: (runtime * 100.0).round() / 100.0,
            notice: PLACEHOLDER_NOTICE.to_string(),
        }
    }
}

impl Default for PlaceholderPredictor {
    fn default() -> Self {
        Self::new(6.0, 7.9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_prediction_within_bounds() {
        let predictor = PlaceholderPredictor::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = predictor.predict(&mut rng);
            assert_ne!(p.issue, Issue::NoIssue);
            assert!((6.0..=7.9).contains(&p.expected_runtime_hours));
            assert_eq!(p.notice, PLACEHOLDER_NOTICE);
        }
    }

    #[test]
    fn test_prediction_covers_known_issues() {
        let predictor = PlaceholderPredictor::default();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Issue> = (0..300).map(|_| predictor.predict(&mut rng).issue).collect();
        assert_eq!(seen.len(), Issue::KNOWN.len());
    }

    #[test]
    fn test_same_seed_same_prediction() {
        let predictor = PlaceholderPredictor::new(6.5, 6.5);
        let a = predictor.predict(&mut StdRng::seed_from_u64(1));
        let b = predictor.predict(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert_eq!(a.expected_runtime_hours, 6.5);
    }
}
