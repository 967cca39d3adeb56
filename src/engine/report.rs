// ==========================================
// 设备维护日志系统 - 报表引擎
// ==========================================
// 职责: 基于全量维护记录计算汇总指标
// 输入: 全部记录（按写入顺序）
// 输出: 日均 OEE / 按故障停机合计 / 故障频次 / 机组过滤视图
// ==========================================
// 红线: 无状态,所有函数都是纯函数；空输入返回空结果,不报错
// ==========================================

use crate::domain::{Issue, MaintenanceRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 机组过滤: 全部机组
pub const ALL_MACHINES: &str = "All";

// ==========================================
// 报表结构
// ==========================================

/// 单日平均 OEE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOee {
    pub date: NaiveDate,
    pub mean_oee_percent: f64,
}

/// 驾驶舱汇总（OEE 趋势 + 停机分布 + 故障频次）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceDashboard {
    pub total_records: usize,
    pub daily_oee: Vec<DailyOee>,
    pub downtime_by_issue: BTreeMap<Issue, u64>,
    pub issue_frequency: BTreeMap<Issue, usize>,
}

impl MaintenanceDashboard {
    /// 无记录时前端显示 "暂无日志"
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }
}

// ==========================================
// 聚合函数
// ==========================================

/// 按日期分组求 OEE 平均值，按日期升序返回
pub fn mean_oee_by_date(records: &[MaintenanceRecord]) -> Vec<DailyOee> {
    let mut groups: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.date).or_insert((0.0, 0));
        entry.0 += record.oee_percent;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(date, (sum, count))| DailyOee {
            date,
            mean_oee_percent: sum / count as f64,
        })
        .collect()
}

/// 按故障类型分组累计停机分钟数
pub fn total_downtime_by_issue(records: &[MaintenanceRecord]) -> BTreeMap<Issue, u64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.issue).or_insert(0u64) += record.downtime_minutes as u64;
    }
    totals
}

/// 统计各故障类型出现次数（合计等于记录数）
pub fn issue_frequency(records: &[MaintenanceRecord]) -> BTreeMap<Issue, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.issue).or_insert(0usize) += 1;
    }
    counts
}

/// 按机组过滤并按日期降序排列
///
/// # 参数
/// - machine_or_all: `"All"` 表示不过滤，否则精确匹配机组标识
///
/// # 返回
/// 过滤后的记录；同一日期内保持原有写入顺序（稳定排序）
pub fn filter_by_machine(
    records: &[MaintenanceRecord],
    machine_or_all: &str,
) -> Vec<MaintenanceRecord> {
    let mut filtered: Vec<MaintenanceRecord> = if machine_or_all == ALL_MACHINES {
        records.to_vec()
    } else {
        records
            .iter()
            .filter(|r| r.machine == machine_or_all)
            .cloned()
            .collect()
    };

    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// 历史查看器的机组下拉选项: "All" + 去重排序后的机组
pub fn machine_options(records: &[MaintenanceRecord]) -> Vec<String> {
    let machines: BTreeSet<&str> = records.iter().map(|r| r.machine.as_str()).collect();

    std::iter::once(ALL_MACHINES.to_string())
        .chain(machines.into_iter().map(str::to_string))
        .collect()
}

/// 构建驾驶舱汇总
pub fn build_dashboard(records: &[MaintenanceRecord]) -> MaintenanceDashboard {
    MaintenanceDashboard {
        total_records: records.len(),
        daily_oee: mean_oee_by_date(records),
        downtime_by_issue: total_downtime_by_issue(records),
        issue_frequency: issue_frequency(records),
    }
}
