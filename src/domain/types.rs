// ==========================================
// 设备维护日志系统 - 领域类型定义
// ==========================================
// 班次 / 故障类型 / 处理措施目录 / 压机-包装机组合
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 班次 (Shift)
// ==========================================
// 取值: 1 / 2 / 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Shift {
    First,  // 1班
    Second, // 2班
    Third,  // 3班
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::First, Shift::Second, Shift::Third];

    /// 班次编号 (1..=3)
    pub fn number(&self) -> u8 {
        match self {
            Shift::First => 1,
            Shift::Second => 2,
            Shift::Third => 3,
        }
    }
}

impl TryFrom<u8> for Shift {
    type Error = ValidationError;

    fn try_from(value: u8) -> ValidationResult<Self> {
        match value {
            1 => Ok(Shift::First),
            2 => Ok(Shift::Second),
            3 => Ok(Shift::Third),
            other => Err(ValidationError::InvalidShift(other as i64)),
        }
    }
}

impl From<Shift> for u8 {
    fn from(shift: Shift) -> Self {
        shift.number()
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ==========================================
// 故障类型 (Issue)
// ==========================================
// 固定集合 + "None"（无故障）
// 序列化格式: 与 CSV 文件中的显示文本一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Issue {
    #[serde(rename = "Cube crash on bridge")]
    CubeCrashOnBridge, // 桥上方块撞击
    #[serde(rename = "Line 1/2 missing wrapping")]
    MissingWrapping, // 1/2线漏包装
    #[serde(rename = "Exit belt cut")]
    ExitBeltCut, // 出口皮带断裂
    #[serde(rename = "None")]
    NoIssue, // 无故障
}

impl Issue {
    /// 全部故障选项（含 "None"），顺序与录入界面一致
    pub const ALL: [Issue; 4] = [
        Issue::CubeCrashOnBridge,
        Issue::MissingWrapping,
        Issue::ExitBeltCut,
        Issue::NoIssue,
    ];

    /// 真实故障（不含 "None"），占位预测从中抽取
    pub const KNOWN: [Issue; 3] = [
        Issue::CubeCrashOnBridge,
        Issue::MissingWrapping,
        Issue::ExitBeltCut,
    ];

    /// 显示文本（同时也是 CSV 存储值）
    pub fn label(&self) -> &'static str {
        match self {
            Issue::CubeCrashOnBridge => "Cube crash on bridge",
            Issue::MissingWrapping => "Line 1/2 missing wrapping",
            Issue::ExitBeltCut => "Exit belt cut",
            Issue::NoIssue => "None",
        }
    }

    /// 该故障允许的处理措施列表
    pub fn allowed_fixes(&self) -> &'static [&'static str] {
        match self {
            Issue::CubeCrashOnBridge => &[
                "Blow powder with airgun",
                "Realign bridge and remove cubes",
            ],
            Issue::MissingWrapping => &[
                "Blow naked cube with airgun",
                "Check wrapping knife or replace paper reel",
            ],
            Issue::ExitBeltCut => &["Replace exit belt"],
            Issue::NoIssue => &["None"],
        }
    }

    pub fn allows_fix(&self, fix: &str) -> bool {
        self.allowed_fixes().contains(&fix)
    }

    /// 校验故障-处理措施配对
    pub fn check_fix(&self, fix: &str) -> ValidationResult<()> {
        if self.allows_fix(fix) {
            Ok(())
        } else {
            Err(ValidationError::FixNotAllowed {
                issue: self.label().to_string(),
                fix: fix.to_string(),
            })
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Issue {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        let trimmed = s.trim();
        Issue::ALL
            .iter()
            .copied()
            .find(|issue| issue.label() == trimmed)
            .ok_or_else(|| ValidationError::UnknownIssue(trimmed.to_string()))
    }
}

// ==========================================
// 机组组合 (Press & Wrapper)
// ==========================================
// 包装机编号 = 压机编号 + 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MachinePair {
    pub press_id: u32,
}

impl MachinePair {
    pub fn new(press_id: u32) -> Self {
        Self { press_id }
    }

    pub fn wrapper_id(&self) -> u32 {
        self.press_id + 1
    }

    /// 机组标识，例如 "Press 40 & Wrapper 41"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MachinePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Press {} & Wrapper {}", self.press_id, self.wrapper_id())
    }
}
