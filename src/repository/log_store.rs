// ==========================================
// 设备维护日志系统 - 日志存储 (CSV)
// ==========================================
// 职责: 维护记录的追加写入与全量读取
// 存储: 单个 CSV 文件，固定表头，一行一条记录
// 约束: 只追加，无更新/删除；无并发写保护（多进程同时写入时后写者覆盖）
// ==========================================

use crate::domain::{Issue, MaintenanceRecord, Shift, ValidationError};
use crate::repository::error::{StoreError, StoreResult};
use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// CSV 固定表头
pub const LOG_HEADER: [&str; 9] = [
    "Date",
    "Shift",
    "Machine",
    "Operator ID",
    "Runtime (hrs)",
    "Downtime (mins)",
    "OEE (%)",
    "Issue",
    "Fix",
];

// ==========================================
// LogRow - CSV 行映射
// ==========================================
// 字段名与表头一一对应；枚举字段以原始文本读入，转换时再校验
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Shift")]
    shift: i64,
    #[serde(rename = "Machine")]
    machine: String,
    #[serde(rename = "Operator ID")]
    operator_id: String,
    #[serde(rename = "Runtime (hrs)")]
    runtime_hours: f64,
    #[serde(rename = "Downtime (mins)")]
    downtime_minutes: u32,
    #[serde(rename = "OEE (%)")]
    oee_percent: f64,
    #[serde(rename = "Issue")]
    issue: String,
    #[serde(rename = "Fix")]
    fix: String,
}

impl From<&MaintenanceRecord> for LogRow {
    fn from(record: &MaintenanceRecord) -> Self {
        Self {
            date: record.date,
            shift: record.shift.number() as i64,
            machine: record.machine.clone(),
            operator_id: record.operator_id.clone(),
            runtime_hours: record.runtime_hours,
            downtime_minutes: record.downtime_minutes,
            oee_percent: record.oee_percent,
            issue: record.issue.label().to_string(),
            fix: record.fix.clone(),
        }
    }
}

impl LogRow {
    /// 转换为领域记录；OEE 以重新计算的值为准
    fn into_record(self) -> Result<MaintenanceRecord, ValidationError> {
        let shift = u8::try_from(self.shift)
            .map_err(|_| ValidationError::InvalidShift(self.shift))
            .and_then(|n| Shift::try_from(n))?;
        let issue: Issue = self.issue.parse()?;

        let mut record = MaintenanceRecord {
            date: self.date,
            shift,
            machine: self.machine,
            operator_id: self.operator_id,
            runtime_hours: self.runtime_hours,
            downtime_minutes: self.downtime_minutes,
            oee_percent: self.oee_percent,
            issue,
            fix: self.fix,
        };

        let expected = record.expected_oee();
        if (record.oee_percent - expected).abs() > f64::EPSILON {
            tracing::warn!(
                "OEE 存储值与计算值不一致，使用计算值: stored={}, computed={}, date={}, machine={}",
                record.oee_percent,
                expected,
                record.date,
                record.machine
            );
        }
        record.oee_percent = expected;

        record.validate()?;
        Ok(record)
    }
}

// ==========================================
// LogStore - 日志存储
// ==========================================
// 启动时构造一次，由调用方按引用（Arc）共享
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    /// 创建日志存储（不触碰文件，首次追加时才创建）
    ///
    /// # 参数
    /// - path: CSV 文件路径
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 存储文件是否已存在
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 追加一条记录
    ///
    /// # 返回
    /// - Ok(()): 文件末尾新增一行
    /// - Err(StoreError::Validation): 字段校验失败，未写入任何内容
    /// - Err(StoreError::HeaderMismatch): 已有文件表头不符，存储不可用，未写入
    /// - Err(StoreError::FileWriteError): 文件写入失败
    pub fn append(&self, record: &MaintenanceRecord) -> StoreResult<()> {
        // 写入前校验，不产生半条记录
        record.validate()?;

        let existing_len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => return Err(StoreError::FileWriteError(e.to_string())),
        };

        // 已损坏的存储不再追加
        if existing_len > 0 {
            let file = File::open(&self.path)?;
            check_header(&mut csv_reader(file))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::FileWriteError(e.to_string()))?;

        // 外部编辑的文件末行可能缺少换行符，补齐后再追加，避免两行粘连
        if existing_len > 0 && !ends_with_newline(&mut file)? {
            file.write_all(b"\n")
                .map_err(|e| StoreError::FileWriteError(e.to_string()))?;
        }

        let mut writer = WriterBuilder::new()
            .has_headers(existing_len == 0)
            .from_writer(file);

        writer
            .serialize(LogRow::from(record))
            .map_err(|e| StoreError::FileWriteError(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| StoreError::FileWriteError(e.to_string()))?;

        tracing::info!(
            "维护记录已追加: date={}, shift={}, machine={}, operator={}, oee={}",
            record.date,
            record.shift,
            record.machine,
            record.operator_id,
            record.oee_percent
        );

        Ok(())
    }

    /// 读取全部记录（按写入顺序）
    ///
    /// # 返回
    /// - Ok(Vec): 全部记录；文件不存在或为空时返回空列表
    /// - Err(StoreError): 文件存在但不可读或内容损坏
    pub fn load_all(&self) -> StoreResult<Vec<MaintenanceRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("日志文件不存在，视为空存储: {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::FileReadError(e.to_string())),
        };

        if file.metadata()?.len() == 0 {
            tracing::debug!("日志文件为空，视为空存储: {}", self.path.display());
            return Ok(Vec::new());
        }

        let mut reader = csv_reader(file);
        check_header(&mut reader)?;

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize::<LogRow>().enumerate() {
            // 行号从 1 开始，第 1 行为表头
            let row = idx + 2;
            let log_row = result.map_err(|e| StoreError::CorruptRecord {
                row,
                message: e.to_string(),
            })?;
            let record = log_row
                .into_record()
                .map_err(|e| StoreError::CorruptRecord {
                    row,
                    message: e.to_string(),
                })?;
            records.push(record);
        }

        tracing::debug!("已读取 {} 条维护记录: {}", records.len(), self.path.display());
        Ok(records)
    }
}

fn csv_reader(file: File) -> Reader<File> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file)
}

/// 表头必须与 LOG_HEADER 完全一致
fn check_header(reader: &mut Reader<File>) -> StoreResult<()> {
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.iter().map(String::as_str).ne(LOG_HEADER.iter().copied()) {
        return Err(StoreError::HeaderMismatch {
            expected: LOG_HEADER.join(","),
            actual: headers.join(","),
        });
    }
    Ok(())
}

/// 非空文件的最后一个字节是否为换行符
fn ends_with_newline(file: &mut File) -> StoreResult<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .and_then(|_| file.read_exact(&mut last))
        .map_err(|e| StoreError::FileWriteError(e.to_string()))?;
    Ok(last[0] == b'\n')
}
