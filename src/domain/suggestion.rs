// ==========================================
// 车间任务排产系统 - 排程建议领域模型
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 3. 数据模型 / 输出契约
// 红线: 建议只是方案快照, 由调用方落库为已提交占用
// ==========================================

use crate::domain::interval::Interval;
use crate::domain::types::{ConflictType, Severity};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// ScheduledAssignment - 工序排程分配
// ==========================================
// 每道输入工序恰有一条; 整体按时段开始时间全序输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAssignment {
    pub operation_id: String,        // 工序ID
    pub operation_name: String,      // 工序名称
    pub work_center_id: String,      // 分配的工作中心
    pub interval: Interval,          // 分配的时段
    pub estimated_duration_min: i64, // 预计工时 (分钟)
}

// ==========================================
// ConflictWarning - 冲突告警
// ==========================================
// 红线: 可行性问题永不中断运行, 全部降级为告警供人工裁决
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWarning {
    pub conflict_type: ConflictType,         // 冲突类型
    pub severity: Severity,                  // 严重度
    pub message: String,                     // 可读说明
    pub affected_operation_ids: Vec<String>, // 涉及工序

    /// 处置建议 (可选)
    #[serde(default)]
    pub suggested_resolution: Option<String>,
}

// ==========================================
// SchedulingSuggestion - 排程建议
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingSuggestion {
    pub suggestion_id: String,                  // 建议ID (uuid)
    pub job_id: String,                         // 工单ID
    pub assignments: Vec<ScheduledAssignment>,  // 分配结果 (按开始时间升序)
    pub confidence_score: u8,                   // 置信度 (0-100)
    pub conflict_warnings: Vec<ConflictWarning>, // 冲突告警
    pub optimization_notes: Vec<String>,        // 优化提示 (仅参考, 不参与评分)
}

impl SchedulingSuggestion {
    /// 预计完工时刻 (最后一条分配的结束时间)
    pub fn schedule_end(&self) -> Option<NaiveDateTime> {
        self.assignments.iter().map(|a| a.interval.end()).max()
    }

    /// 是否含严重告警
    pub fn has_critical_warnings(&self) -> bool {
        self.conflict_warnings
            .iter()
            .any(|w| w.severity == Severity::Critical)
    }
}
