// ==========================================
// 车间任务排产系统 - 冲突检测引擎
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 2. Conflict Detector
// ==========================================
// 职责: 对完成的分配结果做软审计, 输出带严重度的冲突告警
// 输入: 本次分配结果 + 工作中心参考数据 + 既有占用快照
// 输出: 冲突告警列表 (仅提示, 不强制调整)
// ==========================================
// 红线: 正常分配路径不会产生重叠, 本引擎兜住兜底放置的后果,
//       保证降级结果逐条可见而非静默错误
// ==========================================

use crate::config::SchedulerConfig;
use crate::domain::suggestion::{ConflictWarning, ScheduledAssignment};
use crate::domain::types::{ConflictType, Severity};
use crate::domain::work_center::{Booking, WorkCenter};
use crate::engine::capacity_clock::CapacityClock;
use std::collections::HashMap;
use tracing::instrument;

// ==========================================
// ConflictDetector - 冲突检测引擎
// ==========================================
pub struct ConflictDetector {
    clock: CapacityClock, // 工作窗口的唯一权威
}

impl ConflictDetector {
    /// 由排程配置构造
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            clock: CapacityClock::new(config),
        }
    }

    /// 冲突审计
    ///
    /// 检查项:
    /// 1) 本次分配之间在同一工作中心的时段重叠 → CRITICAL
    /// 2) 本次分配与既有已提交占用的时段重叠 → CRITICAL
    /// 3) 分配越出当日工作窗口 → WARNING (仅兜底放置会触发)
    #[instrument(skip_all, fields(assignments = assignments.len()))]
    pub fn detect(
        &self,
        assignments: &[ScheduledAssignment],
        work_centers: &[WorkCenter],
        existing_bookings: &[Booking],
    ) -> Vec<ConflictWarning> {
        let mut warnings = Vec::new();

        // 1) 运行内重叠
        for (index, left) in assignments.iter().enumerate() {
            for right in &assignments[index + 1..] {
                if left.work_center_id == right.work_center_id
                    && left.interval.overlaps(&right.interval)
                {
                    warnings.push(ConflictWarning {
                        conflict_type: ConflictType::Overlap,
                        severity: Severity::Critical,
                        message: format!(
                            "时段重叠: 工序 {} 与工序 {} 在工作中心 {} 上时段冲突 ({} / {})",
                            left.operation_name,
                            right.operation_name,
                            left.work_center_id,
                            left.interval,
                            right.interval
                        ),
                        affected_operation_ids: vec![
                            left.operation_id.clone(),
                            right.operation_id.clone(),
                        ],
                        suggested_resolution: Some(
                            "建议人工复核排程或为其中一道工序改派工作中心".to_string(),
                        ),
                    });
                }
            }
        }

        // 2) 与既有占用重叠
        for assignment in assignments {
            for booking in existing_bookings
                .iter()
                .filter(|b| b.work_center_id == assignment.work_center_id)
            {
                if assignment.interval.overlaps(&booking.interval) {
                    warnings.push(ConflictWarning {
                        conflict_type: ConflictType::Overlap,
                        severity: Severity::Critical,
                        message: format!(
                            "与已提交占用重叠: 工序 {} 在工作中心 {} 与既有排程 {} 冲突",
                            assignment.operation_name,
                            assignment.work_center_id,
                            booking.interval
                        ),
                        affected_operation_ids: vec![assignment.operation_id.clone()],
                        suggested_resolution: Some(
                            "建议顺延本工序或与相关工单协调占用时段".to_string(),
                        ),
                    });
                }
            }
        }

        // 3) 工作窗口包含性
        let centers: HashMap<&str, &WorkCenter> =
            work_centers.iter().map(|wc| (wc.id.as_str(), wc)).collect();
        for assignment in assignments {
            let Some(work_center) = centers.get(assignment.work_center_id.as_str()) else {
                continue;
            };
            // 窗口不可构造 (产能参数异常) 时跳过包含性检查
            let Ok(window) = self
                .clock
                .working_window(work_center, assignment.interval.start().date())
            else {
                continue;
            };
            if !window.contains(&assignment.interval) {
                warnings.push(ConflictWarning {
                    conflict_type: ConflictType::CapacityExceeded,
                    severity: Severity::Warning,
                    message: format!(
                        "越出工作时段: 工序 {} 的时段 {} 超出工作中心 {} 当日窗口 {}",
                        assignment.operation_name,
                        assignment.interval,
                        assignment.work_center_id,
                        window
                    ),
                    affected_operation_ids: vec![assignment.operation_id.clone()],
                    suggested_resolution: Some("建议拆分工序或扩充该工作中心日产能".to_string()),
                });
            }
        }

        warnings
    }
}
