// ==========================================
// 车间任务排产系统 - 置信度评分引擎
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 4.5 Confidence Scorer
// ==========================================
// 职责: 对照交期与冲突情况产出 0-100 置信度与优化提示
// 输入: 分配结果 + 已收集告警 + 交期
// 输出: 置信度 + 交期风险告警 (补充) + 优化提示
// ==========================================
// 红线: 告警越多越重 / 交期超出越久, 置信度必须单调下降
// 红线: 优化提示仅供参考, 不参与评分
// ==========================================

use crate::config::SchedulerConfig;
use crate::domain::suggestion::{ConflictWarning, ScheduledAssignment};
use crate::domain::types::{ConflictType, Severity};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::instrument;

// ==========================================
// ConfidenceScorer - 置信度评分引擎
// ==========================================
pub struct ConfidenceScorer {
    info_penalty: u32,
    warning_penalty: u32,
    critical_penalty: u32,
    overrun_penalty_per_day: u32,
    slack_days: i64,
}

impl ConfidenceScorer {
    /// 由排程配置构造
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            info_penalty: config.info_penalty,
            warning_penalty: config.warning_penalty,
            critical_penalty: config.critical_penalty,
            overrun_penalty_per_day: config.overrun_penalty_per_day,
            slack_days: config.due_date_slack_days,
        }
    }

    /// 评估排程置信度
    ///
    /// 规则 (依据 Scheduler_Engine_Specs 4.5):
    /// 1) 基准 100 分
    /// 2) 每条告警按严重度扣分 (INFO/WARNING/CRITICAL 分档)
    /// 3) 完工晚于交期时补充交期风险告警 (超出宽限升级 CRITICAL),
    ///    该告警同样参与扣分, 另按超出天数追加扣分
    /// 4) 下限 0 分
    ///
    /// # 返回
    /// (置信度, 优化提示列表)
    #[instrument(skip_all, fields(assignments = assignments.len(), warnings = warnings.len()))]
    pub fn score(
        &self,
        assignments: &[ScheduledAssignment],
        warnings: &mut Vec<ConflictWarning>,
        due_date: NaiveDate,
    ) -> (u8, Vec<String>) {
        // 1. 交期风险判定
        let schedule_end = assignments.iter().map(|a| a.interval.end()).max();
        let overrun_days = schedule_end
            .map(|end| (end.date() - due_date).num_days().max(0))
            .unwrap_or(0);

        if overrun_days > 0 {
            let severity = if overrun_days > self.slack_days {
                Severity::Critical
            } else {
                Severity::Warning
            };
            let last_operation_ids = assignments
                .last()
                .map(|a| vec![a.operation_id.clone()])
                .unwrap_or_default();
            warnings.push(ConflictWarning {
                conflict_type: ConflictType::DueDateAtRisk,
                severity,
                message: format!(
                    "交期风险: 预计完工超出交期 {} 天 (交期 {})",
                    overrun_days, due_date
                ),
                affected_operation_ids: last_operation_ids,
                suggested_resolution: Some(
                    "建议提前开工、加急处理或与客户协商顺延交期".to_string(),
                ),
            });
        }

        // 2. 告警扣分 + 交期超出扣分
        let warning_penalty: i64 = warnings
            .iter()
            .map(|w| {
                i64::from(match w.severity {
                    Severity::Info => self.info_penalty,
                    Severity::Warning => self.warning_penalty,
                    Severity::Critical => self.critical_penalty,
                })
            })
            .sum();
        let overrun_penalty = overrun_days * i64::from(self.overrun_penalty_per_day);
        let score = (100 - warning_penalty - overrun_penalty).clamp(0, 100) as u8;

        // 3. 优化提示
        let notes = self.optimization_notes(assignments, due_date, overrun_days);

        (score, notes)
    }

    /// 生成优化提示 (仅参考)
    fn optimization_notes(
        &self,
        assignments: &[ScheduledAssignment],
        due_date: NaiveDate,
        overrun_days: i64,
    ) -> Vec<String> {
        let mut notes = Vec::new();
        if assignments.is_empty() {
            return notes;
        }

        // 工作中心压缩提示
        let centers: BTreeSet<&str> = assignments
            .iter()
            .map(|a| a.work_center_id.as_str())
            .collect();
        if assignments.len() > centers.len() {
            notes.push(format!(
                "排程压缩至 {} 个工作中心执行 {} 道工序",
                centers.len(),
                assignments.len()
            ));
        }

        // 瓶颈工序提示: 单道工序占总工时一半以上
        let total_min: i64 = assignments.iter().map(|a| a.estimated_duration_min).sum();
        if assignments.len() > 1 && total_min > 0 {
            if let Some(longest) = assignments.iter().max_by_key(|a| a.estimated_duration_min) {
                if longest.estimated_duration_min * 2 >= total_min {
                    notes.push(format!(
                        "工序 {} 是排程瓶颈 (占总工时 {}%)",
                        longest.operation_name,
                        longest.estimated_duration_min * 100 / total_min
                    ));
                }
            }
        }

        // 交期余量提示
        if overrun_days == 0 {
            if let Some(end) = assignments.iter().map(|a| a.interval.end()).max() {
                let slack = (due_date - end.date()).num_days();
                if slack >= 1 {
                    notes.push(format!("完工时间早于交期 {} 天", slack));
                }
            }
        }

        notes
    }
}
