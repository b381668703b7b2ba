// ==========================================
// 车间任务排产系统 - 工作中心分配引擎
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 4.4 Work Center Allocator
// ==========================================
// 职责: 逐工序解析目标工作中心并向产能时钟要时段
// 输入: 已整序工序列表 + 工作中心参考数据 + 既有占用快照
// 输出: 分配结果 + 降级告警
// ==========================================
// 红线: 单道工序不可行绝不中断整单, 兜底放置 + critical 告警
// 红线: 每次放置立即记入台账, 后续工序视其为已提交占用
// ==========================================

use crate::config::SchedulerConfig;
use crate::domain::job::Operation;
use crate::domain::suggestion::{ConflictWarning, ScheduledAssignment};
use crate::domain::types::{ConflictType, Severity};
use crate::domain::work_center::{Booking, BookingLedger, WorkCenter};
use crate::engine::capacity_clock::{CapacityClock, SlotSearch};
use crate::engine::error::ScheduleError;
use chrono::NaiveDateTime;
use tracing::{debug, instrument};

// ==========================================
// AllocationOutcome - 分配结果
// ==========================================
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    pub assignments: Vec<ScheduledAssignment>,
    pub warnings: Vec<ConflictWarning>,
}

// ==========================================
// WorkCenterAllocator - 工作中心分配引擎
// ==========================================
pub struct WorkCenterAllocator {
    clock: CapacityClock,
    horizon_days: i64, // 仅用于告警文案
}

impl WorkCenterAllocator {
    /// 由排程配置构造
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            clock: CapacityClock::new(config),
            horizon_days: config.horizon_days,
        }
    }

    /// 逐工序分配工作中心与时段
    ///
    /// 规则 (依据 Scheduler_Engine_Specs 4.4):
    /// 1) earliest_start = max(排程起点, 前道工序结束)
    /// 2) 首选工作中心启用则直接使用; 停用或不存在则回退候选池 (INFO 告警)
    /// 3) 候选池 = 能力标签覆盖技能要求的启用中心, 为空则回退全部
    ///    启用中心 (WARNING 告警); 池内取最早可开工者, 并列时取已占用
    ///    分钟数少者, 再按 ID 升序 (确定性)
    /// 4) 展望期耗尽 → critical 告警 + 边界兜底放置, 继续后续工序
    ///
    /// # 参数
    /// - `operations`: 已按 sequence_order 升序的工序列表
    /// - `work_centers`: 工作中心参考数据
    /// - `existing_bookings`: 既有已提交占用快照
    /// - `schedule_from`: 排程起点 (首道工序的最早开工时刻)
    #[instrument(skip_all, fields(
        operations = operations.len(),
        work_centers = work_centers.len(),
        existing_bookings = existing_bookings.len()
    ))]
    pub fn allocate(
        &self,
        operations: &[Operation],
        work_centers: &[WorkCenter],
        existing_bookings: &[Booking],
        schedule_from: NaiveDateTime,
    ) -> Result<AllocationOutcome, ScheduleError> {
        let active: Vec<&WorkCenter> = work_centers.iter().filter(|wc| wc.is_active).collect();
        if active.is_empty() {
            return Err(ScheduleError::NoActiveWorkCenters);
        }

        let mut ledger = BookingLedger::from_bookings(existing_bookings);
        let mut assignments = Vec::with_capacity(operations.len());
        let mut warnings = Vec::new();
        let mut cursor = schedule_from;

        for operation in operations {
            let (work_center_id, search) =
                self.place(operation, &active, &ledger, cursor, &mut warnings)?;
            let interval = search.interval();

            if !search.is_found() {
                warnings.push(ConflictWarning {
                    conflict_type: ConflictType::CapacityExceeded,
                    severity: Severity::Critical,
                    message: format!(
                        "产能不足: 工序 {} ({}) 在 {} 天展望期内没有可用时段, 已在展望期边界兜底放置",
                        operation.name, operation.id, self.horizon_days
                    ),
                    affected_operation_ids: vec![operation.id.clone()],
                    suggested_resolution: Some(
                        "建议增加产能、放宽交期或将部分工序改派其他工作中心".to_string(),
                    ),
                });
            }

            debug!(
                operation_id = %operation.id,
                work_center_id = %work_center_id,
                start = %interval.start(),
                end = %interval.end(),
                found = search.is_found(),
                "工序已放置"
            );

            ledger.record(&work_center_id, interval);
            cursor = interval.end();
            assignments.push(ScheduledAssignment {
                operation_id: operation.id.clone(),
                operation_name: operation.name.clone(),
                work_center_id,
                interval,
                estimated_duration_min: operation.estimated_duration_min,
            });
        }

        Ok(AllocationOutcome {
            assignments,
            warnings,
        })
    }

    /// 解析目标工作中心并搜索时段
    fn place(
        &self,
        operation: &Operation,
        active: &[&WorkCenter],
        ledger: &BookingLedger,
        earliest_start: NaiveDateTime,
        warnings: &mut Vec<ConflictWarning>,
    ) -> Result<(String, SlotSearch), ScheduleError> {
        // 首选工作中心
        if let Some(preferred_id) = &operation.preferred_work_center_id {
            match active.iter().find(|wc| &wc.id == preferred_id) {
                Some(work_center) => {
                    let search = self.clock.find_slot(
                        work_center,
                        operation.estimated_duration_min,
                        earliest_start,
                        ledger.intervals_for(&work_center.id),
                    )?;
                    return Ok((work_center.id.clone(), search));
                }
                None => warnings.push(ConflictWarning {
                    conflict_type: ConflictType::CapacityExceeded,
                    severity: Severity::Info,
                    message: format!(
                        "首选工作中心 {} 不可用 (停用或不存在), 工序 {} 改由候选池分配",
                        preferred_id, operation.id
                    ),
                    affected_operation_ids: vec![operation.id.clone()],
                    suggested_resolution: None,
                }),
            }
        }

        // 技能匹配候选池
        let mut pool: Vec<&WorkCenter> = active
            .iter()
            .copied()
            .filter(|wc| wc.covers(&operation.skill_requirements))
            .collect();
        if pool.is_empty() {
            warnings.push(ConflictWarning {
                conflict_type: ConflictType::CapacityExceeded,
                severity: Severity::Warning,
                message: format!(
                    "没有启用工作中心满足技能要求 {:?}, 工序 {} 已在全部启用中心内分配",
                    operation.skill_requirements, operation.id
                ),
                affected_operation_ids: vec![operation.id.clone()],
                suggested_resolution: Some("建议为相应工作中心补充能力标签或人工改派".to_string()),
            });
            pool = active.to_vec();
        }
        pool.sort_by(|a, b| a.id.cmp(&b.id));

        // 最少负载策略: 逐中心探测, 取最早可开工者;
        // 并列时取已占用分钟数少者 (ID 升序由迭代顺序保证)
        let mut best: Option<(String, SlotSearch, (bool, NaiveDateTime, i64))> = None;
        for work_center in pool {
            let search = self.clock.find_slot(
                work_center,
                operation.estimated_duration_min,
                earliest_start,
                ledger.intervals_for(&work_center.id),
            )?;
            let key = (
                !search.is_found(), // 正常命中优先于兜底
                search.interval().start(),
                ledger.booked_minutes(&work_center.id),
            );
            let better = match &best {
                Some((_, _, best_key)) => key < *best_key,
                None => true,
            };
            if better {
                best = Some((work_center.id.clone(), search, key));
            }
        }

        match best {
            Some((work_center_id, search, _)) => Ok((work_center_id, search)),
            // active 非空时不可达
            None => Err(ScheduleError::NoActiveWorkCenters),
        }
    }
}
