// ==========================================
// 车间任务排产系统 - 排程引擎门面
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 4.6 Scheduling Engine Facade
// 用途: 协调排序/分配/冲突/评分四大引擎的执行顺序
// ==========================================
// 红线: 单次运行是纯计算; 全部外部状态经 SchedulingContext 显式传入,
//       引擎不持有跨调用状态, 相同输入必得相同分配
// 红线: 建议要么整单拒绝 (校验失败), 要么完整返回并逐条列明告警
// ==========================================

use crate::config::SchedulerConfig;
use crate::domain::job::{Job, LineItem, Operation};
use crate::domain::suggestion::SchedulingSuggestion;
use crate::domain::work_center::{Booking, WorkCenter};
use crate::engine::allocator::{AllocationOutcome, WorkCenterAllocator};
use crate::engine::confidence::ConfidenceScorer;
use crate::engine::conflict::ConflictDetector;
use crate::engine::error::ScheduleError;
use crate::engine::sequencer::OperationSequencer;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// SchedulingContext - 排程上下文
// ==========================================
// 单次调用所需的全部外部状态快照; 由调用方在事务内读取后传入,
// 快照读取与新占用落库之间的互斥由调用方保证
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingContext {
    /// 工作中心参考数据
    pub work_centers: Vec<WorkCenter>,

    /// 相关工作中心的既有已提交占用
    #[serde(default)]
    pub existing_bookings: Vec<Booking>,

    /// 排程时刻 (首道工序的最早开工时刻, 亦是交期回退基准)
    pub now: NaiveDateTime,
}

// ==========================================
// SchedulingEngine - 排程引擎门面
// ==========================================
pub struct SchedulingEngine {
    config: SchedulerConfig,
    sequencer: OperationSequencer,
    allocator: WorkCenterAllocator,
    detector: ConflictDetector,
    scorer: ConfidenceScorer,
}

impl SchedulingEngine {
    /// 创建新的排程引擎实例
    ///
    /// # 参数
    /// - `config`: 排程参数
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            sequencer: OperationSequencer::new(),
            allocator: WorkCenterAllocator::new(&config),
            detector: ConflictDetector::new(&config),
            scorer: ConfidenceScorer::new(&config),
            config,
        }
    }

    /// 生成排程建议 (单工单)
    ///
    /// 流程: 校验 → 工序排序 → 工作中心分配 → 冲突审计 → 置信度评分
    ///
    /// # 参数
    /// - `job`: 工单 (工序列表 + 交期 + 优先级)
    /// - `context`: 本次调用的外部状态快照
    ///
    /// # 返回
    /// - `Ok(SchedulingSuggestion)`: 完整建议 (可行性问题已降级为告警)
    /// - `Err(ScheduleError)`: 校验失败, 整单拒绝
    #[instrument(skip(self, job, context), fields(
        job_id = %job.id,
        operations = job.operations.len()
    ))]
    pub fn generate_scheduling_suggestions(
        &self,
        job: &Job,
        context: &SchedulingContext,
    ) -> Result<SchedulingSuggestion, ScheduleError> {
        info!("开始生成排程建议");

        // ==========================================
        // 步骤0: 输入校验
        // ==========================================
        if job.operations.is_empty() {
            return Err(ScheduleError::NoOperationsDefined {
                job_id: job.id.clone(),
            });
        }

        // 交期缺省回退
        let due_date = job
            .due_date
            .unwrap_or(context.now.date() + Duration::days(self.config.default_due_days));

        // ==========================================
        // 步骤1: 工序排序
        // ==========================================
        debug!("步骤1: 按工序序号整序");
        let ordered = self.sequencer.sequence(&job.operations)?;

        // ==========================================
        // 步骤2: 工作中心分配
        // ==========================================
        debug!("步骤2: 分配工作中心与时段");
        let AllocationOutcome {
            mut assignments,
            mut warnings,
        } = self.allocator.allocate(
            &ordered,
            &context.work_centers,
            &context.existing_bookings,
            context.now,
        )?;

        // ==========================================
        // 步骤3: 冲突审计
        // ==========================================
        debug!("步骤3: 冲突检测");
        warnings.extend(self.detector.detect(
            &assignments,
            &context.work_centers,
            &context.existing_bookings,
        ));

        // ==========================================
        // 步骤4: 置信度评分
        // ==========================================
        debug!("步骤4: 置信度评分");
        let (confidence_score, optimization_notes) =
            self.scorer.score(&assignments, &mut warnings, due_date);

        // 按时段开始时间全序输出
        assignments.sort_by_key(|a| a.interval.start());

        info!(
            confidence_score,
            warnings = warnings.len(),
            due_date = %due_date,
            "排程建议生成完成"
        );

        Ok(SchedulingSuggestion {
            suggestion_id: Uuid::new_v4().to_string(),
            job_id: job.id.clone(),
            assignments,
            confidence_score,
            conflict_warnings: warnings,
            optimization_notes,
        })
    }

    /// 由报价行项生成默认工序路线
    ///
    /// 策略 (确定性, 依据 Scheduler_Engine_Specs 4.6):
    /// 1) 每个行项一道生产工序, 工时 = 基础工时 + 单件工时 × 数量
    /// 2) 末尾追加一道共享质检工序
    /// 3) 序号按行项顺序从 1 递增, 质检最后
    /// 4) 工序 ID 由行项 ID 派生, 不引入随机性
    #[instrument(skip(self, line_items), fields(line_items = line_items.len()))]
    pub fn generate_operations_from_line_items(&self, line_items: &[LineItem]) -> Vec<Operation> {
        let mut operations = Vec::with_capacity(line_items.len() + 1);

        for (index, item) in line_items.iter().enumerate() {
            let sequence_order = index as u32 + 1;
            operations.push(Operation {
                id: format!("{}-OP{}", item.id, sequence_order),
                name: format!("生产加工: {}", item.description),
                sequence_order,
                estimated_duration_min: self.config.base_production_minutes
                    + self.config.minutes_per_unit * i64::from(item.quantity),
                preferred_work_center_id: None,
                skill_requirements: BTreeSet::new(),
            });
        }

        if !line_items.is_empty() {
            let sequence_order = line_items.len() as u32 + 1;
            operations.push(Operation {
                id: format!("QC-OP{}", sequence_order),
                name: "质量检验".to_string(),
                sequence_order,
                estimated_duration_min: self.config.inspection_minutes,
                preferred_work_center_id: None,
                skill_requirements: BTreeSet::new(),
            });
        }

        operations
    }
}
