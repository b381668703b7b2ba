// ==========================================
// 车间任务排产系统 - 引擎层错误类型
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 7. 错误处理设计
// 工具: thiserror 派生宏
// ==========================================
// 红线: 校验错误整单拒绝, 绝不输出部分结果
// 红线: 可行性问题 (产能不足/交期超出) 永不报错,
//       降级为冲突告警 + 兜底放置
// ==========================================

use crate::domain::interval::InvalidInterval;
use thiserror::Error;

/// 排程引擎错误类型 (全部为校验错误)
#[derive(Error, Debug)]
pub enum ScheduleError {
    // ===== 输入校验错误 =====
    #[error("工单 {job_id} 未定义任何工序")]
    NoOperationsDefined { job_id: String },

    #[error("工序序号重复: sequence_order={sequence_order}, 涉及工序 {operation_ids:?}")]
    DuplicateSequenceOrder {
        sequence_order: u32,
        operation_ids: Vec<String>,
    },

    #[error(transparent)]
    InvalidInterval(#[from] InvalidInterval),

    // ===== 参考数据校验错误 =====
    #[error("没有可用的工作中心 (全部停用或未提供)")]
    NoActiveWorkCenters,
}
