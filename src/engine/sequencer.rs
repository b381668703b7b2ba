// ==========================================
// 车间任务排产系统 - 工序排序引擎
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 4.3 Operation Sequencer
// ==========================================
// 职责: 按工序序号升序产出分配器的迭代顺序
// 红线: 序号在工单内必须唯一, 重复即整单拒绝
// ==========================================

use crate::domain::job::Operation;
use crate::engine::error::ScheduleError;
use tracing::instrument;

// ==========================================
// OperationSequencer - 工序排序引擎
// ==========================================
pub struct OperationSequencer {
    // 无状态引擎, 不需要注入依赖
}

impl OperationSequencer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 按 sequence_order 升序整序
    ///
    /// 序号已是全序, 无需额外并列裁决
    ///
    /// # 返回
    /// - `Ok(Vec<Operation>)`: 升序工序列表
    /// - `Err(DuplicateSequenceOrder)`: 同一序号出现多道工序
    #[instrument(skip(self, operations), fields(count = operations.len()))]
    pub fn sequence(&self, operations: &[Operation]) -> Result<Vec<Operation>, ScheduleError> {
        let mut ordered: Vec<Operation> = operations.to_vec();
        ordered.sort_by_key(|op| op.sequence_order);

        for pair in ordered.windows(2) {
            if pair[0].sequence_order == pair[1].sequence_order {
                let sequence_order = pair[0].sequence_order;
                let operation_ids = ordered
                    .iter()
                    .filter(|op| op.sequence_order == sequence_order)
                    .map(|op| op.id.clone())
                    .collect();
                return Err(ScheduleError::DuplicateSequenceOrder {
                    sequence_order,
                    operation_ids,
                });
            }
        }

        Ok(ordered)
    }
}
