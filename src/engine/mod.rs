// ==========================================
// 车间任务排产系统 - 引擎层
// ==========================================
// 依据: Job_Track_Master_Spec.md - PART D 引擎体系
// 依据: Scheduler_Engine_Specs_v1.2.md - 2. 模块拆分
// ==========================================
// 职责: 实现排程业务规则引擎, 不做任何 I/O
// 红线: 引擎无跨调用状态, 所有降级决策必须输出可读告警
// ==========================================

pub mod allocator;
pub mod capacity_clock;
pub mod confidence;
pub mod conflict;
pub mod error;
pub mod orchestrator;
pub mod sequencer;

// 重导出核心引擎
pub use allocator::{AllocationOutcome, WorkCenterAllocator};
pub use capacity_clock::{CapacityClock, SlotSearch};
pub use confidence::ConfidenceScorer;
pub use conflict::ConflictDetector;
pub use error::ScheduleError;
pub use orchestrator::{SchedulingContext, SchedulingEngine};
pub use sequencer::OperationSequencer;
