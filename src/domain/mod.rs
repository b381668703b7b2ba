// ==========================================
// 车间任务排产系统 - 领域模型层
// ==========================================
// 依据: Job_Track_Master_Spec.md - PART C 数据与状态体系
// 依据: Scheduler_Engine_Specs_v1.2.md - 3. 数据模型
// ==========================================
// 职责: 定义领域实体、值对象与类型
// 红线: 不含数据访问逻辑, 不含引擎逻辑
// ==========================================

pub mod interval;
pub mod job;
pub mod suggestion;
pub mod types;
pub mod work_center;

// 重导出核心类型
pub use interval::{Interval, InvalidInterval};
pub use job::{Job, LineItem, Operation};
pub use suggestion::{ConflictWarning, ScheduledAssignment, SchedulingSuggestion};
pub use types::{ConflictType, Severity};
pub use work_center::{Booking, BookingLedger, WorkCenter};
