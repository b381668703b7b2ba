// ==========================================
// 车间任务排产系统 - 核心库
// ==========================================
// 依据: Job_Track_Master_Spec.md - 系统宪法
// 系统定位: 排程决策支持 (人工最终控制权)
// ==========================================
// 红线: 引擎是纯计算, 不做持久化、不做 I/O;
//       占用快照由调用方在事务内读取后显式传入
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排程业务规则
pub mod engine;

// 配置层 - 排程参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ConflictType, Severity};

// 领域实体
pub use domain::{
    Booking, BookingLedger, ConflictWarning, Interval, InvalidInterval, Job, LineItem, Operation,
    ScheduledAssignment, SchedulingSuggestion, WorkCenter,
};

// 引擎
pub use engine::{
    CapacityClock, ConfidenceScorer, ConflictDetector, OperationSequencer, ScheduleError,
    SchedulingContext, SchedulingEngine, SlotSearch, WorkCenterAllocator,
};

// 配置
pub use config::SchedulerConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "车间任务排产引擎";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
