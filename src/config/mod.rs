// ==========================================
// 车间任务排产系统 - 配置层
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 11. 配置项全集
// ==========================================
// 职责: 排程参数管理, 支持 JSON 局部覆写
// ==========================================

pub mod scheduler_config;

// 重导出核心配置
pub use scheduler_config::SchedulerConfig;
