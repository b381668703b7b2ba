// ==========================================
// 车间任务排产系统 - 排程参数配置
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 11. 配置项全集
// ==========================================
// 职责: 排程引擎全部可调参数, 每字段带缺省值
// 说明: 引擎无跨调用状态, 配置随引擎实例注入
// ==========================================

use serde::{Deserialize, Serialize};

/// 排程引擎参数
///
/// 所有字段支持 JSON 局部覆写 (`#[serde(default)]`), 未提供的字段取缺省值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// 每日工作窗口锚点小时 (0-23, 缺省 08:00 开工)
    pub day_anchor_hour: u32,

    /// 时段搜索展望期 (天), 超出即产能不足兜底
    pub horizon_days: i64,

    /// 交期缺省回退天数 (工单未填交期时取 now + N 天)
    pub default_due_days: i64,

    /// 交期超出宽限 (天), 超出宽限的交期风险升级为 CRITICAL
    pub due_date_slack_days: i64,

    /// 交期每超出一天的扣分
    pub overrun_penalty_per_day: u32,

    /// INFO 级告警扣分
    pub info_penalty: u32,

    /// WARNING 级告警扣分
    pub warning_penalty: u32,

    /// CRITICAL 级告警扣分
    pub critical_penalty: u32,

    /// 行项生产工序基础工时 (分钟)
    pub base_production_minutes: i64,

    /// 行项生产工序单件工时 (分钟/件)
    pub minutes_per_unit: i64,

    /// 末道质检工序工时 (分钟)
    pub inspection_minutes: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            day_anchor_hour: 8,
            horizon_days: 90,
            default_due_days: 14,
            due_date_slack_days: 2,
            overrun_penalty_per_day: 5,
            info_penalty: 2,
            warning_penalty: 10,
            critical_penalty: 25,
            base_production_minutes: 30,
            minutes_per_unit: 15,
            inspection_minutes: 60,
        }
    }
}

impl SchedulerConfig {
    /// 从 JSON 字符串加载配置 (允许局部字段)
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
