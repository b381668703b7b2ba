// ==========================================
// 车间任务排产系统 - 工单领域模型
// ==========================================
// 依据: Job_Track_Master_Spec.md - PART B 工单与工序
// 依据: Scheduler_Engine_Specs_v1.2.md - 3. 数据模型
// ==========================================
// 红线: 工序在单次排程运行内不可变
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Operation - 工序
// ==========================================
// 用途: 工单内一道有序的制造步骤
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: String,                  // 工序ID
    pub name: String,                // 工序名称
    pub sequence_order: u32,         // 工序序号 (工单内唯一, 从1起)
    pub estimated_duration_min: i64, // 预计工时 (分钟, >0)

    /// 首选工作中心 (缺省时由分配器按技能匹配选取)
    #[serde(default)]
    pub preferred_work_center_id: Option<String>,

    /// 技能要求标签集合 (与工作中心能力标签做子集匹配)
    #[serde(default)]
    pub skill_requirements: BTreeSet<String>,
}

// ==========================================
// Job - 工单
// ==========================================
// 说明: priority_level 仅供展示参考, 不改变工序放置顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String, // 工单ID

    /// 交期 (缺省时按配置回退为 now + default_due_days)
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    /// 工序列表 (未排序亦可, 引擎按 sequence_order 整序)
    pub operations: Vec<Operation>,

    /// 优先级 (仅参考)
    #[serde(default)]
    pub priority_level: i32,

    /// 数量
    #[serde(default)]
    pub quantity: u32,
}

// ==========================================
// LineItem - 报价行项
// ==========================================
// 用途: 工单由报价生成且无显式工艺路线时, 作为默认工序生成的输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,          // 行项ID
    pub description: String, // 行项描述
    pub quantity: u32,       // 数量
}
