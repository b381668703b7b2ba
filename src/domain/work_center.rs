// ==========================================
// 车间任务排产系统 - 工作中心领域模型
// ==========================================
// 依据: Job_Track_Master_Spec.md - PART B3 工作中心与产能
// 依据: Scheduler_Engine_Specs_v1.2.md - 3. 数据模型
// ==========================================
// 红线: 工作中心是只读参考数据, 引擎不修改
// 红线: 已提交占用与本次运行新增占用同等对待
// ==========================================

use crate::domain::interval::Interval;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// ==========================================
// WorkCenter - 工作中心
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCenter {
    pub id: String,                  // 工作中心ID
    pub name: String,                // 工作中心名称
    pub capacity_hours_per_day: f64, // 每日有效工时 (小时, >0)
    pub is_active: bool,             // 是否启用

    /// 能力标签集合 (显式声明, 供工序技能要求做子集匹配)
    #[serde(default)]
    pub skill_tags: BTreeSet<String>,
}

impl WorkCenter {
    /// 每日工作窗口长度 (分钟)
    pub fn daily_window_minutes(&self) -> i64 {
        (self.capacity_hours_per_day * 60.0).round() as i64
    }

    /// 能力标签是否覆盖工序技能要求 (子集包含)
    pub fn covers(&self, requirements: &BTreeSet<String>) -> bool {
        requirements.is_subset(&self.skill_tags)
    }
}

// ==========================================
// Booking - 时段占用
// ==========================================
// 用途: 既有已提交占用 (来自其他工单) 或本次运行新产生的占用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub work_center_id: String, // 工作中心ID
    pub interval: Interval,     // 占用时段
}

// ==========================================
// BookingLedger - 占用台账
// ==========================================
// 用途: 单次排程运行内的占用视图; 由既有占用快照播种,
//       分配器每次放置后立即记入, 使后续工序视其为已提交
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    by_center: HashMap<String, Vec<Interval>>,
}

impl BookingLedger {
    /// 由既有占用快照构建台账
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let mut ledger = Self::default();
        for booking in bookings {
            ledger.record(&booking.work_center_id, booking.interval);
        }
        ledger
    }

    /// 记录一次占用 (维持按开始时间升序)
    pub fn record(&mut self, work_center_id: &str, interval: Interval) {
        let slots = self.by_center.entry(work_center_id.to_string()).or_default();
        let pos = slots.partition_point(|iv| iv.start() <= interval.start());
        slots.insert(pos, interval);
    }

    /// 指定工作中心的占用列表 (按开始时间升序)
    pub fn intervals_for(&self, work_center_id: &str) -> &[Interval] {
        self.by_center
            .get(work_center_id)
            .map(|slots| slots.as_slice())
            .unwrap_or(&[])
    }

    /// 指定工作中心的已占用总分钟数 (最少负载选择的并列裁决依据)
    pub fn booked_minutes(&self, work_center_id: &str) -> i64 {
        self.intervals_for(work_center_id)
            .iter()
            .map(Interval::duration_minutes)
            .sum()
    }
}
