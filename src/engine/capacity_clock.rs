// ==========================================
// 车间任务排产系统 - 产能时钟引擎
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 4.2 Capacity Clock
// ==========================================
// 职责: 把 "在工作中心 W 上、不早于 T、需要 N 分钟"
//       映射为落在每日工作窗口内且不与既有占用冲突的具体时段
// 输入: 工作中心 + 工时 + 最早开工时刻 + 已排序占用列表
// 输出: 可用时段, 或展望期耗尽时的边界兜底时段
// ==========================================
// 红线: 贪心首次适配, 给定相同占用集合结果确定
// 红线: 展望期耗尽不报错, 由调用方降级为 critical 告警
// ==========================================

use crate::config::SchedulerConfig;
use crate::domain::interval::{Interval, InvalidInterval};
use crate::domain::work_center::WorkCenter;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{instrument, warn};

// ==========================================
// SlotSearch - 时段搜索结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSearch {
    /// 展望期内找到的可用时段
    Found(Interval),
    /// 展望期耗尽, 返回边界处的兜底时段 (调用方须产生 critical 告警)
    HorizonExhausted(Interval),
}

impl SlotSearch {
    /// 取出时段 (无论是否兜底)
    pub fn interval(&self) -> Interval {
        match self {
            SlotSearch::Found(interval) => *interval,
            SlotSearch::HorizonExhausted(interval) => *interval,
        }
    }

    /// 是否为展望期内的正常命中
    pub fn is_found(&self) -> bool {
        matches!(self, SlotSearch::Found(_))
    }
}

// ==========================================
// CapacityClock - 产能时钟引擎
// ==========================================
pub struct CapacityClock {
    day_anchor: NaiveTime, // 每日工作窗口起点
    horizon_days: i64,     // 搜索展望期 (天)
}

impl CapacityClock {
    /// 由排程配置构造
    pub fn new(config: &SchedulerConfig) -> Self {
        // 锚点小时越界时收敛到 23 点, 不中断构造
        let anchor_hour = config.day_anchor_hour.min(23);
        Self {
            day_anchor: NaiveTime::from_hms_opt(anchor_hour, 0, 0).unwrap_or(NaiveTime::MIN),
            horizon_days: config.horizon_days.max(0),
        }
    }

    /// 指定日期的工作窗口起点
    fn window_start(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.day_anchor)
    }

    /// 工作中心在指定日期的工作窗口
    ///
    /// 窗口为 [锚点, 锚点 + 每日有效工时) 的连续时段
    pub fn working_window(
        &self,
        work_center: &WorkCenter,
        day: NaiveDate,
    ) -> Result<Interval, InvalidInterval> {
        Interval::from_start_duration(self.window_start(day), work_center.daily_window_minutes())
    }

    /// 搜索不早于 not_before 的最早可用时段 (贪心首次适配)
    ///
    /// 算法 (依据 Scheduler_Engine_Specs 4.2):
    /// 1) 候选起点 = max(not_before, 当日窗口起点)
    /// 2) 候选时段与既有占用冲突 → 推进到该占用结束后重试
    /// 3) 候选时段放不进当日窗口 → 滚动到次日窗口起点
    /// 4) 展望期内未命中 → 返回边界窗口处的兜底时段
    ///
    /// # 参数
    /// - `work_center`: 目标工作中心
    /// - `duration_min`: 所需工时 (分钟, <=0 时拒绝为 InvalidInterval)
    /// - `not_before`: 最早允许开工时刻
    /// - `booked`: 该工作中心的既有占用, 必须按开始时间升序
    #[instrument(skip(self, work_center, booked), fields(
        work_center_id = %work_center.id,
        duration_min,
        booked_count = booked.len()
    ))]
    pub fn find_slot(
        &self,
        work_center: &WorkCenter,
        duration_min: i64,
        not_before: NaiveDateTime,
        booked: &[Interval],
    ) -> Result<SlotSearch, InvalidInterval> {
        let mut day = not_before.date();

        for _ in 0..=self.horizon_days {
            let window = self.working_window(work_center, day)?;
            let mut candidate = not_before.max(window.start());

            while candidate + Duration::minutes(duration_min) <= window.end() {
                let slot = Interval::from_start_duration(candidate, duration_min)?;
                match booked.iter().find(|iv| iv.overlaps(&slot)) {
                    // 与既有占用冲突, 推进到占用结束 (重叠保证 end > candidate, 必有进展)
                    Some(hit) => candidate = hit.end(),
                    None => return Ok(SlotSearch::Found(slot)),
                }
            }

            day = day.succ_opt().unwrap_or(day);
        }

        // 展望期耗尽: 在边界窗口起点做兜底放置
        let boundary = self.window_start(not_before.date() + Duration::days(self.horizon_days));
        let slot = Interval::from_start_duration(not_before.max(boundary), duration_min)?;
        warn!(
            work_center_id = %work_center.id,
            horizon_days = self.horizon_days,
            "展望期内未找到可用时段, 返回边界兜底时段"
        );
        Ok(SlotSearch::HorizonExhausted(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn test_center(hours: f64) -> WorkCenter {
        WorkCenter {
            id: "WC-01".to_string(),
            name: "加工中心".to_string(),
            capacity_hours_per_day: hours,
            is_active: true,
            skill_tags: BTreeSet::new(),
        }
    }

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_starts_at_window_when_not_before_is_earlier() {
        let clock = CapacityClock::new(&SchedulerConfig::default());
        let result = clock
            .find_slot(&test_center(8.0), 60, at(2, 6, 0), &[])
            .unwrap();
        assert_eq!(result, SlotSearch::Found(Interval::new(at(2, 8, 0), at(2, 9, 0)).unwrap()));
    }

    #[test]
    fn test_rolls_to_next_day_when_window_passed() {
        let clock = CapacityClock::new(&SchedulerConfig::default());
        // 当日窗口 [08:00, 16:00) 已过
        let result = clock
            .find_slot(&test_center(8.0), 60, at(2, 17, 30), &[])
            .unwrap();
        assert_eq!(result.interval().start(), at(3, 8, 0));
    }

    #[test]
    fn test_advances_past_colliding_booking() {
        let clock = CapacityClock::new(&SchedulerConfig::default());
        let booked = vec![Interval::new(at(2, 8, 0), at(2, 10, 0)).unwrap()];
        let result = clock
            .find_slot(&test_center(8.0), 120, at(2, 8, 0), &booked)
            .unwrap();
        // 端点相接: 占用结束即可开工
        assert_eq!(result, SlotSearch::Found(Interval::new(at(2, 10, 0), at(2, 12, 0)).unwrap()));
    }

    #[test]
    fn test_horizon_exhausted_returns_boundary_slot() {
        let config = SchedulerConfig {
            horizon_days: 3,
            ..SchedulerConfig::default()
        };
        let clock = CapacityClock::new(&config);
        // 窗口仅 8 小时, 600 分钟永远放不进任何一天
        let result = clock
            .find_slot(&test_center(8.0), 600, at(2, 8, 0), &[])
            .unwrap();
        assert!(!result.is_found());
        assert_eq!(result.interval().start(), at(5, 8, 0));
        assert_eq!(result.interval().duration_minutes(), 600);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let clock = CapacityClock::new(&SchedulerConfig::default());
        assert!(clock.find_slot(&test_center(8.0), 0, at(2, 8, 0), &[]).is_err());
    }
}
