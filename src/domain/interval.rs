// ==========================================
// 车间任务排产系统 - 时间区间值对象
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 4.1 Interval Model
// 红线: 半开区间 [start, end), 端点相接不算重叠
// ==========================================
// 职责: 区间构造校验、时长运算、重叠判定
// 用途: 产能时钟与占用台账的基础构件
// ==========================================

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 非法时间区间错误
///
/// 构造时校验 end > start, 不满足则整单拒绝
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("非法时间区间: start={start}, end={end} (要求 end > start)")]
pub struct InvalidInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

// ==========================================
// Interval - 半开时间区间 [start, end)
// ==========================================
// 字段私有: 仅允许经构造器校验后产生
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Interval {
    /// 由起止时刻构造区间
    ///
    /// # 参数
    /// - `start`: 起始时刻 (含)
    /// - `end`: 结束时刻 (不含)
    ///
    /// # 返回
    /// - `Ok(Interval)`: end > start
    /// - `Err(InvalidInterval)`: end <= start
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, InvalidInterval> {
        if end <= start {
            return Err(InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// 由起始时刻与时长 (分钟) 构造区间
    ///
    /// 时长 <= 0 时等价于 end <= start, 同样拒绝
    pub fn from_start_duration(
        start: NaiveDateTime,
        duration_min: i64,
    ) -> Result<Self, InvalidInterval> {
        Self::new(start, start + Duration::minutes(duration_min))
    }

    /// 起始时刻
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// 结束时刻
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// 区间时长 (分钟)
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// 重叠判定 (半开语义: 端点相接不算重叠)
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// 包含判定: other 完全落在本区间内
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_rejects_end_before_start() {
        assert!(Interval::new(at(1, 10, 0), at(1, 9, 0)).is_err());
        assert!(Interval::new(at(1, 10, 0), at(1, 10, 0)).is_err());
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        assert!(Interval::from_start_duration(at(1, 10, 0), 0).is_err());
        assert!(Interval::from_start_duration(at(1, 10, 0), -30).is_err());
    }

    #[test]
    fn test_duration_minutes() {
        let iv = Interval::from_start_duration(at(1, 8, 0), 240).unwrap();
        assert_eq!(iv.duration_minutes(), 240);
        assert_eq!(iv.end(), at(1, 12, 0));
    }

    #[test]
    fn test_overlaps_half_open() {
        let a = Interval::new(at(1, 8, 0), at(1, 10, 0)).unwrap();
        let b = Interval::new(at(1, 9, 0), at(1, 11, 0)).unwrap();
        let c = Interval::new(at(1, 10, 0), at(1, 12, 0)).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // 端点相接不算重叠
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_contains() {
        let window = Interval::new(at(1, 8, 0), at(1, 16, 0)).unwrap();
        let inside = Interval::new(at(1, 9, 0), at(1, 12, 0)).unwrap();
        let spill = Interval::new(at(1, 15, 0), at(1, 17, 0)).unwrap();
        assert!(window.contains(&inside));
        assert!(window.contains(&window));
        assert!(!window.contains(&spill));
    }
}
