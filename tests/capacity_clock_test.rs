// ==========================================
// CapacityClock 引擎集成测试
// ==========================================
// 测试目标: 验证每日工作窗口内的贪心首次适配搜索
// 覆盖范围: 窗口对齐、占用避让、跨日滚动、展望期兜底
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use job_shop_aps::config::SchedulerConfig;
use job_shop_aps::domain::{Interval, WorkCenter};
use job_shop_aps::engine::{CapacityClock, SlotSearch};
use std::collections::BTreeSet;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的工作中心
fn create_test_work_center(id: &str, capacity_hours: f64) -> WorkCenter {
    WorkCenter {
        id: id.to_string(),
        name: format!("工作中心-{}", id),
        capacity_hours_per_day: capacity_hours,
        is_active: true,
        skill_tags: BTreeSet::new(),
    }
}

/// 2026年3月的指定时刻
fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn iv(start: NaiveDateTime, end: NaiveDateTime) -> Interval {
    Interval::new(start, end).unwrap()
}

// ==========================================
// 测试 1: 窗口对齐
// ==========================================

#[test]
fn test_aligns_to_window_start_before_working_hours() {
    let clock = CapacityClock::new(&SchedulerConfig::default());
    let center = create_test_work_center("WC-01", 8.0);

    // 凌晨请求 → 对齐到当日 08:00 开工
    let result = clock.find_slot(&center, 120, at(2, 5, 0), &[]).unwrap();
    assert_eq!(result, SlotSearch::Found(iv(at(2, 8, 0), at(2, 10, 0))));
}

#[test]
fn test_starts_at_not_before_inside_window() {
    let clock = CapacityClock::new(&SchedulerConfig::default());
    let center = create_test_work_center("WC-01", 8.0);

    let result = clock.find_slot(&center, 60, at(2, 10, 30), &[]).unwrap();
    assert_eq!(result, SlotSearch::Found(iv(at(2, 10, 30), at(2, 11, 30))));
}

// ==========================================
// 测试 2: 占用避让
// ==========================================

#[test]
fn test_skips_chain_of_bookings() {
    let clock = CapacityClock::new(&SchedulerConfig::default());
    let center = create_test_work_center("WC-01", 8.0);
    let booked = vec![
        iv(at(2, 8, 0), at(2, 9, 0)),
        iv(at(2, 9, 30), at(2, 11, 0)),
    ];

    // 08:00 放不下 (与第一条冲突), 09:00 放不下 (与第二条冲突), 11:00 可用
    let result = clock.find_slot(&center, 90, at(2, 8, 0), &booked).unwrap();
    assert_eq!(result, SlotSearch::Found(iv(at(2, 11, 0), at(2, 12, 30))));
}

#[test]
fn test_fits_gap_between_bookings_half_open() {
    let clock = CapacityClock::new(&SchedulerConfig::default());
    let center = create_test_work_center("WC-01", 8.0);
    let booked = vec![
        iv(at(2, 8, 0), at(2, 9, 0)),
        iv(at(2, 10, 0), at(2, 12, 0)),
    ];

    // 恰好 60 分钟的空档, 端点相接不算重叠
    let result = clock.find_slot(&center, 60, at(2, 8, 0), &booked).unwrap();
    assert_eq!(result, SlotSearch::Found(iv(at(2, 9, 0), at(2, 10, 0))));
}

// ==========================================
// 测试 3: 跨日滚动
// ==========================================

#[test]
fn test_rolls_over_when_remaining_window_too_small() {
    let clock = CapacityClock::new(&SchedulerConfig::default());
    let center = create_test_work_center("WC-01", 8.0);

    // 14:00 起剩余窗口 120 分钟, 放不下 240 分钟 → 次日 08:00
    let result = clock.find_slot(&center, 240, at(2, 14, 0), &[]).unwrap();
    assert_eq!(result, SlotSearch::Found(iv(at(3, 8, 0), at(3, 12, 0))));
}

#[test]
fn test_scans_past_fully_booked_days() {
    let clock = CapacityClock::new(&SchedulerConfig::default());
    let center = create_test_work_center("WC-01", 8.0);
    // 连续 3 个工作日全满
    let booked = vec![
        iv(at(2, 8, 0), at(2, 16, 0)),
        iv(at(3, 8, 0), at(3, 16, 0)),
        iv(at(4, 8, 0), at(4, 16, 0)),
    ];

    let result = clock.find_slot(&center, 60, at(2, 8, 0), &booked).unwrap();
    assert_eq!(result, SlotSearch::Found(iv(at(5, 8, 0), at(5, 9, 0))));
}

// ==========================================
// 测试 4: 展望期兜底
// ==========================================

#[test]
fn test_horizon_exhausted_is_not_an_error() {
    let config = SchedulerConfig {
        horizon_days: 5,
        ..SchedulerConfig::default()
    };
    let clock = CapacityClock::new(&config);
    let center = create_test_work_center("WC-01", 4.0);

    // 窗口仅 4 小时, 300 分钟永远放不进 → 边界兜底而非报错
    let result = clock.find_slot(&center, 300, at(2, 8, 0), &[]).unwrap();
    assert!(!result.is_found());
    assert_eq!(result.interval().start(), at(7, 8, 0));
    assert_eq!(result.interval().duration_minutes(), 300);
}

// ==========================================
// 测试 5: 确定性
// ==========================================

#[test]
fn test_same_inputs_same_slot() {
    let clock = CapacityClock::new(&SchedulerConfig::default());
    let center = create_test_work_center("WC-01", 8.0);
    let booked = vec![iv(at(2, 9, 0), at(2, 10, 0))];

    let first = clock.find_slot(&center, 90, at(2, 8, 0), &booked).unwrap();
    let second = clock.find_slot(&center, 90, at(2, 8, 0), &booked).unwrap();
    assert_eq!(first, second);
}
