// ==========================================
// 车间任务排产系统 - CLI 主入口
// ==========================================
// 依据: Job_Track_Master_Spec.md
// 用途: 读取 JSON 排程场景, 运行引擎, 输出排程建议
// 说明: 引擎本身不做 I/O, 文件读取只发生在本入口
// ==========================================

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use job_shop_aps::config::SchedulerConfig;
use job_shop_aps::domain::{Booking, Job, WorkCenter};
use job_shop_aps::engine::{SchedulingContext, SchedulingEngine};
use job_shop_aps::logging;
use serde::Deserialize;

/// 排程场景文件 (JSON)
///
/// config 可整体省略或局部覆写; existing_bookings 可省略
#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    config: SchedulerConfig,
    job: Job,
    work_centers: Vec<WorkCenter>,
    #[serde(default)]
    existing_bookings: Vec<Booking>,
    now: NaiveDateTime,
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 排程决策支持", job_shop_aps::APP_NAME);
    tracing::info!("系统版本: {}", job_shop_aps::VERSION);
    tracing::info!("==================================================");

    let path = std::env::args()
        .nth(1)
        .context("用法: job-shop-aps <scenario.json>")?;

    let raw = std::fs::read_to_string(&path).with_context(|| format!("无法读取场景文件: {}", path))?;
    let scenario: Scenario = serde_json::from_str(&raw).context("场景文件解析失败")?;

    tracing::info!(
        job_id = %scenario.job.id,
        operations = scenario.job.operations.len(),
        work_centers = scenario.work_centers.len(),
        "场景加载完成"
    );

    let engine = SchedulingEngine::new(scenario.config);
    let context = SchedulingContext {
        work_centers: scenario.work_centers,
        existing_bookings: scenario.existing_bookings,
        now: scenario.now,
    };

    let suggestion = engine
        .generate_scheduling_suggestions(&scenario.job, &context)
        .context("排程建议生成失败")?;

    println!("{}", serde_json::to_string_pretty(&suggestion)?);
    Ok(())
}
