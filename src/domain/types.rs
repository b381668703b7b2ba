// ==========================================
// 车间任务排产系统 - 领域类型定义
// ==========================================
// 依据: Scheduler_Engine_Specs_v1.2.md - 0.2 冲突与严重度体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 冲突严重度 (Severity)
// ==========================================
// 红线: 严重度是等级制,扣分规则由配置决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,     // 提示
    Warning,  // 警告
    Critical, // 严重
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 冲突类型 (Conflict Type)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与展示层约定一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictType {
    Overlap,          // 时段重叠
    CapacityExceeded, // 产能不足
    DueDateAtRisk,    // 交期风险
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictType::Overlap => write!(f, "OVERLAP"),
            ConflictType::CapacityExceeded => write!(f, "CAPACITY_EXCEEDED"),
            ConflictType::DueDateAtRisk => write!(f, "DUE_DATE_AT_RISK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }

    #[test]
    fn test_conflict_type_serde_format() {
        let json = serde_json::to_string(&ConflictType::DueDateAtRisk).unwrap();
        assert_eq!(json, "\"DUE_DATE_AT_RISK\"");
    }
}
