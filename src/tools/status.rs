//! BFI Status Tool
//!
//! Runtime status information and usage instructions for the BFI service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::EstimatorConfig;

/// Body fat estimation instructions for AI assistants
pub const BODY_FAT_INSTRUCTIONS: &str = r#"
# BFI Body Fat Estimation Instructions

This guide explains how to estimate body fat using the Body Fat Index (BFI) tools.

## Required Measurements

| Sex | Required | Notes |
|-----|----------|-------|
| Male | weight, waist | Waist at the navel |
| Female | weight, waist, wrist, hips, forearm | Wrist at its narrowest, hips at their widest, forearm at its widest |

`sex` accepts `m`, `male`, `f` or `female` (any case).

## Units

| Measure | Accepted | Default |
|---------|----------|---------|
| Weight | lb, kg, st | lb |
| Length | in, m, ft | in |

Pass `weight_unit` / `length_unit` to `estimate_body_fat` to change units.
Units given on a successful estimate become the session units for later calls.

## Categories

| Sex | Essential Fat | Athletes | Fitness | Average | Obese |
|-----|---------------|----------|---------|---------|-------|
| Male | <= 5 | (5, 13] | (13, 17] | (17, 25) | >= 25 |
| Female | <= 13 | (13, 20] | (20, 24] | (24, 32) | >= 32 |

## Quick Reference

| Task | Tool |
|------|------|
| Estimate body fat | `estimate_body_fat` |
| Category of last estimate | `last_body_fat_category` |
| Show threshold tables | `list_body_fat_categories` |
| Service status | `bfi_status` |

## Example

```
estimate_body_fat(sex: "f", weight: 60, waist: 40, wrist: 3, hips: 30, forearm: 3)
→ { "body_fat_index": "30.98", "category": "Average", ... }
```
"#;

/// Runtime status of the BFI service
#[derive(Debug, Clone, Serialize)]
pub struct BfiStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Active session units
    pub weight_unit: &'static str,
    pub length_unit: &'static str,

    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn get_status(&self, config: EstimatorConfig) -> BfiStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        BfiStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            weight_unit: config.weight_unit.as_str(),
            length_unit: config.length_unit.as_str(),
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{LengthUnit, WeightUnit};

    #[test]
    fn test_status_reports_config() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(EstimatorConfig::new(WeightUnit::Stone, LengthUnit::Foot));
        assert_eq!(status.weight_unit, "st");
        assert_eq!(status.length_unit, "ft");
        assert_eq!(status.process_id, std::process::id());
        assert!(status.started_at <= Utc::now());
    }

    #[test]
    fn test_status_serializes() {
        let status = StatusTracker::default().get_status(EstimatorConfig::default());
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["weight_unit"], "lb");
        assert!(json["uptime_seconds"].is_u64());
    }

    #[test]
    fn test_instructions_name_tools() {
        for tool in ["estimate_body_fat", "last_body_fat_category", "list_body_fat_categories"] {
            assert!(BODY_FAT_INSTRUCTIONS.contains(tool));
        }
    }
}
