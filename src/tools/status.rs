//! Brix Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Sweetener calculation instructions for AI assistants
pub const BRIX_INSTRUCTIONS: &str = r#"
# Pulp Brix Balance Instructions

This guide explains how to calculate the sugar needed to raise the Brix of a fruit pulp.

## Inputs

| Parameter | Symbol | Unit | Range | Default |
|-----------|--------|------|-------|---------|
| `initial_pulp_mass` | M1 | kg | >= 0 | 50.0 |
| `initial_brix` | X1 | % | 0 - 100 | 7.0 |
| `target_brix` | X3 | % | 0 - 100 | 10.0 |

Omitted parameters take their default value.

## How It Works

Sugar is assumed to be 100% soluble solids (x2 = 1.0). Two balances hold:

- Total mass: `M1 + M2 = M3`
- Soluble solids: `M1*x1 + M2*x2 = M3*x3`

Solving for the sugar mass:

**M2 = M1 * (x3 - x1) / (x2 - x3)**, then **M3 = M1 + M2**

where x1 = X1/100 and x3 = X3/100.

### Example
- 50 kg of pulp at 7 Brix, target 10 Brix
- M2 = 50 * (0.10 - 0.07) / (1.0 - 0.10) = **1.67 kg** of sugar
- M3 = 50 + 1.67 = **51.67 kg** of final pulp

## Rules

1. **Target must exceed initial Brix.** A target equal to or lower than the initial Brix
   is rejected with `invalid_ordering`: that would require dilution, not sugar.
2. **Target of 100% is undefined.** No finite amount of sugar reaches 100 Brix;
   the tool answers `undefined_result`.
3. **Results must be representable.** Pulp masses so large that the sugar or final
   mass exceeds the floating point range are rejected with `overflow`.
4. Masses are returned unrounded, with two-decimal display strings alongside.

## Responses

Success:
```json
{"success": true, "sweetener_mass": 1.6667, "sweetener_mass_display": "1.67 kg", ...}
```

Error (returned as a normal tool result):
```json
{"success": false, "error_kind": "invalid_ordering", "error": "..."}
```

Error kinds: `not_finite`, `out_of_range`, `invalid_ordering`, `undefined_result`, `overflow`.
"#;

/// Runtime status of the Brix service
#[derive(Debug, Clone, Serialize)]
pub struct BrixStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> BrixStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        BrixStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
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

    #[test]
    fn test_status_reports_current_process() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status();
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, crate::build_info::VERSION);
    }

    #[test]
    fn test_instructions_mention_error_kinds() {
        for kind in ["not_finite", "out_of_range", "invalid_ordering", "undefined_result", "overflow"] {
            assert!(BRIX_INSTRUCTIONS.contains(kind), "missing {}", kind);
        }
    }
}
