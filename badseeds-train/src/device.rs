//! Accelerator selection for training runs
//!
//! Device placement is an optimization, never correctness-critical: the
//! probe returns an explicit `Result` so the call site logs the warning and
//! continues on the CPU instead of aborting the run.

use std::fmt;

use thiserror::Error;

/// Environment variable listing the visible accelerator ids, comma
/// separated.
pub const VISIBLE_GPUS_ENV: &str = "BADSEEDS_VISIBLE_GPUS";

/// Where the agent's internal computation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    /// Default device
    Cpu,
    /// Accelerator with a platform id
    Gpu(usize),
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Gpu(id) => write!(f, "gpu:{id}"),
        }
    }
}

/// Soft failure of the accelerator probe
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DeviceWarning(String);

/// Pick the requested accelerator from the visible list.
pub fn select_device(requested: usize) -> Result<Device, DeviceWarning> {
    select_from(std::env::var(VISIBLE_GPUS_ENV).ok().as_deref(), requested)
}

fn select_from(visible: Option<&str>, requested: usize) -> Result<Device, DeviceWarning> {
    let Some(visible) = visible else {
        return Err(DeviceWarning(format!(
            "no accelerators visible ({VISIBLE_GPUS_ENV} unset)"
        )));
    };

    let ids: Vec<usize> = visible
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|e| DeviceWarning(format!("malformed {VISIBLE_GPUS_ENV}: {e}")))?;

    ids.get(requested)
        .copied()
        .map(Device::Gpu)
        .ok_or_else(|| {
            DeviceWarning(format!(
                "accelerator index {requested} out of range, {} visible",
                ids.len()
            ))
        })
}
