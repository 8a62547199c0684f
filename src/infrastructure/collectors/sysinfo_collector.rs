use std::sync::Mutex;

use sysinfo::{Disks, Networks, System};

use crate::domain::entities::snapshot::MetricsSnapshot;
use crate::domain::ports::collector::{CollectionError, MetricsCollector};

const ROOT_MOUNT: &str = "/";

/// Returns `(numerator / denominator) * 100.0`, or `0.0` when `denominator` is zero.
#[allow(clippy::cast_precision_loss)]
fn safe_percent(numerator: u64, denominator: u64) -> f64 {
    if denominator > 0 {
        (numerator as f64 / denominator as f64) * 100.0
    } else {
        0.0
    }
}

/// Returns the arithmetic mean of `per_core` usages, or `0.0` when the slice is empty.
#[allow(clippy::cast_precision_loss)]
fn avg_cpu_usage(per_core: &[f32]) -> f32 {
    let count = per_core.len();
    if count > 0 {
        per_core.iter().sum::<f32>() / count as f32
    } else {
        0.0
    }
}

/// Collects host metrics using the `sysinfo` crate.
///
/// Uses `Mutex` wrappers for interior mutability since the
/// `MetricsCollector` trait requires `&self` but sysinfo refreshes need
/// `&mut self`. CPU percentages are "since last refresh": [`prime`]
/// establishes the baseline at startup so the first reported tick covers a
/// real measurement interval.
///
/// [`prime`]: MetricsCollector::prime
pub struct SysinfoCollector {
    sys: Mutex<System>,
    disks: Mutex<Disks>,
    networks: Mutex<Networks>,
}

impl SysinfoCollector {
    /// Creates a new collector with pre-initialized system data.
    #[must_use]
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
            disks: Mutex::new(Disks::new_with_refreshed_list()),
            networks: Mutex::new(Networks::new_with_refreshed_list()),
        }
    }

    /// Usage percentage of the root filesystem, or `0.0` when no root mount
    /// is visible (containers without a real rootfs).
    fn root_disk_percent(&self) -> Result<f64, CollectionError> {
        let mut disks = self
            .disks
            .lock()
            .map_err(|e| CollectionError::MetricsUnavailable(format!("disk lock poisoned: {e}")))?;
        disks.refresh();

        Ok(disks
            .iter()
            .find(|d| d.mount_point().as_os_str() == ROOT_MOUNT)
            .map_or(0.0, |disk| {
                let total = disk.total_space();
                let used = total.saturating_sub(disk.available_space());
                safe_percent(used, total)
            }))
    }

    /// Cumulative (sent, received) KB across all interfaces since boot.
    fn network_totals_kb(&self) -> Result<(u64, u64), CollectionError> {
        let mut networks = self.networks.lock().map_err(|e| {
            CollectionError::MetricsUnavailable(format!("network lock poisoned: {e}"))
        })?;
        networks.refresh();

        let (sent, recv) = networks.iter().fold((0u64, 0u64), |(sent, recv), (_, data)| {
            (
                sent.saturating_add(data.total_transmitted()),
                recv.saturating_add(data.total_received()),
            )
        });
        Ok((sent / 1024, recv / 1024))
    }
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector for SysinfoCollector {
    fn prime(&self) {
        if let Ok(mut sys) = self.sys.lock() {
            sys.refresh_cpu_usage();
        }
    }

    fn sample(&self, per_core: bool) -> Result<MetricsSnapshot, CollectionError> {
        let mut sys = self.sys.lock().map_err(|e| {
            CollectionError::MetricsUnavailable(format!("system lock poisoned: {e}"))
        })?;
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let per_core_usage: Vec<f32> = sys.cpus().iter().map(sysinfo::Cpu::cpu_usage).collect();
        let cpu_pct = f64::from(avg_cpu_usage(&per_core_usage));
        let mem_pct = safe_percent(sys.used_memory(), sys.total_memory());
        drop(sys);

        let disk_pct = self.root_disk_percent()?;
        let (net_sent_kb, net_recv_kb) = self.network_totals_kb()?;

        Ok(MetricsSnapshot {
            timestamp: chrono::Utc::now(),
            cpu_pct,
            mem_pct,
            disk_pct,
            net_sent_kb,
            net_recv_kb,
            per_core: per_core.then_some(per_core_usage),
        })
    }
}
