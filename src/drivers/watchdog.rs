//! Task Watchdog Timer (TWDT) driver.
//!
//! Resets the controller if the monitoring loop stalls.  One cycle blocks
//! for three phase delays plus up to four notification holds; the start-up
//! banner holds once before the first cycle.  The timeout is derived from
//! the configured timings and covers the longer of the two.
//!
//! The main loop calls `feed()` once per completed cycle.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::config::MonitorConfig;

/// Headroom on top of the worst-case cycle length.
const TIMEOUT_MARGIN_MS: u32 = 5_000;

/// Longest stretch between two feeds (start-up or one cycle), plus margin.
pub fn timeout_for(config: &MonitorConfig) -> u32 {
    let worst_cycle = config
        .phase_delay_ms
        .saturating_mul(3)
        .saturating_add(config.notify_hold_ms.saturating_mul(4));
    worst_cycle
        .max(config.startup_hold_ms)
        .saturating_add(TIMEOUT_MARGIN_MS)
}

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Watchdog {
    /// Initialise and subscribe the current task to the TWDT.
    pub fn new(timeout_ms: u32) -> Self {
        #[cfg(target_os = "espidf")]
        {
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK {
                    log::warn!(
                        "TWDT reconfigure returned {} (may already be configured)",
                        ret
                    );
                }

                let ret = esp_task_wdt_add(core::ptr::null_mut());
                let subscribed = ret == ESP_OK;
                if subscribed {
                    log::info!("Watchdog: subscribed ({} ms timeout, panic on trigger)", timeout_ms);
                } else {
                    log::warn!("Watchdog: failed to subscribe ({})", ret);
                }

                Self { subscribed }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            log::info!("Watchdog(sim): no-op ({} ms timeout)", timeout_ms);
            Self {}
        }
    }

    /// Feed the watchdog.  Must be called at least once per timeout.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        {
            if self.subscribed {
                unsafe {
                    esp_task_wdt_reset();
                }
            }
        }
    }
}
