// src/sampler/runner.rs

use super::sync_sampler::Sampler;
use crate::common::hal_traits::{AcquisitionInterface, ReportSink};
use crate::common::timing;
use embedded_hal::digital::{OutputPin, PinState};

#[cfg(feature = "defmt")]
use defmt::warn;
#[cfg(feature = "log")]
use log::warn;
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

/// Drives the supervisor forever at the stock cadence.
///
/// Sleeps [`timing::TICK_INTERVAL`] between invocations, toggles `led` as a
/// heartbeat every tick and forwards the tick to `sampler`. Tick errors are
/// logged and dropped; nothing here is fatal.
pub fn run<A, R, D, L>(mut sampler: Sampler<A, R>, mut delay: D, mut led: L) -> !
where
    A: AcquisitionInterface,
    R: ReportSink,
    D: embedded_hal::delay::DelayNs,
    L: OutputPin,
{
    let mut heartbeat = false;
    loop {
        delay.delay_ms(timing::TICK_INTERVAL.as_millis() as u32);
        heartbeat = !heartbeat;
        let _ = led.set_state(PinState::from(heartbeat));
        if sampler.tick().is_err() {
            warn!("report sink rejected cycle output");
        }
    }
}

/// Async variant of [`run`] for executors with an async delay.
#[cfg(feature = "async")]
pub async fn run_async<A, R, D, L>(mut sampler: Sampler<A, R>, mut delay: D, mut led: L) -> !
where
    A: AcquisitionInterface,
    R: ReportSink,
    D: embedded_hal_async::delay::DelayNs,
    L: OutputPin,
{
    let mut heartbeat = false;
    loop {
        delay.delay_ms(timing::TICK_INTERVAL.as_millis() as u32).await;
        heartbeat = !heartbeat;
        let _ = led.set_state(PinState::from(heartbeat));
        if sampler.tick().is_err() {
            warn!("report sink rejected cycle output");
        }
    }
}
