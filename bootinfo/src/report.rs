//! The startup report itself

use crate::console::Console;
use crate::platform::{Features, Platform};
use core::fmt::{self, Write};
use embedded_hal::delay::DelayNs;

/// Length of the pre-restart countdown, in seconds
///
/// The countdown announces every value from here down to zero
/// inclusive, one second apart.
pub const COUNTDOWN_SECS: u32 = 10;

/// Greet, describe the running chip, count down, request a restart
///
/// Runs once per boot. In order: emit the greeting; query and emit the
/// chip description (core count, radio feature suffix, silicon
/// revision); query and emit the flash size and whether the flash is
/// in-package; emit the heap low-water mark; count down from
/// [`COUNTDOWN_SECS`] to zero at one announcement per second; emit
/// `Restarting now.` and call [`Platform::restart`] exactly once.
/// Output is flushed at every block boundary so that the restart
/// cannot truncate it.
///
/// `target` names the platform this build is for (the original build
/// system supplies it as a compile-time string; firmware crates pass
/// their build-time target name).
///
/// If the flash-size query fails, the routine emits
/// `Get flash size failed` and returns early: no countdown, no
/// restart. That is its only branch. The restart request itself is
/// asynchronous, so on the success path the caller is expected to keep
/// the task alive afterwards -- idling in one-second delays -- until
/// the platform tears it down.
///
/// Errors from the console itself propagate as [`fmt::Error`].
pub fn report<P, C, D>(
    platform: &mut P,
    console: &mut C,
    delay: &mut D,
    target: &str,
) -> fmt::Result
where
    P: Platform,
    C: Console,
    D: DelayNs,
{
    writeln!(console, "Hello world!")?;
    console.flush();

    let chip = platform.chip_info();
    write!(
        console,
        "This is {} chip with {} CPU core(s), {}{}{}{}, ",
        target,
        chip.cores,
        if chip.features.contains(Features::WIFI_BGN) {
            "WiFi/"
        } else {
            ""
        },
        if chip.features.contains(Features::BT) {
            "BT"
        } else {
            ""
        },
        if chip.features.contains(Features::BLE) {
            "BLE"
        } else {
            ""
        },
        if chip.features.contains(Features::IEEE802154) {
            ", 802.15.4 (Zigbee/Thread)"
        } else {
            ""
        },
    )?;

    write!(
        console,
        "silicon revision v{}.{}, ",
        chip.revision_major(),
        chip.revision_minor()
    )?;

    let Ok(flash_size) = platform.flash_size() else {
        writeln!(console, "Get flash size failed")?;
        console.flush();
        return Ok(());
    };

    writeln!(
        console,
        "{}MB {} flash",
        flash_size / (1024 * 1024),
        if chip.features.contains(Features::EMB_FLASH) {
            "embedded"
        } else {
            "external"
        }
    )?;

    writeln!(
        console,
        "Minimum free heap size: {} bytes",
        platform.minimum_free_heap()
    )?;
    console.flush();

    for i in (0..=COUNTDOWN_SECS).rev() {
        writeln!(console, "Restarting in {} seconds...", i)?;
        console.flush();
        delay.delay_ms(1000);
    }

    writeln!(console, "Restarting now.")?;
    console.flush();

    platform.restart();
    Ok(())
}

#[cfg(all(test, feature = "std"))]
#[path = "tests/report.rs"]
mod tests;
