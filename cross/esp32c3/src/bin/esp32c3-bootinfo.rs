#![no_std]
#![no_main]

use cross_esp32c3::{C3Platform, EspConsole, TARGET};
use embedded_hal::delay::DelayNs;
use esp_backtrace as _;
use esp_hal::delay::Delay;

#[esp_hal::main]
fn main() -> ! {
    let _peripherals = esp_hal::init(esp_hal::Config::default());
    esp_alloc::heap_allocator!(72 * 1024);

    let mut platform = C3Platform::new();
    let mut console = EspConsole;
    let mut delay = Delay::new();

    // EspConsole never fails, so the fmt::Result carries nothing here
    let _ = bootinfo::report(&mut platform, &mut console, &mut delay, TARGET);

    // The restart request is asynchronous; stay suspended in one-second
    // intervals until it lands, so the monitor sees the whole report.
    loop {
        delay.delay_ms(1000);
    }
}
