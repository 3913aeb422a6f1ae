use crate::device_test::{device_test, DeviceTest};
use serial_test::*;
use std::panic;
use std::time::Duration;

fn esp32c3_test<F: FnOnce(DeviceTest) -> () + panic::UnwindSafe>(
    firmware: &str,
    f: F,
) {
    device_test("BOOTINFO_PORT_ESP32C3", firmware, f);
}

#[test]
#[serial(esp32c3)]
#[cfg_attr(miri, ignore)]
fn riscv_esp32c3_report() {
    esp32c3_test(
        "../cross/esp32c3/target/riscv32imc-unknown-none-elf/debug/esp32c3-bootinfo",
        |t| {
            t.expect("Hello world!", Duration::from_secs(60));
            t.expect(
                "This is esp32c3 chip with 1 CPU core(s), WiFi/BLE, \
                 silicon revision v",
                Duration::from_secs(10),
            );
            t.expect("MB external flash", Duration::from_secs(10));
            t.expect("Minimum free heap size:", Duration::from_secs(10));
            t.expect("Restarting in 10 seconds...", Duration::from_secs(10));
            t.expect("Restarting in 0 seconds...", Duration::from_secs(15));
            t.expect("Restarting now.", Duration::from_secs(10));
            // The restart really happens: the report starts over
            t.expect("Hello world!", Duration::from_secs(60));
        },
    );
}
