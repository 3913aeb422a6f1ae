#![no_std]

use bootinfo::{ChipInfo, Console, Features, Platform};
use core::convert::Infallible;
use core::fmt;
use embedded_storage::ReadStorage;
use esp_hal::efuse::Efuse;
use esp_storage::FlashStorage;

/// Build-time name of this target, as the report's chip line shows it
pub const TARGET: &str = "esp32c3";

/// Console over the default esp-println channel (UART0 on devkits)
///
/// esp-println writes synchronously, so the default no-op flush is
/// correct.
pub struct EspConsole;

impl fmt::Write for EspConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        esp_println::print!("{}", s);
        Ok(())
    }
}

impl Console for EspConsole {}

/// The ESP32-C3's implementation of the chip-level services
pub struct C3Platform {
    flash: FlashStorage,
    min_free_heap: u32,
}

impl C3Platform {
    /// Open the flash driver; call once during early startup
    pub fn new() -> Self {
        Self {
            flash: FlashStorage::new(),
            min_free_heap: u32::MAX,
        }
    }
}

impl Default for C3Platform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for C3Platform {
    type FlashError = Infallible;

    fn chip_info(&mut self) -> ChipInfo {
        // Single RV32 core, 2.4GHz WiFi plus BLE5; no Classic, no
        // 802.15.4. Devkit flash is an external SPI part.
        ChipInfo {
            cores: 1,
            features: Features::WIFI_BGN | Features::BLE,
            revision: u16::from(Efuse::major_chip_version()) * 100
                + u16::from(Efuse::minor_chip_version()),
        }
    }

    fn flash_size(&mut self) -> Result<u32, Infallible> {
        Ok(self.flash.capacity() as u32)
    }

    fn minimum_free_heap(&mut self) -> u32 {
        let free = esp_alloc::HEAP.free() as u32;
        self.min_free_heap = self.min_free_heap.min(free);
        self.min_free_heap
    }

    fn restart(&mut self) {
        esp_hal::reset::software_reset();
    }
}
