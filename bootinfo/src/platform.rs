//! The seam between the report routine and the chip it runs on

use bitflags::bitflags;

bitflags! {
    /// Hardware capabilities advertised by the running chip
    ///
    /// The four radio flags drive the feature suffix of the report's
    /// chip line; `EMB_FLASH` selects the "embedded" or "external"
    /// wording of its flash line.
    pub struct Features: u32 {
        /// 2.4GHz WiFi (802.11b/g/n)
        const WIFI_BGN = 0x01;
        /// Bluetooth Classic
        const BT = 0x02;
        /// Bluetooth Low Energy
        const BLE = 0x04;
        /// IEEE 802.15.4 low-rate radio (Zigbee/Thread)
        const IEEE802154 = 0x08;
        /// Flash is in-package rather than on an external SPI bus
        const EMB_FLASH = 0x10;
    }
}

/// Chip identification, populated once per boot by [`Platform::chip_info`]
///
/// Read-only after it is populated; nothing in it is persisted.
#[cfg_attr(feature = "std", derive(Debug))]
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ChipInfo {
    /// Number of CPU cores
    pub cores: u8,
    /// Capability flags
    pub features: Features,
    /// Silicon revision, encoded as `major * 100 + minor`
    pub revision: u16,
}

impl ChipInfo {
    /// Major part of the silicon revision
    #[must_use]
    pub fn revision_major(&self) -> u16 {
        self.revision / 100
    }

    /// Minor part of the silicon revision
    #[must_use]
    pub fn revision_minor(&self) -> u16 {
        self.revision % 100
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChipInfo {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ChipInfo {{ cores: {=u8}, features: {=u32:#x}, revision: {=u16} }}",
            self.cores,
            self.features.bits(),
            self.revision
        );
    }
}

/// The chip-level services consumed by the report routine
///
/// One implementation exists per supported target, in that target's
/// firmware crate under `cross/`; host tests supply a mock instead.
pub trait Platform {
    /// The type of errors which can arise from the flash-size query:
    /// for instance, a SPI error from the flash driver.
    type FlashError: PartialEq + Eq;

    /// Identify the running chip
    ///
    /// No failure path is defined: every supported chip can describe
    /// itself.
    fn chip_info(&mut self) -> ChipInfo;

    /// Total flash size in bytes
    ///
    /// The one fallible query the routine makes. The routine does not
    /// retry it or look inside the error; see
    /// [`report`](crate::report::report) for what failure means there.
    fn flash_size(&mut self) -> Result<u32, Self::FlashError>;

    /// The smallest amount of free heap observed since boot, in bytes
    fn minimum_free_heap(&mut self) -> u32;

    /// Request a full system restart
    ///
    /// Fire-and-forget: on real hardware the restart is asynchronous
    /// and the caller keeps running until it lands.
    fn restart(&mut self);
}
