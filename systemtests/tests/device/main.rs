
#[cfg(feature = "esp32c3")]
mod esp32c3;
