//! Host-based tests for the OTA update server
//! These tests run on the development machine, not on the ESP32

use ota_core::memory_slots::MemorySlots;
use ota_core::testing::ImageBuilder;
use ota_core::transport::{MemoryEndpoint, RecordedRestart};
use ota_core::{SessionConfig, SessionReport, StorageError, UpdateSession};

pub const SLOT_SIZE: usize = 64 * 1024;

/// Two-slot device running a confirmed factory image from slot 0.
pub struct Bench {
    pub slots: MemorySlots,
    pub restart: RecordedRestart,
    pub config: SessionConfig,
}

impl Bench {
    pub fn new(factory_version: &str, factory_digest: [u8; 32]) -> Result<Self, StorageError> {
        let slots = MemorySlots::new(2, SLOT_SIZE);
        let factory = ImageBuilder::new(factory_version)
            .digest(factory_digest)
            .total_len(4096)
            .build();
        slots.install(0, &factory)?;
        slots.set_running(0)?;

        Ok(Self {
            slots,
            restart: RecordedRestart::default(),
            config: SessionConfig::default(),
        })
    }

    pub fn upload(&self, endpoint: &mut MemoryEndpoint) -> SessionReport {
        use ota_core::UploadEndpoint;

        let session = UpdateSession::new(&self.slots, &self.config, endpoint.content_length());
        session.run(endpoint, &self.restart)
    }
}
