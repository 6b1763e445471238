//! The capability a presence orchestrator expects from a device scanner.

use async_trait::async_trait;

use crate::network::device::DeviceRecord;

#[async_trait]
pub trait DeviceScanner: Send {
    /// Refreshes and returns the identifiers of every connected client.
    ///
    /// Failures are not reported here; an unreachable access point yields an empty list.
    async fn scan_devices(&mut self) -> Vec<DeviceRecord>;

    /// Returns the display name of `device`, if the data source knows one.
    fn get_device_name(&self, device: &DeviceRecord) -> Option<String>;
}
