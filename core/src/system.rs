//! Host facts that are informational only.

use tracing::debug;
use trustscan_common::network::interface;

/// Network interfaces a caller can pick for an interface scan.
///
/// Best-effort and infallible: when the system reports nothing usable a fixed
/// list of common names is returned instead of an error.
pub fn get_network_interfaces() -> Vec<String> {
    let names = interface::get_interface_names();
    debug!(interfaces = ?names, "enumerated network interfaces");
    names
}
