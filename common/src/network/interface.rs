use pnet::datalink::NetworkInterface;

/// Names offered when the system reports no usable interface.
pub const FALLBACK_INTERFACES: [&str; 3] = ["eth0", "wlan0", "eno1"];

/// Names of every non-loopback interface the system knows about.
///
/// Never empty: falls back to [`FALLBACK_INTERFACES`].
pub fn get_interface_names() -> Vec<String> {
    select_interface_names(pnet::datalink::interfaces())
}

fn select_interface_names(interfaces: Vec<NetworkInterface>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for interface in interfaces {
        if !is_listable(&interface) || names.contains(&interface.name) {
            continue;
        }
        names.push(interface.name);
    }

    if names.is_empty() {
        return fallback_interface_names();
    }
    names
}

pub fn fallback_interface_names() -> Vec<String> {
    FALLBACK_INTERFACES.iter().map(|name| name.to_string()).collect()
}

fn is_listable(interface: &NetworkInterface) -> bool {
    let name = interface.name.trim();
    !name.is_empty() && !name.starts_with('@') && !interface.is_loopback()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
