use trustscan_core::system;

use crate::terminal::print;

pub fn interfaces(json: bool) -> anyhow::Result<()> {
    let names: Vec<String> = system::get_network_interfaces();

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    print::header("network interfaces");
    for name in &names {
        print::print_status(name);
    }
    Ok(())
}
