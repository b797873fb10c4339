//! End-to-end scans against fake probes.
//!
//! Each fake probe is a shell script run through `sh`, which stands in for
//! the privilege wrapper, so no executable bit or root is needed.

#[cfg(all(test, unix))]
mod util;
#[cfg(all(test, unix))]
mod scan;
