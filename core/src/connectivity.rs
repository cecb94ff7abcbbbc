//! Connectivity probe seam.
//!
//! The core never queries the platform itself; the host supplies an
//! implementation (a system connectivity manager, a captive-portal check,
//! a test fake). Consulted at the start of every controller operation.

/// Reports whether the device currently has network reachability.
///
/// Infallible by contract: implementations must map platform query errors to
/// `false` and degrade to offline behavior. Must be side-effect free.
pub trait ConnectivityProbe {
    fn has_network(&self) -> bool;
}
