//! Client address normalization.

use std::net::{IpAddr, SocketAddr};

/// Returns the peer IP of a connection without its port.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are reported as IPv4.
pub fn client_ip(addr: &SocketAddr) -> IpAddr {
    addr.ip().to_canonical()
}
