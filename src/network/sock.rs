//! UDP sockets for the JSON request intake and the fleet state broadcast.
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net;

fn broadcast_socket() -> io::Result<Socket> {
    let sock = Socket::new(Domain::ipv4(), Type::dgram(), Some(Protocol::udp()))?;
    sock.set_broadcast(true)?;
    // Several observers on one host may listen on the same port.
    sock.set_reuse_address(true)?;
    Ok(sock)
}

/// Socket whose `send` goes to every listener on `port` on the local network.
pub fn new_tx(port: u16) -> io::Result<Socket> {
    let sock = broadcast_socket()?;
    let broadcast_addr = net::SocketAddr::from((net::Ipv4Addr::BROADCAST, port));
    sock.connect(&broadcast_addr.into())?;
    Ok(sock)
}

/// Socket receiving datagrams sent to `port` on any interface.
pub fn new_rx(port: u16) -> io::Result<Socket> {
    let sock = broadcast_socket()?;
    let any_addr = net::SocketAddr::from((net::Ipv4Addr::UNSPECIFIED, port));
    sock.bind(&any_addr.into())?;
    Ok(sock)
}
