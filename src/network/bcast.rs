use crossbeam_channel as cbc;
use serde;
use std::io;
use std::str;

use crate::network::sock;

const MAX_DATAGRAM_SIZE: usize = 8192;

/// Broadcasts every value received on `ch` as a JSON datagram on `port`, `burst_size` times each.
///
/// Returns once `ch` is disconnected.
pub fn tx<T: serde::Serialize>(port: u16, ch: cbc::Receiver<T>, burst_size: usize) -> io::Result<()> {
    let s = sock::new_tx(port)?;

    for data in ch.iter() {
        let serialized = match serde_json::to_string(&data) {
            Ok(v) => v,
            Err(e) => {
                log::error!("Couldn't serialize bcast: {}", e);
                continue;
            }
        };
        if serialized.len() > MAX_DATAGRAM_SIZE {
            log::warn!("Bcast of {} bytes is larger than receivers accept", serialized.len());
        }
        for _i in 0..burst_size {
            if let Err(e) = s.send(serialized.as_bytes()) {
                log::warn!("Couldn't send bcast on port {}: {}", port, e);
            }
        }
    }
    Ok(())
}

/// Decodes JSON datagrams arriving on `port` and forwards them on `ch`.
///
/// Datagrams that are not a `T` are skipped. Returns once `ch` is disconnected.
pub fn rx<T: serde::de::DeserializeOwned>(port: u16, ch: cbc::Sender<T>) -> io::Result<()> {
    let s = sock::new_rx(port)?;
    let mut buf = [0; MAX_DATAGRAM_SIZE];

    loop {
        let n = s.recv(&mut buf)?;
        let msg = match str::from_utf8(&buf[..n]) {
            Ok(msg) => msg,
            Err(_) => continue,
        };
        // Only send the message on crossbeam channel if it actually is the data we want
        match serde_json::from_str::<T>(msg) {
            Ok(data) => {
                if ch.send(data).is_err() {
                    return Ok(());
                }
            }
            Err(e) => log::debug!("Skipping datagram on port {}: {}", port, e),
        }
    }
}
