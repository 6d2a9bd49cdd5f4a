//! Sockets opened by queries are closed again, whether the query times out or is dropped.
//! Kept as the only test in this binary so no other test opens descriptors meanwhile.
#![cfg(target_os = "linux")]

use std::time::Duration;

#[cfg(feature = "async_std")]
use async_std::{future::timeout, net::UdpSocket};
#[cfg(feature = "async_tokio")]
use tokio::{net::UdpSocket, time::timeout};

use rak_ping::{client::Pinger, QueryError};

fn open_fds() -> usize {
    std::fs::read_dir("/proc/self/fd").unwrap().count()
}

#[cfg_attr(feature = "async_std", async_std::test)]
#[cfg_attr(feature = "async_tokio", tokio::test)]
async fn queries_release_their_socket() {
    // bound, so pings are not refused, but never answered.
    let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = silent.local_addr().unwrap();
    let pinger = Pinger::new().with_timeout(Duration::from_millis(50));

    // the first query also brings up the runtime's reactor, which keeps its descriptors.
    assert_eq!(pinger.query(addr).await, Err(QueryError::Timeout));
    let before = open_fds();

    for _ in 0..20 {
        assert_eq!(pinger.query(addr).await, Err(QueryError::Timeout));
    }
    assert_eq!(open_fds(), before);

    let patient = Pinger::new().with_timeout(Duration::from_secs(30));
    for _ in 0..5 {
        let res = timeout(Duration::from_millis(50), patient.query(addr)).await;
        assert!(res.is_err());
    }
    assert_eq!(open_fds(), before);
}
