// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference topology inputs shared by every scenario: two uplink
//! ports, two external speakers, up to two sessions per port.

use uplink_harness::types::{Prefix4, Session, Uplink};

/// AS of the router under test.
pub const LOCAL_AS: u32 = 64513;

pub fn uplink1_session1() -> Session {
    Session {
        port: 2,
        peer_addr: "10.1.0.240".parse().unwrap(),
        peer_as: 64511,
        peer_hostname: "quagga1".into(),
        peer_iface: "bgp1".into(),
    }
}

pub fn uplink1_session2() -> Session {
    Session {
        port: 2,
        peer_addr: "10.1.0.241".parse().unwrap(),
        peer_as: 64512,
        peer_hostname: "quagga2".into(),
        peer_iface: "bgp2".into(),
    }
}

pub fn uplink2_session1() -> Session {
    Session {
        port: 3,
        peer_addr: "10.2.0.240".parse().unwrap(),
        peer_as: 64512,
        peer_hostname: "quagga2".into(),
        peer_iface: "bgp1".into(),
    }
}

pub fn uplink2_session2() -> Session {
    Session {
        port: 3,
        peer_addr: "10.2.0.241".parse().unwrap(),
        peer_as: 64511,
        peer_hostname: "quagga1".into(),
        peer_iface: "bgp2".into(),
    }
}

pub fn uplink1_multisession() -> Uplink {
    Uplink::multisession(vec![uplink1_session1(), uplink1_session2()])
}

pub fn uplink2_multisession() -> Uplink {
    Uplink::multisession(vec![uplink2_session1(), uplink2_session2()])
}

/// Every session the physical topology can carry, whether or not a
/// scenario configures it.
pub fn wiring() -> Vec<Session> {
    vec![
        uplink1_session1(),
        uplink1_session2(),
        uplink2_session1(),
        uplink2_session2(),
    ]
}

/// Network advertised in the plain routing scenarios.
pub fn route_direct() -> Prefix4 {
    "172.16.0.0/16".parse().unwrap()
}

/// Network advertised in the SNAT scenarios.
pub fn route_snat() -> Prefix4 {
    "100.0.0.0/16".parse().unwrap()
}
