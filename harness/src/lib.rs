// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Orchestration core for validating dynamic-routing high availability
//! of a virtual router fabric.
//!
//! The router under test and its BGP speaker are opaque external
//! systems. This crate configures peering sessions and advertised
//! networks against them ([`peering::PeeringController`]), polls their
//! asynchronously-converging route state with bounded waits
//! ([`oracle::RouteOracle`]), perturbs individual links through a blunt
//! packet-drop control ([`fault::PacketFault`]), and exercises
//! end-to-end reachability with retry-tolerant ping bursts
//! ([`probe::ReachabilityProbe`]). Scenario suites compose these into
//! establish / fail / recover sequences.

pub mod context;
pub mod error;
pub mod exec;
pub mod fault;
pub mod filter;
pub mod log;
pub mod oracle;
pub mod peering;
pub mod probe;
pub mod router;
pub mod types;


/// Pseudo public address every reference scenario probes. Bound to a
/// loopback on the far side of the uplinks.
pub const INET_TARGET: std::net::Ipv4Addr = std::net::Ipv4Addr::new(1, 1, 1, 1);

#[macro_export]
macro_rules! lock {
    ($mtx:expr) => {
        $mtx.lock().expect("lock mutex")
    };
}
