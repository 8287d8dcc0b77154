// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::types::{PortId, Prefix4, Route, RouterId};
use std::net::Ipv4Addr;

/// Handle to one registered peering session. Returned by
/// [`RouterControl::add_peer`] and consumed by
/// [`RouterControl::remove_peer`], so a peer is removable exactly once.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct PeerHandle(pub u64);

/// Control and query surface of the router under test.
///
/// One concrete adapter exists per external system, selected at
/// configuration time. Peer establishment triggered by `add_peer` is
/// asynchronous; convergence is observed through `routes`, never
/// through the control calls themselves.
pub trait RouterControl: Send + Sync {
    fn set_asn(&self, asn: u32) -> Result<(), Error>;

    /// Must not fail when no ASN is configured.
    fn clear_asn(&self) -> Result<(), Error>;

    fn add_peer(
        &self,
        peer_as: u32,
        peer_addr: Ipv4Addr,
    ) -> Result<PeerHandle, Error>;

    fn remove_peer(&self, handle: PeerHandle) -> Result<(), Error>;

    fn add_network(&self, network: Prefix4) -> Result<(), Error>;

    /// Must not fail when no peers are configured.
    fn clear_peers(&self) -> Result<(), Error>;

    /// Must not fail when no networks are configured.
    fn clear_networks(&self) -> Result<(), Error>;

    /// Resolves a port index to the identifier route entries carry.
    fn port(&self, index: u16) -> Result<PortId, Error>;

    fn id(&self) -> RouterId;

    /// Snapshot of the router's current route set.
    fn routes(&self) -> Result<Vec<Route>, Error>;
}
