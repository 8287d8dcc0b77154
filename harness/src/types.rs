// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 prefix. Used both for networks the router advertises and for
/// route-table destinations.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Prefix4 {
    pub value: Ipv4Addr,
    pub length: u8,
}

impl Prefix4 {
    const HOST_MASK: u8 = 32;

    /// The 0.0.0.0/0 entry. Its presence through a session's gateway is
    /// the signal that the session has learned upstream connectivity.
    pub const DEFAULT_ROUTE: Self = Self {
        value: Ipv4Addr::UNSPECIFIED,
        length: 0,
    };

    pub fn host(addr: Ipv4Addr) -> Self {
        Self {
            value: addr,
            length: Self::HOST_MASK,
        }
    }
}

impl PartialOrd for Prefix4 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Prefix4 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.value != other.value {
            return self.value.cmp(&other.value);
        }
        self.length.cmp(&other.length)
    }
}

impl FromStr for Prefix4 {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, length) =
            s.split_once('/').ok_or("malformed prefix".to_string())?;

        Ok(Self {
            value: value
                .parse()
                .map_err(|_| "malformed ip addr".to_string())?,
            length: length
                .parse()
                .map_err(|_| "malformed length".to_string())?,
        })
    }
}

impl Display for Prefix4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.length)
    }
}

/// Identifier of one router port, as handed out by the router's control
/// surface.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct PortId(pub String);

impl Display for PortId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the router under test.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct RouterId(pub String);

impl Display for RouterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One BGP peering relationship: the local port it rides on, the peer's
/// address and AS, and the peer's host/interface identity.
///
/// Immutable once defined. Both the fault-injection target and the
/// route expectations for the session derive from these static fields;
/// all dynamism lives in the router's own routing table.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Session {
    /// Local port index the session is bound to.
    pub port: u16,
    pub peer_addr: Ipv4Addr,
    pub peer_as: u32,
    /// Host the peer's BGP speaker runs on.
    pub peer_hostname: String,
    /// Interface on the peer host carrying the session.
    pub peer_iface: String,
}

impl Session {
    /// The (hostname, interface) pair a synthetic link failure for this
    /// session is applied to.
    pub fn fault_target(&self) -> (&str, &str) {
        (&self.peer_hostname, &self.peer_iface)
    }

    /// The route-table entry this session is expected to (not) produce
    /// for `destination`.
    pub fn expectation(
        &self,
        port: PortId,
        destination: Prefix4,
        present: bool,
    ) -> RouteExpectation {
        RouteExpectation {
            next_hop_port: port,
            destination,
            gateway: self.peer_addr,
            present,
        }
    }
}

/// An ordered collection of sessions sharing one physical port. Two or
/// more sessions on the same port model redundant (multisession)
/// peering.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Uplink {
    pub sessions: Vec<Session>,
}

impl Uplink {
    pub fn single(session: Session) -> Self {
        Self {
            sessions: vec![session],
        }
    }

    pub fn multisession(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }
}

/// One entry of the router's observable route set.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Route {
    pub next_hop_port: PortId,
    pub destination: Prefix4,
    pub next_hop_gateway: Ipv4Addr,
}

/// The unit the route oracle evaluates against one route-table
/// snapshot: a (port, destination, gateway) triple and whether a
/// matching entry is expected to exist.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct RouteExpectation {
    pub next_hop_port: PortId,
    pub destination: Prefix4,
    pub gateway: Ipv4Addr,
    pub present: bool,
}

impl RouteExpectation {
    /// Whether a snapshot satisfies the expectation. A single matching
    /// snapshot is sufficient for the oracle; there is no debounce.
    pub fn matches(&self, routes: &[Route]) -> bool {
        let found = routes.iter().any(|r| {
            r.next_hop_port == self.next_hop_port
                && r.destination == self.destination
                && r.next_hop_gateway == self.gateway
        });
        found == self.present
    }
}
