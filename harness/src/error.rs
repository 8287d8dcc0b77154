// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::types::{PortId, Prefix4, RouterId};
use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;

/// Which way a route-table wait expects the state to move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Direction {
    Appear,
    Disappear,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Appear => write!(f, "appear"),
            Self::Disappear => write!(f, "disappear"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A route-table wait exhausted its budget without observing the
    /// expected state.
    #[error(
        "timed out waiting for route to {direction} on router {router} \
         port {port} to destination {destination} through next hop \
         {gateway}"
    )]
    ConvergenceTimeout {
        router: RouterId,
        port: PortId,
        destination: Prefix4,
        gateway: Ipv4Addr,
        direction: Direction,
    },

    /// The observer never saw the local AS re-advertised through the
    /// peer AS.
    #[error(
        "timed out waiting for {observer} to learn the internal network \
         of AS {local_as} through AS {peer_as}"
    )]
    AdvertisementTimeout {
        observer: String,
        local_as: u32,
        peer_as: u32,
    },

    /// A reachability probe exhausted its retry budget. The property
    /// under test failed.
    #[error(
        "ping to {target} from port {port} returned no data after \
         {attempts} attempts"
    )]
    ProbeFailure {
        port: u16,
        target: Ipv4Addr,
        attempts: u32,
    },

    #[error("no exec host named {0}")]
    UnknownHost(String),

    #[error("no probe vantage bound to port {0}")]
    UnknownVantage(u16),

    /// Provider API error from the router control surface, propagated
    /// unchanged.
    #[error("router: {0}")]
    Router(String),

    /// Remote-execution transport error, distinct from a command that
    /// ran and exited nonzero.
    #[error("exec on {host}: {detail}")]
    Exec { host: String, detail: String },
}
