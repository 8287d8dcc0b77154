// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::context::TestContext;
use crate::error::Error;
use crate::oracle::RouteOracle;
use crate::router::PeerHandle;
use crate::types::{Prefix4, Session};
use slog::info;
use std::thread::sleep;
use std::time::Duration;

/// Manages the lifecycle of peering sessions and advertised networks on
/// the router under test.
///
/// Convergence after addition is verified synchronously inside
/// [`add_batch`](Self::add_batch) because every scenario needs it
/// before proceeding. Convergence after removal is left to the caller
/// via the `settle` argument of [`remove_peer`](Self::remove_peer):
/// different scenarios follow removal with different assertions, so
/// removal does not self-verify.
pub struct PeeringController<'a> {
    ctx: &'a TestContext,
    local_as: Option<u32>,
}

impl<'a> PeeringController<'a> {
    pub fn new(ctx: &'a TestContext) -> Self {
        Self {
            ctx,
            local_as: None,
        }
    }

    /// Configures the router's own AS. Must be called before peers are
    /// added; idempotent within a scenario.
    pub fn set_local_as(&mut self, asn: u32) -> Result<(), Error> {
        self.ctx.router.set_asn(asn)?;
        self.local_as = Some(asn);
        Ok(())
    }

    /// Registers one peering session. The router begins establishing it
    /// asynchronously; no convergence wait happens here.
    pub fn add_peer(&self, session: &Session) -> Result<PeerHandle, Error> {
        self.ctx.router.add_peer(session.peer_as, session.peer_addr)
    }

    /// Registers one network for advertisement. Visible to peers only
    /// after propagation.
    pub fn add_network(&self, network: Prefix4) -> Result<(), Error> {
        self.ctx.router.add_network(network)
    }

    /// Adds every session and every network, then blocks until each
    /// session has produced a default route through its gateway and the
    /// peer has re-advertised the local AS onward.
    pub fn add_batch(
        &self,
        sessions: &[Session],
        networks: &[Prefix4],
    ) -> Result<Vec<PeerHandle>, Error> {
        let local_as = self
            .local_as
            .ok_or_else(|| Error::Router("local AS not set".to_string()))?;

        let mut handles = Vec::with_capacity(sessions.len());
        for session in sessions {
            handles.push(self.add_peer(session)?);
        }
        for network in networks {
            self.add_network(*network)?;
        }

        let oracle = RouteOracle::new(self.ctx);
        for session in sessions {
            oracle.await_route(session, Prefix4::DEFAULT_ROUTE, true)?;
            oracle.await_peer_advertisement(local_as, session.peer_as)?;
        }

        info!(
            self.ctx.log,
            "{} peering sessions converged", sessions.len(),
        );
        Ok(handles)
    }

    /// Deletes one peering session, consuming its handle. A positive
    /// `settle` blocks afterwards to give the fabric time to converge
    /// before the caller's next assertion; verification stays with the
    /// caller.
    pub fn remove_peer(
        &self,
        handle: PeerHandle,
        settle: Duration,
    ) -> Result<(), Error> {
        self.ctx.router.remove_peer(handle)?;
        if !settle.is_zero() {
            sleep(settle);
        }
        Ok(())
    }

    /// Unconditional scenario teardown: removes every network, every
    /// peer, and the local AS setting. Safe when nothing is configured.
    pub fn clear_all(&self) -> Result<(), Error> {
        self.ctx.router.clear_networks()?;
        self.ctx.router.clear_peers()?;
        self.ctx.router.clear_asn()
    }
}
