// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::context::TestContext;
use crate::error::{Direction, Error};
use crate::types::{Prefix4, Session};
use slog::{debug, trace};
use std::thread::sleep;

/// Polls asynchronously-converging router state until it matches an
/// expectation or a deadline elapses.
///
/// Polling is level-triggered, not edge-triggered: a single matching
/// snapshot at any poll is sufficient. A flapping route can therefore
/// be observed as present on one lucky poll; the scenarios are written
/// against this exact timing tolerance and the budget bounds total run
/// time.
pub struct RouteOracle<'a> {
    ctx: &'a TestContext,
}

impl<'a> RouteOracle<'a> {
    pub fn new(ctx: &'a TestContext) -> Self {
        Self { ctx }
    }

    /// Blocks until a route to `destination` whose next hop is
    /// `session`'s port and gateway is present (or absent, per
    /// `expect_present`), checking the current snapshot before each
    /// sleep. Exhausting the budget fails with full context.
    pub fn await_route(
        &self,
        session: &Session,
        destination: Prefix4,
        expect_present: bool,
    ) -> Result<(), Error> {
        let port = self.ctx.router.port(session.port)?;
        let want =
            session.expectation(port.clone(), destination, expect_present);

        for _ in 0..self.ctx.timing.route_poll_tries {
            let routes = self.ctx.router.routes()?;
            if want.matches(&routes) {
                return Ok(());
            }
            trace!(
                self.ctx.log,
                "route {} via {} not yet {}",
                destination,
                session.peer_addr,
                if expect_present { "present" } else { "absent" },
            );
            sleep(self.ctx.timing.route_poll_interval);
        }

        Err(Error::ConvergenceTimeout {
            router: self.ctx.router.id(),
            port,
            destination,
            gateway: session.peer_addr,
            direction: if expect_present {
                Direction::Appear
            } else {
                Direction::Disappear
            },
        })
    }

    /// Blocks until the observer's own BGP table carries an entry
    /// tagged with both `local_as` and `peer_as`, proving the router's
    /// route was exported and learned back by the peer. A stronger
    /// signal than the router's local table alone.
    pub fn await_peer_advertisement(
        &self,
        local_as: u32,
        peer_as: u32,
    ) -> Result<(), Error> {
        let host = self.ctx.observer_host()?;
        let cmd = format!(
            "sh -c \"vtysh -c 'show ip bgp' | grep {} | grep {}\"",
            local_as, peer_as,
        );

        for _ in 0..self.ctx.timing.advert_poll_tries {
            let status = host.exec(&cmd)?;
            if status.success() {
                return Ok(());
            }
            debug!(
                self.ctx.log,
                "AS {} not yet re-advertised through AS {}",
                local_as,
                peer_as,
            );
            sleep(self.ctx.timing.advert_poll_interval);
        }

        Err(Error::AdvertisementTimeout {
            observer: self.ctx.observer.clone(),
            local_as,
            peer_as,
        })
    }
}
