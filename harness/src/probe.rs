// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::context::TestContext;
use crate::error::Error;
use slog::debug;
use std::net::Ipv4Addr;
use std::time::Duration;

/// Bounded-retry reachability check from a vantage port to a fixed
/// target address.
///
/// The first burst after a failover transition is expected to lose some
/// or all of its packets, so a failed burst consumes one retry with no
/// backoff rather than failing the scenario. This is a liveness check,
/// not a packet-loss measurement; only an exhausted retry budget
/// signals a real regression.
pub struct ReachabilityProbe<'a> {
    ctx: &'a TestContext,
}

impl<'a> ReachabilityProbe<'a> {
    pub fn new(ctx: &'a TestContext) -> Self {
        Self { ctx }
    }

    /// Probes with the context defaults.
    pub fn ping(&self, port: u16) -> Result<(), Error> {
        let t = &self.ctx.timing;
        self.ping_with(
            port,
            t.ping_target,
            t.ping_count,
            t.ping_interval,
            t.ping_retries,
        )
    }

    /// Issues a burst of `count` echo requests at `interval` spacing
    /// from the interface bound to `port`. The burst succeeds if the
    /// underlying command exits 0, i.e. at least one reply was
    /// observed. Exec transport errors consume a retry like a nonzero
    /// exit does.
    pub fn ping_with(
        &self,
        port: u16,
        target: Ipv4Addr,
        count: u32,
        interval: Duration,
        retries: u32,
    ) -> Result<(), Error> {
        let vantage = self.ctx.vantage(port)?.clone();
        let host = self.ctx.host(&vantage.hostname)?;
        let cmd = format!(
            "ping -c {} -i {} -I {} {}",
            count,
            interval.as_secs_f64(),
            vantage.iface,
            target,
        );

        let attempts = retries + 1;
        for attempt in 1..=attempts {
            match host.exec(&cmd) {
                Ok(status) if status.success() => return Ok(()),
                Ok(status) => debug!(
                    self.ctx.log,
                    "ping from port {} exited {} ({} attempts left)",
                    port,
                    status.code,
                    attempts - attempt,
                ),
                Err(e) => debug!(
                    self.ctx.log,
                    "ping from port {} failed: {} ({} attempts left)",
                    port,
                    e,
                    attempts - attempt,
                ),
            }
        }

        Err(Error::ProbeFailure {
            port,
            target,
            attempts,
        })
    }
}
