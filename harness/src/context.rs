// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;
use crate::exec::ExecHost;
use crate::fault::FaultControl;
use crate::filter::FilterControl;
use crate::router::RouterControl;
use crate::INET_TARGET;
use serde::{Deserialize, Serialize};
use slog::Logger;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

/// Polling cadence and probe budgets.
///
/// The defaults are the reference scenario budgets (60 x 1s route
/// polls, 30 x 2s advertisement polls, five-packet ping bursts with
/// three retries). Suites driving a simulated fabric scale them down;
/// the relations between them, not the absolute values, carry the
/// scenario semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timing {
    /// Interval between route-table polls.
    pub route_poll_interval: Duration,
    /// Maximum number of route-table polls per wait.
    pub route_poll_tries: u32,
    /// Interval between peer-advertisement polls.
    pub advert_poll_interval: Duration,
    /// Maximum number of peer-advertisement polls per wait.
    pub advert_poll_tries: u32,
    /// Settle time after (un)binding filter chains, before results are
    /// trusted.
    pub filter_settle: Duration,
    /// Echo requests per ping burst.
    pub ping_count: u32,
    /// Spacing between echo requests within a burst.
    pub ping_interval: Duration,
    /// Whole-burst retries after a failed burst.
    pub ping_retries: u32,
    /// Address the probe targets.
    pub ping_target: Ipv4Addr,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            route_poll_interval: Duration::from_secs(1),
            route_poll_tries: 60,
            advert_poll_interval: Duration::from_secs(2),
            advert_poll_tries: 30,
            filter_settle: Duration::from_secs(5),
            ping_count: 5,
            ping_interval: Duration::from_secs(1),
            ping_retries: 3,
            ping_target: INET_TARGET,
        }
    }
}

/// Interface a reachability probe sources its packets from, resolved
/// from a bridge-port binding.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Vantage {
    pub hostname: String,
    pub iface: String,
}

/// Everything one scenario run needs: the router under test, the exec
/// hosts of the surrounding topology, the fault and filter controls,
/// timing and a logger.
///
/// Constructed once per run and passed to every component; scenarios
/// run serially against it. There is deliberately no lock around the
/// router here.
#[derive(Clone)]
pub struct TestContext {
    pub router: Arc<dyn RouterControl>,
    pub hosts: HashMap<String, Arc<dyn ExecHost>>,
    /// Host whose own BGP table proves the router's export was learned
    /// back by a peer.
    pub observer: String,
    /// Bridge-port index to probe vantage.
    pub vantages: HashMap<u16, Vantage>,
    pub faults: Arc<dyn FaultControl>,
    pub filters: Arc<dyn FilterControl>,
    pub timing: Timing,
    pub log: Logger,
}

impl TestContext {
    pub fn host(&self, name: &str) -> Result<&Arc<dyn ExecHost>, Error> {
        self.hosts
            .get(name)
            .ok_or_else(|| Error::UnknownHost(name.to_string()))
    }

    pub fn vantage(&self, port: u16) -> Result<&Vantage, Error> {
        self.vantages.get(&port).ok_or(Error::UnknownVantage(port))
    }

    pub fn observer_host(&self) -> Result<&Arc<dyn ExecHost>, Error> {
        self.host(&self.observer)
    }
}
