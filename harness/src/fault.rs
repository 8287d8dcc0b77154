// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::context::TestContext;
use crate::error::Error;
use crate::types::Session;
use slog::{warn, Logger};
use std::sync::Arc;
use std::time::Duration;

/// External control that drops and restores traffic on a named
/// interface of a named host. At most one fault is active per
/// interface at a time.
pub trait FaultControl: Send + Sync {
    /// Begins dropping traffic. The mechanism may restore it on its own
    /// once `duration` elapses.
    fn drop_traffic(
        &self,
        hostname: &str,
        iface: &str,
        duration: Duration,
    ) -> Result<(), Error>;

    /// Restoring an interface that is not faulted is a no-op.
    fn restore_traffic(&self, hostname: &str, iface: &str)
        -> Result<(), Error>;
}

/// One synthetic link failure with an explicit inject/eject lifecycle.
///
/// The duration is advisory: the underlying mechanism may auto-restore
/// once it elapses, but callers must not rely on timing alone. They
/// either eject explicitly or verify restoration through the oracle and
/// the probe. `eject` is idempotent and safe after auto-expiry.
///
/// Dropping a still-active fault ejects it, so a failed assertion
/// between inject and eject cannot leave the fault behind to corrupt
/// later scenarios sharing the topology.
pub struct PacketFault {
    control: Arc<dyn FaultControl>,
    log: Logger,
    hostname: String,
    iface: String,
    duration: Duration,
    active: bool,
}

impl PacketFault {
    pub fn new(
        ctx: &TestContext,
        hostname: &str,
        iface: &str,
        duration: Duration,
    ) -> Self {
        Self {
            control: ctx.faults.clone(),
            log: ctx.log.clone(),
            hostname: hostname.to_string(),
            iface: iface.to_string(),
            duration,
            active: false,
        }
    }

    /// A fault targeting the far end of one peering session.
    pub fn for_session(
        ctx: &TestContext,
        session: &Session,
        duration: Duration,
    ) -> Self {
        let (hostname, iface) = session.fault_target();
        Self::new(ctx, hostname, iface, duration)
    }

    pub fn inject(&mut self) -> Result<(), Error> {
        self.control
            .drop_traffic(&self.hostname, &self.iface, self.duration)?;
        self.active = true;
        Ok(())
    }

    pub fn eject(&mut self) -> Result<(), Error> {
        if !self.active {
            return Ok(());
        }
        self.control.restore_traffic(&self.hostname, &self.iface)?;
        self.active = false;
        Ok(())
    }
}

impl Drop for PacketFault {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        if let Err(e) =
            self.control.restore_traffic(&self.hostname, &self.iface)
        {
            warn!(
                self.log,
                "failed to eject fault on {}/{}: {}",
                self.hostname,
                self.iface,
                e,
            );
        }
    }
}
