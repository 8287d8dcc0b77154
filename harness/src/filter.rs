// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::context::TestContext;
use crate::error::Error;
use std::thread::sleep;

/// Attaches named inbound/outbound filter chains to the router. The
/// chains themselves are opaque to the harness; only their black-box
/// effect on reachability is exercised.
pub trait FilterControl: Send + Sync {
    fn set_filters(
        &self,
        inbound: Option<&str>,
        outbound: Option<&str>,
    ) -> Result<(), Error>;
}

/// Binds and unbinds filter chains around reachability assertions,
/// settling after each change before results are trusted.
pub struct FilterBinder<'a> {
    ctx: &'a TestContext,
}

impl<'a> FilterBinder<'a> {
    pub fn new(ctx: &'a TestContext) -> Self {
        Self { ctx }
    }

    pub fn set(&self, inbound: &str, outbound: &str) -> Result<(), Error> {
        self.ctx.filters.set_filters(Some(inbound), Some(outbound))?;
        sleep(self.ctx.timing.filter_settle);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), Error> {
        self.ctx.filters.set_filters(None, None)?;
        sleep(self.ctx.timing.filter_settle);
        Ok(())
    }
}
