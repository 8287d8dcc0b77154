// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Error;

/// Outcome of one remote command execution.
#[derive(Debug, Clone)]
pub struct ExecStatus {
    pub output: String,
    pub exec_id: u64,
    pub code: i32,
}

impl ExecStatus {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs shell commands on a named container or host. Used for the
/// peer-side `show ip bgp` advertisement check and for the ping-burst
/// mechanism.
///
/// A command that runs and exits nonzero is reported through
/// [`ExecStatus::code`]; `Err` is reserved for transport failures.
pub trait ExecHost: Send + Sync {
    fn exec(&self, command: &str) -> Result<ExecStatus, Error>;
}
