// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Current-user privilege query.

/// True when the current process runs with superuser rights.
///
/// Unix checks the effective uid, so a setuid test runner counts as
/// elevated. Windows queries process token elevation; a failed token query
/// reads as not elevated.
#[cfg(unix)]
pub fn is_superuser() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(windows)]
pub fn is_superuser() -> bool {
    use std::mem;
    use winapi::um::handleapi::CloseHandle;
    use winapi::um::processthreadsapi::{GetCurrentProcess, OpenProcessToken};
    use winapi::um::securitybaseapi::GetTokenInformation;
    use winapi::um::winnt::{HANDLE, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation};

    unsafe {
        let mut token: HANDLE = std::ptr::null_mut();
        if OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token) == 0 {
            log::warn!("Failed to open the process token for the elevation query");
            return false;
        }

        let mut elevation: TOKEN_ELEVATION = mem::zeroed();
        let mut returned = 0u32;
        let queried = GetTokenInformation(
            token,
            TokenElevation,
            &mut elevation as *mut TOKEN_ELEVATION as *mut _,
            mem::size_of::<TOKEN_ELEVATION>() as u32,
            &mut returned,
        );
        CloseHandle(token);

        if queried == 0 {
            log::warn!("Failed to query token elevation");
            return false;
        }

        elevation.TokenIsElevated != 0
    }
}

#[cfg(not(any(unix, windows)))]
pub fn is_superuser() -> bool {
    false
}
