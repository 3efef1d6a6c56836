//! Owner name lookup per platform.
//!
//! The walker only talks to [`OwnerResolver`]; [`platform_resolver`] picks the
//! implementation once at startup.

use std::fs::Metadata;
use std::path::Path;

use crate::error::OwnerError;

pub trait OwnerResolver: Send + Sync {
    /// Resolves the owner of the file at `path`, described by `metadata`.
    fn owner_name(&self, metadata: &Metadata, path: &Path) -> Result<String, OwnerError>;
}

/// Resolver for the platform this binary was built for.
#[cfg(unix)]
pub fn platform_resolver() -> Box<dyn OwnerResolver> {
    Box::new(PosixOwners::new())
}

#[cfg(windows)]
pub fn platform_resolver() -> Box<dyn OwnerResolver> {
    Box::new(WindowsOwners)
}

#[cfg(not(any(unix, windows)))]
pub fn platform_resolver() -> Box<dyn OwnerResolver> {
    Box::new(UnsupportedOwners)
}

/// Resolver for platforms without an ownership model we understand.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedOwners;

impl OwnerResolver for UnsupportedOwners {
    fn owner_name(&self, _metadata: &Metadata, _path: &Path) -> Result<String, OwnerError> {
        Err(OwnerError::Unsupported)
    }
}

#[cfg(unix)]
pub use posix::PosixOwners;

#[cfg(unix)]
mod posix {
    use std::fs::Metadata;
    use std::num::NonZeroUsize;
    use std::os::unix::fs::MetadataExt;
    use std::path::Path;
    use std::sync::Mutex;

    use lru::LruCache;
    use nix::unistd::{Uid, User};

    use super::OwnerResolver;
    use crate::error::OwnerError;

    const CACHE_CAPACITY: usize = 1024;

    /// Maps uids to login names through the passwd database.
    ///
    /// Almost every file on a host belongs to a handful of users, so lookups go
    /// through a small LRU.
    pub struct PosixOwners {
        cache: Mutex<LruCache<u32, String>>,
    }

    impl PosixOwners {
        pub fn new() -> Self {
            let capacity = NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
            Self { cache: Mutex::new(LruCache::new(capacity)) }
        }

        pub fn name_for_uid(&self, uid: u32) -> Result<String, OwnerError> {
            if let Ok(mut cache) = self.cache.lock() {
                if let Some(name) = cache.get(&uid) {
                    return Ok(name.clone());
                }
            }

            let user = User::from_uid(Uid::from_raw(uid))
                .map_err(|e| OwnerError::Lookup(format!("uid {}: {}", uid, e)))?
                .ok_or_else(|| OwnerError::Lookup(format!("uid {} has no passwd entry", uid)))?;

            if let Ok(mut cache) = self.cache.lock() {
                cache.put(uid, user.name.clone());
            }
            Ok(user.name)
        }
    }

    impl Default for PosixOwners {
        fn default() -> Self {
            Self::new()
        }
    }

    impl OwnerResolver for PosixOwners {
        fn owner_name(&self, metadata: &Metadata, _path: &Path) -> Result<String, OwnerError> {
            self.name_for_uid(metadata.uid())
        }
    }
}

#[cfg(windows)]
pub use windows_owner::WindowsOwners;

#[cfg(windows)]
mod windows_owner {
    use std::fs::Metadata;
    use std::os::windows::ffi::OsStrExt;
    use std::path::Path;

    use windows::core::{PCWSTR, PWSTR};
    use windows::Win32::Foundation::{LocalFree, ERROR_SUCCESS, HLOCAL};
    use windows::Win32::Security::Authorization::{GetNamedSecurityInfoW, SE_FILE_OBJECT};
    use windows::Win32::Security::{
        LookupAccountSidW, OWNER_SECURITY_INFORMATION, PSECURITY_DESCRIPTOR, PSID, SID_NAME_USE,
    };

    use super::OwnerResolver;
    use crate::error::OwnerError;

    /// Reads the owner SID from the file's security descriptor and looks up the account.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WindowsOwners;

    impl OwnerResolver for WindowsOwners {
        fn owner_name(&self, _metadata: &Metadata, path: &Path) -> Result<String, OwnerError> {
            let wide: Vec<u16> = path.as_os_str().encode_wide().chain(std::iter::once(0)).collect();
            let mut owner = PSID::default();
            let mut descriptor = PSECURITY_DESCRIPTOR::default();

            unsafe {
                let status = GetNamedSecurityInfoW(
                    PCWSTR(wide.as_ptr()),
                    SE_FILE_OBJECT,
                    OWNER_SECURITY_INFORMATION,
                    Some(&mut owner),
                    None,
                    None,
                    None,
                    &mut descriptor,
                );
                if status != ERROR_SUCCESS {
                    return Err(OwnerError::Lookup(format!(
                        "GetNamedSecurityInfoW failed for {}: {:?}",
                        path.display(),
                        status
                    )));
                }

                let mut name = [0u16; 256];
                let mut domain = [0u16; 256];
                let mut name_len = name.len() as u32;
                let mut domain_len = domain.len() as u32;
                let mut sid_use = SID_NAME_USE::default();
                let lookup = LookupAccountSidW(
                    PCWSTR::null(),
                    owner,
                    Some(PWSTR(name.as_mut_ptr())),
                    &mut name_len,
                    Some(PWSTR(domain.as_mut_ptr())),
                    &mut domain_len,
                    &mut sid_use,
                );
                let _ = LocalFree(Some(HLOCAL(descriptor.0)));

                lookup.map_err(|e| OwnerError::Lookup(format!("LookupAccountSidW failed: {}", e)))?;
                Ok(String::from_utf16_lossy(&name[..name_len as usize]))
            }
        }
    }
}
