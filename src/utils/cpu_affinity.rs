//! Pinning the measuring thread to one CPU core.
//!
//! Linux uses `sched_setaffinity` through `libc` and restores the saved mask
//! on unpin. Other platforms get a no-op that reports "not pinned".

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn core_count() -> Option<usize> {
        // SAFETY: sysconf has no memory-safety preconditions
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        (n > 0).then_some(n as usize)
    }

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu takes no arguments
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn save_affinity() -> bool {
        // SAFETY: `set` is a valid, zeroed cpu_set_t of the size we pass
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) != 0 {
                return false;
            }
            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(set));
            true
        }
    }

    pub fn set_affinity(core_id: usize) -> bool {
        // SAFETY: `set` is a valid cpu_set_t of the size we pass
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity() -> bool {
        ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
            // SAFETY: `set` was filled by sched_getaffinity
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn core_count() -> Option<usize> {
        None
    }
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> bool {
        true
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity() -> bool {
        true
    }
}

/// Number of online CPU cores, if the platform reports it
pub fn core_count() -> Option<usize> {
    platform::core_count()
}

/// Pin the current thread to a specific core, saving the previous mask.
pub fn pin_to_core(core_id: usize) -> bool {
    platform::save_affinity() && platform::set_affinity(core_id)
}

/// Pin the current thread to the core it is running on, falling back to core 0.
///
/// Returns the pinned core, or `None` if pinning is unsupported or failed.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu().or_else(|| core_count().map(|_| 0))?;
    pin_to_core(core).then_some(core)
}

/// Restore the affinity saved by the last pin.
pub fn unpin() -> bool {
    platform::restore_affinity()
}

/// RAII guard: pins on creation, unpins on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new();
///     // ... timed code ...
/// }
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    /// Pin to the current CPU core.
    pub fn new() -> Self {
        let pinned_core = pin_to_current_core();
        if pinned_core.is_none() {
            tracing::trace!("CPU pinning unavailable, measuring unpinned");
        }
        Self { pinned_core }
    }

    /// Core this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() && !unpin() {
            tracing::warn!("failed to restore CPU affinity");
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_core_count() {
        assert!(core_count().is_some_and(|n| n > 0));
    }

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        assert_eq!(guard.is_pinned(), guard.core_id().is_some());
        drop(guard);
    }

    #[test]
    fn test_pin_unpin_cycle() {
        if pin_to_current_core().is_some() {
            assert!(unpin(), "Unpin should succeed after pin");
        }
    }
}
