//! Thread pinning for stable measurements.
//!
//! Linux uses `sched_setaffinity` through libc and restores the saved mask on
//! unpin. Other platforms report "not pinned" and measurements run unpinned.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;
    use std::mem;

    thread_local! {
        static SAVED_MASK: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu takes no arguments and only reports.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: cpu_set_t is plain data; zeroed is a valid empty set, and the
        // size passed matches the struct handed to the kernel.
        unsafe {
            let mut saved: libc::cpu_set_t = mem::zeroed();
            if libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut saved) != 0 {
                return false;
            }

            let mut set: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            if libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
                return false;
            }

            SAVED_MASK.with(|cell| *cell.borrow_mut() = Some(saved));
            true
        }
    }

    pub fn unpin() -> bool {
        SAVED_MASK.with(|cell| match cell.borrow_mut().take() {
            // SAFETY: `set` is a mask previously returned by sched_getaffinity.
            Some(set) => unsafe {
                libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn unpin() -> bool {
        true
    }
}

/// Pin the calling thread to the core it is running on (core 0 if unknown).
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu().unwrap_or(0);
    platform::pin(core).then_some(core)
}

/// Restore the affinity saved by the last successful pin.
pub fn unpin() -> bool {
    platform::unpin()
}

/// Pins the current thread while alive; unpins on drop.
#[derive(Debug)]
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    /// Core the thread was pinned to, or [`None`] when pinning failed.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}
