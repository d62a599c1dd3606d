//! CPU cycle counter.
//!
//! x86/x86_64 read the TSC between two LFENCEs; aarch64 reads the virtual
//! timer, which is fixed-frequency ticks rather than core cycles.

/// Read the current CPU cycle counter / timer.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        use core::arch::x86_64::{_mm_lfence, _rdtsc};
        // SAFETY: LFENCE and RDTSC are available on every x86_64 CPU.
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "x86")]
    {
        use core::arch::x86::{_mm_lfence, _rdtsc};
        // SAFETY: the feature is only enabled on targets with SSE2.
        unsafe {
            _mm_lfence();
            let cycles = _rdtsc();
            _mm_lfence();
            cycles
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let val: u64;
        // SAFETY: CNTVCT_EL0 is readable from EL0.
        unsafe {
            core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
        }
        val
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!("cpu_cycles feature requires x86, x86_64, or aarch64; build with --features use_time");
    }
}
