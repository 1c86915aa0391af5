/// Longest a single bus transaction may stall before it is abandoned.
pub const BUS_TIMEOUT_MS: u32 = 1000;

/// Convert a timeout into clock cycles, saturating at the largest value the
/// peripheral's timeout counter can hold.
pub const fn timeout_cycles(timeout_ms: u32, clock_hz: u32, max_cycles: u32) -> u32 {
    let cycles = timeout_ms as u64 * clock_hz as u64 / 1000;

    if cycles > max_cycles as u64 {
        max_cycles
    } else {
        cycles as u32
    }
}
