// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_reads_a_recent_epoch() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock.epoch_ms() > 1_577_836_800_000);
}

#[test]
fn fake_clock_starts_at_a_fixed_reading() {
    assert_eq!(FakeClock::new().epoch_ms(), FAKE_EPOCH_MS);
    assert_eq!(FakeClock::at(42).epoch_ms(), 42);
}

#[test]
fn advance_moves_by_milliseconds() {
    let clock = FakeClock::at(0);
    clock.advance(Duration::from_secs(2));
    clock.advance(Duration::from_millis(5));
    assert_eq!(clock.epoch_ms(), 2_005);
}

#[test]
fn advance_saturates() {
    let clock = FakeClock::at(u64::MAX - 1);
    clock.advance(Duration::from_secs(1));
    assert_eq!(clock.epoch_ms(), u64::MAX);
}

#[test]
fn handles_share_one_reading() {
    let held = FakeClock::new();
    let given_away = held.clone();
    held.set_epoch_ms(7);
    assert_eq!(given_away.epoch_ms(), 7);
}
