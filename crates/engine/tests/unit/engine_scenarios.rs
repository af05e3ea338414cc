//! Worked end-to-end scenarios.
//!
//! Each test below exercises one concrete scenario that the replacement engine's behavior is
//! pinned to, independent of any particular host cache implementation.

use llcsim_engine::{AccessType, Engine, EngineConfig, LineView, PolicyKind};

fn engine_with(policy: PolicyKind, sets: usize, assoc: usize) -> Engine {
    let config = EngineConfig {
        sets,
        assoc,
        policy,
        ..EngineConfig::default()
    };
    Engine::new(&config).expect("valid config")
}

fn valid_line(tag: u64) -> LineView {
    LineView { valid: true, tag }
}

// ══════════════════════════════════════════════════════════
// 1. LRU victim after warm-up
// ══════════════════════════════════════════════════════════

/// Filling a 4-way set with four misses in order T0..T3, then hitting T0, moves T1 to the
/// bottom of the stack — `choose_victim` must then pick T1's way next.
#[test]
fn lru_victim_after_warm_up() {
    let mut engine = engine_with(PolicyKind::Lru, 8, 4);
    let set = [valid_line(0), valid_line(1), valid_line(2), valid_line(3)];

    for way in 0..4 {
        let victim = engine.choose_victim(0, &set);
        assert_eq!(victim, way, "fills should proceed in way order on an empty set");
        engine.update(0, way, 0, set[way], AccessType::Read, false);
    }

    // T0 occupies way 0; hitting it promotes it to MRU.
    engine.update(0, 0, 0, set[0], AccessType::Read, true);

    // T1 (way 1) is now the LRU line.
    assert_eq!(engine.choose_victim(0, &set), 1);
}

// ══════════════════════════════════════════════════════════
// 2. SRRIP aging
// ══════════════════════════════════════════════════════════

/// Four misses into an empty 4-way set all insert at `RRIP_MAX - 2` (== 2). No way is at
/// `RRIP_MAX - 1` yet, so the next victim search ages the whole set once before returning way 0.
#[test]
fn srrip_ages_set_before_first_victim() {
    let mut engine = engine_with(PolicyKind::Srrip, 8, 4);
    let set = [valid_line(0), valid_line(1), valid_line(2), valid_line(3)];

    for way in 0..4 {
        let victim = engine.choose_victim(0, &set);
        engine.update(0, victim, 0, set[way], AccessType::Read, false);
    }

    assert_eq!(engine.choose_victim(0, &set), 0);
}

// ══════════════════════════════════════════════════════════
// 3. DRRIP leader accounting
// ══════════════════════════════════════════════════════════

/// Set 0 is a permanent SRRIP leader and set 31 a permanent BRRIP leader under the fixed
/// `NumLeaderSets = 32` mapping. Five misses in the SRRIP leader drop `PSEL` by five; five
/// misses in the BRRIP leader bring it back up; five misses in a follower set move it not at
/// all.
#[test]
fn drrip_leader_sets_move_psel_and_followers_do_not() {
    let mut engine = engine_with(PolicyKind::Drrip, 1024, 16);
    let line = valid_line(0);

    for _ in 0..5 {
        engine.update(0, 0, 0, line, AccessType::Read, false);
    }
    assert_eq!(engine.stats().psel_final, 507);

    for _ in 0..5 {
        engine.update(31, 0, 0, line, AccessType::Read, false);
    }
    assert_eq!(engine.stats().psel_final, 512);

    for _ in 0..5 {
        engine.update(1, 0, 0, line, AccessType::Read, false);
    }
    assert_eq!(engine.stats().psel_final, 512);
}

// ══════════════════════════════════════════════════════════
// 4. SHiP cold insert
// ══════════════════════════════════════════════════════════

/// With every SHCT entry still at zero, a miss is predicted not to be reused and counted as a
/// bad insert.
#[test]
fn ship_cold_signature_is_a_bad_insert() {
    let mut engine = engine_with(PolicyKind::Ship, 8, 4);
    engine.update(0, 0, 0x40, valid_line(0), AccessType::Read, false);
    assert_eq!(engine.stats().ship_bad_insert, 1);
    assert_eq!(engine.stats().ship_good_insert, 0);
}

// ══════════════════════════════════════════════════════════
// 5. EAF reuse boost
// ══════════════════════════════════════════════════════════

/// Evicting address A records it in the filter. Reinstalling A is a filter hit (good insert);
/// installing a never-seen address B is a filter miss (bad insert).
#[test]
fn eaf_recognizes_a_recently_evicted_address() {
    let mut engine = engine_with(PolicyKind::Eaf, 8, 4);
    let set = [valid_line(0), valid_line(1), valid_line(2), valid_line(3)];

    // Warm the set so the next victim search has something valid to evict and record.
    for way in 0..4 {
        let victim = engine.choose_victim(0, &set);
        engine.update(0, victim, 0, set[way], AccessType::Read, false);
    }
    let evicted_way = engine.choose_victim(0, &set);
    let evicted_tag = set[evicted_way].tag;

    // Reinstall the evicted block (same set, same tag): filter hit.
    engine.update(0, evicted_way, 0, valid_line(evicted_tag), AccessType::Read, false);
    assert_eq!(engine.stats().eaf_static_good_insert, 1);

    // A fresh address (tag never evicted): filter miss.
    let fresh_way = engine.choose_victim(0, &set);
    engine.update(0, fresh_way, 0, valid_line(999), AccessType::Read, false);
    assert_eq!(engine.stats().eaf_static_bad_insert, 1);
}

// ══════════════════════════════════════════════════════════
// 6. EAF periodic reset
// ══════════════════════════════════════════════════════════

/// After exactly `RESET_THRESHOLD` (16384) recorded evictions, the filter wholesale-resets and
/// forgets everything recorded just before the reset.
#[test]
fn eaf_resets_after_reset_threshold_evictions() {
    let mut engine = engine_with(PolicyKind::Eaf, 8, 4);
    let set = [valid_line(0), valid_line(1), valid_line(2), valid_line(3)];

    for way in 0..4 {
        let victim = engine.choose_victim(0, &set);
        engine.update(0, victim, 0, set[way], AccessType::Read, false);
    }

    // Churn the set with fresh tags so every choose_victim call evicts a previously-valid,
    // distinct block, driving the eviction counter toward the reset threshold.
    let mut tag = 4u64;
    for _ in 0..16_384 {
        let victim = engine.choose_victim(0, &set);
        engine.update(0, victim, 0, valid_line(tag), AccessType::Read, false);
        tag += 1;
    }

    assert_eq!(engine.stats().eaf_resets, 1);
}
