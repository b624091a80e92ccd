// [tests/mirror/libs/core/probabilistic/tracker_routing.test.rs]
/**
 * =================================================================
 * APARATO: TRACKER ROUTING TEST (V4.1 - ZENITH ALIGNED)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-PROBABILISTIC
 * RESPONSABILIDAD: CERTIFICACIÓN DEL RUTEO SALADO Y LA PODA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SPREAD: Un censo realista debe repartirse entre múltiples celdas.
 * 2. DECORRELATION: Un tracker gemelo con sal fresca debe rutear el
 *    mismo censo hacia celdas distintas: la base de la poda por
 *    estratos independientes.
 * 3. PRUNING: Solo las celdas tocadas aparecen como activas.
 * =================================================================
 */

use cerbero_core_probabilistic::presets;
use cerbero_core_probabilistic::tracker::{compute_partition_index, Tracker};

#[test]
fn certify_census_spreads_across_cells() {
    println!("\n🧠 [PROVING_GROUNDS]: Initiating Salted Routing Audit V4.1...");

    let tracker_under_test = presets::sieve_tracker();

    for ordinal in 0..200u32 {
        tracker_under_test.insert(format!("identity-{ordinal}").as_bytes());
    }

    let active_cell_count = tracker_under_test.active().len();
    println!("   📊 Active cells for 200 identities: {active_cell_count}/32");

    assert!(
        active_cell_count >= 8,
        "ROUTING_COLLAPSE: census clustered into {active_cell_count} cells"
    );
}

#[test]
fn certify_twin_trackers_route_independently() {
    let original = presets::sieve_tracker();
    let twin = original.duplicate();

    let cell_total = original.partitions().len();
    let mut divergent_routes = 0u32;

    for ordinal in 0..200u32 {
        let identity = format!("identity-{ordinal}");
        let original_index =
            compute_partition_index(original.salt(), cell_total, identity.as_bytes());
        let twin_index = compute_partition_index(twin.salt(), cell_total, identity.as_bytes());
        if original_index != twin_index {
            divergent_routes += 1;
        }
    }

    println!("   📊 Divergent routes under fresh salt: {divergent_routes}/200");
    assert!(
        divergent_routes > 0,
        "SALT_CORRELATION: twin tracker mirrored every route"
    );
}

#[test]
fn certify_active_pruning_reports_touched_cells_only() {
    let tracker_under_test = Tracker::assemble(32, &presets::sieve_mask());

    assert!(tracker_under_test.active().is_empty(), "fresh tracker must be inert");

    tracker_under_test.insert(b"identity-alpha");
    assert_eq!(
        tracker_under_test.active().len(),
        1,
        "PRUNE_FAULT: exactly one cell must report activity"
    );
}
