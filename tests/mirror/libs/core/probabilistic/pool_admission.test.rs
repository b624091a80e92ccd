// [tests/mirror/libs/core/probabilistic/pool_admission.test.rs]
/**
 * =================================================================
 * APARATO: POOL ADMISSION TEST (V4.1 - ZENITH ALIGNED)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-PROBABILISTIC
 * RESPONSABILIDAD: SEMÁNTICA DEL TESTIGO Y DEL SORTEO DE ADMISIÓN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. WITNESS LAW: Tras la primera inserción, el testigo excluye a las
 *    identidades heredadas por la máscara desde otra procedencia.
 * 2. RATIO EDGES: 1.0 retiene de forma determinista; 0.0 libera todo.
 * 3. WRITE-BACK: Todo acierto y toda inserción anotan el tracker.
 * =================================================================
 */

use cerbero_core_probabilistic::pool::Pool;
use cerbero_core_probabilistic::presets;

#[test]
fn certify_membership_flows_from_source_tracker() {
    let source_tracker = presets::sieve_tracker();
    source_tracker.insert(b"identity-alpha");
    source_tracker.insert(b"identity-beta");

    let pool_under_test = Pool::from_tracker(1.0, &source_tracker);

    assert!(pool_under_test.test(b"identity-alpha"));
    assert!(pool_under_test.test(b"identity-beta"));
    assert!(!pool_under_test.test(b"identity-gamma"));
}

#[test]
fn certify_witness_excludes_inherited_members() {
    println!("\n🧠 [PROVING_GROUNDS]: Initiating Witness Semantics Audit V4.1...");

    // 1. SETUP: Una máscara con dos identidades de procedencia ajena
    let mut inherited_surface = presets::sieve_mask();
    inherited_surface.add(b"identity-alpha");
    inherited_surface.add(b"identity-beta");

    let pool_under_test = Pool::assemble(1.0, presets::sieve_tracker(), inherited_surface);

    // 2. FASE: SIN TESTIGO (la máscara manda)
    println!("   🧪 Phase 1: Pre-witness membership honors the mask...");
    assert!(pool_under_test.test(b"identity-alpha"));
    assert!(pool_under_test.test(b"identity-beta"));

    // 3. FASE: TESTIGO MATERIALIZADO (solo lo insertado cuenta)
    println!("   🧪 Phase 2: Witness discriminates inherited members...");
    assert!(pool_under_test.insert(b"identity-beta"));

    assert!(
        pool_under_test.test(b"identity-beta"),
        "WITNESS_FAULT: inserted member must remain visible"
    );
    assert!(
        !pool_under_test.test(b"identity-alpha"),
        "PROVENANCE_LEAK: inherited member must be excluded post-witness"
    );

    println!("🏁 [COMPLETE]: Witness semantics certified.\n");
}

#[test]
fn certify_ratio_edges() {
    let source_tracker = presets::sieve_tracker();
    source_tracker.insert(b"identity-alpha");

    let deterministic_pool = Pool::from_tracker(1.0, &source_tracker);
    let released_pool = Pool::from_tracker(0.0, &source_tracker);

    for _ in 0..64 {
        assert!(deterministic_pool.test(b"identity-alpha"));
        assert!(!released_pool.test(b"identity-alpha"));
    }
}

#[test]
fn certify_hits_write_back_into_tracker() {
    let source_tracker = presets::sieve_tracker();
    source_tracker.insert(b"identity-alpha");

    let pool_under_test = Pool::from_tracker(1.0, &source_tracker);
    assert!(pool_under_test.tracker().active().is_empty());

    assert!(pool_under_test.test(b"identity-alpha"));
    assert_eq!(
        pool_under_test.tracker().active().len(),
        1,
        "WRITE_BACK_FAULT: the hit must be recorded against one cell"
    );
}
