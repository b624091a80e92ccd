// [tests/mirror/libs/domain/sentinel/rejection_digest.test.rs]
/**
 * =================================================================
 * APARATO: REJECTION DIGEST TEST (V4.1 - ZENITH ALIGNED)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-SENTINEL
 * RESPONSABILIDAD: FORMAS DE DISPLAY Y DIGESTO OFUSCADO
 *
 * El display de un veredicto depende única y exclusivamente de la
 * identidad: mismo insumo, mismo digesto, en cualquier variante.
 * =================================================================
 */

use cerbero_domain_sentinel::errors::Rejection;
use std::time::Duration;

#[test]
fn certify_blocked_display_form() {
    let verdict = Rejection::blocked(b"agent");
    assert_eq!(
        verdict.to_string(),
        "rate limiter blocked: b33aed8f3134996703dc39f9a7c95783",
        "DIGEST_DRIFT: blocked display must end with the MD5 hex of the identity"
    );
}

#[test]
fn certify_banned_display_form() {
    let verdict = Rejection::banned(b"agent", Duration::from_millis(200));
    assert_eq!(
        verdict.to_string(),
        "rate limiter banned: b33aed8f3134996703dc39f9a7c95783"
    );
}

#[test]
fn certify_digest_depends_only_on_identity() {
    let first = Rejection::blocked(b"identity-alpha");
    let second = Rejection::blocked(b"identity-alpha");
    let banned = Rejection::banned(b"identity-alpha", Duration::from_secs(5));

    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.identity_digest(), banned.identity_digest());
}

#[test]
fn certify_cooldown_is_queryable() {
    let window = Duration::from_millis(200);
    let verdict = Rejection::banned(b"identity-alpha", window);

    assert!(verdict.is_banned());
    assert_eq!(verdict.cooldown(), Some(window));
    assert_eq!(Rejection::blocked(b"identity-alpha").cooldown(), None);
}
