// [libs/domain/sentinel/src/pacing.rs]
/**
 * =================================================================
 * APARATO: AGGREGATE TOKEN PACER (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: DOMAIN CORE (ESTRATO L2)
 * RESPONSABILIDAD: CAPACIDAD AGREGADA COMO BUCKET DE TOKENS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SMOOTH REFILL: Recarga continua a razón de un token por intervalo,
 *    con techo de ráfaga; el bucket nace lleno.
 * 2. ZERO-BURST DENIAL: Un techo de cero tokens niega toda petición:
 *    el modo de clausura total del frente.
 * 3. UNBOUNDED MODE: Un intervalo nulo desactiva el marcapasos; toda
 *    petición pasa directo al motor restringido.
 *
 * El ledger vive bajo un cerrojo corto y acotado: la única sección
 * crítica del frente junto a la anotación de particiones.
 * =================================================================
 */

use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::error;

/// Configuración del bucket agregado: un token cada `replenish_interval`
/// con un techo de ráfaga de `burst` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacerRate {
    replenish_interval: Duration,
    burst: u32,
}

impl PacerRate {
    /// Un token cada `replenish_interval`, hasta `burst` acumulados.
    #[must_use]
    pub fn every(replenish_interval: Duration, burst: u32) -> Self {
        Self {
            replenish_interval,
            burst,
        }
    }

    /// Marcapasos desactivado: toda petición es admitida por el frente.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            replenish_interval: Duration::ZERO,
            burst: u32::MAX,
        }
    }

    /// Tokens repuestos por segundo; infinito para el modo desactivado.
    #[must_use]
    pub fn tokens_per_second(&self) -> f64 {
        if self.replenish_interval.is_zero() {
            f64::INFINITY
        } else {
            1.0 / self.replenish_interval.as_secs_f64()
        }
    }

    /// Techo de ráfaga configurado.
    #[must_use]
    pub fn burst(&self) -> u32 {
        self.burst
    }
}

struct PacerLedger {
    available_tokens: f64,
    replenished_at: Instant,
}

/// Bucket de tokens con recarga continua bajo cerrojo corto.
pub struct TokenPacer {
    replenishment_per_second: f64,
    burst_ceiling: f64,
    ledger: Mutex<PacerLedger>,
}

impl TokenPacer {
    /// Ensambla el marcapasos con el bucket lleno.
    #[must_use]
    pub fn new(rate: PacerRate) -> Self {
        let burst_ceiling = f64::from(rate.burst());
        Self {
            replenishment_per_second: rate.tokens_per_second(),
            burst_ceiling,
            ledger: Mutex::new(PacerLedger {
                available_tokens: burst_ceiling,
                replenished_at: Instant::now(),
            }),
        }
    }

    /// Intenta tomar un token; `false` agota la capacidad del ciclo.
    #[must_use]
    pub fn allow(&self) -> bool {
        if self.replenishment_per_second.is_infinite() {
            return true;
        }

        match self.ledger.lock() {
            Ok(mut ledger) => {
                let now = Instant::now();
                let elapsed_seconds = now.duration_since(ledger.replenished_at).as_secs_f64();
                ledger.available_tokens = (ledger.available_tokens
                    + elapsed_seconds * self.replenishment_per_second)
                    .min(self.burst_ceiling);
                ledger.replenished_at = now;

                if ledger.available_tokens >= 1.0 {
                    ledger.available_tokens -= 1.0;
                    true
                } else {
                    false
                }
            }
            Err(poison_fault) => {
                error!("💀 [PACER_POISONED]: Denying by default: {}", poison_fault);
                false
            }
        }
    }
}
