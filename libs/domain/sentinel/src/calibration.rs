// [libs/domain/sentinel/src/calibration.rs]
/**
 * =================================================================
 * APARATO: SENTINEL CALIBRATION (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: DOMAIN CORE (ESTRATO L2)
 * RESPONSABILIDAD: TUNABLES DEL MOTOR RESTRINGIDO
 *
 * Valores de fábrica: anillo de 4 estratos, contabilidad cada 100
 * fallos, ventana de baneo de 200 ms. Cada tunable admite override
 * programático o por variable de entorno CERBERO_*.
 * =================================================================
 */

use std::time::Duration;

/// Profundidad de fábrica del anillo de promoción.
pub const DEFAULT_RING_DEPTH: usize = 4;

/// Recarga de fábrica del contador de contabilidad.
pub const DEFAULT_MUTATION_FREQUENCY: i64 = 100;

/// Ventana de fábrica del censo de baneados.
pub const DEFAULT_BANNED_WINDOW: Duration = Duration::from_millis(200);

/// Tunables del motor restringido.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    /// Cantidad de pools del anillo de promoción (cabeza = más viejo).
    pub ring_depth: usize,
    /// Fallos entre disparos de contabilidad (poda + promoción).
    pub mutation_frequency: i64,
    /// Enfriamiento declarado del baneo y cadencia de la poda del censo.
    pub banned_window: Duration,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            ring_depth: DEFAULT_RING_DEPTH,
            mutation_frequency: DEFAULT_MUTATION_FREQUENCY,
            banned_window: DEFAULT_BANNED_WINDOW,
        }
    }
}

impl Calibration {
    /// Calibración desde el entorno: `CERBERO_RING_DEPTH`,
    /// `CERBERO_MUTATION_FREQUENCY` y `CERBERO_BANNED_WINDOW_MS`.
    /// Los valores ausentes o malformados caen a los de fábrica.
    #[must_use]
    pub fn from_env() -> Self {
        let fallback = Self::default();

        Self {
            ring_depth: std::env::var("CERBERO_RING_DEPTH")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .filter(|depth| *depth > 0)
                .unwrap_or(fallback.ring_depth),
            mutation_frequency: std::env::var("CERBERO_MUTATION_FREQUENCY")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .filter(|frequency| *frequency > 0)
                .unwrap_or(fallback.mutation_frequency),
            banned_window: std::env::var("CERBERO_BANNED_WINDOW_MS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(fallback.banned_window),
        }
    }
}
