// [libs/domain/sentinel/src/restricted.rs]
/**
 * =================================================================
 * APARATO: RESTRICTED ENGINE (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: DOMAIN CORE (ESTRATO L2)
 * RESPONSABILIDAD: AISLAMIENTO PROGRESIVO Y CENSO DE BANEADOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ONEHOT INGRESS: Las identidades limitadas en el ciclo vigente
 *    ingresan por la criba; son la próxima camada del anillo.
 * 2. PROMOTION RING: Cuatro pools encadenados: cabeza = más viejo.
 *    Pertenecer a cualquiera significa seguir en enfriamiento.
 * 3. WARM GUARD: La unión de las máscaras del anillo descarta en una
 *    consulta a las identidades que ningún pool conoce.
 * 4. BANNED CENSUS: Pool intercambiado atómicamente; la poda periódica
 *    regenera su máscara desde las celdas activas y perdona a las
 *    identidades cuyas celdas envejecieron.
 * 5. AMORTIZED BOOKKEEPING: Un contador descendente dispara la poda y
 *    la promoción una vez por recarga; gana exactamente un ejecutor.
 *
 * Las superficies calientes (censo, recientes, criba, anillo, guardia)
 * viven tras punteros atómicos: los lectores no bloquean jamás y
 * observan instantáneas íntegras aunque levemente añejas.
 * =================================================================
 */

use crate::calibration::Calibration;
use crate::errors::Rejection;
use arc_swap::ArcSwap;
use cerbero_core_probabilistic::mask::MembershipMask;
use cerbero_core_probabilistic::mask_ops;
use cerbero_core_probabilistic::pool::Pool;
use cerbero_core_probabilistic::presets;
use cerbero_core_probabilistic::tracker::Tracker;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{error, info, warn};

/// Estado custodiado por el cerrojo de transiciones compuestas.
struct EngineGate {
    banned_reaped_at: Instant,
}

/// Motor restringido: la disciplina completa de aislamiento progresivo.
pub struct RestrictedEngine {
    mutation_frequency: i64,
    banned_window: std::time::Duration,
    gate: Mutex<EngineGate>,
    onehot: ArcSwap<Tracker>,
    banned: ArcSwap<Pool>,
    recently_banned: ArcSwap<Pool>,
    ring: ArcSwap<Vec<Arc<Pool>>>,
    warm: ArcSwap<MembershipMask>,
    blocked_countdown: AtomicI64,
}

impl Default for RestrictedEngine {
    fn default() -> Self {
        Self::new(Calibration::default())
    }
}

impl RestrictedEngine {
    /// Ensambla el motor con la calibración indicada.
    #[must_use]
    pub fn new(calibration: Calibration) -> Self {
        let mut ring = Vec::with_capacity(calibration.ring_depth);
        for _ in 0..calibration.ring_depth {
            ring.push(Arc::new(Pool::from_tracker(1.0, &presets::sieve_tracker())));
        }

        Self {
            mutation_frequency: calibration.mutation_frequency,
            banned_window: calibration.banned_window,
            gate: Mutex::new(EngineGate {
                banned_reaped_at: Instant::now(),
            }),
            onehot: ArcSwap::from_pointee(presets::sieve_tracker()),
            banned: ArcSwap::from_pointee(Pool::from_tracker(1.0, &presets::banned_tracker())),
            recently_banned: ArcSwap::from_pointee(Pool::from_tracker(
                1.0,
                &presets::sieve_tracker(),
            )),
            ring: ArcSwap::from_pointee(ring),
            warm: ArcSwap::from_pointee(presets::sieve_mask()),
            blocked_countdown: AtomicI64::new(0),
        }
    }

    /// Registra una identidad cuyo ciclo fue denegado por el bucket
    /// agregado, escalando su posición en la disciplina.
    ///
    /// Un retorno `Ok` significa que la identidad atravesó una guardia
    /// añeja sin ser atribuida; el frente debe seguir tratándola como
    /// bloqueada en este ciclo.
    ///
    /// # Errors:
    /// `Rejection::Banned` si reside en el censo; `Rejection::Blocked`
    /// al quedar registrada en la criba o atribuida a un pool del anillo.
    pub fn insert(&self, identity: &[u8]) -> Result<(), Rejection> {
        if self.banned.load().test(identity) {
            self.bookkeeping();
            return Err(Rejection::banned(identity, self.banned_window));
        }

        if self.recently_banned.load().test(identity) {
            self.banned.load().insert(identity);
            self.bookkeeping();
            return Err(Rejection::banned(identity, self.banned_window));
        }

        if !self.warm.load().test(identity) {
            self.onehot.load().insert(identity);
            self.bookkeeping();
            return Err(Rejection::blocked(identity));
        }

        for pool in self.ring.load().iter() {
            if pool.test(identity) {
                self.bookkeeping();
                return Err(Rejection::blocked(identity));
            }
        }

        Ok(())
    }

    /// Decide si una identidad admitida por el bucket agregado puede
    /// ser servida, o si algún estrato del anillo la retiene.
    ///
    /// # Errors:
    /// `Rejection::Banned` si reside en el censo; `Rejection::Blocked`
    /// si un pool del anillo la captura en el sorteo de admisión.
    pub fn allow(&self, identity: &[u8]) -> Result<(), Rejection> {
        if self.banned.load().test(identity) {
            self.bookkeeping();
            return Err(Rejection::banned(identity, self.banned_window));
        }

        if self.recently_banned.load().test(identity) {
            self.banned.load().insert(identity);
            self.bookkeeping();
            return Err(Rejection::banned(identity, self.banned_window));
        }

        if self.warm.load().test(identity) {
            for pool in self.ring.load().iter() {
                if pool.test(identity) {
                    self.bookkeeping();
                    return Err(Rejection::blocked(identity));
                }
            }
        }

        Ok(())
    }

    /// Cardinalidad aproximada del censo de baneados vigente.
    #[must_use]
    pub fn banned_cardinality(&self) -> u32 {
        self.banned.load().membership().approximated_cardinality()
    }

    /// Enfriamiento declarado en los veredictos de baneo.
    #[must_use]
    pub fn banned_window(&self) -> std::time::Duration {
        self.banned_window
    }

    /// Contabilidad amortizada: decrementa el contador y, exactamente
    /// cuando el decremento produce −1, ejecuta poda y promoción antes
    /// de recargar.
    ///
    /// La guardia «igual a −1» otorga la victoria a un solo ejecutor
    /// entre todos los llamadores concurrentes sin cerrojo adicional en
    /// el fast path. La recarga posterior no está cercada contra
    /// decrementos que crucen cero durante la ventana de trabajo; un
    /// ciclo extra o faltante bajo carga extrema es tolerado.
    fn bookkeeping(&self) {
        if self.blocked_countdown.fetch_sub(1, Ordering::AcqRel) - 1 != -1 {
            return;
        }

        self.prune_banned();
        self.promote();

        self.blocked_countdown
            .store(self.mutation_frequency, Ordering::Release);
    }

    /// Poda periódica del censo: perturba la distribución de celdas y
    /// libera las que dejaron de generar bloqueos.
    ///
    /// Dentro de la ventana vigente es un no-op. Fuera de ella, el censo
    /// se regenera desde sus celdas activas: las identidades cuyos
    /// digestos cayeron en celdas inertes quedan perdonadas: y la
    /// cohorte de recientes se reinicia vacía.
    fn prune_banned(&self) {
        let Ok(mut gate) = self.gate.lock() else {
            error!("💀 [GATE_POISONED]: Banned census prune skipped.");
            return;
        };

        if gate.banned_reaped_at.elapsed() < self.banned_window {
            return;
        }

        let outgoing_census = self.banned.load_full();
        let surviving_cells = outgoing_census.tracker().active();
        let survivor_tally = surviving_cells.len();

        let rebuilt_mask = match mask_ops::union_of_partitions(surviving_cells.into_iter()) {
            Ok(surface) => surface,
            Err(cerbero_core_probabilistic::MatrixError::EmptyUnion) => presets::banned_cell_mask(),
            Err(fault) => {
                error!("💀 [PRUNE_FAULT]: Census mask rebuild failed: {fault}");
                return;
            }
        };

        self.banned.store(Arc::new(Pool::banned(rebuilt_mask)));
        self.recently_banned.store(Arc::new(Pool::from_tracker(
            1.0,
            &presets::sieve_tracker(),
        )));
        gate.banned_reaped_at = Instant::now();

        info!(
            "🧹 [CENSUS_REAPED]: {} active cells survived the prune.",
            survivor_tally
        );
    }

    /// Promoción del anillo: la cabeza se gradúa hacia la cohorte de
    /// recientes y la criba vigente se incorpora como cola.
    fn promote(&self) {
        let Ok(_gate) = self.gate.lock() else {
            error!("💀 [GATE_POISONED]: Ring promotion skipped.");
            return;
        };

        let ring_snapshot = self.ring.load_full();
        let Some(graduating_head) = ring_snapshot.first().cloned() else {
            return;
        };

        let onehot_snapshot = self.onehot.load_full();
        let mut next_ring: Vec<Arc<Pool>> = ring_snapshot.iter().skip(1).cloned().collect();
        next_ring.push(Arc::new(Pool::from_tracker(1.0, &onehot_snapshot)));

        let next_warm = match mask_ops::union_of_pools(next_ring.iter().map(Arc::as_ref)) {
            Ok(surface) => surface,
            Err(fault) => {
                error!("💀 [PROMOTE_FAULT]: Warm guard rebuild failed: {fault}");
                return;
            }
        };

        // Graduación: la máscara de la cabeza se funde con el rastro de
        // la cohorte de recientes; un fallo aquí degrada la precisión de
        // una ventana y se tolera.
        let mut graduation_mask = graduating_head.membership().duplicate();
        let recently_snapshot = self.recently_banned.load_full();
        match mask_ops::union_of_partitions(recently_snapshot.tracker().partitions().iter()) {
            Ok(recent_trace) => {
                if let Err(fault) = graduation_mask.merge_from(&recent_trace) {
                    warn!("⚠️ [GRADUATION_DEGRADED]: Recent trace not folded: {fault}");
                }
            }
            Err(fault) => {
                warn!("⚠️ [GRADUATION_DEGRADED]: Recent trace unavailable: {fault}");
            }
        }

        self.onehot.store(Arc::new(onehot_snapshot.duplicate()));
        self.recently_banned.store(Arc::new(Pool::assemble(
            1.0,
            recently_snapshot.tracker().duplicate(),
            graduation_mask,
        )));
        self.warm.store(Arc::new(next_warm));
        self.ring.store(Arc::new(next_ring));
    }

    /// Volcado diagnóstico de la ocupación de los estratos.
    pub fn debug_dump(&self) {
        let Ok(_gate) = self.gate.lock() else {
            error!("💀 [GATE_POISONED]: Diagnostic dump skipped.");
            return;
        };

        let onehot = self.onehot.load();
        for (cell_index, cell) in onehot.active().into_iter().enumerate() {
            info!(
                "🔎 [ONEHOT] salt={} cell={} census≈{}",
                onehot.salt(),
                cell_index,
                cell.approximated_cardinality()
            );
        }

        for (tier_index, pool) in self.ring.load().iter().enumerate() {
            info!(
                "🔎 [RING] salt={} tier={} ratio={} census≈{}",
                pool.tracker().salt(),
                tier_index,
                pool.admission_ratio(),
                pool.membership().approximated_cardinality()
            );
        }

        let banned = self.banned.load();
        for (cell_index, cell) in banned.tracker().partitions().iter().enumerate() {
            if !cell.is_active() {
                continue;
            }
            info!(
                "🔎 [BANNED] salt={} cell={} blocked={} census≈{}",
                banned.tracker().salt(),
                cell_index,
                cell.blocked_count(),
                cell.approximated_cardinality()
            );
        }
    }
}
