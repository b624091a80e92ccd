// [libs/domain/sentinel/src/limiter.rs]
/**
 * =================================================================
 * APARATO: FRONT LIMITER (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: DOMAIN CORE (ESTRATO L2)
 * RESPONSABILIDAD: COMPOSICIÓN DEL MARCAPASOS Y EL MOTOR RESTRINGIDO
 *
 * La asimetría del frente es la clave de la disciplina: una identidad
 * denegada por el bucket agregado SIEMPRE queda registrada (promovida
 * desde la criba o atribuida al estrato que ya la conoce), aunque el
 * veredicto externo ya fuese el bloqueo. Las identidades admitidas por
 * el bucket solo se retienen si un estrato del anillo las captura. Así
 * las identidades bien portadas conservan el servicio mientras sus
 * pares abusivos son cercados.
 * =================================================================
 */

use crate::calibration::Calibration;
use crate::errors::Rejection;
use crate::pacing::{PacerRate, TokenPacer};
use crate::restricted::RestrictedEngine;

/// Recuento aproximado de las identidades actualmente baneadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analytics {
    /// Cardinalidad estimada del censo de baneados.
    pub banned: u32,
}

/// Limitador frontal: bucket agregado más motor restringido.
pub struct Limiter {
    aggregate: TokenPacer,
    restricted: RestrictedEngine,
}

impl Limiter {
    /// Ensambla el limitador con la calibración de fábrica del motor.
    #[must_use]
    pub fn new(rate: PacerRate) -> Self {
        Self::with_calibration(rate, Calibration::default())
    }

    /// Ensambla el limitador con una calibración explícita del motor.
    #[must_use]
    pub fn with_calibration(rate: PacerRate, calibration: Calibration) -> Self {
        Self {
            aggregate: TokenPacer::new(rate),
            restricted: RestrictedEngine::new(calibration),
        }
    }

    /// Veredicto para una petición de la identidad indicada.
    ///
    /// Si la petición será bloqueada de todos modos por la capacidad
    /// agregada, solo actualizamos el conjunto restringido: una
    /// identidad bien portada obedecerá el veredicto y bajará el ritmo.
    /// Si la capacidad la admite, el conjunto restringido decide si la
    /// identidad sigue vetada.
    ///
    /// # Errors:
    /// `Rejection::Blocked` para el retroceso de un ciclo;
    /// `Rejection::Banned` cuando la identidad reside en el censo.
    pub fn allow(&self, identity: &[u8]) -> Result<(), Rejection> {
        if !self.aggregate.allow() {
            return match self.restricted.insert(identity) {
                Err(rejection) => Err(rejection),
                // Una guardia añeja puede dejar pasar el registro sin
                // atribución; la petición sigue denegada por capacidad.
                Ok(()) => Err(Rejection::blocked(identity)),
            };
        }

        self.restricted.allow(identity)
    }

    /// Analítica del censo de baneados.
    #[must_use]
    pub fn analytics(&self) -> Analytics {
        Analytics {
            banned: self.restricted.banned_cardinality(),
        }
    }

    /// Volcado diagnóstico de los estratos del motor.
    pub fn debug(&self) {
        self.restricted.debug_dump();
    }
}
