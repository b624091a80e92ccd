// libs/domain/sentinel/src/errors.rs
// =================================================================
// APARATO: SENTINEL VERDICTS
// RESPONSABILIDAD: CATÁLOGO DE VEREDICTOS DE RECHAZO
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use std::time::Duration;
use thiserror::Error;

/// Digesto hexadecimal MD5 de la identidad: ofusca el valor crudo en
/// los mensajes sin perder la correlación entre apariciones.
pub(crate) fn obfuscated_digest(identity: &[u8]) -> String {
    hex::encode(md5::compute(identity).0)
}

/// Veredictos de rechazo del centinela.
///
/// Ambas variantes viajan por valor hasta el llamador; el núcleo jamás
/// las registra ni las traga. Los llamadores deben discriminar por
/// variante (el enfriamiento solo existe en `Banned`) en lugar de
/// degradarlas a texto.
#[derive(Error, Debug)]
pub enum Rejection {
    /// La identidad debe retroceder durante este ciclo.
    ///
    /// Costo interno: una inserción en la criba de ingreso.
    #[error("rate limiter blocked: {}", obfuscated_digest(.identity))]
    Blocked {
        /// Identidad opaca rechazada.
        identity: Vec<u8>,
    },

    /// La identidad debe retroceder al menos durante el enfriamiento
    /// retornado; reside en el censo de baneados o está entrando a él.
    #[error("rate limiter banned: {}", obfuscated_digest(.identity))]
    Banned {
        /// Identidad opaca rechazada.
        identity: Vec<u8>,
        /// Duración mínima del baneo declarado.
        cooldown: Duration,
    },
}

impl Rejection {
    /// Veredicto de bloqueo para la identidad indicada.
    #[must_use]
    pub fn blocked(identity: &[u8]) -> Self {
        Self::Blocked {
            identity: identity.to_vec(),
        }
    }

    /// Veredicto de baneo con su enfriamiento declarado.
    #[must_use]
    pub fn banned(identity: &[u8], cooldown: Duration) -> Self {
        Self::Banned {
            identity: identity.to_vec(),
            cooldown,
        }
    }

    /// Enfriamiento declarado del baneo; `None` para un bloqueo.
    #[must_use]
    pub fn cooldown(&self) -> Option<Duration> {
        match self {
            Self::Banned { cooldown, .. } => Some(*cooldown),
            Self::Blocked { .. } => None,
        }
    }

    /// Indica si el veredicto es un baneo.
    #[must_use]
    pub fn is_banned(&self) -> bool {
        matches!(self, Self::Banned { .. })
    }

    /// Digesto ofuscado de la identidad rechazada.
    #[must_use]
    pub fn identity_digest(&self) -> String {
        match self {
            Self::Blocked { identity } | Self::Banned { identity, .. } => {
                obfuscated_digest(identity)
            }
        }
    }
}
