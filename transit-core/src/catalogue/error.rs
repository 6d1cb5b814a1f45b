use thiserror::Error;

/// Errors from [`TransportCatalogue`](super::TransportCatalogue) insertions.
///
/// Each error rejects only the insertion that raised it; the catalogue is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// A stop with this name already exists.
    #[error("stop '{name}' is already registered")]
    DuplicateStop {
        /// Name that was inserted twice.
        name: String,
    },
    /// A bus with this name already exists.
    #[error("bus '{name}' is already registered")]
    DuplicateBus {
        /// Name that was inserted twice.
        name: String,
    },
    /// A distance override names a stop the catalogue does not know.
    #[error("unknown stop '{name}'")]
    UnknownStop {
        /// Name that failed to resolve.
        name: String,
    },
    /// A bus path names a stop the catalogue does not know.
    #[error("bus '{bus}' references unknown stop '{stop}'")]
    UnresolvedRouteStop {
        /// Bus being inserted.
        bus: String,
        /// First stop name that failed to resolve.
        stop: String,
    },
}
