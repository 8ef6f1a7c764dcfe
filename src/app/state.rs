use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum AppPhase {
    #[default]
    Boot,
    InGame,
    End,
}

/// The store is modal for input only; the session keeps ticking and
/// rendering underneath it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Store,
}
