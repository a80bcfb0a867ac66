//! Room lookup library.
//!
//! Resolves chat rooms by identifier over a pluggable room store, following a
//! layered layout: `domain` defines the `Room` model and the `RoomRepository`
//! trait, `usecase` holds the lookup, `infrastructure` provides concrete
//! stores and `ui` is the command line caller.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::run;
pub use usecase::GetRoomByIdUseCase;
