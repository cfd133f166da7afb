//! Reservation store
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Calendar view                      │
//! │  - booking dialog, search box       │
//! │  - renders Snapshot, never mutates  │
//! └─────────────────────────────────────┘
//!          │ book_stay / cancel_reservation
//!          ▼
//! ┌─────────────────────────────────────┐
//! │  ReservationStore                   │
//! │  - one occupant per (room, day)     │
//! │  - copy-on-write publish            │
//! └─────────────────────────────────────┘
//!          ▲
//!          │
//!       MemStore
//! ```

pub mod memstore;
pub mod types;

pub use memstore::MemStore;
pub use types::{ReservationStore, Slots, Snapshot};
