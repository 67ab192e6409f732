//! Adapter module - persistence and the editor's outside collaborators
//!
//! The editing core only knows boards. This crate turns boards into stored
//! designs and back, and defines the narrow contracts the editor uses to
//! reach the outside world.
//!
//! # Pieces
//!
//! - [`codec`]: board <-> JSON text (`[[null,"cyan",...],...]`)
//! - [`design`]: stored design records and listing summaries
//! - [`ports`]: identity, document store, rasterizer, notifier and local slot contracts
//! - [`store`]: in-memory and JSON-file document stores
//! - [`slot`]: the local board cache (`tetris-art-grid`)
//! - [`service`]: save / open / list / delete / export flows
//! - [`config`]: environment-driven runtime configuration
//!
//! # Example
//!
//! ```
//! use tetris_art_adapter::{codec, core::Board};
//!
//! let board = Board::new();
//! let text = codec::serialize(&board).unwrap();
//! assert_eq!(codec::deserialize(&text).unwrap(), board);
//! ```

pub mod codec;
pub mod config;
pub mod design;
pub mod ports;
pub mod service;
pub mod slot;
pub mod store;

pub use tetris_art_core as core;
pub use tetris_art_engine as engine;
pub use tetris_art_types as types;

pub use codec::{deserialize, deserialize_sized, serialize, CodecError};
pub use config::AppConfig;
pub use design::{Design, DesignSummary, DesignUpdate};
pub use ports::{
    DocumentStore, IdentityProvider, LocalSlot, Notifier, Rasterizer, StaticIdentity,
    ToastNotifier,
};
pub use service::{export, export_file_name, DesignService, Export, ServiceError};
pub use slot::{FileSlot, MemorySlot};
pub use store::{FileStore, MemoryStore, StoreError};
