//! Queue state, removal logic and the Discord-facing helpers the music commands share.

pub mod authorization;
pub mod embedded_messages;
pub mod index_set;
pub mod music_manager;
pub mod player;
pub mod queue_manager;
pub mod queue_store;
pub mod range_parser;
pub mod removal;
