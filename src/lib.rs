//! Shotmatch: location-to-frame reconciliation
//!
//! Joins a location-reference listing with per-shot frame listings through a
//! shared common path, segments each shot's frames into consecutive runs, pads
//! them with handles, and renders the result as frame ranges and timecodes.

pub mod assemble;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod matcher;
pub mod pass;
pub mod path;
pub mod range;
pub mod report;
pub mod store;
pub mod thumbnail;
pub mod timecode;
pub mod types;
