//! # Readplan Architecture
//!
//! Readplan is a **UI-agnostic reading-plan library** with a terminal client. The
//! library owns the plan, the per-chapter progress, day navigation and preferences;
//! the CLI in `cli/` only parses arguments and draws what the library returns.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, runs the shell      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns one reading session                                 │
//! │  - Normalizes inputs (dates / positions → DayTarget)        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action, builds a CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (plan, chapters, progress, navigation, reference,   │
//! │  preferences) over the Storage Layer (store/)               │
//! │  - KeyValueStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns `Result<CmdResult>`, and
//! never prints. Persistence goes through [`store::KeyValueStore`] only, so every
//! layer runs against [`store::memory::InMemoryStore`] in tests.
//!
//! ## The Plan
//!
//! A plan is an ordered list of [`model::DailyReading`]s, one per calendar day, each
//! with an Old Testament, a Wisdom and a New Testament assignment. The 2026 plan
//! ships inside the binary; `plan-dir` in the config swaps in another set of month
//! files. Progress is a set of completion ids, one per chapter of a day, so reading
//! the same chapter on two different days counts twice.

pub mod api;
pub mod chapters;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod plan;
pub mod preferences;
pub mod progress;
pub mod reference;
pub mod store;
