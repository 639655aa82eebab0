//! Go rules: groups, captures, territory and scoring.

pub mod capture;
pub mod group;
pub mod scoring;
pub mod territory;

pub use capture::{apply_move, CaptureResult};
pub use group::{connected_group, count_liberties, has_liberty, liberties_at, Group};
pub use scoring::{score, Captures, Score, ScoringRule};
pub use territory::{classify_regions, classify_territory, Region, Territory};
