//! Deterministic match scoring and daily digest engine for job trackers.
//!
//! `job-tracker-core` scores job postings against user preferences, builds a
//! frozen top-N digest once per calendar day, and keeps application state in
//! an injected key-value store. Scoring is pure: identical inputs always
//! produce identical scores, and a persisted digest is returned byte-for-byte
//! until it is explicitly reset.

pub mod digest;
pub mod job;
pub mod scoring;
pub mod selection;
pub mod store;
pub mod types;
