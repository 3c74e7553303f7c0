//! Seam traits for chain construction.

pub mod join_member;

pub use join_member::JoinMember;
