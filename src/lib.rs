// src/lib.rs

pub mod pow;

pub use pow::{difficulty_from_bits, difficulty_from_target, target_from_bits, DIFF1_TARGET};
