pub mod badge;

pub use badge::{tone_variant, Badge, ChipBadge};
