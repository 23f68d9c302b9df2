// src/core/mod.rs

pub mod html;
pub mod phone;
pub mod sanitize;
