//! Command module structure for optica CLI

pub mod fill;
pub mod form;
pub mod util;
