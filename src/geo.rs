//! Main module for geostr library functionality

pub mod error;
pub mod lexing;
pub mod options;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod value;
