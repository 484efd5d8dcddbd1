//! Worklister
//!
//! Converts folders of CNC part-program files into `Joblst` worklist
//! documents, one per cabinet, with parts in machining order.

pub mod cli;
pub mod core;
