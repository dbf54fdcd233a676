pub mod batch;
pub mod blend;
pub mod buffer;
pub mod consts;
pub mod effects;
pub mod error;
pub mod io;
pub mod transfer;
