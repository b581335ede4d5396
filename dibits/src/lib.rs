/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Turns decoded images into `DWORD name[count] = { ... };` declarations of
//! premultiplied ARGB pixels, ready to be `#include`d and handed to GDI.

pub mod decode;
pub mod error;
pub mod grid;
pub mod hex;
pub mod newline;
pub mod sink;
pub mod transcode;

pub use error::{DibitsError, Result};
pub use grid::{PixelGrid, RawGrid};
pub use newline::Newline;
pub use sink::{Buffering, DirectSink, MemorySink, Sink};
pub use transcode::{Declaration, compile_image, render, transcode};
