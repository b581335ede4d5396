/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::Write;

use crate::error::{DibitsError, Result};
use crate::grid::PixelGrid;
use crate::hex;
use crate::newline::Newline;
use crate::sink::{Buffering, DirectSink, MemorySink, Sink};

/// Pixels per data line (6 tokens plus indentation is 70 columns).
pub const PIXELS_PER_LINE: usize = 6;

pub const INDENT: &[u8] = b"    ";

/// `0xAARRGGBB,`
pub const TOKEN_LEN: usize = 11;

/// What was emitted for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub variable: String,
    pub element_count: u64,
}

#[inline]
pub fn premultiply(channel: u8, alpha: u8) -> u8 {
    ((alpha as u16 * channel as u16) / 0xFF) as u8
}

/// Packs an `[R, G, B, A]` pixel into its premultiplied `0xAARRGGBB,` token.
pub fn pixel_token([r, g, b, a]: [u8; 4]) -> [u8; TOKEN_LEN] {
    let mut token = *b"0x00000000,";
    token[2..4].copy_from_slice(hex::lookup(a));
    token[4..6].copy_from_slice(hex::lookup(premultiply(r, a)));
    token[6..8].copy_from_slice(hex::lookup(premultiply(g, a)));
    token[8..10].copy_from_slice(hex::lookup(premultiply(b, a)));
    token
}

fn element_count<G: PixelGrid + ?Sized>(grid: &G) -> Result<u64> {
    let (width, height) = (grid.width(), grid.height());
    let total = u64::from(width) * u64::from(height);

    if total == 0 {
        return Err(DibitsError::InvalidGrid(format!(
            "{width}x{height} image has no pixels"
        )));
    }

    Ok(total)
}

/// Writes the full declaration for `grid` into `sink`.
///
/// Pixels are visited row by row, six tokens to a line, each one alpha
/// premultiplied and laid out as ARGB. Stops at the first failed pixel read
/// or sink write.
pub fn transcode<G, S>(
    grid: &G,
    variable: &str,
    newline: Newline,
    sink: &mut S,
) -> Result<Declaration>
where
    G: PixelGrid + ?Sized,
    S: Sink + ?Sized,
{
    let total = element_count(grid)?;
    let nl = newline.as_bytes();

    log::debug!(
        "Emitting DWORD {}[{}] ({}x{}, newline {})",
        variable,
        total,
        grid.width(),
        grid.height(),
        newline
    );

    sink.write(nl)?;
    sink.write(format!("DWORD {variable}[{total}] = {{").as_bytes())?;
    sink.write(nl)?;
    sink.write(INDENT)?;

    let mut line_pixels = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if line_pixels == PIXELS_PER_LINE {
                sink.write(nl)?;
                sink.write(INDENT)?;
                line_pixels = 0;
            }

            let px = grid.pixel_at(x, y)?;
            sink.write(&pixel_token(px))?;
            line_pixels += 1;
        }
    }

    sink.write(nl)?;
    sink.write(b"};")?;
    sink.write(nl)?;

    log::trace!("Finished {}", variable);

    Ok(Declaration {
        variable: variable.to_owned(),
        element_count: total,
    })
}

/// Rough output size, used to size the in-memory buffer up front.
fn estimated_len(total: u64, variable: &str, newline: Newline) -> usize {
    let lines = total.div_ceil(PIXELS_PER_LINE as u64);
    let body = total
        .saturating_mul(TOKEN_LEN as u64)
        .saturating_add(lines.saturating_mul((INDENT.len() + newline.as_bytes().len()) as u64));
    let header = variable.len() + 32;

    usize::try_from(body).unwrap_or(usize::MAX).saturating_add(header)
}

/// Transcodes `grid` into `dest`, either through an in-memory buffer flushed
/// with a single write, or straight into `dest` piece by piece.
pub fn compile_image<G, W>(
    grid: &G,
    mut dest: W,
    variable: &str,
    newline: Newline,
    buffering: Buffering,
) -> Result<Declaration>
where
    G: PixelGrid + ?Sized,
    W: Write,
{
    match buffering {
        Buffering::Buffered => {
            let total = element_count(grid)?;
            let capacity = estimated_len(total, variable, newline).min(1 << 26);
            let mut buffer = MemorySink::with_capacity(capacity);

            let declaration = transcode(grid, variable, newline, &mut buffer)?;
            dest.write_all(buffer.as_bytes())?;
            dest.flush()?;

            Ok(declaration)
        }
        Buffering::Unbuffered => {
            let mut sink = DirectSink::new(&mut dest);
            let declaration = transcode(grid, variable, newline, &mut sink)?;
            sink.flush()?;

            Ok(declaration)
        }
    }
}

/// The declaration for `grid` as bytes.
pub fn render<G>(grid: &G, variable: &str, newline: Newline) -> Result<Vec<u8>>
where
    G: PixelGrid + ?Sized,
{
    let mut sink = MemorySink::new();
    transcode(grid, variable, newline, &mut sink)?;
    Ok(sink.into_inner())
}
