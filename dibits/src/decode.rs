/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{DibitsError, Result};

/// Decodes any format `image` understands and forces it to RGBA8, filling
/// in an opaque alpha channel where the source has none.
pub fn open_rgba(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| DibitsError::Decode(e.to_string()))?
        .decode()?;

    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgba8())
}

/// File name without directory or extension, e.g. `sprites/box.png` -> `box`.
///
/// The result is used verbatim as the C identifier, so a stem that is not
/// valid UTF-8 is an error rather than being mangled.
pub fn variable_name(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let Some(stem) = path.file_stem() else {
        return Ok(String::new());
    };

    stem.to_str().map(str::to_owned).ok_or_else(|| {
        DibitsError::Decode(format!(
            "file name {} is not valid UTF-8",
            path.display()
        ))
    })
}

/// Same path with the extension swapped for `.h`.
pub fn header_path(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().with_extension("h")
}
