/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use dibits::decode::{header_path, open_rgba, variable_name};
use dibits::{Buffering, Declaration, Newline, PixelGrid, compile_image};
use log::{debug, error, info, warn};

use crate::options::CmdOptions;

/// Converts every input, carrying on past failures. Returns the process
/// exit status: 0 when everything converted, 1 otherwise.
pub fn run(opts: &CmdOptions) -> i32 {
    let mut status = 0;

    for path in &opts.filepaths {
        match compile_file(path, opts) {
            Ok(declaration) => debug!(
                "{}: {} pixels as '{}'",
                path.display(),
                declaration.element_count,
                declaration.variable
            ),
            Err(e) => {
                error!("{} - {}", path.display(), e);
                status = 1;
            }
        }
    }

    status
}

fn compile_file(path: &Path, opts: &CmdOptions) -> dibits::Result<Declaration> {
    let image = open_rgba(path)?;
    let variable = variable_name(path)?;

    if opts.stdout {
        let stdout = io::stdout().lock();
        return compile_image(&image, stdout, &variable, opts.newline, opts.buffering);
    }

    let target = header_path(path);
    if !opts.quiet {
        info!("{} -> {}", path.display(), target.display());
    }

    let file = File::create(&target)?;
    compile_to_target(&image, file, &target, &variable, opts.newline, opts.buffering)
}

/// Writes into `dest`, an already created `target`, and deletes `target`
/// again if the declaration could not be completed.
fn compile_to_target<G, W>(
    grid: &G,
    dest: W,
    target: &Path,
    variable: &str,
    newline: Newline,
    buffering: Buffering,
) -> dibits::Result<Declaration>
where
    G: PixelGrid + ?Sized,
    W: Write,
{
    let result = compile_image(grid, dest, variable, newline, buffering);

    if result.is_err()
        && let Err(e) = fs::remove_file(target)
    {
        warn!("Could not remove incomplete {}: {}", target.display(), e);
    }

    result
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use dibits::{DibitsError, RawGrid};

    use super::*;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn scratch_target(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "embed_dibits_workflow_{}_{}",
            std::process::id(),
            name
        ));
        fs::create_dir_all(&dir).unwrap();
        dir.join(format!("{name}.h"))
    }

    const PIXELS: [u8; 8] = [255, 0, 0, 255, 0, 255, 0, 128];

    #[test]
    fn failed_write_removes_target() {
        for buffering in [Buffering::Buffered, Buffering::Unbuffered] {
            let target = scratch_target("full_disk");
            fs::write(&target, b"\nDWORD full_disk[2] = {").unwrap();

            let grid = RawGrid::new(&PIXELS, 2, 1).unwrap();
            let err = compile_to_target(
                &grid,
                FullDisk,
                &target,
                "full_disk",
                Newline::Unix,
                buffering,
            )
            .unwrap_err();

            assert!(matches!(err, DibitsError::Write(_)));
            assert!(!target.exists());
        }
    }

    #[test]
    fn successful_write_keeps_target() {
        let target = scratch_target("kept");
        let file = File::create(&target).unwrap();

        let grid = RawGrid::new(&PIXELS, 2, 1).unwrap();
        let declaration =
            compile_to_target(&grid, file, &target, "kept", Newline::Unix, Buffering::Buffered)
                .unwrap();

        assert_eq!(declaration.element_count, 2);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "\nDWORD kept[2] = {\n    0xFFFF0000,0x80008000,\n};\n"
        );

        fs::remove_file(&target).unwrap();
    }
}
