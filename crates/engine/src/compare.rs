//! Sampled byte comparison of one name-matched file pair.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::trace;
use walk::PairedEntry;

use crate::config::Config;
use crate::error::EngineError;
use crate::outcome::{FILE_CONTENT_DIFFERS, FILE_ENDED_EARLY, FILE_SIZE_DIFFERS, Outcome};

/// Compares a name-matched file pair using the run's sampling policy.
///
/// Sizes come from the listing snapshot: differing sizes short-circuit to a
/// mismatch before either file is opened, a cheap filter ahead of the
/// expensive read loop. The skip offset is evaluated once per file from the
/// size at entry, not per chunk.
pub(crate) fn compare_file_pair(
    config: &Config,
    pair: &PairedEntry,
    original_size: u64,
    compared_size: u64,
) -> Outcome {
    if original_size != compared_size {
        return Outcome::FileMismatch {
            message: FILE_SIZE_DIFFERS,
            path: pair.path().to_path_buf(),
        };
    }

    let offset = config.policy().offset(original_size);
    trace!(
        path = %pair.path().display(),
        offset,
        "comparing file pair"
    );

    let mut orig = match open(config.original(), pair.path()) {
        Ok(file) => file,
        Err(error) => return Outcome::Failure(error),
    };
    let mut comp = match open(config.compared(), pair.path()) {
        Ok(file) => file,
        Err(error) => return Outcome::Failure(error),
    };

    compare_readers(
        &mut orig,
        &mut comp,
        pair.path(),
        offset,
        config.policy().chunk_size(),
    )
}

fn open(root: &Path, relative: &Path) -> Result<File, EngineError> {
    File::open(root.join(relative))
        .map_err(|error| EngineError::io(relative.to_path_buf(), error))
}

/// Chunked comparison loop over two readable, seekable streams.
///
/// Each iteration fills one `chunk_size` buffer per side, compares the
/// filled prefixes, then seeks both streams forward by `offset` bytes
/// relative to the current position. Both streams exhausting simultaneously
/// means the pair matched; one exhausting first is a mismatch rather than an
/// error. A zero-length file pair matches on the first iteration.
pub(crate) fn compare_readers<R: Read + Seek>(
    orig: &mut R,
    comp: &mut R,
    path: &Path,
    offset: u64,
    chunk_size: usize,
) -> Outcome {
    let mut orig_buf = vec![0u8; chunk_size];
    let mut comp_buf = vec![0u8; chunk_size];

    loop {
        let orig_read = match fill(orig, &mut orig_buf) {
            Ok(n) => n,
            Err(error) => return Outcome::Failure(EngineError::io(path.to_path_buf(), error)),
        };
        let comp_read = match fill(comp, &mut comp_buf) {
            Ok(n) => n,
            Err(error) => return Outcome::Failure(EngineError::io(path.to_path_buf(), error)),
        };

        if orig_read == 0 && comp_read == 0 {
            return Outcome::Unchanged;
        }
        if orig_read != comp_read {
            // Sizes matched at dispatch time, so one side shrank mid-read.
            return Outcome::FileMismatch {
                message: FILE_ENDED_EARLY,
                path: path.to_path_buf(),
            };
        }
        if orig_buf[..orig_read] != comp_buf[..comp_read] {
            return Outcome::FileMismatch {
                message: FILE_CONTENT_DIFFERS,
                path: path.to_path_buf(),
            };
        }

        if offset > 0 {
            if let Err(error) = orig
                .seek(SeekFrom::Current(offset as i64))
                .and_then(|_| comp.seek(SeekFrom::Current(offset as i64)))
            {
                return Outcome::Failure(EngineError::io(path.to_path_buf(), error));
            }
        }
    }
}

/// Reads until `buf` is full or the stream is exhausted, returning the
/// number of bytes filled.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(error),
        }
    }
    Ok(filled)
}
