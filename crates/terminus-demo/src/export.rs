//! JSON export of evaluated frames.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use terminus_scene::FrameItem;

/// Errors raised while writing frames to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Creating the directory or writing a file failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A frame could not be encoded.
    #[error("failed to encode {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File name for frame `index`, zero-padded so listings sort in loop order.
pub fn frame_file_name(index: u32) -> String {
    format!("frame_{index:04}.json")
}

/// Write one frame to `dir/frame_NNNN.json` with every ring explicitly closed.
pub fn write_frame(dir: &Path, index: u32, frame: &[FrameItem<'_>]) -> Result<PathBuf, ExportError> {
    let path = dir.join(frame_file_name(index));
    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;

    let closed: Vec<FrameItem<'_>> = frame
        .iter()
        .map(|item| FrameItem {
            shape: Cow::Owned(item.shape.closed()),
            style: item.style,
        })
        .collect();

    let mut writer = BufWriter::new(File::create(&path).map_err(io_err)?);
    serde_json::to_writer(&mut writer, &closed).map_err(|source| ExportError::Json {
        path: path.clone(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    Ok(path)
}
