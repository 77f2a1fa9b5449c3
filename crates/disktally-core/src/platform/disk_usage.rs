/// Entry kind detection and size-on-disk queries.
///
/// Size on disk is advisory: callers that only want a number use
/// [`size_on_disk_or_zero`], which logs the failure and reports 0.
use crate::model::FileKind;
use std::fs::Metadata;
use std::io;
use std::path::Path;
use tracing::debug;

/// Map filesystem metadata (obtained without following links) to a kind.
pub fn file_kind(meta: &Metadata) -> FileKind {
    let ft = meta.file_type();
    if ft.is_symlink() {
        return FileKind::Symlink;
    }
    if is_junction(meta) {
        return FileKind::Junction;
    }
    if ft.is_dir() {
        return FileKind::Directory;
    }
    if ft.is_file() {
        return FileKind::Regular;
    }
    special_kind(&ft)
}

#[cfg(unix)]
fn special_kind(ft: &std::fs::FileType) -> FileKind {
    use std::os::unix::fs::FileTypeExt;
    if ft.is_block_device() {
        FileKind::BlockDevice
    } else if ft.is_char_device() {
        FileKind::CharDevice
    } else if ft.is_fifo() {
        FileKind::Fifo
    } else if ft.is_socket() {
        FileKind::Socket
    } else {
        FileKind::Unknown
    }
}

#[cfg(not(unix))]
fn special_kind(_ft: &std::fs::FileType) -> FileKind {
    FileKind::Unknown
}

/// A directory reparse point that is not a symlink (mount point / junction).
#[cfg(windows)]
fn is_junction(meta: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    use windows::Win32::Storage::FileSystem::FILE_ATTRIBUTE_REPARSE_POINT;
    meta.is_dir() && meta.file_attributes() & FILE_ATTRIBUTE_REPARSE_POINT.0 != 0
}

#[cfg(not(windows))]
fn is_junction(_meta: &Metadata) -> bool {
    false
}

/// Bytes allocated on disk for the file at `path`: `st_blocks × 512`.
#[cfg(unix)]
pub fn size_on_disk(_path: &Path, meta: &Metadata) -> io::Result<u64> {
    use std::os::unix::fs::MetadataExt;
    Ok(meta.blocks().saturating_mul(512))
}

/// Bytes allocated on disk for the file at `path`, as reported by
/// `GetCompressedFileSizeW` (accounts for NTFS compression and sparseness).
#[cfg(windows)]
pub fn size_on_disk(path: &Path, _meta: &Metadata) -> io::Result<u64> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Foundation::{GetLastError, NO_ERROR};
    use windows::Win32::Storage::FileSystem::{GetCompressedFileSizeW, INVALID_FILE_SIZE};

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let mut high: u32 = 0;
    let low = unsafe {
        GetCompressedFileSizeW(
            windows::core::PCWSTR(wide.as_ptr()),
            Some(&mut high as *mut u32),
        )
    };

    // INVALID_FILE_SIZE is also a legal low word; only GetLastError tells.
    if low == INVALID_FILE_SIZE {
        let err = unsafe { GetLastError() };
        if err != NO_ERROR {
            return Err(io::Error::from_raw_os_error(err.0 as i32));
        }
    }
    Ok((u64::from(high) << 32) | u64::from(low))
}

/// Fallback for platforms without an allocation query: the logical size.
#[cfg(not(any(unix, windows)))]
pub fn size_on_disk(_path: &Path, meta: &Metadata) -> io::Result<u64> {
    Ok(meta.len())
}

/// [`size_on_disk`], with failures logged and reported as 0.
pub fn size_on_disk_or_zero(path: &Path, meta: &Metadata) -> u64 {
    match size_on_disk(path, meta) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("size on disk unavailable for {}: {err}", path.display());
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn regular_file_and_directory_kinds() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::File::create(&file).unwrap().write_all(b"hello").unwrap();

        let file_meta = fs::symlink_metadata(&file).unwrap();
        let dir_meta = fs::symlink_metadata(tmp.path()).unwrap();
        assert_eq!(file_kind(&file_meta), FileKind::Regular);
        assert_eq!(file_kind(&dir_meta), FileKind::Directory);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_reported_without_following() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.bin");
        fs::write(&target, [0u8; 16]).unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let meta = fs::symlink_metadata(&link).unwrap();
        assert_eq!(file_kind(&meta), FileKind::Symlink);
    }

    /// A non-empty file occupies at least one allocation unit on any
    /// mainstream filesystem.
    #[test]
    fn size_on_disk_of_written_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("data.bin");
        fs::write(&file, vec![1u8; 10_000]).unwrap();
        let meta = fs::symlink_metadata(&file).unwrap();

        let on_disk = size_on_disk_or_zero(&file, &meta);
        assert!(on_disk > 0, "expected allocated bytes, got {on_disk}");
    }

    #[test]
    fn empty_file_size_on_disk_is_small() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("empty");
        fs::File::create(&file).unwrap();
        let meta = fs::symlink_metadata(&file).unwrap();
        assert!(size_on_disk(&file, &meta).unwrap() <= 4096);
    }
}
