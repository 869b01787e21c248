//! File bootstrap helper
//!
//! 文件引导辅助

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::mapping::{MapFlags, MapMode, Mapping};

/// Prepare a file and return a new read-write mapping of it into memory
///
/// 准备一个文件并返回其到内存的新读写映射
///
/// Creates the file when it does not exist, truncates or extends it to
/// `size` bytes, and maps the whole of it [`MapMode::ReadWrite`]. If and
/// only if the file was freshly created, `init` is invoked exactly once
/// with the open mapping before the function returns, so a caller can lay
/// down an initial structure.
///
/// 文件不存在时创建它，将其截断或扩展到 `size` 个字节，
/// 并以 [`MapMode::ReadWrite`] 映射整个文件。当且仅当文件是新创建的，
/// 函数返回前会用打开的映射恰好调用一次 `init`，
/// 以便调用者写入初始结构。
///
/// On any failure after creating the file, the created file is removed
/// before the error is propagated; if the initializer fails, the mapping
/// is closed first. A file that already existed is never removed.
///
/// 创建文件之后的任何失败都会在传播错误之前删除所创建的文件；
/// 如果初始化器失败，会先关闭映射。已经存在的文件绝不会被删除。
///
/// # Parameters
/// - `path`: Path of the file to prepare
/// - `size`: File size in bytes, must be > 0
/// - `flags`: Mapping flags passed through to [`Mapping::open`]
/// - `init`: One-time initializer, run only on a freshly created file
///
/// # 参数
/// - `path`: 要准备的文件路径
/// - `size`: 文件大小（字节），必须大于 0
/// - `flags`: 透传给 [`Mapping::open`] 的映射标志
/// - `init`: 一次性初始化器，只在新创建的文件上运行
///
/// # Examples
///
/// ```
/// use snapshot_mmap::{open_file, MapFlags, Result};
/// # use tempfile::tempdir;
/// # fn main() -> Result<()> {
/// # let dir = tempdir()?;
/// # let path = dir.path().join("store.bin");
/// // First call creates the file and runs the initializer
/// // 第一次调用创建文件并运行初始化器
/// let mut mapping = open_file(&path, 32, MapFlags::default(), |m| {
///     m.write_at(b"INIT", 0)
/// })?;
/// mapping.close()?;
///
/// // Reopening skips the initializer and sees the data
/// // 重新打开会跳过初始化器并看到数据
/// let mapping = open_file(&path, 32, MapFlags::default(), |_| unreachable!())?;
/// let mut buf = [0u8; 4];
/// mapping.read_at(&mut buf, 0)?;
/// assert_eq!(&buf, b"INIT");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Propagates file preparation I/O errors, [`Mapping::open`] errors and
/// initializer errors
///
/// # Errors
/// 传播文件准备的 I/O 错误、[`Mapping::open`] 的错误和初始化器的错误
pub fn open_file<P, F>(path: P, size: usize, flags: MapFlags, init: F) -> Result<Mapping>
where
    P: AsRef<Path>,
    F: FnOnce(&mut Mapping) -> Result<()>,
{
    let path = path.as_ref();
    let created = !path.exists();

    let file = fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)
        .map_err(Error::Io)?;

    let prepared = file
        .set_len(size as u64)
        .map_err(Error::Io)
        .and_then(|_| Mapping::open(&file, 0, size, MapMode::ReadWrite, flags));
    // The caller's handle is no longer needed: the mapping stays valid.
    // 不再需要调用者的句柄：映射仍然有效。
    drop(file);

    let mut mapping = match prepared {
        Ok(mapping) => mapping,
        Err(err) => {
            if created {
                let _ = fs::remove_file(path);
            }
            return Err(err);
        }
    };

    if created {
        if let Err(err) = init(&mut mapping) {
            let _ = mapping.close();
            let _ = fs::remove_file(path);
            return Err(err);
        }
    }
    Ok(mapping)
}
