//! Mapping of a file into process memory
//!
//! 文件到进程内存的映射

use std::fs::File;
use std::io;

use memmap2::{Mmap, MmapMut, MmapOptions};

use crate::error::{Error, Result};
use crate::segment::{RawSegment, Segment};
use crate::store::{self, Store};
use crate::txn::Transaction;

/// Names of the mapping-level operations, for error reporting.
///
/// 映射层操作的名称，用于错误报告。
#[cfg(unix)]
mod op {
    pub const MAP: &str = "mmap";
    pub const LOCK: &str = "mlock";
    pub const UNLOCK: &str = "munlock";
    pub const SYNC: &str = "msync";
}

#[cfg(windows)]
mod op {
    pub const MAP: &str = "MapViewOfFile";
    pub const LOCK: &str = "VirtualLock";
    pub const UNLOCK: &str = "VirtualUnlock";
    pub const SYNC: &str = "FlushViewOfFile";
}

/// Mapping mode
///
/// 映射模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapMode {
    /// Share this mapping and allow read-only access.
    ///
    /// 共享该映射并只允许只读访问。
    ReadOnly,

    /// Share this mapping. Updates are visible to other processes mapping
    /// the same region and are carried through to the underlying file; use
    /// [`Mapping::sync`] to control precisely when.
    ///
    /// 共享该映射。更新对映射同一区域的其他进程可见，
    /// 并会传递到底层文件；使用 [`Mapping::sync`] 精确控制时机。
    ReadWrite,

    /// Create a private copy-on-write mapping. Updates are visible to this
    /// mapping only and are not carried through to the underlying file,
    /// not even after [`Mapping::sync`].
    ///
    /// 创建私有的写时复制映射。更新只对该映射可见，
    /// 不会传递到底层文件，即使调用 [`Mapping::sync`] 之后也不会。
    WriteCopy,
}

/// Mapping flags
///
/// 映射标志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapFlags {
    /// Mapped memory pages may be executed. Only valid together with
    /// [`MapMode::ReadOnly`]: writable-and-executable pages are refused.
    ///
    /// 映射的内存页可以被执行。只能与 [`MapMode::ReadOnly`] 一起使用：
    /// 可写且可执行的页会被拒绝。
    pub executable: bool,
}

/// The OS-level mapping, selected by mode at open time.
///
/// 操作系统级别的映射，在打开时由模式选择。
enum MapInner {
    ReadOnly(Mmap),
    ReadWrite(MmapMut),
    WriteCopy(MmapMut),
}

impl MapInner {
    fn as_slice(&self) -> &[u8] {
        match self {
            MapInner::ReadOnly(m) => &m[..],
            MapInner::ReadWrite(m) | MapInner::WriteCopy(m) => &m[..],
        }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        match self {
            MapInner::ReadOnly(_) => None,
            MapInner::ReadWrite(m) | MapInner::WriteCopy(m) => Some(&mut m[..]),
        }
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Flush dirty pages of the mapped range to the backing file.
    ///
    /// 将映射范围内的脏页刷新到底层文件。
    fn flush(&self) -> io::Result<()> {
        match self {
            MapInner::ReadOnly(_) => Ok(()),
            MapInner::ReadWrite(m) | MapInner::WriteCopy(m) => m.flush(),
        }
    }

    #[cfg(unix)]
    fn os_lock(&self) -> io::Result<()> {
        match self {
            MapInner::ReadOnly(m) => m.lock(),
            MapInner::ReadWrite(m) | MapInner::WriteCopy(m) => m.lock(),
        }
    }

    #[cfg(unix)]
    fn os_unlock(&self) -> io::Result<()> {
        match self {
            MapInner::ReadOnly(m) => m.unlock(),
            MapInner::ReadWrite(m) | MapInner::WriteCopy(m) => m.unlock(),
        }
    }

    #[cfg(windows)]
    fn os_lock(&self) -> io::Result<()> {
        let memory = self.as_slice();
        // SAFETY: the region is mapped for as long as self is alive.
        let ok = unsafe { kernel32::VirtualLock(memory.as_ptr().cast(), memory.len()) };
        if ok == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    #[cfg(windows)]
    fn os_unlock(&self) -> io::Result<()> {
        let memory = self.as_slice();
        // SAFETY: the region is mapped for as long as self is alive.
        let ok = unsafe { kernel32::VirtualUnlock(memory.as_ptr().cast(), memory.len()) };
        if ok == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Page locking is not covered by the mapping crate on Windows, so the two
/// calls are declared directly.
///
/// Windows 上的页锁定不在映射 crate 的覆盖范围内，因此直接声明这两个调用。
#[cfg(windows)]
mod kernel32 {
    use std::ffi::c_void;

    #[link(name = "kernel32")]
    unsafe extern "system" {
        pub fn VirtualLock(address: *const c_void, size: usize) -> i32;
        pub fn VirtualUnlock(address: *const c_void, size: usize) -> i32;
    }
}

/// A mapping of a file into memory
///
/// 文件到内存的映射
///
/// Opened over a borrowed [`File`] with [`Mapping::open`]. The mapping does
/// not keep the caller's handle: once open it stays valid even after the
/// file is closed, so the handle can be dropped immediately.
///
/// 通过 [`Mapping::open`] 基于借用的 [`File`] 打开。映射不保留调用者的
/// 句柄：一旦打开，即使文件被关闭它仍然有效，因此句柄可以立即丢弃。
///
/// # Lifecycle
///
/// A mapping is released exactly once, by [`Mapping::close`] or, if the
/// caller never calls it, by the destructor. Closing synchronizes a
/// writable mapping, unlocks locked pages and unmaps the region; every
/// release step runs even if an earlier one failed, and the mapping is
/// marked closed either way, so a second close can only report
/// [`Error::Closed`] and never double-frees. Any other operation on a
/// closed mapping fails with [`Error::Closed`] as well.
///
/// # 生命周期
///
/// 映射只释放一次，通过 [`Mapping::close`]，或者在调用者从未调用它时
/// 由析构函数释放。关闭会同步可写映射、解锁已锁定的页并解除映射区域；
/// 即使前一步失败，每个释放步骤也都会执行，并且映射无论如何都会被标记
/// 为已关闭，因此第二次关闭只会报告 [`Error::Closed`]，绝不会二次释放。
/// 对已关闭映射的任何其他操作同样以 [`Error::Closed`] 失败。
///
/// # Examples
///
/// ```
/// use snapshot_mmap::{MapFlags, MapMode, Mapping, Result};
/// # use tempfile::tempdir;
/// # fn main() -> Result<()> {
/// # let dir = tempdir()?;
/// # let path = dir.path().join("data.bin");
/// let file = std::fs::OpenOptions::new()
///     .read(true)
///     .write(true)
///     .create(true)
///     .truncate(true)
///     .open(&path)?;
/// file.set_len(64)?;
///
/// let mut mapping = Mapping::open(&file, 0, 64, MapMode::ReadWrite, MapFlags::default())?;
/// drop(file); // the mapping stays valid
///             // 映射仍然有效
///
/// mapping.write_at(b"hello", 0)?;
/// let mut buf = [0u8; 5];
/// mapping.read_at(&mut buf, 0)?;
/// assert_eq!(&buf, b"hello");
///
/// mapping.close()?;
/// # Ok(())
/// # }
/// ```
pub struct Mapping {
    /// The OS-level mapping, `None` once closed
    ///
    /// 操作系统级别的映射，关闭后为 `None`
    inner: Option<MapInner>,

    /// The mode the mapping was opened with
    ///
    /// 映射打开时使用的模式
    mode: MapMode,

    /// Whether the mapped memory pages may be executed
    ///
    /// 映射的内存页是否可以被执行
    executable: bool,

    /// Whether the mapped memory pages are currently locked
    ///
    /// 映射的内存页当前是否已锁定
    locked: bool,
}

impl Mapping {
    /// Open and return a new mapping of the given file into memory
    ///
    /// 打开并返回给定文件到内存的新映射
    ///
    /// Maps `length` bytes of the file starting at `offset`. The offset does
    /// not have to be page aligned: the mapping layer aligns it internally
    /// and exposes exactly the requested bytes. The mapping stays valid
    /// after the caller closes the file.
    ///
    /// 映射文件中从 `offset` 开始的 `length` 个字节。偏移量不必页对齐：
    /// 映射层在内部对齐它并恰好暴露请求的字节。
    /// 调用者关闭文件后映射仍然有效。
    ///
    /// # Parameters
    /// - `file`: The file to map; only borrowed for the call
    /// - `offset`: Byte offset within the file where the mapping starts
    /// - `length`: Number of bytes to map, must be > 0
    /// - `mode`: Protection and sharing, see [`MapMode`]
    /// - `flags`: Additional flags, see [`MapFlags`]
    ///
    /// # 参数
    /// - `file`: 要映射的文件；仅在调用期间借用
    /// - `offset`: 映射起点在文件中的字节偏移量
    /// - `length`: 要映射的字节数，必须大于 0
    /// - `mode`: 保护与共享方式，见 [`MapMode`]
    /// - `flags`: 附加标志，见 [`MapFlags`]
    ///
    /// # Errors
    /// - Returns `BadLength` if the length is zero, exceeds the platform's
    ///   signed integer range, or runs past the end of the file
    /// - Returns `BadOffset` if `offset + length` overflows
    /// - Returns `BadMode` if executable pages are requested together with a
    ///   writable mode
    /// - Returns an `Os` error if the mapping system call fails
    ///
    /// # Errors
    /// - 如果长度为零、超出平台有符号整数范围或越过文件末尾，返回 `BadLength`
    /// - 如果 `offset + length` 溢出，返回 `BadOffset`
    /// - 如果可执行页与可写模式同时请求，返回 `BadMode`
    /// - 如果映射系统调用失败，返回 `Os` 错误
    pub fn open(
        file: &File,
        offset: u64,
        length: usize,
        mode: MapMode,
        flags: MapFlags,
    ) -> Result<Self> {
        if length == 0 || length > isize::MAX as usize {
            return Err(Error::BadLength);
        }
        let end = offset
            .checked_add(length as u64)
            .ok_or(Error::BadOffset)?;
        let file_length = file.metadata().map_err(Error::Io)?.len();
        if end > file_length {
            return Err(Error::BadLength);
        }
        if flags.executable && mode != MapMode::ReadOnly {
            // Writable-and-executable pages are refused (W^X).
            // 可写且可执行的页会被拒绝（W^X）。
            return Err(Error::BadMode);
        }

        let mut options = MmapOptions::new();
        options.offset(offset).len(length);

        // SAFETY: the mapping is only unsound if the underlying file is
        // truncated or mutated through other paths while mapped; keeping the
        // file intact for the mapping's lifetime is the caller's contract.
        //
        // SAFETY: 只有当底层文件在映射期间被截断或通过其他路径修改时，
        // 映射才是不健全的；在映射生命周期内保持文件完好是调用者的契约。
        let inner = unsafe {
            match (mode, flags.executable) {
                (MapMode::ReadOnly, true) => options.map_exec(file).map(MapInner::ReadOnly),
                (MapMode::ReadOnly, false) => options.map(file).map(MapInner::ReadOnly),
                (MapMode::ReadWrite, _) => options.map_mut(file).map(MapInner::ReadWrite),
                (MapMode::WriteCopy, _) => options.map_copy(file).map(MapInner::WriteCopy),
            }
        }
        .map_err(|source| Error::Os {
            op: op::MAP,
            source,
        })?;

        Ok(Self {
            inner: Some(inner),
            mode,
            executable: flags.executable,
            locked: false,
        })
    }

    /// Get the mode the mapping was opened with
    ///
    /// 获取映射打开时使用的模式
    #[inline]
    pub fn mode(&self) -> MapMode {
        self.mode
    }

    /// Check if the mapped memory pages may be written
    ///
    /// 检查映射的内存页是否可以被写入
    #[inline]
    pub fn is_writable(&self) -> bool {
        self.mode != MapMode::ReadOnly
    }

    /// Check if the mapped memory pages may be executed
    ///
    /// 检查映射的内存页是否可以被执行
    #[inline]
    pub fn is_executable(&self) -> bool {
        self.executable
    }

    /// Check if the mapped memory pages are locked
    ///
    /// 检查映射的内存页是否已锁定
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Check if the mapping was closed
    ///
    /// 检查映射是否已关闭
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Get the mapped memory length in bytes, or zero once closed
    ///
    /// 获取映射内存的字节长度，关闭后为零
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, MapInner::len)
    }

    /// Check if the mapping is empty, true once closed
    ///
    /// 检查映射是否为空，关闭后为真
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the mapped memory
    ///
    /// 借用映射的内存
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`
    pub fn memory(&self) -> Result<&[u8]> {
        Ok(self.inner.as_ref().ok_or(Error::Closed)?.as_slice())
    }

    /// Mutably borrow the mapped memory
    ///
    /// 可变借用映射的内存
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released, `ReadOnly` if it is not
    /// writable
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`；如果不可写，返回 `ReadOnly`
    pub fn memory_mut(&mut self) -> Result<&mut [u8]> {
        self.inner
            .as_mut()
            .ok_or(Error::Closed)?
            .as_mut_slice()
            .ok_or(Error::ReadOnly)
    }

    /// Lock the mapped memory pages
    ///
    /// 锁定映射的内存页
    ///
    /// All pages that contain a part of the mapped range are guaranteed to
    /// be resident in RAM when the call returns successfully, and stay in
    /// RAM until later unlocked. The operation may need raised process
    /// memory limits to succeed; see rlimit on Linux and working set on
    /// Windows. An OS failure is surfaced, not retried.
    ///
    /// 调用成功返回时，包含映射范围任一部分的所有页都保证驻留在 RAM 中，
    /// 并保持驻留直到之后解锁。该操作可能需要提高进程内存限制才能成功；
    /// 参见 Linux 上的 rlimit 和 Windows 上的工作集。
    /// 操作系统失败会被上报，而不会重试。
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released, `Locked` if the pages
    /// are already locked, or an `Os` error from the locking call
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`；如果页已锁定，返回 `Locked`；
    /// 锁定调用失败时返回 `Os` 错误
    pub fn lock(&mut self) -> Result<()> {
        let inner = self.inner.as_ref().ok_or(Error::Closed)?;
        if self.locked {
            return Err(Error::Locked);
        }
        inner.os_lock().map_err(|source| Error::Os {
            op: op::LOCK,
            source,
        })?;
        self.locked = true;
        Ok(())
    }

    /// Unlock the previously locked mapped memory pages
    ///
    /// 解锁之前锁定的映射内存页
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released, `NotLocked` if the
    /// pages are not locked, or an `Os` error from the unlocking call
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`；如果页未锁定，返回 `NotLocked`；
    /// 解锁调用失败时返回 `Os` 错误
    pub fn unlock(&mut self) -> Result<()> {
        let inner = self.inner.as_ref().ok_or(Error::Closed)?;
        if !self.locked {
            return Err(Error::NotLocked);
        }
        inner.os_unlock().map_err(|source| Error::Os {
            op: op::UNLOCK,
            source,
        })?;
        self.locked = false;
        Ok(())
    }

    /// Synchronize the mapped memory with the underlying file
    ///
    /// 将映射的内存与底层文件同步
    ///
    /// Flushes dirty pages of the mapped range to the backing file,
    /// blocking until the data is written. For a [`MapMode::WriteCopy`]
    /// mapping the call succeeds but changes are not carried through to the
    /// file.
    ///
    /// 将映射范围内的脏页刷新到底层文件，阻塞直到数据写入。
    /// 对于 [`MapMode::WriteCopy`] 映射，调用会成功，
    /// 但更改不会传递到文件。
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released, `ReadOnly` if it is
    /// not writable, or an `Os` error from the flushing call
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`；如果不可写，返回 `ReadOnly`；
    /// 刷新调用失败时返回 `Os` 错误
    pub fn sync(&self) -> Result<()> {
        let inner = self.inner.as_ref().ok_or(Error::Closed)?;
        if !self.is_writable() {
            return Err(Error::ReadOnly);
        }
        inner.flush().map_err(|source| Error::Os {
            op: op::SYNC,
            source,
        })
    }

    /// Fill `buf` with mapped bytes starting at the given offset
    ///
    /// 用从给定偏移量开始的映射字节填充 `buf`
    ///
    /// The request is all-or-nothing: a range that does not fit entirely
    /// inside the mapped memory fails with `OutOfBounds` and `buf` is left
    /// untouched.
    ///
    /// 请求是全有或全无的：不完全落在映射内存内的范围以 `OutOfBounds`
    /// 失败，`buf` 保持不变。
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released, `OutOfBounds` at an
    /// access violation
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`；访问违规时返回 `OutOfBounds`
    pub fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        let inner = self.inner.as_ref().ok_or(Error::Closed)?;
        let memory = inner.as_slice();
        let start = store::check_window(memory.len(), offset, buf.len())?;
        buf.copy_from_slice(&memory[start..start + buf.len()]);
        Ok(())
    }

    /// Copy `buf` into the mapped memory starting at the given offset
    ///
    /// 将 `buf` 从给定偏移量开始拷贝到映射内存中
    ///
    /// The request is all-or-nothing, like [`read_at`](Mapping::read_at).
    ///
    /// 请求与 [`read_at`](Mapping::read_at) 一样是全有或全无的。
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released, `ReadOnly` if it is
    /// not writable, `OutOfBounds` at an access violation
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`；如果不可写，返回 `ReadOnly`；
    /// 访问违规时返回 `OutOfBounds`
    pub fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<()> {
        let inner = self.inner.as_mut().ok_or(Error::Closed)?;
        let memory = inner.as_mut_slice().ok_or(Error::ReadOnly)?;
        let start = store::check_window(memory.len(), offset, buf.len())?;
        memory[start..start + buf.len()].copy_from_slice(buf);
        Ok(())
    }

    /// Start and return a new transaction on the mapped memory
    ///
    /// 基于映射内存开始并返回一个新事务
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released, `ReadOnly` if it is
    /// not writable, `OutOfBounds` if the range does not fit the mapping
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`；如果不可写，返回 `ReadOnly`；
    /// 范围不在映射内时返回 `OutOfBounds`
    pub fn begin(&self, offset: u64, length: usize) -> Result<Transaction> {
        if self.inner.is_none() {
            return Err(Error::Closed);
        }
        if !self.is_writable() {
            return Err(Error::ReadOnly);
        }
        Transaction::begin(self, offset, length)
    }

    /// Get the data segment on top of the mapped memory
    ///
    /// 获取基于映射内存的数据段
    ///
    /// The segment goes through the mapping's bounds-checked store
    /// interface; see [`Mapping::raw_segment`] for the zero-copy variant.
    ///
    /// 该段通过映射的带边界检查的存储接口访问；
    /// 零拷贝变体见 [`Mapping::raw_segment`]。
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`
    pub fn segment(&mut self) -> Result<Segment<'_, Self>> {
        if self.inner.is_none() {
            return Err(Error::Closed);
        }
        Ok(Segment::new(self))
    }

    /// Get the zero-copy data segment on top of the mapped memory
    ///
    /// 获取基于映射内存的零拷贝数据段
    ///
    /// The raw segment addresses the mapped bytes directly. The borrow it
    /// holds keeps the mapping alive and un-closeable while the segment
    /// exists, so every access lands on mapped memory.
    ///
    /// 原始段直接寻址映射的字节。它持有的借用使映射在段存在期间
    /// 保持存活且不可关闭，因此每次访问都落在映射的内存上。
    ///
    /// # Errors
    /// Returns `Closed` if the mapping was released, `ReadOnly` if it is
    /// not writable
    ///
    /// # Errors
    /// 如果映射已释放，返回 `Closed`；如果不可写，返回 `ReadOnly`
    pub fn raw_segment(&mut self) -> Result<RawSegment<'_>> {
        let memory = self.memory_mut()?;
        Ok(RawSegment::from_slice(0, memory))
    }

    /// Close this mapping and free all resources associated with it
    ///
    /// 关闭该映射并释放与之关联的所有资源
    ///
    /// A writable mapping is synchronized with the underlying file and
    /// locked pages are unlocked automatically before the region is
    /// unmapped. Every release step runs even if an earlier one failed; the
    /// first failure is returned and the mapping is marked closed either
    /// way.
    ///
    /// 在解除映射区域之前，可写映射会与底层文件同步，
    /// 已锁定的页会自动解锁。即使前一步失败，每个释放步骤也都会执行；
    /// 返回第一个失败，并且映射无论如何都会被标记为已关闭。
    ///
    /// # Errors
    /// Returns `Closed` on the second and any later call, or the first
    /// failure encountered while releasing
    ///
    /// # Errors
    /// 第二次及之后的调用返回 `Closed`；否则返回释放过程中遇到的第一个失败
    pub fn close(&mut self) -> Result<()> {
        let inner = self.inner.take().ok_or(Error::Closed)?;
        let mut first_failure = None;

        if self.is_writable() {
            if let Err(source) = inner.flush() {
                first_failure = Some(Error::Os {
                    op: op::SYNC,
                    source,
                });
            }
        }
        if self.locked {
            if let Err(source) = inner.os_unlock() {
                if first_failure.is_none() {
                    first_failure = Some(Error::Os {
                        op: op::UNLOCK,
                        source,
                    });
                }
            }
            self.locked = false;
        }
        // Unmap. Dropping the OS mapping cannot be observed to fail.
        // 解除映射。丢弃操作系统映射的失败无法被观察到。
        drop(inner);

        match first_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Closing through the destructor covers mappings the caller never closed
/// explicitly; release failures are unobservable on this path.
///
/// 通过析构函数关闭覆盖调用者从未显式关闭的映射；
/// 该路径上的释放失败无法被观察到。
impl Drop for Mapping {
    fn drop(&mut self) {
        if self.inner.is_some() {
            let _ = self.close();
        }
    }
}

impl Store for Mapping {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        Mapping::read_at(self, buf, offset)
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<()> {
        Mapping::write_at(self, buf, offset)
    }
}

impl std::fmt::Debug for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping")
            .field("mode", &self.mode)
            .field("executable", &self.executable)
            .field("locked", &self.locked)
            .field("len", &self.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}
