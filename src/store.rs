//! Random-access byte store capability
//!
//! 随机访问字节存储能力
//!
//! A [`Store`] is anything that exposes a fixed-size window of bytes through
//! bounds-checked positional reads and writes: a [`Mapping`](crate::Mapping)
//! over mapped memory, a [`Transaction`](crate::Transaction) over its private
//! snapshot, or a plain `Vec<u8>` buffer. Typed access through
//! [`Segment`](crate::Segment) and the transaction layer are both written
//! against this capability, so they work over any of these backings.
//!
//! [`Store`] 是任何通过带边界检查的定位读写暴露固定大小字节窗口的东西：
//! 基于映射内存的 [`Mapping`](crate::Mapping)、基于私有快照的
//! [`Transaction`](crate::Transaction)，或者一个普通的 `Vec<u8>` 缓冲区。
//! 通过 [`Segment`](crate::Segment) 的类型化访问和事务层都是针对这一能力
//! 编写的，因此它们可以工作在上述任意后备之上。

use crate::error::{Error, Result};

/// Random-access byte store
///
/// 随机访问字节存储
///
/// Positional I/O over a fixed window of bytes. Both methods are
/// all-or-nothing: a request which does not fit entirely inside
/// `[0, size())` fails with [`Error::OutOfBounds`] and transfers nothing.
///
/// 针对固定字节窗口的定位 I/O。两个方法都是全有或全无的：
/// 不能完全落在 `[0, size())` 内的请求会以 [`Error::OutOfBounds`]
/// 失败并且不传输任何数据。
pub trait Store {
    /// One past the highest addressable offset
    ///
    /// 最高可寻址偏移量加一
    fn size(&self) -> usize;

    /// Fill `buf` with the bytes starting at `offset`
    ///
    /// 用从 `offset` 开始的字节填充 `buf`
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<()>;

    /// Copy `buf` into the store starting at `offset`
    ///
    /// 将 `buf` 从 `offset` 开始拷贝到存储中
    fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<()>;
}

/// Validate that `length` bytes at `offset` fit entirely inside a window of
/// `size` bytes and return the offset as an index.
///
/// 验证从 `offset` 开始的 `length` 个字节完全落在 `size` 字节的窗口内，
/// 并将偏移量作为索引返回。
#[inline]
pub(crate) fn check_window(size: usize, offset: u64, length: usize) -> Result<usize> {
    let start = usize::try_from(offset).map_err(|_| Error::OutOfBounds)?;
    let end = start.checked_add(length).ok_or(Error::OutOfBounds)?;
    if end > size {
        return Err(Error::OutOfBounds);
    }
    Ok(start)
}

/// A plain heap buffer is the simplest store.
///
/// 普通堆缓冲区是最简单的存储。
impl Store for Vec<u8> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        let start = check_window(self.len(), offset, buf.len())?;
        buf.copy_from_slice(&self[start..start + buf.len()]);
        Ok(())
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<()> {
        let start = check_window(self.len(), offset, buf.len())?;
        self[start..start + buf.len()].copy_from_slice(buf);
        Ok(())
    }
}
