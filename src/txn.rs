//! Snapshot transactions on raw byte data
//!
//! 基于原始字节数据的快照事务
//!
//! A [`Transaction`] stages writes against a private copy of a byte range
//! and applies them back in one step, or discards them. It provides
//! isolation of its own view only: [`Transaction::commit`] is a blind
//! overwrite with no conflict detection, so the caller is responsible for
//! not racing writes on the underlying store between
//! [`Transaction::begin`] and [`Transaction::commit`].
//!
//! [`Transaction`] 将写入暂存到字节范围的私有副本中，
//! 然后一步应用回去，或者丢弃它们。它只提供其自身视图的隔离：
//! [`Transaction::commit`] 是不做冲突检测的盲覆写，
//! 因此调用者有责任在 [`Transaction::begin`] 和 [`Transaction::commit`]
//! 之间不对底层存储进行竞争写入。

use crate::error::{Error, Result};
use crate::store::Store;

/// Transaction on a range of a byte store
///
/// 基于字节存储范围的事务
///
/// Created by [`Transaction::begin`], which copies the addressed range of
/// the store into a heap-allocated snapshot. While the transaction is open,
/// every read and write touches only the snapshot, never the store.
/// [`Transaction::commit`] copies the snapshot back into the store;
/// [`Transaction::rollback`] releases the snapshot without touching the
/// store. Both are terminal: any later operation, including a second
/// commit or rollback, fails with [`Error::Closed`].
///
/// 由 [`Transaction::begin`] 创建，它将存储中寻址的范围拷贝到堆上分配的
/// 快照中。事务打开期间，每次读写只触碰快照，从不触碰存储。
/// [`Transaction::commit`] 将快照拷贝回存储；[`Transaction::rollback`]
/// 释放快照而不触碰存储。两者都是终态：之后的任何操作，
/// 包括第二次提交或回滚，都以 [`Error::Closed`] 失败。
///
/// The transaction never holds on to the store: it takes the store again at
/// commit time. Dropping an open transaction discards the snapshot, which
/// is equivalent to a rollback.
///
/// 事务从不持有存储：它在提交时重新接受存储。
/// 丢弃一个打开的事务会丢弃快照，等价于回滚。
///
/// # Offsets
///
/// All offsets are expressed in the coordinate space of the store the
/// transaction was begun on, so an offset that addressed a byte through the
/// store addresses the same byte through the transaction.
///
/// # 偏移量
///
/// 所有偏移量都以事务所基于的存储的坐标空间表示，
/// 因此通过存储寻址某个字节的偏移量通过事务寻址同一个字节。
///
/// # Examples
///
/// ```
/// use snapshot_mmap::{Transaction, Result};
/// # fn main() -> Result<()> {
/// let mut store = vec![0u8; 8];
/// let mut tx = Transaction::begin(&store, 0, 8)?;
///
/// // Staged writes do not reach the store until commit
/// // 暂存的写入在提交之前不会到达存储
/// tx.write_at(b"HELLO", 0)?;
/// assert_eq!(store, vec![0u8; 8]);
///
/// tx.commit(&mut store)?;
/// assert_eq!(&store[..5], b"HELLO");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Transaction {
    /// The lowest offset available for this transaction
    ///
    /// 该事务可用的最低偏移量
    low: usize,

    /// The highest offset plus one available for this transaction
    ///
    /// 该事务可用的最高偏移量加一
    high: usize,

    /// The private copy of the transacted range, `None` once terminated
    ///
    /// 所事务化范围的私有副本，终止后为 `None`
    snapshot: Option<Vec<u8>>,
}

impl Transaction {
    /// Start and return a new transaction
    ///
    /// 开始并返回一个新事务
    ///
    /// The range of `length` bytes starting at `offset` is copied out of the
    /// store into the snapshot. The range must be non-empty and lie entirely
    /// inside `[0, store.size())`.
    ///
    /// 从 `offset` 开始的 `length` 个字节的范围会从存储中拷贝到快照里。
    /// 该范围必须非空且完全落在 `[0, store.size())` 内。
    ///
    /// # Errors
    /// Returns `OutOfBounds` if the length is zero or the range does not fit
    /// the store
    ///
    /// # Errors
    /// 如果长度为零或范围不在存储内，返回 `OutOfBounds`
    pub fn begin<S: Store + ?Sized>(store: &S, offset: u64, length: usize) -> Result<Self> {
        let size = store.size();
        let low = usize::try_from(offset).map_err(|_| Error::OutOfBounds)?;
        if length == 0 || low >= size {
            return Err(Error::OutOfBounds);
        }
        let high = low.checked_add(length).ok_or(Error::OutOfBounds)?;
        if high > size {
            return Err(Error::OutOfBounds);
        }
        let mut snapshot = vec![0u8; length];
        store.read_at(&mut snapshot, offset)?;
        Ok(Self {
            low,
            high,
            snapshot: Some(snapshot),
        })
    }

    /// Get the lowest offset available for this transaction
    ///
    /// 获取该事务可用的最低偏移量
    #[inline]
    pub fn offset(&self) -> u64 {
        self.low as u64
    }

    /// Get the length of the transacted range, or zero once terminated
    ///
    /// 获取所事务化范围的长度，终止后为零
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshot.as_ref().map_or(0, Vec::len)
    }

    /// Check if the transacted range is empty
    ///
    /// 检查所事务化范围是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the transaction was committed or rolled back
    ///
    /// 检查事务是否已提交或已回滚
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.snapshot.is_none()
    }

    /// Translate an absolute offset into a snapshot index, validating that
    /// `length` bytes fit entirely inside the window `[low, high)`.
    ///
    /// 将绝对偏移量转换为快照索引，并验证 `length` 个字节完全落在
    /// 窗口 `[low, high)` 内。
    #[inline]
    fn window(low: usize, high: usize, offset: u64, length: usize) -> Result<usize> {
        let start = usize::try_from(offset).map_err(|_| Error::OutOfBounds)?;
        if start < low {
            return Err(Error::OutOfBounds);
        }
        let end = start.checked_add(length).ok_or(Error::OutOfBounds)?;
        if end > high {
            return Err(Error::OutOfBounds);
        }
        Ok(start - low)
    }

    /// Fill `buf` with bytes of the snapshot starting at the given offset
    ///
    /// 用从给定偏移量开始的快照字节填充 `buf`
    ///
    /// The request is all-or-nothing: a range that does not fit entirely
    /// inside the transacted window fails with `OutOfBounds` and `buf` is
    /// left untouched.
    ///
    /// 请求是全有或全无的：不完全落在事务窗口内的范围以 `OutOfBounds`
    /// 失败，`buf` 保持不变。
    ///
    /// # Errors
    /// Returns `Closed` after commit or rollback, `OutOfBounds` at an access
    /// violation
    ///
    /// # Errors
    /// 提交或回滚之后返回 `Closed`，访问违规时返回 `OutOfBounds`
    pub fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        let snapshot = self.snapshot.as_ref().ok_or(Error::Closed)?;
        let start = Self::window(self.low, self.high, offset, buf.len())?;
        buf.copy_from_slice(&snapshot[start..start + buf.len()]);
        Ok(())
    }

    /// Copy `buf` into the snapshot starting at the given offset
    ///
    /// 将 `buf` 从给定偏移量开始拷贝到快照中
    ///
    /// The write stays private to this transaction until [`commit`] is
    /// called. The request is all-or-nothing, like [`read_at`].
    ///
    /// 在调用 [`commit`] 之前，写入对该事务保持私有。
    /// 请求与 [`read_at`] 一样是全有或全无的。
    ///
    /// [`commit`]: Transaction::commit
    /// [`read_at`]: Transaction::read_at
    ///
    /// # Errors
    /// Returns `Closed` after commit or rollback, `OutOfBounds` at an access
    /// violation
    ///
    /// # Errors
    /// 提交或回滚之后返回 `Closed`，访问违规时返回 `OutOfBounds`
    pub fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<()> {
        let snapshot = self.snapshot.as_mut().ok_or(Error::Closed)?;
        let start = Self::window(self.low, self.high, offset, buf.len())?;
        snapshot[start..start + buf.len()].copy_from_slice(buf);
        Ok(())
    }

    /// Flush the snapshot to the store and close this transaction
    ///
    /// 将快照刷新到存储并关闭该事务
    ///
    /// Copies the snapshot back into the store's transacted range in one
    /// write. Note that it doesn't check that the store is unchanged since
    /// [`begin`]: the copy is a blind overwrite. The transaction transitions
    /// to the closed state even if the write-back fails.
    ///
    /// 通过一次写入将快照拷贝回存储的事务范围。
    /// 注意它不检查存储自 [`begin`] 以来是否发生变化：拷贝是盲覆写。
    /// 即使写回失败，事务也会转换到关闭状态。
    ///
    /// [`begin`]: Transaction::begin
    ///
    /// # Errors
    /// Returns `Closed` on the second and any later call, or the store's
    /// error if the write-back fails
    ///
    /// # Errors
    /// 第二次及之后的调用返回 `Closed`；写回失败时返回存储的错误
    pub fn commit<S: Store + ?Sized>(&mut self, store: &mut S) -> Result<()> {
        let snapshot = self.snapshot.take().ok_or(Error::Closed)?;
        store.write_at(&snapshot, self.low as u64)
    }

    /// Close this transaction without touching the store
    ///
    /// 关闭该事务而不触碰存储
    ///
    /// # Errors
    /// Returns `Closed` on the second and any later call
    ///
    /// # Errors
    /// 第二次及之后的调用返回 `Closed`
    pub fn rollback(&mut self) -> Result<()> {
        match self.snapshot.take() {
            Some(_) => Ok(()),
            None => Err(Error::Closed),
        }
    }
}

/// A transaction is itself a store over its snapshot, so typed segment
/// access works on staged data.
///
/// 事务本身是基于其快照的存储，因此类型化段访问可作用于暂存数据。
impl Store for Transaction {
    #[inline]
    fn size(&self) -> usize {
        if self.snapshot.is_some() { self.high } else { 0 }
    }

    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<()> {
        Transaction::read_at(self, buf, offset)
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<()> {
        Transaction::write_at(self, buf, offset)
    }
}
