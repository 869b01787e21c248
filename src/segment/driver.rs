//! Store-driven segment implementation
//!
//! 由存储驱动的段实现

use crate::error::{Error, Result};
use crate::store::Store;

use super::value::Value;

/// Typed view over a random-access byte store
///
/// 基于随机访问字节存储的类型化视图
///
/// A segment borrows a [`Store`] and interprets ranges of its bytes as
/// fixed-width unsigned integers in big-endian byte order. It has no
/// lifecycle of its own: it is valid exactly as long as the borrow it holds.
///
/// 段借用一个 [`Store`]，并将其字节范围解释为大端字节序的定宽无符号整数。
/// 它没有自己的生命周期：仅在其持有的借用有效期间有效。
///
/// All operations take a starting offset and an ordered sequence of
/// [`Value`] slots and process the slots sequentially, each one starting
/// immediately after the previous. Offsets are relative to the segment's
/// base offset, which is added before the store is addressed.
///
/// 所有操作接受一个起始偏移量和一个有序的 [`Value`] 槽位序列，
/// 按顺序处理槽位，每个槽位紧跟在前一个之后。
/// 偏移量相对于段的基准偏移量，在寻址存储之前会加上它。
///
/// Any store failure aborts the operation immediately and is propagated;
/// slots already processed keep their effect.
///
/// 任何存储失败都会立即中止操作并向上传播；
/// 已处理的槽位保留其效果。
///
/// # Examples
///
/// ```
/// use snapshot_mmap::{Segment, Value, Result};
/// # fn main() -> Result<()> {
/// let mut store = vec![0u8; 16];
/// let mut segment = Segment::new(&mut store);
///
/// // Write three packed values, then read them back
/// // 写入三个紧排的值，然后读回
/// segment.set(1, &[Value::U8(1), Value::U16(2), Value::U32(3)])?;
///
/// let mut slots = [Value::U8(0), Value::U16(0), Value::U32(0)];
/// segment.get(1, &mut slots)?;
/// assert_eq!(slots, [Value::U8(1), Value::U16(2), Value::U32(3)]);
/// # Ok(())
/// # }
/// ```
pub struct Segment<'s, S: Store + ?Sized> {
    /// Base offset added to every requested offset before addressing the store
    ///
    /// 在寻址存储之前加到每个请求偏移量上的基准偏移量
    base: u64,

    /// The borrowed data access driver
    ///
    /// 借用的数据访问驱动
    store: &'s mut S,
}

impl<'s, S: Store + ?Sized> Segment<'s, S> {
    /// Create a new segment over the given store with base offset zero
    ///
    /// 基于给定存储创建基准偏移量为零的新段
    #[inline]
    pub fn new(store: &'s mut S) -> Self {
        Self { base: 0, store }
    }

    /// Create a new segment whose offsets are relative to `base`
    ///
    /// 创建偏移量相对于 `base` 的新段
    ///
    /// # Parameters
    /// - `base`: Offset within the store where this segment's address zero lies
    /// - `store`: The data access driver
    ///
    /// # 参数
    /// - `base`: 该段的零地址在存储中所处的偏移量
    /// - `store`: 数据访问驱动
    #[inline]
    pub fn with_base(base: u64, store: &'s mut S) -> Self {
        Self { base, store }
    }

    /// Get the base offset
    ///
    /// 获取基准偏移量
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Translate a segment-relative offset into a store offset
    ///
    /// 将段内相对偏移量转换为存储偏移量
    #[inline]
    fn translate(&self, offset: u64) -> Result<u64> {
        self.base.checked_add(offset).ok_or(Error::OutOfBounds)
    }

    /// Sequentially read the slots starting from the given offset
    ///
    /// 从给定偏移量开始顺序读取槽位
    ///
    /// Each slot's variant selects how many bytes to read; the payload is
    /// replaced by the decoded value.
    ///
    /// 每个槽位的变体决定读取多少字节；载荷被替换为解码出的值。
    pub fn get(&self, offset: u64, slots: &mut [Value]) -> Result<()> {
        let mut pos = self.translate(offset)?;
        for slot in slots.iter_mut() {
            let width = slot.width();
            let mut buf = [0u8; 8];
            self.store.read_at(&mut buf[..width], pos)?;
            *slot = slot.decode_like(&buf[..width]);
            pos = pos.checked_add(width as u64).ok_or(Error::OutOfBounds)?;
        }
        Ok(())
    }

    /// Sequentially write the values starting from the given offset
    ///
    /// 从给定偏移量开始顺序写入值
    pub fn set(&mut self, offset: u64, values: &[Value]) -> Result<()> {
        let mut pos = self.translate(offset)?;
        for value in values {
            let width = value.width();
            let mut buf = [0u8; 8];
            value.encode(&mut buf[..width]);
            self.store.write_at(&buf[..width], pos)?;
            pos = pos.checked_add(width as u64).ok_or(Error::OutOfBounds)?;
        }
        Ok(())
    }

    /// Sequentially swap the slots with the stored values starting from the
    /// given offset
    ///
    /// 从给定偏移量开始顺序将槽位与存储的值交换
    ///
    /// After the call every slot holds what the store held before it, and the
    /// store holds what the slot held.
    ///
    /// 调用之后，每个槽位持有存储之前的值，存储持有槽位之前的值。
    pub fn swap(&mut self, offset: u64, slots: &mut [Value]) -> Result<()> {
        let mut pos = self.translate(offset)?;
        for slot in slots.iter_mut() {
            let width = slot.width();
            let mut stored = [0u8; 8];
            self.store.read_at(&mut stored[..width], pos)?;
            let mut incoming = [0u8; 8];
            slot.encode(&mut incoming[..width]);
            self.store.write_at(&incoming[..width], pos)?;
            *slot = slot.decode_like(&stored[..width]);
            pos = pos.checked_add(width as u64).ok_or(Error::OutOfBounds)?;
        }
        Ok(())
    }

    /// Sequentially increase the stored values starting from the given
    /// offset using the given deltas
    ///
    /// 从给定偏移量开始用给定增量顺序增加存储的值
    ///
    /// Arithmetic wraps around on overflow.
    ///
    /// 溢出时算术回绕。
    pub fn inc(&mut self, offset: u64, deltas: &[Value]) -> Result<()> {
        let mut pos = self.translate(offset)?;
        for delta in deltas {
            let width = delta.width();
            let mut buf = [0u8; 8];
            self.store.read_at(&mut buf[..width], pos)?;
            delta.wrapping_add_into(&mut buf[..width]);
            self.store.write_at(&buf[..width], pos)?;
            pos = pos.checked_add(width as u64).ok_or(Error::OutOfBounds)?;
        }
        Ok(())
    }

    /// Sequentially decrease the stored values starting from the given
    /// offset using the given deltas
    ///
    /// 从给定偏移量开始用给定增量顺序减少存储的值
    ///
    /// Arithmetic wraps around on underflow.
    ///
    /// 下溢时算术回绕。
    pub fn dec(&mut self, offset: u64, deltas: &[Value]) -> Result<()> {
        let mut pos = self.translate(offset)?;
        for delta in deltas {
            let width = delta.width();
            let mut buf = [0u8; 8];
            self.store.read_at(&mut buf[..width], pos)?;
            delta.wrapping_sub_into(&mut buf[..width]);
            self.store.write_at(&buf[..width], pos)?;
            pos = pos.checked_add(width as u64).ok_or(Error::OutOfBounds)?;
        }
        Ok(())
    }
}
