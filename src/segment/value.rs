//! Typed value slots for segment operations
//!
//! 段操作的类型化值槽位

/// A fixed-width unsigned integer slot
///
/// 定宽无符号整数槽位
///
/// Segment operations accept ordered sequences of these slots and process
/// them sequentially, advancing the effective offset by each slot's byte
/// width. The variant selects the width; the payload carries the value read
/// or to be written. All multi-byte values are encoded big-endian.
///
/// 段操作接受这些槽位的有序序列并按顺序处理，
/// 每处理一个槽位就将有效偏移量前进该槽位的字节宽度。
/// 变体决定宽度；载荷携带读出或待写入的值。
/// 所有多字节值都以大端字节序编码。
///
/// # Examples
///
/// ```
/// use snapshot_mmap::Value;
///
/// assert_eq!(Value::U8(1).width(), 1);
/// assert_eq!(Value::U16(2).width(), 2);
/// assert_eq!(Value::U32(3).width(), 4);
/// assert_eq!(Value::U64(4).width(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Unsigned 8-bit integer, one byte wide
    ///
    /// 无符号 8 位整数，宽一个字节
    U8(u8),

    /// Unsigned 16-bit integer, two bytes wide
    ///
    /// 无符号 16 位整数，宽两个字节
    U16(u16),

    /// Unsigned 32-bit integer, four bytes wide
    ///
    /// 无符号 32 位整数，宽四个字节
    U32(u32),

    /// Unsigned 64-bit integer, eight bytes wide
    ///
    /// 无符号 64 位整数，宽八个字节
    U64(u64),
}

impl Value {
    /// Get the width of this slot in bytes
    ///
    /// 获取该槽位的宽度（字节数）
    #[inline]
    pub const fn width(&self) -> usize {
        match self {
            Value::U8(_) => 1,
            Value::U16(_) => 2,
            Value::U32(_) => 4,
            Value::U64(_) => 8,
        }
    }

    /// Get the payload widened to u64
    ///
    /// 获取加宽为 u64 的载荷
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        match *self {
            Value::U8(v) => v as u64,
            Value::U16(v) => v as u64,
            Value::U32(v) => v as u64,
            Value::U64(v) => v,
        }
    }

    /// Encode the payload big-endian into `buf`, which must be exactly
    /// `self.width()` bytes long.
    ///
    /// 将载荷以大端字节序编码到 `buf` 中，`buf` 的长度必须恰好为
    /// `self.width()` 个字节。
    #[inline]
    pub(crate) fn encode(&self, buf: &mut [u8]) {
        match *self {
            Value::U8(v) => buf[0] = v,
            Value::U16(v) => buf.copy_from_slice(&v.to_be_bytes()),
            Value::U32(v) => buf.copy_from_slice(&v.to_be_bytes()),
            Value::U64(v) => buf.copy_from_slice(&v.to_be_bytes()),
        }
    }

    /// Decode a big-endian payload of the same width as `self` from `buf`.
    ///
    /// 从 `buf` 中解码与 `self` 同宽度的大端载荷。
    #[inline]
    pub(crate) fn decode_like(&self, buf: &[u8]) -> Value {
        match self {
            Value::U8(_) => Value::U8(buf[0]),
            Value::U16(_) => Value::U16(u16::from_be_bytes(buf[0..2].try_into().unwrap())),
            Value::U32(_) => Value::U32(u32::from_be_bytes(buf[0..4].try_into().unwrap())),
            Value::U64(_) => Value::U64(u64::from_be_bytes(buf[0..8].try_into().unwrap())),
        }
    }

    /// Treat `buf` as a big-endian value of this slot's width and add the
    /// payload to it in place, wrapping on overflow.
    ///
    /// 将 `buf` 视为该槽位宽度的大端值，就地加上载荷，溢出时回绕。
    #[inline]
    pub(crate) fn wrapping_add_into(&self, buf: &mut [u8]) {
        match *self {
            Value::U8(d) => buf[0] = buf[0].wrapping_add(d),
            Value::U16(d) => {
                let v = u16::from_be_bytes(buf[0..2].try_into().unwrap()).wrapping_add(d);
                buf.copy_from_slice(&v.to_be_bytes());
            }
            Value::U32(d) => {
                let v = u32::from_be_bytes(buf[0..4].try_into().unwrap()).wrapping_add(d);
                buf.copy_from_slice(&v.to_be_bytes());
            }
            Value::U64(d) => {
                let v = u64::from_be_bytes(buf[0..8].try_into().unwrap()).wrapping_add(d);
                buf.copy_from_slice(&v.to_be_bytes());
            }
        }
    }

    /// Treat `buf` as a big-endian value of this slot's width and subtract
    /// the payload from it in place, wrapping on underflow.
    ///
    /// 将 `buf` 视为该槽位宽度的大端值，就地减去载荷，下溢时回绕。
    #[inline]
    pub(crate) fn wrapping_sub_into(&self, buf: &mut [u8]) {
        match *self {
            Value::U8(d) => buf[0] = buf[0].wrapping_sub(d),
            Value::U16(d) => {
                let v = u16::from_be_bytes(buf[0..2].try_into().unwrap()).wrapping_sub(d);
                buf.copy_from_slice(&v.to_be_bytes());
            }
            Value::U32(d) => {
                let v = u32::from_be_bytes(buf[0..4].try_into().unwrap()).wrapping_sub(d);
                buf.copy_from_slice(&v.to_be_bytes());
            }
            Value::U64(d) => {
                let v = u64::from_be_bytes(buf[0..8].try_into().unwrap()).wrapping_sub(d);
                buf.copy_from_slice(&v.to_be_bytes());
            }
        }
    }
}

impl From<u8> for Value {
    #[inline]
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    #[inline]
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    #[inline]
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<u64> for Value {
    #[inline]
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}
