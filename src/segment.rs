//! Typed segment views over raw bytes
//!
//! 基于原始字节的类型化段视图
//!
//! Provides two implementations of the same access semantics:
//! - [`Segment`]: safe, portable version driven by any [`Store`](crate::Store)
//! - [`RawSegment`]: zero-copy pointer version over memory that is known to
//!   stay mapped, for example a [`Mapping`](crate::Mapping)'s own bytes
//!
//! 提供同一访问语义的两种实现：
//! - [`Segment`]: 安全、可移植的版本，由任意 [`Store`](crate::Store) 驱动
//! - [`RawSegment`]: 基于已知保持映射状态的内存（例如
//!   [`Mapping`](crate::Mapping) 自身字节）的零拷贝指针版本
//!
//! # Semantics
//!
//! Both versions interpret bytes as fixed-width unsigned integers encoded in
//! **big-endian** byte order, packed back-to-back: an operation over several
//! [`Value`] slots processes them sequentially, each slot starting
//! immediately after the previous one.
//!
//! # 语义
//!
//! 两个版本都将字节解释为以**大端**字节序编码的定宽无符号整数，
//! 背靠背排列：针对多个 [`Value`] 槽位的操作按顺序处理，
//! 每个槽位紧跟在前一个之后。
//!
//! # Choosing a version
//!
//! [`Segment`] is the one to reach for by default: every access goes through
//! the store's bounds checks and failures come back as recoverable errors.
//! [`RawSegment`] trades that for speed: access goes straight to memory, and
//! an out-of-bounds offset is a programming error which aborts via panic
//! rather than an expected runtime condition.
//!
//! # 选择版本
//!
//! 默认应选择 [`Segment`]：每次访问都经过存储的边界检查，
//! 失败以可恢复错误的形式返回。[`RawSegment`] 用安全换取速度：
//! 访问直达内存，越界偏移量是编程错误，会通过 panic 中止，
//! 而不是预期的运行时状况。

mod driver;
mod raw;
mod value;


// Re-export public API
// 重新导出公共 API
pub use driver::Segment;
pub use raw::RawSegment;
pub use value::Value;
