//! Cross-platform memory-mapped file I/O
//!
//! 跨平台内存映射文件 I/O
//!
//! A [`Mapping`] associates a range of a file's bytes with process memory
//! and exposes that memory as a random-access byte
//! [`Store`](crate::Store). On top of that store it composes the typed
//! [`Segment`](crate::Segment) view and the snapshot
//! [`Transaction`](crate::Transaction) layer, so the mapped bytes can be
//! read and mutated at every level of the stack.
//!
//! [`Mapping`] 将文件字节范围与进程内存关联，并将该内存作为随机访问
//! 字节 [`Store`](crate::Store) 暴露。在该存储之上，它组合了类型化的
//! [`Segment`](crate::Segment) 视图和快照 [`Transaction`](crate::Transaction)
//! 层，因此可以在栈的每一层读取和修改映射的字节。
//!
//! # Alignment
//!
//! Mapping operations must start at multiples of the OS page size. The
//! mapping layer splits a requested offset into an outer page-aligned part
//! passed to the OS and an inner remainder re-applied to the returned
//! address, so callers see exactly the bytes they asked for, never more,
//! never less.
//!
//! # 对齐
//!
//! 映射操作必须从操作系统页大小的整数倍开始。映射层将请求的偏移量拆分为
//! 传给操作系统的外部页对齐部分和重新施加到返回地址上的内部余数，
//! 因此调用者看到的恰好是他们请求的字节，不多也不少。
//!
//! # Concurrency
//!
//! No type in this module may be used from multiple threads without
//! external synchronization. The hot read and write paths are plain memory
//! copies with no internal locks. A shared read-write mapping is visible to
//! other processes mapping the same file region, but no cross-process
//! coordination protocol is provided here.
//!
//! # 并发
//!
//! 本模块中的任何类型都不可在没有外部同步的情况下被多个线程使用。
//! 热点读写路径是没有内部锁的普通内存拷贝。共享读写映射对映射同一
//! 文件区域的其他进程可见，但这里不提供跨进程协调协议。

mod file;
mod mapping;

#[cfg(test)]
mod tests;

// Re-export public API
// 重新导出公共 API
pub use file::open_file;
pub use mapping::{MapFlags, MapMode, Mapping};
