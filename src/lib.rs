//! Cross-platform memory-mapped file I/O with typed segment access and
//! snapshot transactions
//!
//! 带类型化段访问与快照事务的跨平台内存映射文件 I/O
//!
//! This library maps a file's bytes directly into process memory and layers
//! two access primitives on top of the mapped region, forming the substrate
//! a storage or database engine builds on:
//!
//! 本库将文件字节直接映射到进程内存，并在映射区域之上叠加两种访问原语，
//! 构成存储或数据库引擎赖以构建的基础层：
//!
//! - **[`Mapping`]**: the platform engine. Opens an OS memory mapping over
//!   a file, handles page alignment, locking and synchronization, and
//!   exposes the region as a random-access byte [`Store`]
//! - **[`Segment`] / [`RawSegment`]**: typed views that interpret ranges of
//!   raw bytes as fixed-width big-endian integers, through bounds-checked
//!   store I/O or through direct memory pointers
//! - **[`Transaction`]**: a snapshot layer that stages writes into a
//!   private copy of a byte range and atomically commits or discards them
//!
//! - **[`Mapping`]**: 平台引擎。基于文件打开操作系统内存映射，
//!   处理页对齐、锁定与同步，并将区域作为随机访问字节 [`Store`] 暴露
//! - **[`Segment`] / [`RawSegment`]**: 类型化视图，通过带边界检查的存储
//!   I/O 或直接内存指针，将原始字节范围解释为定宽大端整数
//! - **[`Transaction`]**: 快照层，将写入暂存到字节范围的私有副本中，
//!   并原子地提交或丢弃它们
//!
//! # Features
//!
//! - **Zero-copy access**: reads and writes go straight to mapped memory
//! - **Explicit lifecycle**: a mapping is released exactly once, by `close`
//!   or by the destructor, and double close is a reported error, not a crash
//! - **Snapshot isolation**: a transaction's view is unaffected by later
//!   changes to the underlying store until it commits
//! - **One byte order**: every typed access path encodes big-endian, so
//!   bytes written through one view read back identically through any other
//!
//! # 特性
//!
//! - **零拷贝访问**：读写直达映射内存
//! - **显式生命周期**：映射只释放一次，通过 `close` 或析构函数，
//!   二次关闭是被报告的错误，而不是崩溃
//! - **快照隔离**：事务的视图不受底层存储后续变化的影响，直到它提交
//! - **单一字节序**：每条类型化访问路径都以大端编码，
//!   通过一个视图写入的字节可以通过任何其他视图原样读回
//!
//! # Quick Start
//!
//! ## Mapping a file
//!
//! ## 映射文件
//!
//! ```
//! use snapshot_mmap::{MapFlags, MapMode, Mapping, Result};
//! # use tempfile::tempdir;
//! # fn main() -> Result<()> {
//! # let dir = tempdir()?;
//! # let path = dir.path().join("data.bin");
//! let file = std::fs::OpenOptions::new()
//!     .read(true)
//!     .write(true)
//!     .create(true)
//!     .truncate(true)
//!     .open(&path)?;
//! file.set_len(128)?;
//!
//! let mut mapping = Mapping::open(&file, 0, 128, MapMode::ReadWrite, MapFlags::default())?;
//!
//! mapping.write_at(b"hello", 0)?;
//! let mut buf = [0u8; 5];
//! mapping.read_at(&mut buf, 0)?;
//! assert_eq!(&buf, b"hello");
//!
//! mapping.sync()?;
//! mapping.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Staging writes in a transaction
//!
//! ## 在事务中暂存写入
//!
//! ```
//! use snapshot_mmap::{open_file, MapFlags, Result};
//! # use tempfile::tempdir;
//! # fn main() -> Result<()> {
//! # let dir = tempdir()?;
//! # let path = dir.path().join("txn.bin");
//! let mut mapping = open_file(&path, 64, MapFlags::default(), |_| Ok(()))?;
//!
//! let mut tx = mapping.begin(0, 16)?;
//! tx.write_at(b"staged", 0)?;
//!
//! // Nothing reaches the mapping until commit
//! // 提交之前没有任何内容到达映射
//! let mut buf = [0u8; 6];
//! mapping.read_at(&mut buf, 0)?;
//! assert_eq!(&buf, &[0u8; 6]);
//!
//! tx.commit(&mut mapping)?;
//! mapping.read_at(&mut buf, 0)?;
//! assert_eq!(&buf, b"staged");
//! # Ok(())
//! # }
//! ```
//!
//! ## Typed access through a segment
//!
//! ## 通过段进行类型化访问
//!
//! ```
//! use snapshot_mmap::{Segment, Value, Result};
//! # fn main() -> Result<()> {
//! // A segment works over any store, here a plain buffer
//! // 段可工作在任意存储之上，这里是普通缓冲区
//! let mut store = vec![0u8; 32];
//! let mut segment = Segment::new(&mut store);
//!
//! segment.set(0, &[Value::U16(7), Value::U64(42)])?;
//!
//! let mut slots = [Value::U16(0), Value::U64(0)];
//! segment.get(0, &mut slots)?;
//! assert_eq!(slots, [Value::U16(7), Value::U64(42)]);
//! # Ok(())
//! # }
//! ```
//!
//! # Main Types
//!
//! - [`Mapping`]: a mapping of a file into memory
//! - [`Segment`]: store-driven typed view over raw bytes
//! - [`RawSegment`]: zero-copy pointer-based typed view
//! - [`Transaction`]: snapshot transaction on a byte range
//! - [`Store`]: the random-access byte store capability
//! - [`open_file`]: file bootstrap helper with one-time initialization
//!
//! # 主要类型
//!
//! - [`Mapping`]: 文件到内存的映射
//! - [`Segment`][]: 存储驱动的原始字节类型化视图
//! - [`RawSegment`]: 零拷贝的基于指针的类型化视图
//! - [`Transaction`][]: 字节范围上的快照事务
//! - [`Store`][]: 随机访问字节存储能力
//! - [`open_file`]: 带一次性初始化的文件引导辅助
//!
//! # Thread safety
//!
//! None of the types here may be used concurrently from multiple threads
//! without external synchronization; the hot paths deliberately carry no
//! internal locks. A shared read-write mapping is visible across processes
//! mapping the same file region, but no cross-process coordination
//! protocol is provided.
//!
//! # 线程安全
//!
//! 这里的任何类型都不可在没有外部同步的情况下被多个线程并发使用；
//! 热点路径刻意不带内部锁。共享读写映射对映射同一文件区域的其他进程
//! 可见，但不提供跨进程协调协议。

mod error;
mod map;
mod segment;
mod store;
mod txn;

// Re-export public API
// 重新导出公共 API
pub use error::{Error, Result};
pub use map::{MapFlags, MapMode, Mapping, open_file};
pub use segment::{RawSegment, Segment, Value};
pub use store::Store;
pub use txn::Transaction;
