//! Error types for snapshot-mmap
//!
//! snapshot-mmap 的错误类型

use std::fmt;
use std::io;

/// Error type for snapshot-mmap operations
///
/// snapshot-mmap 操作的错误类型
#[derive(Debug)]
pub enum Error {
    /// I/O error raised while preparing the backing file
    ///
    /// 准备底层文件时产生的 I/O 错误
    Io(io::Error),

    /// A mapping-level operating system call failed
    ///
    /// 映射层的操作系统调用失败
    Os {
        /// Name of the failing operation, e.g. `"mmap"` or `"mlock"`
        ///
        /// 失败操作的名称，例如 `"mmap"` 或 `"mlock"`
        op: &'static str,
        /// The underlying error, carrying the native error code
        ///
        /// 底层错误，携带原生错误码
        source: io::Error,
    },

    /// The given offset is not valid for the backing file
    ///
    /// 给定的偏移量对底层文件无效
    BadOffset,

    /// The given length is zero or does not fit the platform
    ///
    /// 给定的长度为零或超出平台限制
    BadLength,

    /// The given mapping mode and flags cannot be combined
    ///
    /// 给定的映射模式和标志无法组合
    BadMode,

    /// The mapping or transaction was already closed
    ///
    /// 映射或事务已经关闭
    Closed,

    /// Write access was requested on a read-only mapping
    ///
    /// 对只读映射请求了写访问
    ReadOnly,

    /// The mapped memory pages are already locked
    ///
    /// 映射的内存页已经锁定
    Locked,

    /// The mapped memory pages are not locked
    ///
    /// 映射的内存页未锁定
    NotLocked,

    /// The requested range is outside of the addressable window
    ///
    /// 请求的范围超出可寻址窗口
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Os { op, source } => write!(f, "{} failed: {}", op, source),
            Error::BadOffset => write!(f, "bad offset / 无效偏移量"),
            Error::BadLength => write!(f, "bad length / 无效长度"),
            Error::BadMode => write!(f, "bad mapping mode / 无效映射模式"),
            Error::Closed => write!(f, "already closed / 已经关闭"),
            Error::ReadOnly => write!(f, "mapping is read only / 映射为只读"),
            Error::Locked => write!(f, "already locked / 已经锁定"),
            Error::NotLocked => write!(f, "not locked / 未锁定"),
            Error::OutOfBounds => write!(f, "out of bounds / 越界访问"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Os { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convert from io::Error to Error
///
/// 从 io::Error 转换到 Error
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Convert from Error to io::Error for compatibility
///
/// 从 Error 转换到 io::Error 以保持兼容性
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(io_err) => io_err,
            Error::Os { source, .. } => source,
            Error::BadOffset | Error::BadLength | Error::BadMode | Error::OutOfBounds => {
                io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
            }
            Error::ReadOnly => io::Error::new(io::ErrorKind::PermissionDenied, err.to_string()),
            Error::Closed | Error::Locked | Error::NotLocked => {
                io::Error::other(err.to_string())
            }
        }
    }
}

/// Result type alias using our custom Error type
///
/// 使用自定义 Error 类型的 Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;
