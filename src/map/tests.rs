//! 测试模块

use std::fs;
use std::fs::File;
use std::path::Path;

use tempfile::tempdir;

use super::*;
use crate::error::Error;
use crate::segment::Value;

/// 非零测试数据
const DATA: &[u8] = b"HELLO";

/// 创建指定长度的零填充测试文件
fn create_file(path: &Path, len: u64) -> File {
    let file = fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .unwrap();
    file.set_len(len).unwrap();
    file
}

/// Mapping 打开与 I/O 测试
#[cfg(test)]
mod mapping_tests {
    use super::*;

    #[test]
    fn test_open_rejects_zero_length() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero_len.bin");
        let file = create_file(&path, 8);

        let result = Mapping::open(&file, 0, 0, MapMode::ReadWrite, MapFlags::default());
        assert!(matches!(result, Err(Error::BadLength)));
    }

    #[test]
    fn test_open_rejects_range_past_end_of_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("past_end.bin");
        let file = create_file(&path, 8);

        // 范围超出文件末尾，不允许建立映射
        let result = Mapping::open(&file, 4, 8, MapMode::ReadWrite, MapFlags::default());
        assert!(matches!(result, Err(Error::BadLength)));

        let result = Mapping::open(&file, 0, 9, MapMode::ReadWrite, MapFlags::default());
        assert!(matches!(result, Err(Error::BadLength)));
    }

    #[test]
    fn test_open_rejects_offset_overflow() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overflow.bin");
        let file = create_file(&path, 8);

        let result = Mapping::open(&file, u64::MAX, 2, MapMode::ReadWrite, MapFlags::default());
        assert!(matches!(result, Err(Error::BadOffset)));
    }

    #[test]
    fn test_open_rejects_writable_executable_pages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wx.bin");
        let file = create_file(&path, 8);

        let flags = MapFlags { executable: true };
        let result = Mapping::open(&file, 0, 8, MapMode::ReadWrite, flags);
        assert!(matches!(result, Err(Error::BadMode)));

        let result = Mapping::open(&file, 0, 8, MapMode::WriteCopy, flags);
        assert!(matches!(result, Err(Error::BadMode)));
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip.bin");
        let file = create_file(&path, DATA.len() as u64);

        let mut m =
            Mapping::open(&file, 0, DATA.len(), MapMode::ReadWrite, MapFlags::default()).unwrap();
        m.write_at(DATA, 0).unwrap();

        let mut buf = vec![0u8; DATA.len()];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, DATA);

        m.close().unwrap();
    }

    #[test]
    fn test_mapping_survives_closing_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("closed_file.bin");
        let file = create_file(&path, DATA.len() as u64);

        let mut m =
            Mapping::open(&file, 0, DATA.len(), MapMode::ReadWrite, MapFlags::default()).unwrap();
        // 调用者的文件句柄关闭后映射必须仍然可用
        drop(file);

        m.write_at(DATA, 0).unwrap();
        let mut buf = vec![0u8; DATA.len()];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, DATA);

        m.close().unwrap();
    }

    #[test]
    fn test_unaligned_offset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("unaligned.bin");
        let file = create_file(&path, DATA.len() as u64);

        // 偏移量 1 不是页对齐的，由映射层内部对齐
        let partial = &DATA[1..];
        let mut m =
            Mapping::open(&file, 1, partial.len(), MapMode::ReadWrite, MapFlags::default())
                .unwrap();
        assert_eq!(m.len(), partial.len());

        m.write_at(partial, 0).unwrap();
        let mut buf = vec![0u8; partial.len()];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, partial);

        m.sync().unwrap();
        m.close().unwrap();

        // 文件的第一个字节保持不变
        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk[0], 0);
        assert_eq!(&on_disk[1..], partial);
    }

    #[test]
    fn test_shared_sync_reaches_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.bin");
        let file = create_file(&path, DATA.len() as u64);

        let mut m =
            Mapping::open(&file, 0, DATA.len(), MapMode::ReadWrite, MapFlags::default()).unwrap();
        m.write_at(DATA, 0).unwrap();
        m.sync().unwrap();

        assert_eq!(fs::read(&path).unwrap(), DATA);
    }

    #[test]
    fn test_write_copy_sync_leaves_the_file_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("private.bin");
        let file = create_file(&path, DATA.len() as u64);

        let mut m =
            Mapping::open(&file, 0, DATA.len(), MapMode::WriteCopy, MapFlags::default()).unwrap();
        m.write_at(DATA, 0).unwrap();
        m.sync().unwrap();

        // 写入只对该映射可见
        let mut buf = vec![0u8; DATA.len()];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, DATA);
        assert_eq!(fs::read(&path).unwrap(), vec![0u8; DATA.len()]);
    }

    #[test]
    fn test_partial_read_is_rejected_and_buffer_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial_read.bin");
        let file = create_file(&path, 4);

        let mut m = Mapping::open(&file, 0, 4, MapMode::ReadWrite, MapFlags::default()).unwrap();
        m.write_at(&DATA[..4], 0).unwrap();

        // 读取越过映射末尾：整个请求被拒绝，缓冲区保持不变
        let mut buf = vec![0u8; DATA.len()];
        assert!(matches!(m.read_at(&mut buf, 0), Err(Error::OutOfBounds)));
        assert_eq!(buf, vec![0u8; DATA.len()]);
    }

    #[test]
    fn test_partial_write_is_rejected_and_memory_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial_write.bin");
        let file = create_file(&path, 4);

        let mut m = Mapping::open(&file, 0, 4, MapMode::ReadWrite, MapFlags::default()).unwrap();

        assert!(matches!(m.write_at(DATA, 0), Err(Error::OutOfBounds)));

        let mut buf = vec![0u8; 4];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, vec![0u8; 4]);
    }

    #[test]
    fn test_read_only_mapping_rejects_mutation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("read_only.bin");
        let file = create_file(&path, 8);

        let mut m = Mapping::open(&file, 0, 8, MapMode::ReadOnly, MapFlags::default()).unwrap();
        assert!(!m.is_writable());

        assert!(matches!(m.write_at(DATA, 0), Err(Error::ReadOnly)));
        assert!(matches!(m.sync(), Err(Error::ReadOnly)));
        assert!(matches!(m.begin(0, 8), Err(Error::ReadOnly)));
        assert!(matches!(m.raw_segment(), Err(Error::ReadOnly)));
        assert!(matches!(m.memory_mut(), Err(Error::ReadOnly)));

        // 只读访问仍然可用
        let mut buf = [0u8; 8];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(m.memory().unwrap().len(), 8);
    }

    #[test]
    fn test_lock_state_machine() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lock.bin");
        let file = create_file(&path, 8);

        let mut m = Mapping::open(&file, 0, 8, MapMode::ReadWrite, MapFlags::default()).unwrap();
        assert!(!m.is_locked());

        match m.lock() {
            Ok(()) => {}
            // 环境的内存锁定限额可能禁止 mlock，此时跳过
            Err(Error::Os { .. }) => return,
            Err(err) => panic!("unexpected error: {err}"),
        }
        assert!(m.is_locked());
        assert!(matches!(m.lock(), Err(Error::Locked)));

        m.unlock().unwrap();
        assert!(!m.is_locked());
        assert!(matches!(m.unlock(), Err(Error::NotLocked)));

        m.close().unwrap();
    }
}

/// 生命周期测试
#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_double_close_reports_closed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("double_close.bin");
        let file = create_file(&path, 8);

        let mut m = Mapping::open(&file, 0, 8, MapMode::ReadWrite, MapFlags::default()).unwrap();
        m.close().unwrap();
        assert!(m.is_closed());

        // 第二次关闭只报告状态，绝不二次释放
        assert!(matches!(m.close(), Err(Error::Closed)));
        assert!(m.is_closed());
    }

    #[test]
    fn test_operations_after_close_report_closed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("after_close.bin");
        let file = create_file(&path, 8);

        let mut m = Mapping::open(&file, 0, 8, MapMode::ReadWrite, MapFlags::default()).unwrap();
        m.close().unwrap();

        let mut buf = [0u8; 1];
        assert!(matches!(m.read_at(&mut buf, 0), Err(Error::Closed)));
        assert!(matches!(m.write_at(&[1], 0), Err(Error::Closed)));
        assert!(matches!(m.sync(), Err(Error::Closed)));
        assert!(matches!(m.lock(), Err(Error::Closed)));
        assert!(matches!(m.unlock(), Err(Error::Closed)));
        assert!(matches!(m.begin(0, 1), Err(Error::Closed)));
        assert!(matches!(m.segment(), Err(Error::Closed)));
        assert!(matches!(m.raw_segment(), Err(Error::Closed)));
        assert!(matches!(m.memory(), Err(Error::Closed)));
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn test_close_unlocks_locked_pages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("close_unlocks.bin");
        let file = create_file(&path, 8);

        let mut m = Mapping::open(&file, 0, 8, MapMode::ReadWrite, MapFlags::default()).unwrap();
        if m.lock().is_err() {
            return;
        }
        m.close().unwrap();
        assert!(!m.is_locked());
    }

    #[test]
    fn test_drop_releases_an_unclosed_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dropped.bin");
        let file = create_file(&path, DATA.len() as u64);

        {
            let mut m =
                Mapping::open(&file, 0, DATA.len(), MapMode::ReadWrite, MapFlags::default())
                    .unwrap();
            m.write_at(DATA, 0).unwrap();
            // 没有显式 close，由析构函数同步并解除映射
        }

        assert_eq!(fs::read(&path).unwrap(), DATA);
    }
}

/// 组合测试：映射之上的事务与段
#[cfg(test)]
mod composition_tests {
    use super::*;

    #[test]
    fn test_transaction_commits_into_the_mapping_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("txn_commit.bin");
        let file = create_file(&path, DATA.len() as u64);

        let mut m =
            Mapping::open(&file, 0, DATA.len(), MapMode::ReadWrite, MapFlags::default()).unwrap();

        let mut tx = m.begin(0, DATA.len()).unwrap();
        tx.write_at(DATA, 0).unwrap();

        // 提交之前映射保持不变
        let mut buf = vec![0u8; DATA.len()];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, vec![0u8; DATA.len()]);

        tx.commit(&mut m).unwrap();
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, DATA);

        assert!(matches!(tx.commit(&mut m), Err(Error::Closed)));
    }

    #[test]
    fn test_transaction_rollback_leaves_the_mapping_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("txn_rollback.bin");
        let file = create_file(&path, DATA.len() as u64);

        let mut m =
            Mapping::open(&file, 0, DATA.len(), MapMode::ReadWrite, MapFlags::default()).unwrap();

        let mut tx = m.begin(0, DATA.len()).unwrap();
        tx.write_at(DATA, 0).unwrap();
        tx.rollback().unwrap();

        let mut buf = vec![0u8; DATA.len()];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, vec![0u8; DATA.len()]);
    }

    #[test]
    fn test_segment_packs_big_endian_into_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("segment_be.bin");
        let file = create_file(&path, 16);

        let mut m = Mapping::open(&file, 0, 16, MapMode::ReadWrite, MapFlags::default()).unwrap();

        {
            let mut segment = m.segment().unwrap();
            segment
                .set(1, &[Value::U8(1), Value::U16(2), Value::U32(3)])
                .unwrap();

            let mut slots = [Value::U8(0), Value::U16(0), Value::U32(0)];
            segment.get(1, &mut slots).unwrap();
            assert_eq!(slots, [Value::U8(1), Value::U16(2), Value::U32(3)]);
        }

        m.close().unwrap();

        // 值背靠背地以大端字节序落盘
        let on_disk = fs::read(&path).unwrap();
        assert_eq!(&on_disk[1..8], &[1, 0, 2, 0, 0, 0, 3]);
    }

    #[test]
    fn test_raw_segment_round_trips_with_the_driver_segment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("raw_segment.bin");
        let file = create_file(&path, 16);

        let mut m = Mapping::open(&file, 0, 16, MapMode::ReadWrite, MapFlags::default()).unwrap();

        {
            let mut raw = m.raw_segment().unwrap();
            raw.put_u32(0, 0xFFFF_FFFE);
            assert_eq!(raw.u32_at(0), 0xFFFF_FFFE);
        }

        // 两种视图必须读出同一字节序
        {
            let mut segment = m.segment().unwrap();
            let mut slots = [Value::U32(0)];
            segment.get(0, &mut slots).unwrap();
            assert_eq!(slots, [Value::U32(0xFFFF_FFFE)]);
        }

        m.close().unwrap();
        let on_disk = fs::read(&path).unwrap();
        assert_eq!(&on_disk[..4], &[0xFF, 0xFF, 0xFF, 0xFE]);
    }
}

/// 文件引导测试
#[cfg(test)]
mod bootstrap_tests {
    use super::*;

    #[test]
    fn test_open_file_runs_the_initializer_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bootstrap.bin");
        let mut init_calls = 0;

        let mut m = open_file(&path, DATA.len(), MapFlags::default(), |m| {
            init_calls += 1;
            m.write_at(DATA, 0)
        })
        .unwrap();
        m.close().unwrap();

        // 第二次打开已有文件，初始化器不得再运行
        let m = open_file(&path, DATA.len(), MapFlags::default(), |_| {
            panic!("initializer must not run on an existing file")
        })
        .unwrap();

        assert_eq!(init_calls, 1);
        let mut buf = vec![0u8; DATA.len()];
        m.read_at(&mut buf, 0).unwrap();
        assert_eq!(buf, DATA);
    }

    #[test]
    fn test_open_file_removes_the_created_file_when_init_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bootstrap_fail.bin");

        let result = open_file(&path, 8, MapFlags::default(), |_| Err(Error::OutOfBounds));
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_open_file_keeps_an_existing_file_on_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bootstrap_keep.bin");
        fs::write(&path, DATA).unwrap();

        // 长度为零的映射失败，但已存在的文件必须保留
        let result = open_file(&path, 0, MapFlags::default(), |_| Ok(()));
        assert!(result.is_err());
        assert!(path.exists());
    }
}
