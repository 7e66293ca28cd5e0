use tarsh::tree::{load, resolve, Node};
use tarsh::{ArchiveError, VirtualFileSystem};
use tempfile::TempDir;

use crate::integration::support::{write_archive, write_scenario_archive, FILE3};

#[test]
fn scenario_tree_lists_directories_in_archive_order() {
    let temp = TempDir::new().unwrap();
    let archive = write_scenario_archive(temp.path());

    let vfs = VirtualFileSystem::open(&archive).unwrap();
    assert_eq!(vfs.list(Some("/fs")), vec!["dir1", "dir2"]);
    assert_eq!(vfs.list(Some("/fs/dir1")), vec!["file1.txt", "file2.txt"]);
    assert_eq!(vfs.read_file("/fs/dir2/file3.txt"), Ok(FILE3));
    assert!(vfs.read_file("/fs/dir2/missing.txt").is_err());
    assert_eq!(vfs.find("file3.txt"), vec!["/dir2/file3.txt"]);
    assert!(vfs.list(Some("nonexistent")).is_empty());
}

#[test]
fn empty_directories_and_unsorted_entries_survive_loading() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "mixed.tar",
        &[
            ("fs/zeta/readme.md", Some(b"z".as_slice())),
            ("fs/alpha/", None),
            ("fs/mid/deep/er/file.txt", Some(b"deep".as_slice())),
            ("fs/empty", None),
        ],
    );

    let root = load(&archive).unwrap();
    let fs = resolve(&root, "/fs").unwrap().as_directory().unwrap();
    assert_eq!(
        fs.names().collect::<Vec<_>>(),
        vec!["zeta", "alpha", "mid", "empty"]
    );
    assert!(matches!(
        resolve(&root, "/fs/empty"),
        Ok(Node::Directory(dir)) if dir.is_empty()
    ));
    assert!(resolve(&root, "/fs/mid/deep/er").unwrap().is_directory());
}

#[test]
fn binary_file_content_aborts_loading() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "binary.tar",
        &[
            ("fs/ok.txt", Some(b"fine".as_slice())),
            ("fs/image.bin", Some([0x89u8, 0x50, 0xff, 0x00].as_slice())),
        ],
    );

    let err = VirtualFileSystem::open(&archive).unwrap_err();
    assert!(matches!(err, ArchiveError::NonUtf8Content { ref path, .. } if path == "fs/image.bin"));
}

#[test]
fn every_found_path_names_a_file() {
    let temp = TempDir::new().unwrap();
    let archive = write_archive(
        temp.path(),
        "dupes.tar",
        &[
            ("fs/target/target", Some(b"1".as_slice())),
            ("fs/a/target", Some(b"2".as_slice())),
            ("fs/a/b/target", None),
            ("fs/a/b/c/target", Some(b"3".as_slice())),
        ],
    );
    let vfs = VirtualFileSystem::open(&archive).unwrap();

    let found = vfs.find("target");
    assert_eq!(found, vec!["/target/target", "/a/target", "/a/b/c/target"]);
    for path in &found {
        let absolute = format!("{}{}", vfs.mount_point(), path);
        assert!(vfs.read_file(&absolute).is_ok(), "{absolute} should be a file");
    }
    assert_eq!(vfs.find("target"), found);
}
