use std::fs::File;
use std::path::{Path, PathBuf};
use tar::{Builder, EntryType, Header};

pub const FILE1: &str = "This is file1 line1\nThis is file1 line2\nThis is file1 line3";
pub const FILE2: &str = "This is file2 line1\nThis is file2 line2";
pub const FILE3: &str = "This is file3 line1";

/// Entry in a test archive: `None` content marks a directory.
pub type TestEntry<'a> = (&'a str, Option<&'a [u8]>);

pub fn write_archive(dir: &Path, name: &str, entries: &[TestEntry<'_>]) -> PathBuf {
    let path = dir.join(name);
    let mut builder = Builder::new(File::create(&path).unwrap());
    for (entry_path, content) in entries {
        let mut header = Header::new_gnu();
        match content {
            Some(bytes) => {
                header.set_entry_type(EntryType::Regular);
                header.set_size(bytes.len() as u64);
                header.set_mode(0o644);
                builder.append_data(&mut header, entry_path, *bytes).unwrap();
            }
            None => {
                header.set_entry_type(EntryType::Directory);
                header.set_size(0);
                header.set_mode(0o755);
                builder
                    .append_data(&mut header, entry_path, std::io::empty())
                    .unwrap();
            }
        }
    }
    builder.finish().unwrap();
    path
}

/// The three-file archive used across the shell tests: files first, then
/// explicit directory entries.
pub fn write_scenario_archive(dir: &Path) -> PathBuf {
    write_archive(
        dir,
        "unitest_fs.tar",
        &[
            ("fs/dir1/file1.txt", Some(FILE1.as_bytes())),
            ("fs/dir1/file2.txt", Some(FILE2.as_bytes())),
            ("fs/dir2/file3.txt", Some(FILE3.as_bytes())),
            ("fs/dir1", None),
            ("fs/dir2", None),
        ],
    )
}
