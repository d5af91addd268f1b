use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub photos: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let photos = home.join("photos");
        fs::create_dir_all(&photos).expect("create photo dir");
        Self {
            _tmp: tmp,
            home,
            photos,
        }
    }

    /// Binary with HOME and the config dir pointed into the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("photo-stamp");
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("PHOTO_STAMP_LOG");
        cmd
    }

    pub fn photo(&self, name: &str, captured: &str) -> PathBuf {
        let path = self.photos.join(name);
        fs::write(&path, jpeg_with_capture_time(captured)).expect("write photo");
        path
    }

    pub fn names(&self) -> Vec<String> {
        names_in(&self.photos)
    }
}

pub fn names_in(dir: &Path) -> Vec<String> {
    let mut out: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    out.sort();
    out
}

// Keep in sync with `jpeg_with_capture_time` in crates/core/src/test_support.rs.
pub fn jpeg_with_capture_time(raw: &str) -> Vec<u8> {
    let field = Field {
        tag: Tag::DateTimeOriginal,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![raw.as_bytes().to_vec()]),
    };
    let mut writer = Writer::new();
    writer.push_field(&field);
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).expect("write tiff");
    let tiff = tiff.into_inner();

    let segment_len = u16::try_from(2 + 6 + tiff.len()).expect("segment fits");
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}
