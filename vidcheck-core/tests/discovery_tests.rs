// vidcheck-core/tests/discovery_tests.rs

mod common;

use common::touch;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use vidcheck_core::discovery::find_video_files;
use vidcheck_core::error::CoreError;

#[test]
fn test_find_video_files_filters_and_recurses() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    touch(root, "a.mp4");
    touch(root, "b.AVI");
    touch(root, "c.txt");
    touch(root, "d/e.mkv");

    let files = find_video_files(root)?;

    assert_eq!(
        files,
        vec![root.join("a.mp4"), root.join("b.AVI"), root.join("d/e.mkv")]
    );
    Ok(())
}

#[test]
fn test_find_video_files_recognizes_every_container() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();

    touch(root, "one.mov");
    touch(root, "two.MP4");
    touch(root, "deep/er/three.Mkv");
    touch(root, "four.webm");
    touch(root, "five.mp4.bak");
    // A directory with a video extension is not a file.
    fs::create_dir(root.join("folder.mp4"))?;

    let names: Vec<String> = find_video_files(root)?
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["three.Mkv", "one.mov", "two.MP4"]);
    Ok(())
}

#[test]
fn test_find_video_files_empty_tree_is_ok() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    touch(dir.path(), "notes.txt");
    fs::create_dir(dir.path().join("empty"))?;

    let files = find_video_files(dir.path())?;
    assert!(files.is_empty());
    Ok(())
}

#[test]
fn test_find_video_files_nonexistent_dir() {
    let missing = PathBuf::from("surely_this_does_not_exist_42_integration");
    match find_video_files(&missing) {
        Err(CoreError::DirectoryNotFound(path)) => assert_eq!(path, missing),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn test_find_video_files_root_is_a_file() {
    let dir = tempdir().unwrap();
    let file = touch(dir.path(), "clip.mp4");

    let result = find_video_files(&file);
    assert!(matches!(result, Err(CoreError::NotADirectory(_))));
}

#[cfg(unix)]
#[test]
fn test_find_video_files_lists_symlinked_and_dangling_files() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::symlink;

    let dir = tempdir()?;
    let elsewhere = tempdir()?;
    let root = dir.path();

    touch(root, "plain.mp4");
    let target = touch(elsewhere.path(), "real.mp4");
    symlink(&target, root.join("linked.mp4"))?;
    symlink(elsewhere.path().join("gone.mkv"), root.join("dangling.mkv"))?;
    fs::create_dir(elsewhere.path().join("folder.mov"))?;
    symlink(elsewhere.path().join("folder.mov"), root.join("folder.mov"))?;

    let files = find_video_files(root)?;

    assert_eq!(
        files,
        vec![
            root.join("dangling.mkv"),
            root.join("linked.mp4"),
            root.join("plain.mp4"),
        ]
    );
    Ok(())
}
