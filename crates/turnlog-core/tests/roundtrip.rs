//! End-to-end persistence through the real file system.

use turnlog_core::{
    ClipboardError, ClipboardPort, LoadError, NullSurface, StdFileSystem, TranscriptController,
    Turn,
};

#[derive(Default)]
struct DiscardClipboard;

impl ClipboardPort for DiscardClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

fn controller() -> TranscriptController<NullSurface, DiscardClipboard, StdFileSystem> {
    TranscriptController::new(NullSurface, DiscardClipboard, StdFileSystem)
}

#[test]
fn save_to_disk_and_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.json");

    let mut writer = controller();
    writer.append_turns(vec![
        Turn::new(1633036800.0, "User1", "Hello", "Hi there!"),
        Turn::new(1633036860.0, "User2", "How's the weather?", "Sunny."),
    ]);
    writer.toggle_turn(0).unwrap();
    writer.save_path(&path).unwrap();

    let mut reader = controller();
    reader.load_path(&path).unwrap();
    assert_eq!(reader.store().all(), writer.store().all());
    // Visibility is presentation state and never persists.
    assert!(reader.view().is_visible(0).unwrap());
}

#[test]
fn saved_file_is_stable_across_rewrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.json");

    let mut c = controller();
    c.append_turns(vec![Turn::new(0.0, "u", "p", "c")]);
    c.save_path(&path).unwrap();
    let first = std::fs::read(&path).unwrap();

    c.load_path(&path).unwrap();
    c.save_path(&path).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn loading_a_missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let mut c = controller();
    let err = c.load_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
}
