
pub use host::{FixedActiveFile, MockConfirmation, RecordingPresenter};
pub use memory_filesystem::MemoryFilesystem;
