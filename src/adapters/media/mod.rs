//! Media adapters. Implement MediaPickerPort.

pub mod fs_picker;

pub use fs_picker::FsMediaPicker;
