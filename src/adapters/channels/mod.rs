//! Save destination channels, in preference order: shell, picker, download.

mod download;
mod picker;
mod shell;

pub use download::DownloadChannel;
pub use picker::PickerChannel;
pub use shell::ShellChannel;
