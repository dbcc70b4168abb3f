pub mod init;
pub mod preview;
pub mod shell;

pub use init::{init, InitArgs};
pub use preview::{preview, PreviewArgs};
pub use shell::{shell, ShellArgs};
