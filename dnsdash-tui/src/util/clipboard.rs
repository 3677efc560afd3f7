//! OSC 52 剪贴板
//!
//! 终端模拟器（包括 SSH / tmux 会话中的）解析该转义序列并写入系统剪贴板，
//! 无需依赖本地剪贴板服务。

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Escape sequence that asks the terminal to put `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write the OSC 52 sequence for `text` to `out`.
pub fn copy_to_clipboard<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn copy_writes_sequence() {
        let mut buf = Vec::new();
        copy_to_clipboard(&mut buf, "v=spf1 -all").unwrap();
        let written = String::from_utf8(buf).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
    }
}
