use portable_pty::PtySize;

const DEFAULT_ROWS: u16 = 24;
const DEFAULT_COLS: u16 = 80;

/// Current size of the controlling terminal.
///
/// Falls back to `LINES`/`COLUMNS`, then 24x80, when no standard stream is a terminal.
pub fn terminal_size() -> PtySize {
    #[cfg(unix)]
    if let Some(size) = query_stream_size() {
        return size;
    }

    fallback_size(|key| std::env::var(key).ok())
}

#[cfg(unix)]
fn query_stream_size() -> Option<PtySize> {
    for fd in [libc::STDOUT_FILENO, libc::STDIN_FILENO, libc::STDERR_FILENO] {
        let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
        let ok = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) } == 0;
        if ok && ws.ws_row > 0 && ws.ws_col > 0 {
            return Some(PtySize {
                rows: ws.ws_row,
                cols: ws.ws_col,
                pixel_width: ws.ws_xpixel,
                pixel_height: ws.ws_ypixel,
            });
        }
    }
    None
}

fn fallback_size<F>(lookup: F) -> PtySize
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str, default: u16| {
        lookup(key)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(default)
    };

    PtySize {
        rows: read("LINES", DEFAULT_ROWS),
        cols: read("COLUMNS", DEFAULT_COLS),
        pixel_width: 0,
        pixel_height: 0,
    }
}
