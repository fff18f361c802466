//! Interactive child process on a pseudo-terminal, relayed to the controlling terminal.

use super::size::terminal_size;
use super::terminal::RawModeGuard;
use super::winch::WinchSubscription;
use crate::core::error::{PipfError, Result};
use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use portable_pty::{native_pty_system, Child, CommandBuilder, MasterPty, PtySize};
use std::ffi::OsStr;
use std::io::{self, Read, Write};
use std::os::fd::{AsFd, BorrowedFd, RawFd};
use std::path::Path;

const BUFFER_SIZE: usize = 8192;
const POLL_INTERVAL_MS: u8 = 100;

pub struct PtySession {
    master: Box<dyn MasterPty + Send>,
    child: Box<dyn Child + Send + Sync>,
    io: PtyIo,
}

impl PtySession {
    pub fn spawn(
        program: impl AsRef<OsStr>,
        args: &[&str],
        cwd: &Path,
        size: PtySize,
    ) -> Result<Self> {
        let program = program.as_ref();
        let pair = native_pty_system()
            .openpty(size)
            .map_err(|e| PipfError::Pty(format!("Failed to create PTY: {}", e)))?;

        let mut cmd = CommandBuilder::new(program);
        cmd.args(args);
        cmd.cwd(cwd);

        let child = pair
            .slave
            .spawn_command(cmd)
            .map_err(|e| {
                PipfError::Pty(format!("Failed to spawn {}: {}", program.to_string_lossy(), e))
            })?;
        // The child holds its own copy; ours would keep the master from seeing hangup.
        drop(pair.slave);

        tracing::debug!(
            "spawned {} on pty ({}x{}), pid {:?}",
            program.to_string_lossy(),
            size.rows,
            size.cols,
            child.process_id()
        );

        let reader = pair
            .master
            .try_clone_reader()
            .map_err(|e| PipfError::Pty(format!("Failed to create PTY reader: {}", e)))?;
        let writer = pair
            .master
            .take_writer()
            .map_err(|e| PipfError::Pty(format!("Failed to create PTY writer: {}", e)))?;

        Ok(Self {
            master: pair.master,
            child,
            io: PtyIo::new(reader, writer),
        })
    }

    /// Type `line` followed by a newline into the child's input.
    pub fn send_line(&mut self, line: &str) -> Result<()> {
        self.io.send(format!("{}\n", line).as_bytes())?;
        Ok(())
    }

    /// Relay the controlling terminal to the child until it exits; returns its exit code.
    pub fn interact(mut self) -> Result<i32> {
        let raw_fd = self
            .master
            .as_raw_fd()
            .ok_or_else(|| PipfError::Pty("PTY master has no file descriptor".to_string()))?;

        let winch = WinchSubscription::register()?;
        let _raw_mode = RawModeGuard::enable();

        let status = self.relay(raw_fd, &winch)?;
        tracing::debug!("pty child exited with {}", status.exit_code());

        Ok(status.exit_code() as i32)
    }

    fn relay(
        &mut self,
        master_fd: RawFd,
        winch: &WinchSubscription,
    ) -> Result<portable_pty::ExitStatus> {
        // Valid while `self.master` is alive, which outlives this call.
        let master = unsafe { BorrowedFd::borrow_raw(master_fd) };
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_open = true;

        loop {
            if winch.take() {
                resize(self.master.as_ref(), terminal_size());
            }

            if let Some(status) = self.child.try_wait()? {
                self.drain(master, &mut stdout)?;
                return Ok(status);
            }

            let mut fds = vec![PollFd::new(master, PollFlags::POLLIN)];
            if stdin_open {
                fds.push(PollFd::new(stdin.as_fd(), PollFlags::POLLIN));
            }

            match poll(&mut fds, PollTimeout::from(POLL_INTERVAL_MS)) {
                Ok(0) => continue,
                Ok(_) => {}
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(PipfError::Pty(format!("poll failed: {}", e))),
            }

            let master_ready = is_ready(fds[0].revents());
            let stdin_events = fds.get(1).and_then(|fd| fd.revents());
            drop(fds);

            if master_ready && !self.io.pump_output(&mut stdout)? {
                break;
            }

            if is_invalid(stdin_events) {
                tracing::debug!("stdin is not open; sending EOF to child");
                stdin_open = false;
                self.io.close_input();
            } else if is_ready(stdin_events) {
                let mut buf = [0u8; BUFFER_SIZE];
                match read_stdin(&mut buf) {
                    Ok(0) => {
                        tracing::debug!("stdin closed; sending EOF to child");
                        stdin_open = false;
                        self.io.close_input();
                    }
                    Ok(n) => self.io.send(&buf[..n])?,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }

        Ok(self.child.wait()?)
    }

    fn drain(&mut self, master: BorrowedFd<'_>, out: &mut impl Write) -> Result<()> {
        loop {
            let mut fds = [PollFd::new(master, PollFlags::POLLIN)];
            match poll(&mut fds, PollTimeout::from(0u8)) {
                Ok(n) if n > 0 && is_ready(fds[0].revents()) => {
                    if !self.io.pump_output(out)? {
                        return Ok(());
                    }
                }
                Err(Errno::EINTR) => continue,
                _ => return Ok(()),
            }
        }
    }
}

/// Byte plumbing between the terminal and the pty, without the file descriptors.
struct PtyIo {
    reader: Box<dyn Read + Send>,
    writer: Option<Box<dyn Write + Send>>,
}

impl PtyIo {
    fn new(reader: Box<dyn Read + Send>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            reader,
            writer: Some(writer),
        }
    }

    fn send(&mut self, data: &[u8]) -> io::Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.write_all(data)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Dropping the writer makes the child read end-of-file.
    fn close_input(&mut self) {
        self.writer = None;
    }

    /// Copy one chunk of child output to `out`. `false` once the child side is gone.
    fn pump_output(&mut self, out: &mut impl Write) -> io::Result<bool> {
        let mut buf = [0u8; BUFFER_SIZE];
        match self.reader.read(&mut buf) {
            Ok(0) => Ok(false),
            Ok(n) => {
                out.write_all(&buf[..n])?;
                out.flush()?;
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(true),
            // Linux reports EIO on the master once the slave side is closed.
            Err(e) => {
                tracing::debug!("pty read ended: {}", e);
                Ok(false)
            }
        }
    }
}

fn resize(master: &dyn MasterPty, size: PtySize) {
    tracing::debug!("resizing pty to {}x{}", size.rows, size.cols);
    if let Err(e) = master.resize(size) {
        tracing::warn!("Failed to resize PTY: {}", e);
    }
}

fn is_ready(revents: Option<PollFlags>) -> bool {
    revents.is_some_and(|r| r.intersects(PollFlags::POLLIN | PollFlags::POLLHUP | PollFlags::POLLERR))
}

/// A closed descriptor reports `POLLNVAL` on every poll and never becomes readable.
fn is_invalid(revents: Option<PollFlags>) -> bool {
    revents.is_some_and(|r| r.contains(PollFlags::POLLNVAL))
}

fn read_stdin(buf: &mut [u8]) -> io::Result<usize> {
    let n = unsafe { libc::read(libc::STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
    if n < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(n as usize)
    }
}
