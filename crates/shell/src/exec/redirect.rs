// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! I/O channels and redirection handling.
//!
//! The evaluator threads a pair of channels (where the current command
//! reads from and writes to) through the tree walk. A channel is either
//! inherited from the shell, an owned redirection file, or one end of a
//! pipeline pipe. Owned descriptors close when the channel drops; child
//! processes receive duplicates, so one channel can feed every command of a
//! sequential list.

use std::fs::{File, OpenOptions};
use std::io::{self, PipeReader, PipeWriter, Write};
use std::path::Path;
use std::process::Stdio;

use crate::ast::{RedirectKind, Redirection};
use crate::SHELL_NAME;

/// Where a command reads standard input from.
#[derive(Debug)]
pub(crate) enum Input {
    /// The shell's own standard input.
    Inherit,
    /// An opened `< file` redirection target.
    File(File),
    /// The read end of a pipeline pipe.
    Pipe(PipeReader),
}

impl Input {
    /// Duplicate the channel as a `Stdio` for a child process, leaving the
    /// channel itself open for later commands.
    pub(crate) fn to_stdio(&self) -> io::Result<Stdio> {
        match self {
            Input::Inherit => Ok(Stdio::inherit()),
            Input::File(file) => Ok(file.try_clone()?.into()),
            Input::Pipe(reader) => Ok(reader.try_clone()?.into()),
        }
    }

    /// Hand the channel itself to a child process.
    pub(crate) fn into_stdio(self) -> Stdio {
        match self {
            Input::Inherit => Stdio::inherit(),
            Input::File(file) => file.into(),
            Input::Pipe(reader) => reader.into(),
        }
    }
}

/// Where a command writes standard output to.
#[derive(Debug)]
pub(crate) enum Output {
    /// The shell's own standard output.
    Inherit,
    /// An opened `>`/`>>` redirection target.
    File(File),
    /// The write end of a pipeline pipe.
    Pipe(PipeWriter),
}

impl Output {
    /// Duplicate the channel as a `Stdio` for a child process.
    pub(crate) fn to_stdio(&self) -> io::Result<Stdio> {
        match self {
            Output::Inherit => Ok(Stdio::inherit()),
            Output::File(file) => Ok(file.try_clone()?.into()),
            Output::Pipe(writer) => Ok(writer.try_clone()?.into()),
        }
    }

    /// Hand the channel itself to a child process.
    pub(crate) fn into_stdio(self) -> Stdio {
        match self {
            Output::Inherit => Stdio::inherit(),
            Output::File(file) => file.into(),
            Output::Pipe(writer) => writer.into(),
        }
    }

    /// Write a builtin's output through the channel.
    ///
    /// Pipe writes move to the blocking pool so a full pipe cannot stall the
    /// evaluator while the reading half of the pipeline is still being set
    /// up on the same task.
    pub(crate) async fn write_all(&mut self, data: Vec<u8>) -> io::Result<()> {
        match std::mem::replace(self, Output::Inherit) {
            Output::Inherit => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&data)?;
                stdout.flush()
            }
            Output::File(mut file) => {
                let result = file.write_all(&data);
                *self = Output::File(file);
                result
            }
            Output::Pipe(mut writer) => {
                let (result, writer) = tokio::task::spawn_blocking(move || {
                    let result = writer.write_all(&data);
                    (result, writer)
                })
                .await
                .map_err(io::Error::other)?;
                *self = Output::Pipe(writer);
                result
            }
        }
    }
}

/// The I/O context of the command currently being evaluated.
///
/// Borrows the channels rather than owning them: a sequential list hands
/// the same channels to each of its commands in turn, while a pipeline
/// substitutes pipe ends for one side at a time.
pub(crate) struct Io<'io> {
    pub input: &'io mut Input,
    pub output: &'io mut Output,
}

impl Io<'_> {
    /// Reborrow the context for a child evaluation.
    pub(crate) fn reborrow(&mut self) -> Io<'_> {
        Io {
            input: &mut *self.input,
            output: &mut *self.output,
        }
    }
}

/// Apply one redirection to a command's local channel overrides.
///
/// A later redirection on the same side replaces (and thereby closes) the
/// earlier one, so `cmd > f > g` truncates `f` but writes to `g`. An open
/// failure is reported and leaves that side at its default; evaluation of
/// the command proceeds.
pub(crate) fn apply(
    redirection: &Redirection,
    cwd: &Path,
    input: &mut Option<Input>,
    output: &mut Option<Output>,
) {
    let target = redirection.target.unquoted();
    // Joining an absolute target yields the target itself.
    let path = cwd.join(&target);

    match redirection.kind {
        RedirectKind::Input => {
            *input = None;
            match File::open(&path) {
                Ok(file) => *input = Some(Input::File(file)),
                Err(err) => eprintln!("{target}: {err}"),
            }
        }
        RedirectKind::Output => {
            *output = None;
            let opened = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&path);
            match opened {
                Ok(file) => *output = Some(Output::File(file)),
                Err(err) => eprintln!("{target}: {err}"),
            }
        }
        RedirectKind::Append => {
            *output = None;
            let opened = OpenOptions::new().create(true).append(true).open(&path);
            match opened {
                Ok(file) => *output = Some(Output::File(file)),
                Err(err) => eprintln!("{target}: {err}"),
            }
        }
        RedirectKind::HereDoc => {
            eprintln!("{SHELL_NAME}: here-document redirection is not supported");
        }
    }
}
