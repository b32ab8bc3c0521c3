use std::ffi::CString;
use std::io;

use super::ProcessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    AppendAll,   // &>>
    TruncateAll, // &>
    Append,      // >>
    Truncate,    // >
    Input,       // <
}

// Longest operators first so `&>>` is never read as `&>`.
const OPERATORS: [(&str, Operator); 5] = [
    ("&>>", Operator::AppendAll),
    ("&>", Operator::TruncateAll),
    (">>", Operator::Append),
    (">", Operator::Truncate),
    ("<", Operator::Input),
];

/// Redirection requested by a single command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Redirection {
    pub input: Option<String>,
    pub output: Option<String>,
    pub append: bool,
    pub redirect_stderr: bool,
}

impl Redirection {
    /// Removes the first redirection clause from `args` and returns it.
    ///
    /// The operand is whatever follows the operator in the same token, or the
    /// next token when the operator stands alone. Only the clause itself is
    /// removed; later operators stay in `args` as ordinary arguments.
    pub fn extract(args: &mut Vec<String>) -> Self {
        for i in 0..args.len() {
            let Some((op, rest)) = split_operator(&args[i]) else {
                continue;
            };
            let rest = rest.to_owned();

            let path = if rest.is_empty() && i + 1 < args.len() {
                args.remove(i + 1)
            } else {
                rest
            };
            args.remove(i);

            let redirection = Self::from_operator(op, path);
            log::debug!("redirection: {:?}", redirection);
            return redirection;
        }
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none() && !self.redirect_stderr
    }

    fn from_operator(op: Operator, path: String) -> Self {
        match op {
            Operator::Input => Self {
                input: Some(path),
                ..Self::default()
            },
            Operator::Truncate | Operator::Append | Operator::TruncateAll | Operator::AppendAll => {
                Self {
                    input: None,
                    output: Some(path),
                    append: matches!(op, Operator::Append | Operator::AppendAll),
                    redirect_stderr: matches!(op, Operator::TruncateAll | Operator::AppendAll),
                }
            }
        }
    }
}

/// The redirection operator `token` starts with, if any.
pub fn operator_prefix(token: &str) -> Option<&'static str> {
    OPERATORS
        .iter()
        .find(|(prefix, _)| token.starts_with(prefix))
        .map(|(prefix, _)| *prefix)
}

fn split_operator(token: &str) -> Option<(Operator, &str)> {
    OPERATORS
        .iter()
        .find_map(|(prefix, op)| token.strip_prefix(prefix).map(|rest| (*op, rest)))
}

/// A [`Redirection`] with its paths converted ahead of time, so that applying
/// it after `fork` needs no allocation.
#[derive(Debug)]
pub(crate) struct RedirectPlan {
    input: Option<CString>,
    output: Option<CString>,
    append: bool,
    redirect_stderr: bool,
}

impl RedirectPlan {
    pub fn prepare(redirection: &Redirection) -> Result<Self, ProcessError> {
        Ok(Self {
            input: redirection.input.as_deref().map(to_cstring).transpose()?,
            output: redirection.output.as_deref().map(to_cstring).transpose()?,
            append: redirection.append,
            redirect_stderr: redirection.redirect_stderr,
        })
    }

    /// Rewires stdin/stdout/stderr of the current process. Runs in the child
    /// between fork and exec, so it only makes async-signal-safe calls.
    pub fn apply(&self) -> io::Result<()> {
        if let Some(path) = &self.input {
            let fd = cvt(unsafe { libc::open(path.as_ptr(), libc::O_RDONLY) })?;
            move_fd(fd, libc::STDIN_FILENO)?;
        }

        if let Some(path) = &self.output {
            let mode = if self.append {
                libc::O_APPEND
            } else {
                libc::O_TRUNC
            };
            let flags = libc::O_WRONLY | libc::O_CREAT | mode;
            let fd = cvt(unsafe { libc::open(path.as_ptr(), flags, 0o644 as libc::c_uint) })?;
            move_fd(fd, libc::STDOUT_FILENO)?;
        }

        if self.redirect_stderr {
            if self.output.is_some() {
                cvt(unsafe { libc::dup2(libc::STDOUT_FILENO, libc::STDERR_FILENO) })?;
            } else {
                let fd = cvt(unsafe { libc::open(c"/dev/null".as_ptr(), libc::O_WRONLY) })?;
                move_fd(fd, libc::STDERR_FILENO)?;
            }
        }

        Ok(())
    }
}

fn to_cstring(path: &str) -> Result<CString, ProcessError> {
    CString::new(path).map_err(|_| ProcessError::InvalidArgument(path.to_string()))
}

fn cvt(ret: libc::c_int) -> io::Result<libc::c_int> {
    if ret == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(ret)
    }
}

/// Duplicates `fd` onto `target` and closes the original on every path.
fn move_fd(fd: libc::c_int, target: libc::c_int) -> io::Result<()> {
    if fd == target {
        return Ok(());
    }
    let result = cvt(unsafe { libc::dup2(fd, target) });
    unsafe { libc::close(fd) };
    result.map(drop)
}
