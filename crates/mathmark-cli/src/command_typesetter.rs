use std::io::{self, ErrorKind, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

use mathmark_config::TypesetterConfig;
use mathmark_engine::{Artifact, TypesetError, TypesetRequest, Typesetter};

/// Typesets by running an external program once per equation.
///
/// The TeX goes to the program's stdin; its stdout is the artifact.
/// `display_args` are appended for display-mode equations.
pub struct CommandTypesetter {
    config: TypesetterConfig,
}

impl CommandTypesetter {
    pub fn new(config: TypesetterConfig) -> Self {
        Self { config }
    }
}

impl Typesetter for CommandTypesetter {
    fn typeset(&self, request: &TypesetRequest<'_>) -> Result<Artifact, TypesetError> {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.args);
        if request.display {
            cmd.args(&self.config.display_args);
        }

        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                TypesetError::Unavailable(format!("{}: {e}", self.config.program.display()))
            })?;

        // Stdin is fed from its own thread while this one drains stdout and
        // stderr; writing it all up front deadlocks once both pipes fill.
        // A program that exits without reading is judged by its exit status.
        let stdin = child.stdin.take();
        let tex = request.tex.as_bytes();
        let output = thread::scope(|scope| -> io::Result<Output> {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => match stdin.write_all(tex) {
                    Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e),
                    _ => Ok(()),
                },
                None => Ok(()),
            });
            let output = child.wait_with_output()?;
            writer
                .join()
                .map_err(|_| io::Error::other("stdin writer panicked"))??;
            Ok(output)
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TypesetError::Rejected(format!(
                "{} exited with {}: {}",
                self.config.program.display(),
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(TypesetError::Rejected(format!(
                "{} produced no output",
                self.config.program.display()
            )));
        }

        Ok(Artifact {
            media_type: self.config.media_type.clone(),
            bytes: output.stdout,
        })
    }
}
