//! Interactive read-classify-print loop.

use std::future::Future;
use std::io::BufRead;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tweetsent_sentiment::{Classifier, Scorer};

use crate::report;

const PROMPT: &str = "Enter text (or 'quit'): ";
const FAREWELL: &str = "\n👋 Exiting...\n";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionEnd {
    Quit,
    EndOfInput,
    Interrupted,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineAction<'a> {
    Quit,
    Skip,
    Classify(&'a str),
}

/// Decide what to do with one input line. Surrounding whitespace is ignored.
pub(crate) fn parse_line(line: &str) -> LineAction<'_> {
    let text = line.trim();
    if text.to_lowercase() == "quit" {
        LineAction::Quit
    } else if text.is_empty() {
        LineAction::Skip
    } else {
        LineAction::Classify(text)
    }
}

/// Prompt, read and classify lines until `quit`, end of input, or `interrupt`
/// resolves.
///
/// # Errors
///
/// Returns an I/O error if writing to `output` fails.
pub(crate) async fn run_session<S, W, I>(
    classifier: &Classifier<S>,
    lines: &mut mpsc::Receiver<String>,
    output: &mut W,
    interrupt: I,
) -> std::io::Result<SessionEnd>
where
    S: Scorer,
    W: AsyncWrite + Unpin,
    I: Future<Output = ()>,
{
    tokio::pin!(interrupt);

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let line = tokio::select! {
            () = &mut interrupt => {
                output.write_all(FAREWELL.as_bytes()).await?;
                output.flush().await?;
                return Ok(SessionEnd::Interrupted);
            }
            line = lines.recv() => line,
        };

        let Some(line) = line else {
            output.write_all(b"\n").await?;
            output.flush().await?;
            return Ok(SessionEnd::EndOfInput);
        };

        match parse_line(&line) {
            LineAction::Quit => return Ok(SessionEnd::Quit),
            LineAction::Skip => {}
            LineAction::Classify(text) => {
                let result = classifier.classify(Some(text));
                let rendered = format!("{}\n\n", report::format_result(&result));
                output.write_all(rendered.as_bytes()).await?;
            }
        }
    }
}

/// Forward stdin lines over a channel from a dedicated thread.
///
/// A plain thread rather than `tokio::io::stdin` so a read still blocked at
/// exit does not hold up runtime shutdown.
pub(crate) fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read stdin");
                    break;
                }
            }
        }
    });
    rx
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
pub(crate) async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "unable to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// Print the stage banner, then run a session on `output`.
///
/// # Errors
///
/// Returns an I/O error if writing to `output` fails.
pub(crate) async fn run_interactive_stage<S, W, I>(
    classifier: &Classifier<S>,
    lines: &mut mpsc::Receiver<String>,
    output: &mut W,
    interrupt: I,
) -> std::io::Result<SessionEnd>
where
    S: Scorer,
    W: AsyncWrite + Unpin,
    I: Future<Output = ()>,
{
    let heading = format!("{}\n", report::banner("✏️  CUSTOM TEXT ANALYSIS", 30));
    output.write_all(heading.as_bytes()).await?;
    let end = run_session(classifier, lines, output, interrupt).await?;
    tracing::debug!(?end, "interactive session finished");
    Ok(end)
}

/// Run the interactive stage on stdin/stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub(crate) async fn run_interactive<S: Scorer>(classifier: &Classifier<S>) -> anyhow::Result<()> {
    let mut lines = spawn_stdin_reader();
    let mut stdout = tokio::io::stdout();
    run_interactive_stage(classifier, &mut lines, &mut stdout, ctrl_c()).await?;
    Ok(())
}
