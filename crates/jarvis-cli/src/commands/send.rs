use crate::assistant::SendOutcome;
use crate::bootstrap::App;
use crate::cli::root_commands::SendArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{output_record, output_rows};

/// Handle `jarvis send`.
pub async fn handle(args: &SendArgs, app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = args.text();
    if text.trim().is_empty() {
        anyhow::bail!("nothing to send: the message is blank");
    }

    let outcome = app.send_message(text.trim()).await;
    match (&outcome, flags.format) {
        (SendOutcome::Rejected { reason }, _) => anyhow::bail!("{reason}"),
        (SendOutcome::Created { task, reply }, OutputFormat::Table) => {
            println!("{reply}");
            output_rows(&[task], flags.format)
        }
        (SendOutcome::Created { .. }, _) => output_record(&outcome, flags.format),
    }
}
