use jarvis_config::JarvisConfig;
use jarvis_core::entities::Task;
use jarvis_core::enums::TaskStatus;

use crate::bootstrap::App;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::TasksArgs;
use crate::commands::refresh::sync_or_warn;
use crate::commands::shared::limit::{as_len, effective_limit};
use crate::commands::shared::notify::notice;
use crate::commands::shared::parse::parse_status;
use crate::output::output_rows;

/// Handle `jarvis tasks`.
pub async fn handle(
    args: &TasksArgs,
    app: &mut App,
    config: &JarvisConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = args.status.as_deref().map(parse_status).transpose()?;
    let limit = effective_limit(args.limit, flags.limit, config.general.default_limit);

    if args.refresh {
        sync_or_warn(app, flags).await;
    }

    let (shown, hidden) = select(app.task_view(), status, limit);
    output_rows(&shown, flags.format)?;
    if hidden > 0 {
        notice(flags, &format!("({hidden} more tasks)"));
    }
    Ok(())
}

/// Filter the display-ordered view by status and cut it to `limit`.
/// Returns the kept rows and how many matching rows were cut.
fn select(view: Vec<&Task>, status: Option<TaskStatus>, limit: u32) -> (Vec<&Task>, usize) {
    let mut matching: Vec<&Task> = view
        .into_iter()
        .filter(|task| status.is_none_or(|status| task.status == status))
        .collect();
    let hidden = matching.len().saturating_sub(as_len(limit));
    matching.truncate(as_len(limit));
    (matching, hidden)
}

#[cfg(test)]
mod tests {
    use jarvis_core::enums::Priority;
    use pretty_assertions::assert_eq;

    use super::*;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.into(),
            text: id.into(),
            parsed_command: String::new(),
            status,
            created_at: "2024-01-01T00:00:00.000Z".into(),
            due_date: None,
            priority: Priority::Medium,
            reminder_sent: false,
        }
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|task| task.id.clone()).collect()
    }

    #[test]
    fn status_filter_keeps_view_order() {
        let all = [
            task("a", TaskStatus::Pending),
            task("b", TaskStatus::Done),
            task("c", TaskStatus::Pending),
        ];
        let (shown, hidden) = select(all.iter().collect(), Some(TaskStatus::Pending), 20);
        assert_eq!(ids(&shown), vec!["a", "c"]);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn limit_reports_hidden_rows() {
        let all = [
            task("a", TaskStatus::Pending),
            task("b", TaskStatus::InProgress),
            task("c", TaskStatus::Done),
        ];
        let (shown, hidden) = select(all.iter().collect(), None, 2);
        assert_eq!(ids(&shown), vec!["a", "b"]);
        assert_eq!(hidden, 1);
    }
}
