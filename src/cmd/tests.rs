// gw-rs: Interactive Git Wrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use futures_util::future::BoxFuture;
use tempfile::TempDir;

use super::add::{chosen_files, file_label, stage_all, stage_paths};
use super::commit::identity_overrides;
use super::config::update_user_config;
use super::history::render_history;
use super::menu::{MenuAction, MenuHeader, menu_actions, parse_choice, render_menu, run_menu};
use super::push::{needs_confirmation, push_all_question, render_report, resolve_remotes};
use super::remote::{default_after_removal, render_remotes};
use super::repo::{
    clone_args, fetch_target, identity_config_args, run_clone_command, run_init_command,
};
use super::session::Session;
use super::status::{StatusSnapshot, render_status};
use super::ui::{Printer, Prompt, Tone, ask_value, confirm};
use super::view::{diff_args, log_args, show_args};
use crate::cli::config::HistoryArgs;
use crate::cli::push::PushArgs;
use crate::cli::repo::{CloneArgs, FetchArgs, InitArgs};
use crate::cli::view::{DiffArgs, LogArgs, ShowArgs};
use crate::config::Config;
use crate::config::types::UserConfig;
use crate::core::runner::{CommandOutcome, CommandRequest, CommandRunner};
use crate::error::ExecutionFault;
use crate::git::query::{AheadBehind, ChangedFile};
use crate::git::remote::{RemoteRegistry, RemoteTarget};
use crate::history::{History, HistoryEntry};
use crate::push::{JobStatus, PushEntry, PushReport};
use crate::select::{BoundaryPolicy, SelectorEvent, Selector};

/// Runner that answers every request with exit code 0 and records it.
#[derive(Default)]
struct RecordingRunner {
    requests: Mutex<Vec<CommandRequest>>,
}

impl CommandRunner for RecordingRunner {
    fn run<'a>(
        &'a self,
        request: &'a CommandRequest,
    ) -> BoxFuture<'a, Result<CommandOutcome, ExecutionFault>> {
        Box::pin(async move {
            self.requests
                .lock()
                .expect("lock")
                .push(request.clone());
            Ok(CommandOutcome::new(0, "", ""))
        })
    }
}

impl RecordingRunner {
    fn requests(&self) -> Vec<Vec<String>> {
        self.recorded()
            .iter()
            .map(|request| request.args().to_vec())
            .collect()
    }

    fn recorded(&self) -> Vec<CommandRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

/// Prompt answering from a script; `None` once the script runs out.
#[derive(Default)]
struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> crate::error::Result<Option<String>> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}

fn recording_session(dir: &TempDir) -> (Session, Arc<RecordingRunner>) {
    let workdir = dir.path().join("work");
    std::fs::create_dir_all(&workdir).expect("workdir");
    let runner = Arc::new(RecordingRunner::default());
    let session = Session::with_runner(
        &dir.path().join("config.toml"),
        &workdir,
        Arc::clone(&runner) as Arc<dyn CommandRunner>,
    )
    .expect("session");
    (session, runner)
}

fn registry(names: &[&str]) -> RemoteRegistry {
    RemoteRegistry::from_targets(
        names
            .iter()
            .map(|n| RemoteTarget::new(*n, format!("git@example.com:{n}/repo.git"))),
    )
    .expect("valid registry")
}

fn changed(status: &str, path: &str) -> ChangedFile {
    ChangedFile {
        status: status.to_string(),
        path: path.to_string(),
    }
}

fn session_in(dir: &TempDir) -> Session {
    let workdir = dir.path().join("work");
    std::fs::create_dir_all(&workdir).expect("workdir");
    Session::with_runner(
        &dir.path().join("config.toml"),
        &workdir,
        Arc::new(RecordingRunner::default()),
    )
    .expect("session")
}

// --- ui ---

#[test]
fn test_plain_printer_has_no_decoration() {
    let printer = Printer::plain();
    assert_eq!(printer.format(Tone::Success, "done"), "done");
    assert_eq!(printer.icon("🌿 "), "");
    assert_eq!(
        printer.heading("📊 ", "Repository Status", 5),
        ["Repository Status".to_string(), "=====".to_string()]
    );
}

#[test]
fn test_emoji_printer_prefixes_tone_icon() {
    let printer = Printer::new(true, false);
    assert_eq!(printer.format(Tone::Success, "done"), "✅ done");
    assert_eq!(printer.format(Tone::Working, "pushing"), "🔄 pushing");
    assert_eq!(printer.icon("🌿 "), "🌿 ");
}

#[test]
fn test_confirm_answers() {
    let mut prompt = ScriptedPrompt::new(&["", "YES", "n", "maybe"]);
    assert!(confirm(&mut prompt, "Continue?", true).expect("answer"));
    assert!(confirm(&mut prompt, "Continue?", false).expect("answer"));
    assert!(!confirm(&mut prompt, "Continue?", true).expect("answer"));
    assert!(!confirm(&mut prompt, "Continue?", true).expect("answer"));
    // input ended
    assert!(!confirm(&mut prompt, "Continue?", true).expect("answer"));
    assert_eq!(prompt.asked[0], "Continue? [Y/n]");
    assert_eq!(prompt.asked[1], "Continue? [y/N]");
}

#[test]
fn test_ask_value_uses_default_for_empty_answer() {
    let mut prompt = ScriptedPrompt::new(&["  ", "", " dev "]);
    assert_eq!(
        ask_value(&mut prompt, "Branch", Some("main")).expect("answer"),
        Some("main".to_string())
    );
    assert_eq!(ask_value(&mut prompt, "Message", None).expect("answer"), None);
    assert_eq!(
        ask_value(&mut prompt, "Branch", Some("main")).expect("answer"),
        Some("dev".to_string())
    );
    assert_eq!(ask_value(&mut prompt, "Branch", None).expect("answer"), None);
    assert_eq!(prompt.asked[..2], ["Branch [main]:", "Message:"]);
}

// --- status ---

#[test]
fn test_render_status_clean_tree_without_upstream() {
    let snapshot = StatusSnapshot {
        branch: Some("main".to_string()),
        ..StatusSnapshot::default()
    };
    let lines = render_status(&snapshot, Printer::plain());
    insta::assert_snapshot!(lines.join("\n"), @r"
    Repository Status
    ==============================
    Current branch: main
       no upstream branch

    Working tree clean
    ");
}

#[test]
fn test_render_status_with_changes_and_divergence() {
    let snapshot = StatusSnapshot {
        branch: Some("feature".to_string()),
        upstream: Some(AheadBehind {
            ahead: 2,
            behind: 1,
        }),
        changes: vec![changed(" M", "src/lib.rs"), changed("??", "notes.txt")],
        has_stash: true,
        recent_commits: vec!["abc1234 Add parser".to_string()],
    };
    let lines = render_status(&snapshot, Printer::plain());
    insta::assert_snapshot!(lines.join("\n"), @r"
    Repository Status
    ==============================
    Current branch: feature
       ↑ 2 commits ahead
       ↓ 1 commits behind

    Changes (2):
        M src/lib.rs
       ?? notes.txt

    Stashed changes present

    Recent commits:
       abc1234 Add parser
    ");
}

#[test]
fn test_render_status_detached_and_in_sync() {
    let snapshot = StatusSnapshot {
        upstream: Some(AheadBehind::default()),
        ..StatusSnapshot::default()
    };
    let lines = render_status(&snapshot, Printer::plain());
    assert_eq!(lines[2], "HEAD is detached");
    assert_eq!(lines[3], "   up to date with upstream");
}

// --- add ---

#[test]
fn test_file_label_is_status_then_path() {
    assert_eq!(file_label(&changed("M ", "a.rs")), "M  a.rs");
}

#[tokio::test]
async fn test_staging_passes_paths_after_separator() {
    let dir = TempDir::new().expect("tempdir");
    let runner = Arc::new(RecordingRunner::default());
    let session = Session::with_runner(
        &dir.path().join("config.toml"),
        dir.path(),
        Arc::clone(&runner) as Arc<dyn CommandRunner>,
    )
    .expect("session");

    stage_paths(&session, &["-odd.txt", "b.rs"]).await.expect("staged");
    stage_all(&session).await.expect("staged all");

    assert_eq!(
        runner.requests(),
        vec![
            vec!["add", "--", "-odd.txt", "b.rs"],
            vec!["add", "-A"],
        ]
    );
}

#[test]
fn test_chosen_files_follow_selection() {
    let files = vec![changed(" M", "a.rs"), changed("??", "b.rs"), changed(" D", "c.rs")];
    let mut selector =
        Selector::new(files.iter().map(file_label), BoundaryPolicy::Clamp).with_preselect_all(true);
    selector.apply(SelectorEvent::MoveDown);
    selector.apply(SelectorEvent::Toggle);
    selector.apply(SelectorEvent::Confirm);

    let outcome = selector.into_outcome();
    assert_eq!(chosen_files(&files, &outcome), vec!["a.rs", "c.rs"]);
}

#[test]
fn test_chosen_files_empty_when_cancelled() {
    let files = vec![changed(" M", "a.rs")];
    let mut selector =
        Selector::new(files.iter().map(file_label), BoundaryPolicy::Clamp).with_preselect_all(true);
    selector.apply(SelectorEvent::Cancel);

    assert!(chosen_files(&files, &selector.into_outcome()).is_empty());
}

// --- push ---

#[test]
fn test_resolve_remotes_prefers_explicit_names() {
    let registry = registry(&["origin", "backup"]);
    let args = PushArgs {
        remotes: vec!["backup".to_string()],
        ..PushArgs::default()
    };
    assert_eq!(resolve_remotes(&args, &registry, "origin"), vec!["backup"]);
}

#[test]
fn test_resolve_remotes_all_remotes_in_registry_order() {
    let registry = registry(&["origin", "backup", "mirror"]);
    let args = PushArgs {
        all_remotes: true,
        ..PushArgs::default()
    };
    assert_eq!(
        resolve_remotes(&args, &registry, "origin"),
        vec!["origin", "backup", "mirror"]
    );
}

#[test]
fn test_resolve_remotes_falls_back_to_first_registered() {
    let registry = registry(&["upstream", "backup"]);
    assert_eq!(
        resolve_remotes(&PushArgs::default(), &registry, "origin"),
        vec!["upstream"]
    );
    assert_eq!(
        resolve_remotes(&PushArgs::default(), &registry, "backup"),
        vec!["backup"]
    );
    assert!(resolve_remotes(&PushArgs::default(), &RemoteRegistry::new(), "origin").is_empty());
}

#[test]
fn test_push_to_all_remotes_needs_confirmation() {
    let all = PushArgs {
        all_remotes: true,
        ..PushArgs::default()
    };
    assert!(needs_confirmation(&all));
    assert!(!needs_confirmation(&PushArgs { yes: true, ..all.clone() }));
    assert!(!needs_confirmation(&PushArgs {
        dry_run: true,
        ..all.clone()
    }));
    assert!(!needs_confirmation(&PushArgs::default()));
    assert_eq!(push_all_question("main", 3), "Push main to ALL 3 remotes?");
}

#[test]
fn test_render_report_mixed_results() {
    let report = PushReport::new(vec![
        PushEntry::new("origin", JobStatus::Completed(CommandOutcome::new(0, "", ""))),
        PushEntry::new(
            "backup",
            JobStatus::Completed(CommandOutcome::new(
                1,
                "",
                "! [rejected] main -> main (fetch first)\n",
            )),
        ),
        PushEntry::new("mirror", JobStatus::Cancelled),
    ]);
    let lines = render_report(&report, Printer::plain());
    insta::assert_snapshot!(lines.join("\n"), @r"
    ✓ Pushed to origin
    ✗ Failed to push to backup (rejected): ! [rejected] main -> main (fetch first)
    - Skipped mirror (cancelled)

    Summary: 1/3 remotes successful
    Failed remotes: backup, mirror
    ");
}

#[test]
fn test_render_report_timeout_detail() {
    let outcome = CommandOutcome::new(-1, "", "")
        .with_timed_out(true)
        .with_duration(Duration::from_secs(30));
    let report = PushReport::new(vec![PushEntry::new("slow", JobStatus::TimedOut(outcome))]);
    let lines = render_report(&report, Printer::plain());
    assert_eq!(lines[0], "✗ Failed to push to slow (timed out): killed after 30.0s");
}

#[test]
fn test_render_report_dry_run_lists_commands() {
    let report = PushReport::new(vec![
        PushEntry::new(
            "origin",
            JobStatus::Planned {
                command_line: "git push origin main".to_string(),
            },
        ),
        PushEntry::new(
            "backup",
            JobStatus::Planned {
                command_line: "git push backup main".to_string(),
            },
        ),
    ]);
    let lines = render_report(&report, Printer::plain());
    insta::assert_snapshot!(lines.join("\n"), @r"
    Dry run, nothing was pushed. Would run:
      git push origin main
      git push backup main
    ");
}

// --- remote ---

#[test]
fn test_render_remotes_marks_default() {
    let lines = render_remotes(&registry(&["origin", "backup"]), "backup", Printer::plain());
    insta::assert_snapshot!(lines.join("\n"), @r"
    Remotes:
      origin: git@example.com:origin/repo.git
      backup: git@example.com:backup/repo.git (default)
    ");
}

#[test]
fn test_render_remotes_empty() {
    let lines = render_remotes(&RemoteRegistry::new(), "origin", Printer::plain());
    assert_eq!(lines, vec!["No remotes configured"]);
}

#[test]
fn test_default_after_removal() {
    let remotes = registry(&["origin", "backup"]);
    assert_eq!(default_after_removal(&remotes, "backup", "origin"), "origin");
    assert_eq!(default_after_removal(&remotes, "origin", "origin"), "backup");
    assert_eq!(
        default_after_removal(&registry(&["backup"]), "backup", "backup"),
        "origin"
    );
}

// --- commit ---

#[test]
fn test_identity_overrides_only_for_set_fields() {
    assert!(identity_overrides(&UserConfig::default()).is_empty());

    let user = UserConfig {
        name: "Ada Lovelace".to_string(),
        email: String::new(),
    };
    assert_eq!(identity_overrides(&user), vec!["-c", "user.name=Ada Lovelace"]);
}

// --- history ---

#[test]
fn test_render_history_empty() {
    let args = HistoryArgs {
        search: None,
        limit: 20,
    };
    assert_eq!(
        render_history(&History::new(20), &args),
        vec!["No command history available"]
    );

    let args = HistoryArgs {
        search: Some("push".to_string()),
        limit: 20,
    };
    assert_eq!(
        render_history(&History::new(20), &args),
        vec!["No history entries matching 'push'"]
    );
}

#[test]
fn test_render_history_newest_first_with_limit() {
    let mut history = History::new(20);
    let now = Utc::now();
    history.push(HistoryEntry::new("add", "Added all files", now));
    history.push(HistoryEntry::new("commit", "Committed: fix", now));
    history.push(HistoryEntry::new("push", "Pushed main to origin", now));

    let args = HistoryArgs {
        search: None,
        limit: 2,
    };
    let lines = render_history(&history, &args);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("  1. ["));
    assert!(lines[0].ends_with("push: Pushed main to origin"));
    assert!(lines[1].ends_with("commit: Committed: fix"));

    let args = HistoryArgs {
        search: Some("COMMIT".to_string()),
        limit: 20,
    };
    let lines = render_history(&history, &args);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("commit: Committed: fix"));
}

// --- session / config ---

#[test]
fn test_session_records_history_next_to_config() {
    let dir = TempDir::new().expect("tempdir");
    let mut session = session_in(&dir);
    assert!(session.history().is_empty());

    session.record("push", "Pushed main to origin");

    let saved = History::load(&dir.path().join("history.json"), 20);
    assert_eq!(saved.len(), 1);
    assert_eq!(saved.entries()[0].command(), "push");
}

#[test]
fn test_update_user_config_persists_and_refreshes_session() {
    let dir = TempDir::new().expect("tempdir");
    let mut session = session_in(&dir);
    assert!(session.config().push.parallel);

    let enabled =
        update_user_config(&mut session, |config| config.toggle_key("push.parallel")).expect("toggle");
    assert!(!enabled);
    assert!(!session.config().push.parallel);

    let saved = Config::load_file(dir.path().join("config.toml")).expect("saved");
    assert!(!saved.push.parallel);
}

#[test]
fn test_update_user_config_rejects_unknown_key_without_writing() {
    let dir = TempDir::new().expect("tempdir");
    let mut session = session_in(&dir);

    let result = update_user_config(&mut session, |config| config.set_key("push.colour", "red"));
    assert!(result.is_err());
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_ensure_repo_fails_outside_git() {
    let dir = TempDir::new().expect("tempdir");
    let session = session_in(&dir);
    let err = session.ensure_repo().expect_err("not a repository");
    assert!(err.to_string().contains("not a git repository"));
}

// --- view ---

#[test]
fn test_view_args() {
    assert_eq!(diff_args(&DiffArgs::default()), ["diff"]);
    assert_eq!(diff_args(&DiffArgs { staged: true }), ["diff", "--cached"]);
    assert_eq!(show_args(&ShowArgs::default()), ["show", "HEAD"]);

    assert_eq!(log_args(&LogArgs::default()), ["log", "--oneline", "-10"]);
    let graph = LogArgs {
        graph: true,
        count: 30,
        ..LogArgs::default()
    };
    assert_eq!(log_args(&graph), ["log", "--oneline", "--graph", "--all", "-30"]);
    let full = LogArgs {
        full: true,
        count: 0,
        ..LogArgs::default()
    };
    assert_eq!(log_args(&full), ["log", "-1"]);
}

// --- repo ---

#[test]
fn test_identity_config_args_skip_empty_fields() {
    assert!(identity_config_args("", "").is_empty());
    assert_eq!(
        identity_config_args("", "ada@example.com"),
        vec![["config", "user.email", "ada@example.com"].map(String::from)]
    );
}

#[test]
fn test_clone_args_with_and_without_directory() {
    let mut args = CloneArgs {
        url: "https://example.com/repo.git".to_string(),
        directory: None,
    };
    assert_eq!(clone_args(&args), ["clone", "https://example.com/repo.git"]);
    args.directory = Some("checkout".to_string());
    assert_eq!(
        clone_args(&args),
        ["clone", "https://example.com/repo.git", "checkout"]
    );
}

#[test]
fn test_fetch_target_resolution() {
    let remotes = registry(&["upstream", "origin"]);
    let named = FetchArgs {
        remote: Some("upstream".to_string()),
        all: false,
    };
    assert_eq!(
        fetch_target(&named, &remotes, "origin").expect("known"),
        Some("upstream".to_string())
    );
    assert_eq!(
        fetch_target(&FetchArgs::default(), &remotes, "origin").expect("default"),
        Some("origin".to_string())
    );
    assert_eq!(
        fetch_target(&FetchArgs::default(), &remotes, "missing").expect("first"),
        Some("upstream".to_string())
    );
    let all = FetchArgs {
        remote: None,
        all: true,
    };
    assert_eq!(fetch_target(&all, &remotes, "origin").expect("all"), None);

    let unknown = FetchArgs {
        remote: Some("nowhere".to_string()),
        all: false,
    };
    let err = fetch_target(&unknown, &remotes, "origin").expect_err("unknown");
    assert!(err.to_string().contains("unknown remote: nowhere"));
    let err = fetch_target(&FetchArgs::default(), &RemoteRegistry::new(), "origin")
        .expect_err("no remotes");
    assert!(err.to_string().contains("no remotes configured"));
}

#[tokio::test]
async fn test_init_adds_remote_and_makes_it_the_default() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, runner) = recording_session(&dir);
    let args = InitArgs {
        directory: Some("project".into()),
        remote: Some("https://example.com/project.git".to_string()),
    };

    run_init_command(&args, &mut session).await.expect("init");

    let target = dir.path().join("work").join("project");
    let recorded = runner.recorded();
    assert_eq!(recorded.len(), 2);
    assert_eq!(
        recorded[0].args(),
        ["init".to_string(), target.display().to_string()]
    );
    assert_eq!(
        recorded[1].args(),
        ["remote", "add", "origin", "https://example.com/project.git"]
    );
    assert_eq!(recorded[1].cwd(), Some(target.as_path()));
    assert_eq!(session.config().defaults.remote, "origin");
    assert_eq!(session.history().entries()[0].command(), "init");
}

#[tokio::test]
async fn test_init_rejects_bad_remote_before_running_git() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, runner) = recording_session(&dir);
    let args = InitArgs {
        directory: None,
        remote: Some("not-a-url".to_string()),
    };

    assert!(run_init_command(&args, &mut session).await.is_err());
    assert!(runner.recorded().is_empty());
}

#[tokio::test]
async fn test_clone_rejects_bad_url_and_attaches_terminal_otherwise() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, runner) = recording_session(&dir);

    let bad = CloneArgs {
        url: "ftp://example.com/repo.git".to_string(),
        directory: None,
    };
    let err = run_clone_command(&bad, &mut session).await.expect_err("invalid url");
    assert!(err.to_string().contains("ftp://example.com/repo.git"));
    assert!(runner.recorded().is_empty());

    let good = CloneArgs {
        url: "git@example.com:team/repo.git".to_string(),
        directory: None,
    };
    run_clone_command(&good, &mut session).await.expect("clone");
    let recorded = runner.recorded();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].is_interactive());
    assert_eq!(recorded[0].args(), ["clone", "git@example.com:team/repo.git"]);
}

// --- menu ---

#[test]
fn test_menu_actions_depend_on_repository() {
    assert_eq!(
        menu_actions(false),
        [
            MenuAction::Init,
            MenuAction::Clone,
            MenuAction::Configuration,
            MenuAction::Help,
            MenuAction::Exit,
        ]
    );
    let in_repo = menu_actions(true);
    assert_eq!(in_repo.len(), 14);
    assert_eq!(in_repo.first(), Some(&MenuAction::Status));
    assert!(in_repo.contains(&MenuAction::PushAll));
    assert!(!in_repo.contains(&MenuAction::Init));
    assert_eq!(in_repo.last(), Some(&MenuAction::Exit));
}

#[test]
fn test_parse_choice_bounds() {
    assert_eq!(parse_choice("1", 5), Some(0));
    assert_eq!(parse_choice(" 5 ", 5), Some(4));
    assert_eq!(parse_choice("0", 5), None);
    assert_eq!(parse_choice("6", 5), None);
    assert_eq!(parse_choice("two", 5), None);
    assert_eq!(parse_choice("", 5), None);
}

#[test]
fn test_render_menu_outside_repository() {
    let header = MenuHeader {
        directory: "scratch".to_string(),
        ..MenuHeader::default()
    };
    let lines = render_menu(&header, &menu_actions(false), Printer::plain());
    insta::assert_snapshot!(lines.join("\n"), @r"
    ==================================================
    Interactive Git Wrapper
    ==================================================
    Directory: scratch
    Status: Not a Git Repository
    ==================================================
      1. Initialize Repository
      2. Clone Repository
      3. Configuration
      4. Help
      5. Exit
    ");
}

#[test]
fn test_render_menu_repository_header() {
    let header = MenuHeader {
        directory: "gw".to_string(),
        in_repo: true,
        branch: Some("main".to_string()),
        upstream: Some(AheadBehind {
            ahead: 1,
            behind: 2,
        }),
        changes: 3,
        has_stash: true,
    };
    let lines = render_menu(&header, &[MenuAction::Status, MenuAction::Exit], Printer::plain());
    insta::assert_snapshot!(lines.join("\n"), @r"
    ==================================================
    Interactive Git Wrapper
    ==================================================
    Directory: gw
    Status: Git Repository
    ==================================================
    Current Branch: main
       ↑ 1 ahead, ↓ 2 behind
    Uncommitted Changes: 3 files
    Stashed changes present
    --------------------------------------------------
      1. Show Status
      2. Exit
    ");
}

#[tokio::test]
async fn test_run_menu_retries_invalid_choice_and_exits() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, runner) = recording_session(&dir);
    let mut prompt = ScriptedPrompt::new(&["9", "3", "", "5"]);

    run_menu(&mut session, &mut prompt).await.expect("menu");

    assert_eq!(
        prompt.asked,
        [
            "\nEnter your choice (1-5):",
            "\nEnter your choice (1-5):",
            "\nPress Enter to continue...",
            "\nEnter your choice (1-5):",
        ]
    );
    assert!(runner.recorded().is_empty());
}

#[tokio::test]
async fn test_run_menu_initializes_repository_and_stops_at_end_of_input() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, runner) = recording_session(&dir);
    let mut prompt = ScriptedPrompt::new(&["1", ""]);

    run_menu(&mut session, &mut prompt).await.expect("menu");

    assert_eq!(
        prompt.asked,
        [
            "\nEnter your choice (1-5):",
            "Remote URL (empty to skip):",
            "\nPress Enter to continue...",
        ]
    );
    let workdir = dir.path().join("work");
    assert_eq!(
        runner.requests(),
        vec![vec!["init".to_string(), workdir.display().to_string()]]
    );
    assert_eq!(session.history().entries()[0].command(), "init");
}

#[tokio::test]
async fn test_run_menu_reports_handler_errors_and_continues() {
    let dir = TempDir::new().expect("tempdir");
    let (mut session, runner) = recording_session(&dir);
    // Clone with an invalid URL fails, the menu keeps running
    let mut prompt = ScriptedPrompt::new(&["2", "not-a-url", "", "", "5"]);

    run_menu(&mut session, &mut prompt).await.expect("menu");

    assert_eq!(prompt.asked.last().map(String::as_str), Some("\nEnter your choice (1-5):"));
    assert!(runner.recorded().is_empty());
    assert!(session.history().is_empty());
}
