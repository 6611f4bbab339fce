mod common;
use chrono::NaiveDate;
use common::{count_rows, memory_bot, memory_pool};
use staffbot::bot::{Dispatcher, Message};
use staffbot::config::Config;

fn say(bot: &mut Dispatcher, author: &str, text: &str) -> String {
    bot.handle(&Message::new(author, text))
        .unwrap_or_else(|| panic!("no reply for {text:?}"))
}

#[test]
fn test_non_commands_get_no_reply() {
    let mut bot = memory_bot();
    assert_eq!(bot.handle(&Message::new("alice", "good morning")), None);
}

#[test]
fn test_status_flow() {
    let mut bot = memory_bot();

    assert_eq!(say(&mut bot, "alice", "!status"), "⚠ No status found for alice.");

    assert_eq!(
        say(&mut bot, "alice", "!login"),
        "✅ @alice is now **logged in**."
    );
    assert_eq!(
        say(&mut bot, "alice", "!afk picking up kids"),
        "🚀 @alice is **AFK**: picking up kids"
    );
    assert_eq!(
        say(&mut bot, "bob", "!status @alice"),
        "🛠 **alice** is currently **AFK** (AFK Reason: picking up kids)"
    );

    say(&mut bot, "alice", "!logout");
    assert_eq!(
        say(&mut bot, "alice", "!status"),
        "🛠 **alice** is currently **Logged Out**"
    );
}

#[test]
fn test_attendance_flow() {
    let day = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let mut bot = memory_bot().with_date(day);

    assert_eq!(
        say(&mut bot, "alice", "!mark_attendance maybe"),
        "❌ Invalid status! Use `present` or `absent`."
    );
    assert_eq!(
        say(&mut bot, "alice", "!attendance_report"),
        "❌ No attendance records found for alice."
    );

    assert_eq!(
        say(&mut bot, "alice", "!mark_attendance PRESENT"),
        "✅ Attendance marked as **PRESENT** for @alice."
    );
    say(&mut bot, "alice", "!mark_attendance absent");

    let report = say(&mut bot, "bob", "!attendance_report @alice");
    assert_eq!(
        report,
        "📅 **Attendance Report for alice**\n\
         📍 2024-05-06 - Present\n\
         📍 2024-05-06 - Absent\n"
    );
    assert_eq!(count_rows(bot.pool_mut(), "attendance"), 2);
}

#[test]
fn test_task_scenario() {
    let mut bot = memory_bot();

    assert_eq!(
        say(&mut bot, "A", "!assign_task @B 2024-01-01 Write report"),
        "✅ Task 1 assigned to @B: Write report (Deadline: 2024-01-01)"
    );

    let listing = say(&mut bot, "B", "!my_tasks");
    assert!(listing.starts_with("**📝 Your Tasks:**\n"));
    assert!(
        listing.contains("🔹 Task ID: 1 | Write report | ⏰ 2024-01-01 | Status: ⏳ Pending")
    );

    assert_eq!(
        say(&mut bot, "B", "!mark_done 1"),
        "✅ Task 1 marked as completed. Awaiting admin approval."
    );
    assert!(say(&mut bot, "B", "!my_tasks").contains("Status: ⏳ Pending"));

    assert_eq!(say(&mut bot, "A", "!approve_task 1"), "✅ Task 1 approved by @A!");
    assert!(say(&mut bot, "B", "!my_tasks").contains("Status: ✅ Completed"));

    assert_eq!(say(&mut bot, "A", "!my_tasks"), "🎉 You have no pending tasks!");
}

#[test]
fn test_unknown_task_reply() {
    let mut bot = memory_bot();
    assert_eq!(say(&mut bot, "B", "!mark_done 99"), "❌ Task 99 not found.");
    assert_eq!(say(&mut bot, "A", "!approve_task 99"), "❌ Task 99 not found.");
}

#[test]
fn test_approvers_from_config() {
    let mut cfg = Config::with_database(":memory:".to_string());
    cfg.approvers = vec!["lead".to_string()];
    let mut bot = Dispatcher::new(memory_pool(), &cfg);

    say(&mut bot, "lead", "!assign_task @dev friday Fix bug");
    assert_eq!(
        say(&mut bot, "dev", "!approve_task 1"),
        "⛔ @dev is not allowed to approve tasks."
    );
    assert_eq!(say(&mut bot, "lead", "!approve_task 1"), "✅ Task 1 approved by @lead!");
}

#[test]
fn test_malformed_commands_never_touch_store() {
    let mut bot = memory_bot();

    for text in [
        "!assign_task",
        "!assign_task @bob",
        "!mark_done abc",
        "!afk",
        "!mark_attendance",
        "!nope",
    ] {
        assert!(say(&mut bot, "alice", text).starts_with("❌ "));
    }

    let pool = bot.pool_mut();
    assert_eq!(count_rows(pool, "tasks"), 0);
    assert_eq!(count_rows(pool, "attendance"), 0);
    assert_eq!(count_rows(pool, "employee_status"), 0);
    assert_eq!(count_rows(pool, "log"), 0);
}

#[test]
fn test_help_uses_configured_prefix() {
    let mut cfg = Config::with_database(":memory:".to_string());
    cfg.command_prefix = "?".to_string();
    let mut bot = Dispatcher::new(memory_pool(), &cfg);

    let help = say(&mut bot, "alice", "?help");
    assert!(help.contains("`?assign_task <@user> <deadline> <description>`"));
    assert!(help.contains("`?login`"));
    assert_eq!(bot.handle(&Message::new("alice", "!help")), None);
}

#[test]
fn test_non_ascii_user_can_be_named() {
    let mut bot = memory_bot();

    assert_eq!(say(&mut bot, "josé", "!login"), "✅ @josé is now **logged in**.");
    assert_eq!(
        say(&mut bot, "bob", "!status josé"),
        "🛠 **josé** is currently **Logged In**"
    );
    assert_eq!(
        say(&mut bot, "bob", "!assign_task @josé fri Do it"),
        "✅ Task 1 assigned to @josé: Do it (Deadline: fri)"
    );
    assert!(say(&mut bot, "josé", "!my_tasks").contains("Task ID: 1 | Do it"));
}
