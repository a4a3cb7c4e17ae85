use taskchat::chat::chat_loop;
use taskchat::commands::TaskList;
use taskchat::storage::Storage;
use tempfile::TempDir;

/// Feeds `input` through a fresh session and returns everything written.
fn transcript(input: &str) -> String {
    transcript_bytes(input.as_bytes())
}

fn transcript_bytes(input: &[u8]) -> String {
    let dir = TempDir::new().unwrap();
    let mut tasks = TaskList::new(Storage::new(dir.path()));
    let mut out = Vec::new();
    chat_loop(&mut tasks, input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_todo_interaction() {
    assert_eq!(
        transcript("todo borrow book\nlist\ndone 1\nlist\n"),
        "Got it. I've added this task:\n  [T][✗] borrow book\nNow you have 1 tasks in the list.\n\
         1.[T][✗] borrow book\n\
         Nice! I've marked this task as done:\n  [T][✓] borrow book\n\
         1.[T][✓] borrow book\n"
    );
}

#[test]
fn test_deadline_interaction() {
    assert_eq!(
        transcript("deadline return book /by Sunday\nlist\ndone 1\nlist\n"),
        "Got it. I've added this task:\n  [D][✗] return book (by: Sunday)\nNow you have 1 tasks in the list.\n\
         1.[D][✗] return book (by: Sunday)\n\
         Nice! I've marked this task as done:\n  [D][✓] return book (by: Sunday)\n\
         1.[D][✓] return book (by: Sunday)\n"
    );
}

#[test]
fn test_event_interaction() {
    assert_eq!(
        transcript("event project meeting /at Mon 2-4pm\nlist\ndone 1\nlist\n"),
        "Got it. I've added this task:\n  [E][✗] project meeting (at: Mon 2-4pm)\nNow you have 1 tasks in the list.\n\
         1.[E][✗] project meeting (at: Mon 2-4pm)\n\
         Nice! I've marked this task as done:\n  [E][✓] project meeting (at: Mon 2-4pm)\n\
         1.[E][✓] project meeting (at: Mon 2-4pm)\n"
    );
}

#[test]
fn test_done_marks_only_addressed_task() {
    assert_eq!(
        transcript("todo help people\ntodo help myself\ndone 1\nlist\n"),
        "Got it. I've added this task:\n  [T][✗] help people\nNow you have 1 tasks in the list.\n\
         Got it. I've added this task:\n  [T][✗] help myself\nNow you have 2 tasks in the list.\n\
         Nice! I've marked this task as done:\n  [T][✓] help people\n\
         1.[T][✓] help people\n\
         2.[T][✗] help myself\n"
    );
}

#[test]
fn test_errors_are_reported_and_loop_continues() {
    assert_eq!(
        transcript("invalid input\nevent test /at too many /at date\ndone 4\ntodo still here\n"),
        "Invalid Input: invalid input\n\
         Command event encountered invalid arguments: too many date arguments\n\
         Index 4 is out of range, you have 0 tasks in the list\n\
         Got it. I've added this task:\n  [T][✗] still here\nNow you have 1 tasks in the list.\n"
    );
}

#[test]
fn test_bye_ends_loop() {
    assert_eq!(transcript("bye\nhello\nbye\n"), "Bye. Hope to see you again soon!\n");
}

#[test]
fn test_bye_with_trailing_words_ends_loop() {
    assert_eq!(
        transcript("list everything\nbye now\ntodo never\n"),
        "\nBye. Hope to see you again soon!\n"
    );
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    assert_eq!(
        transcript_bytes(b"todo a\n\xff\xfe junk\ntodo b\nlist\n"),
        "Got it. I've added this task:\n  [T][✗] a\nNow you have 1 tasks in the list.\n\
         Invalid Input: \u{FFFD}\u{FFFD} junk\n\
         Got it. I've added this task:\n  [T][✗] b\nNow you have 2 tasks in the list.\n\
         1.[T][✗] a\n\
         2.[T][✗] b\n"
    );
}

#[test]
fn test_last_line_without_newline() {
    assert_eq!(
        transcript("todo read\nlist"),
        "Got it. I've added this task:\n  [T][✗] read\nNow you have 1 tasks in the list.\n\
         1.[T][✗] read\n"
    );
}

#[test]
fn test_empty_list_writes_blank_line() {
    assert_eq!(transcript("list\n"), "\n");
}

#[test]
fn test_crlf_input() {
    assert_eq!(
        transcript("todo read\r\nbye\r\n"),
        "Got it. I've added this task:\n  [T][✗] read\nNow you have 1 tasks in the list.\n\
         Bye. Hope to see you again soon!\n"
    );
}
