// Runs the interactive binary with scripted or closed stdin.

use std::{
    io::Write,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

const EXIT_TIMEOUT: Duration = Duration::from_secs(15);

fn spawn_menu(dir: &std::path::Path, stdin: Stdio) -> Child {
    Command::new(env!("CARGO_BIN_EXE_rwlock_bench"))
        .current_dir(dir)
        .stdin(stdin)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start rwlock_bench")
}

fn wait_for_exit(mut child: Child) -> bool {
    let deadline = Instant::now() + EXIT_TIMEOUT;
    while Instant::now() < deadline {
        if child.try_wait().expect("try_wait failed").is_some() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    let _ = child.kill();
    let _ = child.wait();
    false
}

#[test]
fn closed_stdin_exits_without_running_a_sweep() {
    let dir = tempfile::tempdir().unwrap();
    let child = spawn_menu(dir.path(), Stdio::null());

    assert!(wait_for_exit(child), "binary still running after stdin EOF");
    assert!(!dir.path().join("data").join("results.csv").exists());
}

#[test]
fn exit_option_stops_the_menu() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = spawn_menu(dir.path(), Stdio::piped());
    child.stdin.take().unwrap().write_all(b"4\n").unwrap();

    assert!(wait_for_exit(child), "binary still running after option 4");
    assert!(!dir.path().join("data").exists());
}

#[test]
fn eof_inside_a_sub_prompt_exits() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = spawn_menu(dir.path(), Stdio::piped());
    // Custom sweep chosen, then input ends before the command count.
    child.stdin.take().unwrap().write_all(b"2\n").unwrap();

    assert!(wait_for_exit(child), "binary still running after EOF in sub-prompt");
    assert!(!dir.path().join("data").exists());
}
