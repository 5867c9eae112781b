mod common;
use common::*;
use pretty_assertions::assert_eq;
use tea::mach::{Command, Config, Context, Runtime, Word};

fn led(context: &mut Context, argv: &[&str]) -> Word {
    let value = match argv[0] {
        "on" => 1,
        _ => 0,
    };
    context.set('L', value);
    value
}

fn host() -> Runtime {
    Runtime::new(
        Config::default(),
        vec![
            Command::new("led")
                .child(Command::new("on").handler(led))
                .child(Command::new("off").handler(led)),
            Command::new("echo").handler(|context: &mut Context, argv: &[&str]| {
                context.print(&format!("{:?}\n", &argv[1..]));
                argv.len() as Word - 1
            }),
            Command::new("puts").handler(|context: &mut Context, _: &[&str]| {
                context.print("shadowed\n");
                0
            }),
        ],
    )
}

#[test]
fn test_host_command_tree() {
    let mut r = host();
    session(&mut r, &["led on"]);
    assert_eq!(r.context_mut().get('L'), 1);
    assert_eq!(r.context().result(), 1);
    session(&mut r, &["led off"]);
    assert_eq!(r.context_mut().get('L'), 0);
}

#[test]
fn test_parent_without_handler_is_not_found() {
    let mut r = host();
    assert_eq!(session(&mut r, &["led"]), "COMMAND NOT FOUND\n");
    assert_eq!(r.context().result(), -5);
    assert_eq!(session(&mut r, &["led blink"]), "COMMAND NOT FOUND\n");
}

#[test]
fn test_handler_sees_its_own_name_first() {
    let mut r = host();
    assert_eq!(
        session(&mut r, &["echo a \"b c\"", "puts $R"]),
        "[\"a\", \"b c\"]\nshadowed\n"
    );
    assert_eq!(r.context().result(), 0);
}

#[test]
fn test_host_commands_run_from_scripts() {
    let mut r = host();
    let out = session(&mut r, &["10 led on", "20 echo $L", "run"]);
    assert_eq!(out, "[\"1\"]\n");
}

#[test]
fn test_builtins_remain() {
    let mut r = host();
    let out = session(&mut r, &["10 led on", "list", "nope"]);
    assert_eq!(out, "10 led on\nCOMMAND NOT FOUND\n");
}
