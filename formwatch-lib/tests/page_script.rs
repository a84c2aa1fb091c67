use formwatch_lib::config::PageConfig;
use formwatch_lib::host::MemoryHost;
use formwatch_lib::page::{COUNTER_ID, DemoPage, Dispatch, KEY_FEEDBACK_ID, MOUSE_FEEDBACK_ID};
use formwatch_lib::PageEvent;

fn run(script: &str) -> (MemoryHost, Vec<Dispatch>) {
    let host = MemoryHost::new();
    let mut page = DemoPage::new(host.clone(), PageConfig::default());
    let results = script
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(|line| {
            let event: PageEvent = line.parse().unwrap();
            page.dispatch(event).unwrap()
        })
        .collect();
    (host, results)
}

#[test]
fn test_widget_script() {
    let (host, _) = run(
        "
        # header controls
        theme
        keydown q
        mouseover
        dblclick
        increment
        increment
        decrement
        faq 2
        tab tab2
        ",
    );

    assert!(host.has_class("body", "dark-mode"));
    assert_eq!(host.text(KEY_FEEDBACK_ID), "Key down: q");
    assert_eq!(host.text(MOUSE_FEEDBACK_ID), "Double click detected!");
    assert_eq!(host.text(COUNTER_ID), "1");
    assert!(host.has_class("faq2-answer", "active"));
    assert!(host.is_visible("tab2"));
    assert!(!host.is_visible("tab1"));
}

#[test]
fn test_signup_script() {
    let (host, results) = run(
        "
        input name Jane Doe
        input email jane@example.com
        input password Passw0rd
        input confirmPassword Passw0rd
        submit
        wait 2000
        ",
    );

    assert!(matches!(&results[4], Dispatch::Submitted(outcome) if outcome.is_valid()));
    assert_eq!(results[5], Dispatch::Elapsed { fired: 1 });
    assert_eq!(host.value("name"), "");
    assert_eq!(host.value("confirmPassword"), "");
    assert!(!host.is_visible("formSuccess"));
}

#[test]
fn test_rejected_script() {
    let (host, results) = run(
        "
        input name J
        input email bad
        submit
        ",
    );

    assert!(matches!(&results[2], Dispatch::Submitted(outcome) if outcome.errors().len() == 3));
    assert!(host.is_visible("nameError"));
    assert!(host.is_visible("emailError"));
    assert!(host.is_visible("passwordError"));
    assert!(!host.is_visible("confirmPasswordError"));
}
