//! Behavioral tests for firing, hooks and observers.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use switchyard::{state_enum, FireError, StateMachine, StateMachineBuilder};

state_enum! {
    enum Phase {
        Idle,
        Running,
        Done,
    }
}

state_enum! {
    enum Input {
        Start,
        Finish,
        Reset,
    }
}

type CallLog = Arc<Mutex<Vec<String>>>;

fn push(log: &CallLog, entry: impl Into<String>) {
    log.lock().unwrap().push(entry.into());
}

/// Machine with every hook and observer writing to `log`.
fn instrumented(log: &CallLog) -> StateMachine<Phase, Input> {
    let mut machine = StateMachine::new(Phase::Idle);
    machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);
    machine.configure(Phase::Running).permit(Input::Finish, Phase::Done);

    for phase in [Phase::Idle, Phase::Running, Phase::Done] {
        let (enter, exit) = (Arc::clone(log), Arc::clone(log));
        machine
            .configure(phase)
            .on_enter(move || push(&enter, format!("enter-hook:{phase}")))
            .on_exit(move || push(&exit, format!("exit-hook:{phase}")));
    }

    let (entered, exited) = (Arc::clone(log), Arc::clone(log));
    machine.on_entered(move |s: &Phase| push(&entered, format!("entered:{s}")));
    machine.on_exited(move |s: &Phase| push(&exited, format!("exited:{s}")));
    machine
}

#[test]
fn idle_running_done_walkthrough() {
    let mut machine = StateMachine::new(Phase::Idle);
    machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);
    machine.configure(Phase::Running).permit(Input::Finish, Phase::Done);

    machine.fire(Input::Start);
    assert_eq!(*machine.current_state(), Phase::Running);
    machine.fire(Input::Finish);
    assert_eq!(*machine.current_state(), Phase::Done);
    machine.fire(Input::Start);
    assert_eq!(*machine.current_state(), Phase::Done);
}

#[test]
fn reset_from_any_state_reaches_idle() {
    let mut machine = StateMachine::new(Phase::Idle);
    machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);
    machine.configure(Phase::Running).permit(Input::Finish, Phase::Done);
    machine.permit_from_any(Input::Reset, Phase::Idle);

    machine.fire(Input::Start);
    machine.fire(Input::Finish);
    assert_eq!(*machine.current_state(), Phase::Done);

    machine.fire(Input::Reset);
    assert_eq!(*machine.current_state(), Phase::Idle);
}

#[test]
fn any_origin_matches_even_when_state_is_not_the_default() {
    // Running is neither the default nor configured for Reset.
    let mut machine = StateMachine::new(Phase::Running);
    machine.permit_from_any(Input::Reset, Phase::Done);

    machine.fire(Input::Reset);

    assert_eq!(*machine.current_state(), Phase::Done);
}

#[test]
fn first_registered_permit_wins() {
    let mut machine = StateMachine::new(Phase::Idle);
    machine
        .configure(Phase::Idle)
        .permit(Input::Start, Phase::Running)
        .permit(Input::Start, Phase::Done);

    machine.fire(Input::Start);

    assert_eq!(*machine.current_state(), Phase::Running);
}

#[test]
fn specific_permit_registered_after_any_origin_loses() {
    let mut machine = StateMachine::new(Phase::Idle);
    machine.permit_from_any(Input::Start, Phase::Done);
    machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);

    machine.fire(Input::Start);

    assert_eq!(*machine.current_state(), Phase::Done);
}

#[test]
fn vetoing_guard_stops_scan_and_runs_nothing() {
    let log: CallLog = Arc::default();
    let mut machine = instrumented(&log);
    machine
        .configure(Phase::Done)
        .permit_if(Input::Reset, Phase::Idle, || false)
        .permit(Input::Reset, Phase::Running);
    machine.fire(Input::Start);
    machine.fire(Input::Finish);
    log.lock().unwrap().clear();

    machine.fire(Input::Reset);

    assert_eq!(*machine.current_state(), Phase::Done);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn unmatched_trigger_is_a_silent_no_op() {
    let log: CallLog = Arc::default();
    let mut machine = instrumented(&log);

    machine.fire(Input::Finish);

    assert_eq!(*machine.current_state(), Phase::Idle);
    assert!(log.lock().unwrap().is_empty());
    assert!(matches!(
        machine.try_fire(Input::Reset),
        Err(FireError::NoPermit { .. })
    ));
}

#[test]
fn hooks_run_before_observers() {
    let log: CallLog = Arc::default();
    let mut machine = instrumented(&log);

    machine.fire(Input::Start);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "exit-hook:Idle",
            "exited:Idle",
            "enter-hook:Running",
            "entered:Running",
        ]
    );
}

#[test]
fn effect_runs_before_exit_hook() {
    let log: CallLog = Arc::default();
    let mut machine = instrumented(&log);
    let effect_log = Arc::clone(&log);
    machine
        .configure(Phase::Running)
        .permit_with(Input::Reset, Phase::Idle, move || push(&effect_log, "effect"));
    machine.fire(Input::Start);
    log.lock().unwrap().clear();

    machine.fire(Input::Reset);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "effect",
            "exit-hook:Running",
            "exited:Running",
            "enter-hook:Idle",
            "entered:Idle",
        ]
    );
}

#[test]
fn later_enter_hook_replaces_earlier() {
    let log: CallLog = Arc::default();
    let mut machine = StateMachine::new(Phase::Idle);
    let (first, second) = (Arc::clone(&log), Arc::clone(&log));
    machine
        .configure(Phase::Running)
        .on_enter(move || push(&first, "first"));
    machine
        .configure(Phase::Idle)
        .permit(Input::Start, Phase::Running);
    machine
        .configure(Phase::Running)
        .on_enter(move || push(&second, "second"));

    machine.fire(Input::Start);

    assert_eq!(*log.lock().unwrap(), vec!["second"]);
}

#[test]
fn observers_are_called_in_subscription_order() {
    let log: CallLog = Arc::default();
    let mut machine = StateMachine::new(Phase::Idle);
    machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);
    for label in ["a", "b", "c"] {
        let log = Arc::clone(&log);
        machine.on_entered(move |s: &Phase| push(&log, format!("{label}:{s}")));
    }

    machine.fire(Input::Start);

    assert_eq!(
        *log.lock().unwrap(),
        vec!["a:Running", "b:Running", "c:Running"]
    );
}

#[test]
fn observers_never_see_the_initial_state() {
    let log: CallLog = Arc::default();
    let (hook, observer) = (Arc::clone(&log), Arc::clone(&log));

    let mut machine = StateMachineBuilder::new()
        .initial(Phase::Idle)
        .configure(Phase::Idle, |cfg| {
            cfg.on_enter(move || push(&hook, "enter-hook:Idle"))
        })
        .build()
        .unwrap();
    machine.on_entered(move |s: &Phase| push(&observer, format!("entered:{s}")));
    machine.fire(Input::Start);

    assert_eq!(*log.lock().unwrap(), vec!["enter-hook:Idle"]);
}

#[test]
fn registering_after_firing_affects_later_fires() {
    let mut machine = StateMachine::new(Phase::Idle);
    machine.fire(Input::Start);
    assert_eq!(*machine.current_state(), Phase::Idle);

    machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);
    machine.fire(Input::Start);

    assert_eq!(*machine.current_state(), Phase::Running);
}

#[test]
fn panicking_exit_hook_leaves_state_unchanged() {
    let log: CallLog = Arc::default();
    let mut machine = StateMachine::new(Phase::Idle);
    let effect_log = Arc::clone(&log);
    machine
        .configure(Phase::Idle)
        .permit_with(Input::Start, Phase::Running, move || push(&effect_log, "effect"))
        .on_exit(|| panic!("exit hook failed"));

    let result = catch_unwind(AssertUnwindSafe(|| machine.fire(Input::Start)));

    assert!(result.is_err());
    assert_eq!(*machine.current_state(), Phase::Idle);
    assert_eq!(*log.lock().unwrap(), vec!["effect"]);
}

#[test]
fn panicking_enter_hook_leaves_destination_current() {
    let mut machine = StateMachine::new(Phase::Idle);
    machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);
    machine
        .configure(Phase::Running)
        .on_enter(|| panic!("enter hook failed"));

    let result = catch_unwind(AssertUnwindSafe(|| machine.fire(Input::Start)));

    assert!(result.is_err());
    assert_eq!(*machine.current_state(), Phase::Running);
}

#[test]
fn machine_can_move_between_threads() {
    let mut machine = StateMachine::new(Phase::Idle);
    machine.configure(Phase::Idle).permit(Input::Start, Phase::Running);

    let machine = std::thread::spawn(move || {
        machine.fire(Input::Start);
        machine
    })
    .join()
    .unwrap();

    assert_eq!(*machine.current_state(), Phase::Running);
}

#[cfg(feature = "serde")]
#[test]
fn permits_export_as_json() {
    #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
    enum Light {
        Red,
        Green,
    }

    let mut machine = StateMachine::new(Light::Red);
    machine.configure(Light::Red).permit("go", Light::Green);
    machine.permit_from_any("stop", Light::Red);

    let permits: Vec<_> = machine.permits().collect();
    let json = serde_json::to_value(&permits).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "origin": { "Specific": "Red" }, "trigger": "go", "destination": "Green" },
            { "origin": "Any", "trigger": "stop", "destination": "Red" },
        ])
    );
}
